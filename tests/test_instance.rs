mod common;

use bioblend_contrib::errors::{ConfigurationError, GalaxyError, InvalidGalaxyUrl};
use bioblend_contrib::reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use bioblend_contrib::reqwest::{Method, StatusCode};
use bioblend_contrib::types::DataTableName;
use bioblend_contrib::{GalaxyInstance, InstanceConfig, ResourceDomain, NO_PARAMS};
use common::*;
use rstest::*;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param as has_query};
use wiremock::{Mock, ResponseTemplate};

// ========================================
//                 CONSTRUCTION
// ========================================

#[rstest]
#[case("localhost:8080", "http://localhost:8080/api")]
#[case("usegalaxy.org", "http://usegalaxy.org/api")]
#[case("https://usegalaxy.org", "https://usegalaxy.org/api")]
#[case("https://usegalaxy.org/galaxy/", "https://usegalaxy.org/galaxy/api")]
fn test_api_url(#[case] url: &str, #[case] expected: &str) {
    let gi = GalaxyInstance::new(url, Some("abc"), None, None).unwrap();
    assert_eq!(gi.api_url().as_str(), expected);
}

#[test]
fn test_empty_url_is_configuration_error() {
    let err = GalaxyInstance::new("", Some("abc"), None, None).unwrap_err();
    assert!(matches!(
        err,
        GalaxyError::Configuration(ConfigurationError::Url(InvalidGalaxyUrl::Empty))
    ));
}

#[test]
fn test_construction_does_no_io() {
    let galaxy = MockGalaxy::start();
    let _gi = galaxy.login_instance();
    assert!(galaxy.requests().is_empty());
}

#[test]
fn test_display() {
    let gi = GalaxyInstance::new("usegalaxy.org", Some("abc"), None, None).unwrap();
    assert_eq!(
        gi.to_string(),
        "GalaxyInstance object for Galaxy at http://usegalaxy.org"
    );
}

#[test]
fn test_debug_hides_secrets() {
    let gi = GalaxyInstance::build("usegalaxy.org")
        .key("very-secret-key")
        .login(EMAIL, PASSWORD)
        .build()
        .unwrap();
    let debug = format!("{:?}", gi);
    assert!(debug.contains("usegalaxy.org"));
    assert!(!debug.contains("very-secret-key"));
    assert!(!debug.contains(PASSWORD));
    let params = gi.default_params().unwrap();
    assert!(!format!("{:?}", params).contains("very-secret-key"));
}

#[test]
fn test_transport_defaults_are_insecure() {
    let gi = GalaxyInstance::new("usegalaxy.org", Some("abc"), None, None).unwrap();
    assert!(!gi.verify());
    assert_eq!(gi.headers().get(CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn test_builder_options() {
    let gi = GalaxyInstance::build("https://usegalaxy.org")
        .key("abc")
        .verify(true)
        .header(
            HeaderName::from_static("x-galaxy-client"),
            HeaderValue::from_static("test"),
        )
        .build()
        .unwrap();
    assert!(gi.verify());
    assert_eq!(gi.headers().get("x-galaxy-client").unwrap(), "test");
    assert_eq!(gi.headers().get(CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn test_from_config() {
    let config: InstanceConfig = serde_json::from_value(serde_json::json!({
        "url": "usegalaxy.org",
        "key": "abc",
        "verify": true
    }))
    .unwrap();
    let gi = GalaxyInstance::from_config(&config).unwrap();
    assert_eq!(gi.base_url().as_str(), "http://usegalaxy.org");
    assert!(gi.verify());
    assert_eq!(gi.key().unwrap(), "abc");
}

#[test]
fn test_client_table() {
    let gi = GalaxyInstance::new("usegalaxy.org", Some("abc"), None, None).unwrap();
    let clients: Vec<_> = gi.clients().collect();
    assert_eq!(clients.len(), ResourceDomain::ALL.len());
    for (domain, client) in clients {
        assert_eq!(client.domain(), domain);
        assert_eq!(
            client.url(),
            format!("http://usegalaxy.org/api/{}", domain.module())
        );
    }
    assert_eq!(gi.roles.url(), "http://usegalaxy.org/api/roles");
    assert_eq!(gi.tool_shed.url(), "http://usegalaxy.org/api/tool_shed_repositories");
    assert_eq!(
        gi.client(ResourceDomain::ToolData)
            .endpoint(&["all_fasta", "reload"])
            .unwrap()
            .as_str(),
        "http://usegalaxy.org/api/tool_data/all_fasta/reload"
    );
}

#[rstest]
#[case("a#b", "/api/tool_data/a%23b")]
#[case("a?b", "/api/tool_data/a%3Fb")]
#[case("../users", "/api/tool_data/..%2Fusers")]
#[case("100%", "/api/tool_data/100%25")]
fn test_path_segments_are_encoded(#[case] name: &str, #[case] expected: &str) {
    let galaxy = MockGalaxy::start();
    galaxy.mount(Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)));
    let gi = galaxy.key_instance("abc");
    let table = DataTableName::new(name.to_string());
    assert!(gi.tool_data.show_data_table(&table).is_err());
    let requests = galaxy.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), expected);
    assert_eq!(query_param(&requests[0], "key").as_deref(), Some("abc"));
}

#[rstest]
#[case("..")]
#[case(".")]
#[case("")]
fn test_path_segments_must_name_a_resource(#[case] name: &str) {
    let galaxy = MockGalaxy::start();
    let gi = galaxy.key_instance("abc");
    let table = DataTableName::new(name.to_string());
    let err = gi.tool_data.show_data_table(&table).unwrap_err();
    assert!(matches!(err, GalaxyError::InvalidPathSegment(s) if s == name));
    assert!(galaxy.requests().is_empty());
}

// ========================================
//                 API KEY
// ========================================

#[test]
fn test_direct_key_makes_no_requests() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "should-not-be-used");
    let gi = galaxy.key_instance("abc");
    assert_eq!(gi.key().unwrap(), "abc");
    assert_eq!(gi.key().unwrap(), "abc");
    assert_eq!(gi.default_params().unwrap().key(), "abc");
    assert_eq!(galaxy.count(AUTH_PATH), 0);
}

#[test]
fn test_direct_key_wins_over_login() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let gi = GalaxyInstance::new(&galaxy.uri(), Some("abc"), Some(EMAIL), Some(PASSWORD)).unwrap();
    assert_eq!(gi.key().unwrap(), "abc");
    assert_eq!(galaxy.count(AUTH_PATH), 0);
}

#[test]
fn test_login_resolves_key_once() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let gi = galaxy.login_instance();
    assert_eq!(gi.key().unwrap(), "xyz");
    assert_eq!(galaxy.count(AUTH_PATH), 1);
    assert_eq!(gi.key().unwrap(), "xyz");
    assert_eq!(gi.default_params().unwrap().key(), "xyz");
    assert_eq!(galaxy.count(AUTH_PATH), 1);
}

#[test]
fn test_empty_key_means_login() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let gi = GalaxyInstance::new(&galaxy.uri(), Some(""), Some(EMAIL), Some(PASSWORD)).unwrap();
    assert_eq!(gi.key().unwrap(), "xyz");
    assert_eq!(galaxy.count(AUTH_PATH), 1);
}

#[test]
fn test_authentication_exchange_has_no_key_param() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let gi = galaxy.login_instance();
    gi.key().unwrap();
    let requests = galaxy.requests();
    assert_eq!(requests.len(), 1);
    assert!(query_param(&requests[0], "key").is_none());
}

#[rstest]
#[case(403)]
#[case(401)]
#[case(500)]
fn test_rejected_login_is_not_cached(#[case] status: u16) {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(status, "never");
    let gi = galaxy.login_instance();

    let err = gi.key().unwrap_err();
    assert!(matches!(err, GalaxyError::Authentication { .. }));
    assert_eq!(err.status(), Some(StatusCode::from_u16(status).unwrap()));
    let message = err.to_string();
    assert!(!message.contains(PASSWORD));
    assert!(!message.contains(EMAIL));

    assert!(gi.key().is_err());
    assert_eq!(galaxy.count(AUTH_PATH), 2);
}

#[test]
fn test_wrong_password_is_rejected() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    // anything which doesn't match the mocked credentials gets a 404
    let gi = GalaxyInstance::new(&galaxy.uri(), None, Some(EMAIL), Some("wrong")).unwrap();
    assert!(matches!(
        gi.key().unwrap_err(),
        GalaxyError::Authentication { .. }
    ));
}

#[rstest]
#[case(None, None)]
#[case(Some(EMAIL), None)]
#[case(None, Some(PASSWORD))]
fn test_missing_credentials(#[case] email: Option<&str>, #[case] password: Option<&str>) {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let gi = GalaxyInstance::new(&galaxy.uri(), None, email, password).unwrap();
    assert!(matches!(
        gi.key().unwrap_err(),
        GalaxyError::Configuration(ConfigurationError::MissingCredentials)
    ));
    assert!(matches!(
        gi.default_params().unwrap_err(),
        GalaxyError::Configuration(ConfigurationError::MissingCredentials)
    ));
    assert!(gi.roles.get_roles().is_err());
    assert!(galaxy.requests().is_empty());
}

#[test]
fn test_concurrent_first_access_authenticates_once() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let gi = Arc::new(galaxy.login_instance());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gi = Arc::clone(&gi);
            std::thread::spawn(move || gi.key().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "xyz");
    }
    assert_eq!(galaxy.count(AUTH_PATH), 1);
}

// ========================================
//                 DEFAULT PARAMS
// ========================================

#[rstest]
#[case(true)]
#[case(false)]
fn test_default_params_has_exactly_the_key(#[case] login: bool) {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    let (gi, expected) = if login {
        (galaxy.login_instance(), "xyz")
    } else {
        (galaxy.key_instance("abc"), "abc")
    };
    let params = gi.default_params().unwrap();
    let as_json = serde_json::to_value(&params).unwrap();
    assert_eq!(as_json.as_object().unwrap().len(), 1);
    assert_eq!(as_json["key"], expected);
    assert_eq!(
        serde_urlencoded::to_string(&params).unwrap(),
        format!("key={}", expected)
    );
}

#[test]
fn test_resource_requests_carry_key() {
    let galaxy = MockGalaxy::start();
    galaxy.mount_auth(200, "xyz");
    galaxy.mount(
        Mock::given(method("GET"))
            .and(path("/api/histories"))
            .and(has_query("key", "xyz"))
            .and(has_query("deleted", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([]))),
    );
    let gi = galaxy.login_instance();
    let histories: Vec<serde_json::Value> = gi.histories.get(&[], &[("deleted", "true")]).unwrap();
    assert!(histories.is_empty());
    assert_eq!(galaxy.count(AUTH_PATH), 1);
    assert_eq!(galaxy.count("/api/histories"), 1);
}

#[test]
fn test_raw_request_has_no_key() {
    let galaxy = MockGalaxy::start();
    galaxy.mount(
        Mock::given(method("GET"))
            .and(path("/api/version"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"version_major": "23.1"})),
            ),
    );
    let gi = galaxy.key_instance("abc");
    let url = format!("{}/version", gi.api_url());
    let res = gi.raw_request(Method::GET, &url).send().unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let requests = galaxy.requests();
    assert_eq!(requests.len(), 1);
    assert!(query_param(&requests[0], "key").is_none());
}

#[test]
fn test_error_response() {
    let galaxy = MockGalaxy::start();
    galaxy.mount(
        Mock::given(method("GET"))
            .and(path("/api/jobs/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_string("No such job")),
    );
    let gi = galaxy.key_instance("abc");
    let err = gi
        .jobs
        .get::<serde_json::Value>(&["nope"], NO_PARAMS)
        .unwrap_err();
    match err {
        GalaxyError::Error { status, text, .. } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(text, "No such job");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
