//! Connection state shared by a [crate::GalaxyInstance] and its resource clients.

use crate::config::TransportConfig;
use crate::constants::AUTHENTICATE_ENDPOINT;
use crate::errors::{ConfigurationError, GalaxyError};
use crate::types::{GalaxyApiUrl, GalaxyUrl};
use log::{debug, info};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Deserialize)]
struct AuthenticateResponse {
    api_key: String,
}

/// Email and password, kept only when no API key was given.
pub(crate) struct Identity {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Query parameters which every authenticated request must carry:
/// exactly one, `key=<API key>`.
#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct DefaultParams {
    key: String,
}

impl DefaultParams {
    /// The API key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for DefaultParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultParams")
            .field("key", &"<redacted>")
            .finish()
    }
}

pub(crate) struct Connection {
    http: Client,
    base_url: GalaxyUrl,
    api_url: GalaxyApiUrl,
    key: Mutex<Option<String>>,
    identity: Option<Identity>,
    transport: TransportConfig,
}

impl Connection {
    pub(crate) fn new(
        base_url: GalaxyUrl,
        key: Option<String>,
        identity: Option<Identity>,
        transport: TransportConfig,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .default_headers(transport.headers.clone())
            .danger_accept_invalid_certs(!transport.verify);
        if let Some(timeout) = transport.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        let api_url = base_url.api_url();
        Ok(Self {
            http,
            base_url,
            api_url,
            key: Mutex::new(key),
            identity,
            transport,
        })
    }

    pub(crate) fn base_url(&self) -> &GalaxyUrl {
        &self.base_url
    }

    pub(crate) fn api_url(&self) -> &GalaxyApiUrl {
        &self.api_url
    }

    pub(crate) fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    /// Get the API key, trading email and password for one on first use.
    ///
    /// The lock is held for the whole exchange so that concurrent first calls
    /// make only one request. Failures are not cached.
    pub(crate) fn key(&self) -> Result<String, GalaxyError> {
        let mut cached = self.key.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(key) = cached.as_ref() {
            return Ok(key.clone());
        }
        let key = self.authenticate()?;
        *cached = Some(key.clone());
        Ok(key)
    }

    pub(crate) fn default_params(&self) -> Result<DefaultParams, GalaxyError> {
        self.key().map(|key| DefaultParams { key })
    }

    /// A request with only the default headers and TLS setting: no API key, no retries.
    pub(crate) fn raw(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }

    fn authenticate(&self) -> Result<String, GalaxyError> {
        let (email, password) = match &self.identity {
            Some(Identity {
                email: Some(email),
                password: Some(password),
            }) => (email, password),
            _ => return Err(ConfigurationError::MissingCredentials.into()),
        };
        let auth_url = format!("{}/{}", self.api_url, AUTHENTICATE_ENDPOINT);
        debug!("Requesting API key from {}", auth_url);
        // the generic request path would add the (missing) key parameter
        let res = self
            .raw(Method::GET, &auth_url)
            .basic_auth(email, Some(password))
            .send()?;
        if res.status() != StatusCode::OK {
            debug!("Authentication at {} failed: {}", auth_url, res.status());
            return Err(GalaxyError::Authentication {
                status: res.status(),
            });
        }
        let body: AuthenticateResponse = res.json()?;
        info!("Obtained API key for {}", self.base_url);
        Ok(body.api_key)
    }
}
