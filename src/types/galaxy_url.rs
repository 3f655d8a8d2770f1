//! NewTypes for the address of a Galaxy server.

use crate::constants::API_SEGMENT;
use crate::errors::InvalidGalaxyUrl;
use aliri_braid::braid;

/// A [GalaxyUrl] is the root URL of a Galaxy server, e.g.
/// `https://usegalaxy.org` or `http://127.0.0.1:8080/galaxy`
#[braid(validator, serde)]
pub struct GalaxyUrl(String);

impl aliri_braid::Validator for GalaxyUrl {
    type Error = InvalidGalaxyUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if s.is_empty() {
            return Err(InvalidGalaxyUrl::Empty);
        }
        let parsed = url::Url::parse(s).map_err(|_| InvalidGalaxyUrl::Malformed(s.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            Err(InvalidGalaxyUrl::Protocol(s.to_string()))
        } else if parsed.host_str().is_none() {
            Err(InvalidGalaxyUrl::Malformed(s.to_string()))
        } else {
            Ok(())
        }
    }
}

/// All of Galaxy's APIs are rooted at `<url>/api`, e.g.
/// `https://usegalaxy.org/api`
#[braid(serde)]
pub struct GalaxyApiUrl;

impl GalaxyUrl {
    /// Parse a user-given server address. `http://` is prepended if the address
    /// does not have a scheme of its own.
    pub fn normalize(raw: &str) -> Result<Self, InvalidGalaxyUrl> {
        let raw = raw.trim();
        if raw.is_empty() {
            Err(InvalidGalaxyUrl::Empty)
        } else if has_scheme(raw) {
            GalaxyUrl::new(raw.to_string())
        } else {
            GalaxyUrl::new(format!("http://{}", raw))
        }
    }

    /// Get the API root of this server.
    pub fn api_url(&self) -> GalaxyApiUrl {
        let root = self.as_str().trim_end_matches('/');
        GalaxyApiUrl::new(format!("{}/{}", root, API_SEGMENT))
    }
}

/// `localhost:8080` parses as scheme "localhost" with an opaque path,
/// so only hierarchical URLs count as having a scheme.
fn has_scheme(s: &str) -> bool {
    s.contains("://")
        || url::Url::parse(s)
            .map(|u| !u.cannot_be_a_base())
            .unwrap_or(false)
}
