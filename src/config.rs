//! Connection settings: per-instance transport options, a serde-friendly
//! description of an instance, and the process-wide GET retry policy.

use crate::constants::{DEFAULT_GET_RETRY_DELAY_MILLIS, DEFAULT_MAX_GET_ATTEMPTS};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

/// Per-instance HTTP options, applied to every request made through a
/// [crate::GalaxyInstance], including the authentication exchange.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub(crate) headers: HeaderMap,
    pub(crate) verify: bool,
    pub(crate) timeout: Option<Duration>,
}

impl Default for TransportConfig {
    /// JSON content type, no TLS certificate verification.
    ///
    /// **Insecure**: certificate verification is off unless turned on with
    /// [crate::GalaxyInstanceBuilder::verify].
    fn default() -> Self {
        Self {
            headers: json_headers(),
            verify: false,
            timeout: None,
        }
    }
}

impl TransportConfig {
    /// Headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Whether TLS certificates are verified.
    pub fn verify(&self) -> bool {
        self.verify
    }

    /// Per-request timeout, if one was set.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}

fn json_headers() -> HeaderMap {
    HeaderMap::from_iter([(CONTENT_TYPE, HeaderValue::from_static("application/json"))])
}

/// Everything needed to connect to a Galaxy server, in a form which can be
/// embedded in an application's own configuration file.
///
/// If `key` is given, `email` and `password` are ignored.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct InstanceConfig {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Verify TLS certificates. Off by default.
    #[serde(default)]
    pub verify: bool,
}

impl fmt::Debug for InstanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceConfig")
            .field("url", &self.url)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("verify", &self.verify)
            .finish()
    }
}

/// Retry policy for GET requests, shared by the whole process.
///
/// There is exactly one of these, [GET_RETRY]. Changing it (directly, or through
/// [crate::GalaxyInstance::set_max_get_attempts] and
/// [crate::GalaxyInstance::set_get_retry_delay]) affects every
/// [crate::GalaxyInstance] and every GET request made from then on.
/// Values are stored as given, without validation.
pub struct GetRetrySettings {
    max_attempts: AtomicU32,
    delay_millis: AtomicU64,
}

impl GetRetrySettings {
    pub(crate) const fn new(max_attempts: u32, delay_millis: u64) -> Self {
        Self {
            max_attempts: AtomicU32::new(max_attempts),
            delay_millis: AtomicU64::new(delay_millis),
        }
    }

    /// Maximum number of attempts for a GET request. A value of 0 still means
    /// one attempt is made.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.load(Ordering::Relaxed)
    }

    pub fn set_max_attempts(&self, attempts: u32) {
        self.max_attempts.store(attempts, Ordering::Relaxed)
    }

    /// Time to wait between failed GET attempts.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_millis.load(Ordering::Relaxed))
    }

    pub fn set_delay(&self, delay: Duration) {
        let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.delay_millis.store(millis, Ordering::Relaxed)
    }
}

impl fmt::Debug for GetRetrySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetRetrySettings")
            .field("max_attempts", &self.max_attempts())
            .field("delay", &self.delay())
            .finish()
    }
}

/// The process-wide GET retry policy: one attempt, 10 seconds apart.
pub static GET_RETRY: GetRetrySettings =
    GetRetrySettings::new(DEFAULT_MAX_GET_ATTEMPTS, DEFAULT_GET_RETRY_DELAY_MILLIS);
