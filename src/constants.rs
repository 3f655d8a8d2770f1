/// Path segment under which all Galaxy APIs are rooted.
pub(crate) const API_SEGMENT: &str = "api";

/// Endpoint (relative to the API root) which trades an email and password for an API key.
pub(crate) const AUTHENTICATE_ENDPOINT: &str = "authenticate/baseauth";

pub(crate) const DEFAULT_MAX_GET_ATTEMPTS: u32 = 1;
pub(crate) const DEFAULT_GET_RETRY_DELAY_MILLIS: u64 = 10_000;
