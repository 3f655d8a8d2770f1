//! Errors for this crate.

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidGalaxyUrl {
    #[error("Galaxy URL must not be empty")]
    Empty,

    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),

    #[error("Given URL could not be parsed: {0}")]
    Malformed(String),
}

aliri_braid::from_infallible!(InvalidGalaxyUrl);

/// Problems with how a [crate::GalaxyInstance] was configured.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error(transparent)]
    Url(#[from] InvalidGalaxyUrl),

    /// Neither an API key nor both of email and password were given.
    #[error("an API key, or both an email and a password, are required")]
    MissingCredentials,
}

/// Errors representing failed interactions with Galaxy.
#[derive(thiserror::Error, Debug)]
pub enum GalaxyError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The email/password exchange for an API key was rejected.
    #[error("failed to authenticate user ({status})")]
    Authentication { status: StatusCode },

    /// Error response with an explanation from Galaxy.
    #[error("({status:?} {reason:?}): {text}")]
    Error {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// A path segment which would not name a single resource, e.g. `..`
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Galaxy answered successfully, but without the object that was asked for.
    #[error("empty response from {endpoint}")]
    EmptyResponse { endpoint: String },

    /// Error response without explanation from Galaxy, or a transport failure.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),
}

impl From<InvalidGalaxyUrl> for GalaxyError {
    fn from(e: InvalidGalaxyUrl) -> Self {
        GalaxyError::Configuration(ConfigurationError::Url(e))
    }
}

impl GalaxyError {
    /// HTTP status of the response which caused this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GalaxyError::Authentication { status } => Some(*status),
            GalaxyError::Error { status, .. } => Some(*status),
            GalaxyError::Raw(e) => e.status(),
            GalaxyError::Configuration(_)
            | GalaxyError::InvalidPathSegment(_)
            | GalaxyError::EmptyResponse { .. } => None,
        }
    }
}

pub(crate) fn check(
    res: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, GalaxyError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().map_err(GalaxyError::Raw)?;
            Err(GalaxyError::Error {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

/// An error which might occur while downloading files.
#[derive(thiserror::Error, Debug)]
pub enum FileIOError {
    #[error(transparent)]
    Galaxy(GalaxyError),
    #[error(transparent)]
    IO(std::io::Error),
}

impl From<reqwest::Error> for FileIOError {
    fn from(e: reqwest::Error) -> Self {
        FileIOError::Galaxy(GalaxyError::Raw(e))
    }
}

impl From<GalaxyError> for FileIOError {
    fn from(e: GalaxyError) -> Self {
        FileIOError::Galaxy(e)
    }
}

impl From<std::io::Error> for FileIOError {
    fn from(e: std::io::Error) -> Self {
        FileIOError::IO(e)
    }
}
