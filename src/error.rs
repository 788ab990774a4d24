#[derive(thiserror::Error, Debug)]
pub enum ValorantError {
    #[error("VALORANT lockfile not found, is the Riot Client running?")]
    LockfileNotFound,
    #[error("Lockfile malformed: {0}")]
    LockfileMalformed(String),
    #[error("Client version unavailable: {0}")]
    VersionUnavailable(String),
    #[error("Auth failed: {0}")]
    AuthFailed(String),
    #[error("Region not found: {0}")]
    RegionNotFound(String),
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    #[error("TLS error: {0}")]
    Tls(#[from] rustls::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::header::InvalidHeaderValue> for ValorantError {
    fn from(e: reqwest::header::InvalidHeaderValue) -> Self {
        ValorantError::InvalidHeader(e.to_string())
    }
}
