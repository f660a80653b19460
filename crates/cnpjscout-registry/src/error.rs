use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("registry request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("missing registry api key (set registry.api_key or CNPJSCOUT_API_KEY)")]
    MissingApiKey,
    #[error("invalid registry url: {0}")]
    InvalidUrl(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[cfg(feature = "http-registry")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "http-registry")]
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
