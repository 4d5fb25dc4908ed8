use thiserror::Error;

/// Errors raised outside the conversions themselves, which never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown case style: {0}")]
    UnknownCase(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
