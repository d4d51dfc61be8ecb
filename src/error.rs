use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillError {
    #[error("Kodi connection is not configured")]
    NotConfigured,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Kodi returned JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Kodi response to {0} carried no result")]
    MissingResult(String),

    #[error("Malformed Kodi response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SkillError>;
