use thiserror::Error;

#[derive(Error, Debug)]
pub enum WgmError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Plot error: {0}")]
    Plot(String),
}

pub type WgmResult<T> = Result<T, WgmError>;
