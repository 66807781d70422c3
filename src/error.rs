use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("Parking lot has not been created yet.")]
    NotCreated,

    #[error("Invalid {field}: {value:?} is not a non-negative integer")]
    InvalidCount { field: &'static str, value: String },

    #[error("Settings file is invalid: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LotError>;
