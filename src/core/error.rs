use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Provisioning output unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::SourceUnavailable(_) => "SOURCE_UNAVAILABLE",
            Error::Config(_) => "CONFIG_ERROR",
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }

    /// Remediation hint surfaced alongside the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::SourceUnavailable(_) => {
                Some("Run `terraform init && terraform apply` in the source directory first")
            }
            Error::Config(_) => {
                Some("Re-run the provisioning step so all required outputs are populated")
            }
            _ => None,
        }
    }
}
