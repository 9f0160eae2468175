use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] riskgauge_core::ValidationError),

    #[error(transparent)]
    Request(#[from] riskgauge_core::RequestFailure),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Request(_) => 3,
            Self::Io(_) => 10,
        }
    }
}
