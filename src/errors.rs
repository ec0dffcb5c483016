use std::result::Result as StdResult;

use thiserror::Error;

/// Failures around the wizard: loading scenarios and configuration.
///
/// The controller itself never produces these; its refusals are
/// [`crate::wizard::WizardEvent::Blocked`] values.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid scenario: {0}")]
    Scenario(String),
}

pub type Result<T> = StdResult<T, EditError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EditError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}
