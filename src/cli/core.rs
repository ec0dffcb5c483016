//! Command dispatch, error reporting and suggestions for the shell.

use strsim::levenshtein;

use crate::errors::{CliError, EditError};

use super::output;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No edit flow mounted. Use `mount` first.")]
    NotMounted,
    #[error("{0}")]
    InvalidArguments(String),
    /// Wrong argument shape; dispatch replaces it with the registered usage.
    #[error("invalid arguments")]
    Usage,
    #[error(transparent)]
    Core(#[from] EditError),
    #[error("exit requested")]
    ExitRequested,
}

const SUGGESTION_DISTANCE: usize = 3;

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(CommandError::Usage) => Err(CommandError::InvalidArguments(
                    self.registry
                        .usage(command)
                        .unwrap_or_else(|| CommandError::Usage.to_string()),
                )),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest_command(self.registry.names(), input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::Usage => {
                output::error(CommandError::Usage);
                Ok(())
            }
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::NotMounted => {
                output::warning(CommandError::NotMounted);
                Ok(())
            }
            CommandError::Core(err) => {
                tracing::warn!(error = %err, "command failed");
                output::error(&err);
                Ok(())
            }
        }
    }
}

/// Registered name closest to `input`, if it is close enough to be a typo.
pub(crate) fn closest_command<'a>(
    names: impl Iterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let needle = input.to_lowercase();
    names
        .map(|name| (levenshtein(name, &needle), name))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}
