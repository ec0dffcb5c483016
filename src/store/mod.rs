//! In-memory stand-in for the application store that feeds the wizard.
//!
//! Holds one [`EditContext`] and reduces dispatched [`EditAction`]s into it the
//! way the surrounding application would, so the controller can be driven end
//! to end from the CLI and from tests.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{CallState, EditContext, Step};
use crate::errors::{EditError, Result};
use crate::wizard::{EditAction, PageDirection};

const FIRST_STEP: i64 = 1;

#[derive(Debug, Clone, Default)]
pub struct EditStore {
    context: EditContext,
}

impl EditStore {
    pub fn new(context: EditContext) -> Self {
        Self { context }
    }

    /// Reads a JSON snapshot in store (camelCase) shape.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Err(EditError::Scenario(format!(
                "scenario `{}` is empty",
                path.display()
            )));
        }
        let context: EditContext = serde_json::from_str(&data)?;
        Ok(Self::new(context))
    }

    /// Default store: step 1 of `steps`, nothing loaded or selected yet.
    pub fn with_steps(steps: Vec<Step>) -> Self {
        Self::new(EditContext {
            steps,
            current_step: FIRST_STEP,
            ..EditContext::default()
        })
    }

    pub fn context(&self) -> &EditContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EditContext {
        &mut self.context
    }

    pub fn apply(&mut self, action: EditAction) {
        debug!(%action, step = self.context.current_step, "store reducing action");
        match action {
            EditAction::InitiateEdit => {
                self.context.all_data_load_call_state = CallState::Success;
                self.context.submission_call_state = CallState::Idle;
                self.context.transaction_message.clear();
            }
            EditAction::UpdatePage(PageDirection::Forward) => {
                self.context.current_step += 1;
            }
            EditAction::UpdatePage(PageDirection::Backward) => {
                self.context.current_step = (self.context.current_step - 1).max(FIRST_STEP);
            }
            EditAction::Submit => {
                self.context.submission_call_state = CallState::Loading;
            }
        }
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = EditAction>) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Completes an in-flight submission with `outcome`.
    pub fn settle_submission(&mut self, outcome: CallState, message: impl Into<String>) {
        self.context.submission_call_state = outcome;
        self.context.transaction_message = message.into();
    }
}
