use crate::domain::{ReviewSummary, WizardStep};

use super::controller::WizardController;
use super::ports::{EditDispatcher, Navigator};

/// Body of the stepper for the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepContent {
    /// Edit data is still loading.
    Loading,
    SelectDevices,
    Review(ReviewSummary),
    Confirmation {
        message: String,
        pending: bool,
    },
    /// Static "Invalid Step" indicator.
    Invalid,
}

/// Stepper button with its translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// Everything a presentation layer needs to draw the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperView {
    pub workflow_title: String,
    pub current_step: i64,
    pub content: StepContent,
    pub primary: Option<ActionButton>,
    pub secondary: Option<ActionButton>,
    pub redirect_available: bool,
    pub exit_modal_open: bool,
    pub collapsed: bool,
}

impl StepperView {
    pub fn build<D: EditDispatcher, N: Navigator>(controller: &WizardController<D, N>) -> Self {
        let state = controller.state();
        let context = controller.context();
        let step = controller.step();
        let active = controller.is_active();

        let content = match step {
            WizardStep::Invalid(_) => StepContent::Invalid,
            _ if context.all_data_load_call_state.is_loading() => StepContent::Loading,
            WizardStep::SelectDevices => StepContent::SelectDevices,
            WizardStep::Review => StepContent::Review(context.review_summary()),
            WizardStep::Confirmation => StepContent::Confirmation {
                message: context.transaction_message.clone(),
                pending: context.submission_call_state.is_loading(),
            },
        };

        let primary = match step {
            WizardStep::SelectDevices => Some(ActionButton {
                label: "next",
                disabled: !controller.can_advance(),
            }),
            WizardStep::Review => Some(ActionButton {
                label: "submit",
                disabled: !controller.can_advance(),
            }),
            WizardStep::Confirmation | WizardStep::Invalid(_) => None,
        };

        let secondary_disabled = !active || state.is_exit_modal_open;
        let secondary = match step {
            WizardStep::SelectDevices => Some(ActionButton {
                label: "cancel",
                disabled: secondary_disabled,
            }),
            WizardStep::Review => Some(ActionButton {
                label: "back",
                disabled: secondary_disabled,
            }),
            WizardStep::Confirmation | WizardStep::Invalid(_) => None,
        };

        Self {
            workflow_title: controller.step_title().to_string(),
            current_step: state.current_step,
            content,
            primary,
            secondary,
            redirect_available: active && step == WizardStep::Confirmation,
            exit_modal_open: state.is_exit_modal_open,
            collapsed: state.stepper_collapsed,
        }
    }
}
