//! Plain-text rendering of the wizard for the shell.

use crate::wizard::{ActionButton, BlockReason, StepContent, StepperView, WizardEvent};

pub fn render_status(view: &StepperView, active: bool) -> String {
    let title = if view.workflow_title.is_empty() {
        "(untitled)"
    } else {
        view.workflow_title.as_str()
    };
    let mut lines = vec![format!("Step {}: {}", view.current_step, title)];
    lines.push(format!("Content: {}", render_content(&view.content)));
    lines.push(format!("Primary: {}", render_button(view.primary)));
    lines.push(format!("Secondary: {}", render_button(view.secondary)));
    if view.redirect_available {
        lines.push("Redirect: available".to_string());
    }
    lines.push(format!(
        "Exit prompt: {}",
        if view.exit_modal_open { "open" } else { "closed" }
    ));
    lines.push(format!(
        "Stepper: {}",
        if view.collapsed { "collapsed" } else { "expanded" }
    ));
    if !active {
        lines.push("Flow: ended".to_string());
    }
    lines.join("\n")
}

fn render_content(content: &StepContent) -> String {
    match content {
        StepContent::Loading => "Loading...".to_string(),
        StepContent::SelectDevices => "select devices".to_string(),
        StepContent::Review(summary) => format!(
            "review ({} devices, {} licensed, {} accounts, target {})",
            summary.total_devices,
            summary.total_devices_with_licenses,
            summary.total_accounts,
            summary.target_va.as_deref().unwrap_or("none")
        ),
        StepContent::Confirmation { pending: true, .. } => "confirmation (pending)".to_string(),
        StepContent::Confirmation { message, .. } if message.is_empty() => {
            "confirmation".to_string()
        }
        StepContent::Confirmation { message, .. } => format!("confirmation ({message})"),
        StepContent::Invalid => "Invalid Step".to_string(),
    }
}

fn render_button(button: Option<ActionButton>) -> String {
    match button {
        Some(ActionButton {
            label,
            disabled: true,
        }) => format!("{label} (disabled)"),
        Some(ActionButton { label, .. }) => label.to_string(),
        None => "-".to_string(),
    }
}

pub fn describe_event(event: &WizardEvent) -> String {
    match event {
        WizardEvent::Advanced(step) => format!("Moved to {step}."),
        WizardEvent::Submitted => "Submitted devices; showing confirmation.".to_string(),
        WizardEvent::Retreated(step) => format!("Back to {step}."),
        WizardEvent::ExitPrompted => "Exit confirmation opened.".to_string(),
        WizardEvent::ExitDismissed => "Exit confirmation closed.".to_string(),
        WizardEvent::Exited => "Leaving the edit flow.".to_string(),
        WizardEvent::Redirected(path) => format!("Redirecting to {path}."),
        WizardEvent::StepperToggled { collapsed: true } => "Stepper collapsed.".to_string(),
        WizardEvent::StepperToggled { collapsed: false } => "Stepper expanded.".to_string(),
        WizardEvent::Synced => "Store snapshot applied.".to_string(),
        WizardEvent::StaleContext => "Account context changed.".to_string(),
        WizardEvent::Blocked(reason) => format!("Action blocked: {}.", describe_block(*reason)),
    }
}

fn describe_block(reason: BlockReason) -> &'static str {
    match reason {
        BlockReason::InvalidStep => "the current step is invalid",
        BlockReason::GuardFailed => "select a target account and at least one device first",
        BlockReason::Busy => "waiting for the store",
        BlockReason::ExitPending => "answer the exit confirmation first",
        BlockReason::ExitNotOpen => "no exit confirmation is open",
        BlockReason::Terminal => "not available on this step",
        BlockReason::NotConfirmation => "only available on the confirmation step",
        BlockReason::Inactive => "the edit flow has ended",
    }
}
