//! Commands that drive the mounted controller: mounting, status and every
//! stepper/breadcrumb/exit-prompt action.

use std::path::Path;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellController;
use crate::store::EditStore;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "mount",
            "Mount the edit flow against a scenario file or the default store",
            "mount [scenario.json]",
            cmd_mount,
        ),
        CommandEntry::new("status", "Show the current stepper state", "status", cmd_status),
        CommandEntry::new("next", "Press the primary (next/submit) button", "next", cmd_next),
        CommandEntry::new(
            "back",
            "Press the secondary (back/cancel) button",
            "back",
            cmd_back,
        ),
        CommandEntry::new(
            "breadcrumb",
            "Click the breadcrumb back link",
            "breadcrumb",
            cmd_breadcrumb,
        ),
        CommandEntry::new("close", "Dismiss the exit confirmation", "close", cmd_close),
        CommandEntry::new(
            "confirm-exit",
            "Confirm leaving the edit flow",
            "confirm-exit",
            cmd_confirm_exit,
        ),
        CommandEntry::new(
            "redirect",
            "Return to the device list from the confirmation step",
            "redirect",
            cmd_redirect,
        ),
        CommandEntry::new("toggle", "Collapse or expand the stepper", "toggle", cmd_toggle),
    ]
}

fn cmd_mount(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let store = match args {
        [] => EditStore::with_steps(context.config.default_steps.clone()),
        [path] => EditStore::load(Path::new(path))?,
        _ => return Err(CommandError::Usage),
    };
    context.mount(store);
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::plain(&context.status()?);
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::advance).map(drop)
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::retreat).map(drop)
}

fn cmd_breadcrumb(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::open_exit).map(drop)
}

fn cmd_close(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::close_exit).map(drop)
}

fn cmd_confirm_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::confirm_exit).map(drop)
}

fn cmd_redirect(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::redirect_to_devices).map(drop)
}

fn cmd_toggle(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.transition(ShellController::toggle_stepper).map(drop)
}
