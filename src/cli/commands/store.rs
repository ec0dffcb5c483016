//! Commands that edit the simulated store, standing in for data arriving from
//! the surrounding application. Every change is synced into the controller.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::domain::{CallState, DeviceView, EligibleDevice, TargetVa, VaChild, VaRecord};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "set-step",
            "Set the store's current step index",
            "set-step <index>",
            cmd_set_step,
        ),
        CommandEntry::new(
            "set-view",
            "Set the device view the flow was opened from",
            "set-view <all|assigned|unassigned|...>",
            cmd_set_view,
        ),
        CommandEntry::new(
            "set-account",
            "Switch the current account identifier",
            "set-account <id>",
            cmd_set_account,
        ),
        CommandEntry::new(
            "set-accounts",
            "Replace the selected account list",
            "set-accounts <id,id,...>",
            cmd_set_accounts,
        ),
        CommandEntry::new(
            "set-loading",
            "Toggle the edit data load state",
            "set-loading <on|off>",
            cmd_set_loading,
        ),
        CommandEntry::new(
            "assign-target",
            "Assign a target virtual account",
            "assign-target <va-id>",
            cmd_assign_target,
        ),
        CommandEntry::new(
            "select-devices",
            "Mark devices as selected and licence-eligible",
            "select-devices <id> [id...]",
            cmd_select_devices,
        ),
        CommandEntry::new(
            "settle",
            "Complete the in-flight submission",
            "settle <success|error> [message]",
            cmd_settle,
        ),
    ]
}

fn single_arg<'a>(args: &[&'a str]) -> Result<&'a str, CommandError> {
    match args {
        [value] => Ok(*value),
        _ => Err(CommandError::Usage),
    }
}

fn cmd_set_step(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args)?;
    let index: i64 = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid step index `{raw}`")))?;
    context.store.context_mut().current_step = index;
    context.pump();
    Ok(())
}

fn cmd_set_view(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let view = DeviceView::from(single_arg(args)?);
    context.store.context_mut().device_view = view;
    output::info(format!("Device view set to {}.", view.label()));
    context.pump();
    Ok(())
}

fn cmd_set_account(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = single_arg(args)?;
    context.store.context_mut().current_account_id = Some(id.to_string());
    context.pump();
    Ok(())
}

fn cmd_set_accounts(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args)?;
    context.store.context_mut().account_id_list = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();
    context.pump();
    Ok(())
}

fn cmd_set_loading(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let state = match single_arg(args)? {
        "on" => CallState::Loading,
        "off" => CallState::Success,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "expected `on` or `off`, got `{other}`"
            )))
        }
    };
    context.store.context_mut().all_data_load_call_state = state;
    context.pump();
    Ok(())
}

fn cmd_assign_target(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let va_id = single_arg(args)?.to_string();
    let snapshot = context.store.context_mut();
    snapshot.target_va_selection = Some(TargetVa {
        va_id: va_id.clone(),
    });
    let child = VaChild {
        id: None,
        target_va: Some(vec![va_id.clone()]),
    };
    match snapshot.current_va_data.first_mut() {
        Some(record) => record.children.push(child),
        None => snapshot.current_va_data.push(VaRecord {
            id: None,
            children: vec![child],
        }),
    }
    output::info(format!("Target virtual account {va_id} assigned."));
    context.pump();
    Ok(())
}

fn cmd_select_devices(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::Usage);
    }
    let snapshot = context.store.context_mut();
    snapshot.eligible_devices_from_step1 = args
        .iter()
        .map(|id| EligibleDevice { id: id.to_string() })
        .collect();
    let count = u32::try_from(args.len()).unwrap_or(u32::MAX);
    snapshot.total_selected_devices = count;
    snapshot.total_selected_devices_with_licenses = count;
    snapshot.total_accounts_selected = 1;
    output::info(format!("{count} device(s) selected."));
    context.pump();
    Ok(())
}

fn cmd_settle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (outcome, message) = match args.split_first() {
        Some((&"success", rest)) => (CallState::Success, rest.join(" ")),
        Some((&"error", rest)) => (CallState::Error, rest.join(" ")),
        _ => return Err(CommandError::Usage),
    };
    context.store.settle_submission(outcome, message);
    output::info(format!("Submission {}.", outcome.label()));
    context.pump();
    Ok(())
}
