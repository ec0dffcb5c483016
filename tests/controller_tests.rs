mod common;

use common::{mount, ready_context, va_record, STEPS};
use device_va_edit::domain::{CallState, DeviceRoutes, DeviceView, EditContext, WizardStep};
use device_va_edit::wizard::{
    ActionLog, BlockReason, EditAction, Navigation, NavigationLog, PageDirection, WizardController,
    WizardEvent,
};

#[test]
fn mount_requests_edit_data_without_navigating() {
    let controller = mount(&ready_context(1));
    assert_eq!(controller.dispatcher().actions(), &[EditAction::InitiateEdit]);
    assert!(controller.navigator().history().is_empty());
    assert_eq!(controller.step(), WizardStep::SelectDevices);
    assert!(!controller.state().is_exit_modal_open);
}

#[test]
fn store_step_is_adopted_on_mount() {
    assert_eq!(mount(&ready_context(2)).step(), WizardStep::Review);
    assert_eq!(mount(&ready_context(3)).step(), WizardStep::Confirmation);
    assert_eq!(mount(&ready_context(99)).step(), WizardStep::Invalid(99));
}

#[test]
fn advance_from_selection_requires_target_and_devices() {
    let mut no_target = ready_context(1);
    no_target.current_va_data = vec![va_record(&[Some(&[][..]), None])];
    let mut controller = mount(&no_target);
    assert_eq!(
        controller.advance(),
        WizardEvent::Blocked(BlockReason::GuardFailed)
    );
    assert_eq!(controller.step(), WizardStep::SelectDevices);

    let mut no_devices = ready_context(1);
    no_devices.eligible_devices_from_step1.clear();
    let mut controller = mount(&no_devices);
    assert!(!controller.can_advance());
    assert!(controller.advance().is_blocked());
    assert_eq!(controller.dispatcher().actions(), &[EditAction::InitiateEdit]);
}

#[test]
fn advance_from_selection_moves_to_review() {
    let mut controller = mount(&ready_context(1));
    assert!(controller.can_advance());
    assert_eq!(
        controller.advance(),
        WizardEvent::Advanced(WizardStep::Review)
    );
    assert_eq!(controller.step(), WizardStep::Review);
    assert_eq!(
        controller.dispatcher().actions().last(),
        Some(&EditAction::UpdatePage(PageDirection::Forward))
    );
}

#[test]
fn advance_from_review_submits() {
    let mut controller = mount(&ready_context(2));
    assert_eq!(controller.advance(), WizardEvent::Submitted);
    assert_eq!(controller.step(), WizardStep::Confirmation);
    assert_eq!(
        controller.dispatcher().actions(),
        &[
            EditAction::InitiateEdit,
            EditAction::Submit,
            EditAction::UpdatePage(PageDirection::Forward)
        ]
    );
}

#[test]
fn confirmation_is_terminal_for_stepper_actions() {
    let mut controller = mount(&ready_context(3));
    assert_eq!(
        controller.advance(),
        WizardEvent::Blocked(BlockReason::Terminal)
    );
    assert_eq!(
        controller.retreat(),
        WizardEvent::Blocked(BlockReason::Terminal)
    );
    assert_eq!(controller.dispatcher().count(EditAction::Submit), 0);
}

#[test]
fn advance_is_disabled_while_loading() {
    let mut loading = ready_context(2);
    loading.submission_call_state = CallState::Loading;
    let mut controller = mount(&loading);
    assert!(!controller.can_advance());
    assert_eq!(controller.advance(), WizardEvent::Blocked(BlockReason::Busy));
    assert_eq!(controller.dispatcher().count(EditAction::Submit), 0);

    let mut settled = loading.clone();
    settled.submission_call_state = CallState::Error;
    assert_eq!(controller.sync(&settled), WizardEvent::Synced);
    assert!(controller.can_advance());
    assert_eq!(controller.advance(), WizardEvent::Submitted);
}

#[test]
fn data_load_in_flight_blocks_first_step() {
    let mut loading = ready_context(1);
    loading.all_data_load_call_state = CallState::Loading;
    let mut controller = mount(&loading);
    assert_eq!(controller.advance(), WizardEvent::Blocked(BlockReason::Busy));
    // Exit handling is still reachable while loading.
    assert_eq!(controller.retreat(), WizardEvent::ExitPrompted);
}

#[test]
fn retreat_from_review_goes_back_unconditionally() {
    let mut context = ready_context(2);
    context.eligible_devices_from_step1.clear();
    let mut controller = mount(&context);
    assert_eq!(
        controller.retreat(),
        WizardEvent::Retreated(WizardStep::SelectDevices)
    );
    assert_eq!(controller.step(), WizardStep::SelectDevices);
    assert_eq!(
        controller.dispatcher().actions().last(),
        Some(&EditAction::UpdatePage(PageDirection::Backward))
    );
}

#[test]
fn retreat_on_first_step_opens_exit_prompt_only() {
    let mut controller = mount(&ready_context(1));
    assert_eq!(controller.retreat(), WizardEvent::ExitPrompted);
    assert!(controller.state().is_exit_modal_open);
    assert_eq!(controller.state().current_step, 1);
    assert!(controller.navigator().history().is_empty());
    assert_eq!(controller.dispatcher().actions(), &[EditAction::InitiateEdit]);
}

#[test]
fn open_exit_prompt_suspends_stepper() {
    let mut controller = mount(&ready_context(2));
    assert_eq!(controller.open_exit(), WizardEvent::ExitPrompted);
    assert_eq!(
        controller.advance(),
        WizardEvent::Blocked(BlockReason::ExitPending)
    );
    assert_eq!(
        controller.retreat(),
        WizardEvent::Blocked(BlockReason::ExitPending)
    );
    assert_eq!(controller.step(), WizardStep::Review);
}

#[test]
fn breadcrumb_then_close_resumes_current_step() {
    let mut controller = mount(&ready_context(2));
    controller.open_exit();
    assert_eq!(controller.close_exit(), WizardEvent::ExitDismissed);
    assert!(!controller.state().is_exit_modal_open);
    assert_eq!(controller.step(), WizardStep::Review);
    assert!(controller.navigator().history().is_empty());
    assert!(controller.is_active());
}

#[test]
fn confirm_exit_navigates_back_once_without_dispatching() {
    let mut controller = mount(&ready_context(1));
    controller.open_exit();
    let dispatched_before = controller.dispatcher().actions().len();

    assert_eq!(controller.confirm_exit(), WizardEvent::Exited);
    assert_eq!(controller.navigator().history(), &[Navigation::Back]);
    assert_eq!(controller.dispatcher().actions().len(), dispatched_before);
    assert!(!controller.is_active());

    assert_eq!(
        controller.confirm_exit(),
        WizardEvent::Blocked(BlockReason::Inactive)
    );
    assert_eq!(controller.navigator().back_count(), 1);
}

#[test]
fn exit_prompt_actions_need_an_open_prompt() {
    let mut controller = mount(&ready_context(1));
    assert_eq!(
        controller.close_exit(),
        WizardEvent::Blocked(BlockReason::ExitNotOpen)
    );
    assert_eq!(
        controller.confirm_exit(),
        WizardEvent::Blocked(BlockReason::ExitNotOpen)
    );
    assert!(controller.navigator().history().is_empty());
}

#[test]
fn redirect_destination_follows_device_view() {
    let cases = [
        (DeviceView::All, "/devices"),
        (DeviceView::Unassigned, "/devices/unassigned"),
        (DeviceView::Assigned, "/devices/assigned"),
        (DeviceView::Unknown, "/devices"),
    ];
    for (view, expected) in cases {
        let mut context = ready_context(3);
        context.device_view = view;
        let mut controller = mount(&context);
        assert_eq!(
            controller.redirect_to_devices(),
            WizardEvent::Redirected(expected.to_string())
        );
        assert_eq!(
            controller.navigator().history(),
            &[Navigation::To(expected.to_string())]
        );
        assert!(!controller.is_active());
    }
}

#[test]
fn redirect_uses_configured_routes() {
    let routes = DeviceRoutes {
        all: "/inventory".into(),
        unassigned: "/inventory/free".into(),
        assigned: "/inventory/taken".into(),
    };
    let mut context = ready_context(3);
    context.device_view = DeviceView::Assigned;
    let mut controller = WizardController::mount_with_routes(
        &context,
        ActionLog::new(),
        NavigationLog::new(),
        routes,
    );
    assert_eq!(
        controller.redirect_to_devices(),
        WizardEvent::Redirected("/inventory/taken".into())
    );
}

#[test]
fn redirect_only_from_confirmation() {
    let mut controller = mount(&ready_context(2));
    assert_eq!(
        controller.redirect_to_devices(),
        WizardEvent::Blocked(BlockReason::NotConfirmation)
    );
    assert!(controller.navigator().history().is_empty());
}

#[test]
fn invalid_step_blocks_every_transition() {
    let mut controller = mount(&ready_context(99));
    let before = controller.state();

    assert_eq!(
        controller.advance(),
        WizardEvent::Blocked(BlockReason::InvalidStep)
    );
    assert!(controller.retreat().is_blocked());
    assert!(controller.open_exit().is_blocked());
    assert!(controller.close_exit().is_blocked());
    assert!(controller.confirm_exit().is_blocked());
    assert!(controller.redirect_to_devices().is_blocked());
    assert!(controller.toggle_stepper().is_blocked());

    assert_eq!(controller.state(), before);
    assert!(controller.navigator().history().is_empty());
    assert_eq!(controller.dispatcher().actions(), &[EditAction::InitiateEdit]);
}

#[test]
fn corrected_step_index_unblocks_invalid_state() {
    let mut controller = mount(&ready_context(0));
    assert!(controller.advance().is_blocked());
    controller.sync(&ready_context(1));
    assert_eq!(
        controller.advance(),
        WizardEvent::Advanced(WizardStep::Review)
    );
}

#[test]
fn store_moving_to_invalid_step_closes_exit_prompt() {
    let mut controller = mount(&ready_context(1));
    assert_eq!(controller.open_exit(), WizardEvent::ExitPrompted);

    assert_eq!(controller.sync(&ready_context(9)), WizardEvent::Synced);
    assert_eq!(controller.step(), WizardStep::Invalid(9));
    assert!(!controller.state().is_exit_modal_open);

    let before = controller.state();
    assert_eq!(
        controller.confirm_exit(),
        WizardEvent::Blocked(BlockReason::InvalidStep)
    );
    assert_eq!(
        controller.close_exit(),
        WizardEvent::Blocked(BlockReason::InvalidStep)
    );
    assert_eq!(controller.state(), before);
    assert!(controller.navigator().history().is_empty());
    assert!(controller.is_active());

    controller.sync(&ready_context(1));
    assert!(!controller.state().is_exit_modal_open);
    assert_eq!(
        controller.advance(),
        WizardEvent::Advanced(WizardStep::Review)
    );
}

#[test]
fn account_change_after_mount_navigates_back_once() {
    let mut context = ready_context(1);
    context.current_account_id = Some("A".into());
    let mut controller = mount(&context);
    assert_eq!(controller.sync(&context), WizardEvent::Synced);
    assert!(controller.navigator().history().is_empty());

    context.current_account_id = Some("B".into());
    assert_eq!(controller.sync(&context), WizardEvent::StaleContext);
    assert_eq!(controller.navigator().history(), &[Navigation::Back]);

    context.current_account_id = Some("C".into());
    controller.sync(&context);
    assert_eq!(controller.navigator().back_count(), 1);
    assert!(!controller.is_active());
}

#[test]
fn account_list_change_counts_as_stale_context() {
    let mut context = ready_context(2);
    let mut controller = mount(&context);
    context.account_id_list = vec!["va1".into(), "va3".into()];
    assert_eq!(controller.sync(&context), WizardEvent::StaleContext);
    assert_eq!(controller.navigator().back_count(), 1);
}

#[test]
fn identity_arriving_after_mount_is_not_a_change() {
    let mut context = ready_context(1);
    context.current_account_id = None;
    context.account_id_list.clear();
    let mut controller = mount(&context);

    context.current_account_id = Some("A".into());
    context.account_id_list = vec!["va1".into()];
    assert_eq!(controller.sync(&context), WizardEvent::Synced);
    assert!(controller.navigator().history().is_empty());

    context.current_account_id = Some("B".into());
    assert_eq!(controller.sync(&context), WizardEvent::StaleContext);
}

#[test]
fn clearing_account_after_mount_navigates_back() {
    let mut context = ready_context(2);
    let mut controller = mount(&context);

    context.current_account_id = None;
    assert_eq!(controller.sync(&context), WizardEvent::StaleContext);
    assert_eq!(controller.navigator().history(), &[Navigation::Back]);
    assert!(!controller.is_active());

    controller.sync(&context);
    assert_eq!(controller.navigator().back_count(), 1);
}

#[test]
fn emptied_account_list_after_mount_navigates_back() {
    let mut context = ready_context(1);
    let mut controller = mount(&context);

    context.account_id_list.clear();
    assert_eq!(controller.sync(&context), WizardEvent::StaleContext);
    assert_eq!(controller.navigator().back_count(), 1);
    assert_eq!(controller.dispatcher().actions(), &[EditAction::InitiateEdit]);
}

#[test]
fn step_title_tracks_current_step() {
    let mut controller = mount(&ready_context(1));
    assert_eq!(controller.step_title(), "step1.label");
    controller.advance();
    assert_eq!(controller.step_title(), "step2.label");

    let mut no_steps = ready_context(1);
    no_steps.steps.clear();
    assert_eq!(mount(&no_steps).step_title(), "");
    assert_eq!(mount(&ready_context(7)).step_title(), "");
    assert_eq!(STEPS.len(), 3);
}

#[test]
fn stepper_toggles_collapse() {
    let mut controller = mount(&ready_context(2));
    assert_eq!(
        controller.toggle_stepper(),
        WizardEvent::StepperToggled { collapsed: true }
    );
    assert_eq!(
        controller.toggle_stepper(),
        WizardEvent::StepperToggled { collapsed: false }
    );
}

#[test]
fn null_snapshot_is_handled() {
    let context: EditContext = serde_json::from_str("{}").expect("empty snapshot");
    let mut controller = mount(&context);
    assert_eq!(controller.step(), WizardStep::SelectDevices);
    assert_eq!(controller.step_title(), "");
    assert!(controller.advance().is_blocked());
    assert_eq!(controller.retreat(), WizardEvent::ExitPrompted);
}
