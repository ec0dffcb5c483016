//! Step-transition state machine for the device virtual-account edit flow.
//!
//! The controller owns the current step, the exit-confirmation flag and the
//! stepper collapse flag. Everything else is read from the [`EditContext`]
//! snapshot handed over by the application on mount and on every
//! [`WizardController::sync`]. Transitions run synchronously and never fail;
//! a transition that is not allowed returns [`WizardEvent::Blocked`] and
//! leaves the state untouched.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    step_title, DeviceRoutes, DeviceView, EditContext, ReadinessContext, WizardStep,
};

use super::identity::IdentityWatch;
use super::ports::{EditDispatcher, Navigator, PageDirection};

/// Mutable state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: i64,
    pub is_exit_modal_open: bool,
    pub stepper_collapsed: bool,
}

impl WizardState {
    pub fn step(&self) -> WizardStep {
        WizardStep::from_index(self.current_step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    /// The flow navigated away; no further transitions are accepted.
    Ended,
}

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    InvalidStep,
    GuardFailed,
    Busy,
    ExitPending,
    ExitNotOpen,
    Terminal,
    NotConfirmation,
    Inactive,
}

/// Outcome of a controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Advanced(WizardStep),
    Submitted,
    Retreated(WizardStep),
    ExitPrompted,
    ExitDismissed,
    Exited,
    Redirected(String),
    StepperToggled { collapsed: bool },
    Synced,
    /// The workspace identity changed under a mounted flow; the controller
    /// navigated back and ended.
    StaleContext,
    Blocked(BlockReason),
}

impl WizardEvent {
    pub fn is_blocked(&self) -> bool {
        matches!(self, WizardEvent::Blocked(_))
    }
}

pub struct WizardController<D, N> {
    session: Uuid,
    dispatcher: D,
    navigator: N,
    routes: DeviceRoutes,
    state: WizardState,
    context: EditContext,
    readiness: ReadinessContext,
    account_watch: IdentityWatch<String>,
    account_list_watch: IdentityWatch<Vec<String>>,
    lifecycle: Lifecycle,
}

impl<D: EditDispatcher, N: Navigator> WizardController<D, N> {
    pub fn mount(context: &EditContext, dispatcher: D, navigator: N) -> Self {
        Self::mount_with_routes(context, dispatcher, navigator, DeviceRoutes::default())
    }

    /// Mounts the flow against `context` and asks the store to load edit data.
    pub fn mount_with_routes(
        context: &EditContext,
        dispatcher: D,
        navigator: N,
        routes: DeviceRoutes,
    ) -> Self {
        let mut controller = Self {
            session: Uuid::new_v4(),
            dispatcher,
            navigator,
            routes,
            state: WizardState {
                current_step: context.current_step,
                is_exit_modal_open: false,
                stepper_collapsed: false,
            },
            context: context.clone(),
            readiness: context.readiness(),
            account_watch: IdentityWatch::new(),
            account_list_watch: IdentityWatch::new(),
            lifecycle: Lifecycle::Active,
        };
        controller
            .account_watch
            .observe(context.current_account_id.as_ref());
        controller
            .account_list_watch
            .observe(non_empty(&context.account_id_list).as_ref());
        controller.dispatcher.initiate_edit();

        info!(
            session = %controller.session,
            step = context.current_step,
            "edit wizard mounted"
        );
        controller
    }

    /// Adopts a fresh store snapshot.
    pub fn sync(&mut self, context: &EditContext) -> WizardEvent {
        if self.lifecycle == Lifecycle::Ended {
            return WizardEvent::Blocked(BlockReason::Inactive);
        }

        let account_changed = self
            .account_watch
            .observe(context.current_account_id.as_ref());
        let list_changed = self
            .account_list_watch
            .observe(non_empty(&context.account_id_list).as_ref());
        if account_changed || list_changed {
            warn!(
                session = %self.session,
                account = ?context.current_account_id,
                "account context changed under the edit flow; leaving"
            );
            self.navigator.navigate_back();
            self.end();
            return WizardEvent::StaleContext;
        }

        if self.state.current_step != context.current_step {
            debug!(
                session = %self.session,
                from = self.state.current_step,
                to = context.current_step,
                "adopting store step"
            );
        }
        self.state.current_step = context.current_step;
        if !self.step().is_valid() && self.state.is_exit_modal_open {
            debug!(
                session = %self.session,
                step = context.current_step,
                "closing exit confirmation on invalid step"
            );
            self.state.is_exit_modal_open = false;
        }
        self.readiness = context.readiness();
        self.context = context.clone();
        WizardEvent::Synced
    }

    /// Primary action: next on the selection step, submit on the review step.
    pub fn advance(&mut self) -> WizardEvent {
        let step = match self.gate() {
            Ok(step) => step,
            Err(reason) => return self.blocked("advance", reason),
        };
        if self.state.is_exit_modal_open {
            return self.blocked("advance", BlockReason::ExitPending);
        }
        if self.is_busy() {
            return self.blocked("advance", BlockReason::Busy);
        }

        match step {
            WizardStep::SelectDevices => {
                if !self.readiness.can_leave_selection() {
                    return self.blocked("advance", BlockReason::GuardFailed);
                }
                self.dispatcher.update_page(PageDirection::Forward);
                self.move_to(WizardStep::Review);
                WizardEvent::Advanced(WizardStep::Review)
            }
            WizardStep::Review => {
                self.dispatcher.submit();
                self.dispatcher.update_page(PageDirection::Forward);
                self.move_to(WizardStep::Confirmation);
                info!(session = %self.session, "device reassignment submitted");
                WizardEvent::Submitted
            }
            WizardStep::Confirmation | WizardStep::Invalid(_) => {
                self.blocked("advance", BlockReason::Terminal)
            }
        }
    }

    /// Secondary action: back on the review step, exit prompt on the
    /// selection step.
    pub fn retreat(&mut self) -> WizardEvent {
        let step = match self.gate() {
            Ok(step) => step,
            Err(reason) => return self.blocked("retreat", reason),
        };
        if self.state.is_exit_modal_open {
            return self.blocked("retreat", BlockReason::ExitPending);
        }

        match step {
            WizardStep::SelectDevices => {
                self.state.is_exit_modal_open = true;
                debug!(session = %self.session, "exit confirmation opened from first step");
                WizardEvent::ExitPrompted
            }
            WizardStep::Review => {
                self.dispatcher.update_page(PageDirection::Backward);
                self.move_to(WizardStep::SelectDevices);
                WizardEvent::Retreated(WizardStep::SelectDevices)
            }
            WizardStep::Confirmation | WizardStep::Invalid(_) => {
                self.blocked("retreat", BlockReason::Terminal)
            }
        }
    }

    /// Breadcrumb back link. Opens the exit confirmation on any valid step.
    pub fn open_exit(&mut self) -> WizardEvent {
        if let Err(reason) = self.gate() {
            return self.blocked("open_exit", reason);
        }
        self.state.is_exit_modal_open = true;
        debug!(session = %self.session, "exit confirmation opened");
        WizardEvent::ExitPrompted
    }

    pub fn close_exit(&mut self) -> WizardEvent {
        if let Err(reason) = self.require_open_exit() {
            return self.blocked("close_exit", reason);
        }
        self.state.is_exit_modal_open = false;
        debug!(session = %self.session, "exit confirmation dismissed");
        WizardEvent::ExitDismissed
    }

    /// Leaves the flow by stepping back in history.
    pub fn confirm_exit(&mut self) -> WizardEvent {
        if let Err(reason) = self.require_open_exit() {
            return self.blocked("confirm_exit", reason);
        }
        self.state.is_exit_modal_open = false;
        self.navigator.navigate_back();
        self.end();
        info!(session = %self.session, "edit flow exited by user");
        WizardEvent::Exited
    }

    /// Confirmation-step action returning to the device list the user came
    /// from.
    pub fn redirect_to_devices(&mut self) -> WizardEvent {
        let step = match self.gate() {
            Ok(step) => step,
            Err(reason) => return self.blocked("redirect", reason),
        };
        if step != WizardStep::Confirmation {
            return self.blocked("redirect", BlockReason::NotConfirmation);
        }
        if self.state.is_exit_modal_open {
            return self.blocked("redirect", BlockReason::ExitPending);
        }

        let view = self.readiness.device_view;
        if view == DeviceView::Unknown {
            warn!(
                session = %self.session,
                fallback = %self.routes.all,
                "unrecognised device view; redirecting to the full device list"
            );
        }
        let path = view.redirect_path(&self.routes).to_string();
        self.navigator.navigate_to(&path);
        self.end();
        info!(session = %self.session, %path, "edit flow finished");
        WizardEvent::Redirected(path)
    }

    /// Collapses or expands the stepper panel.
    pub fn toggle_stepper(&mut self) -> WizardEvent {
        if let Err(reason) = self.gate() {
            return self.blocked("toggle_stepper", reason);
        }
        self.state.stepper_collapsed = !self.state.stepper_collapsed;
        WizardEvent::StepperToggled {
            collapsed: self.state.stepper_collapsed,
        }
    }

    /// Whether the primary action should be enabled right now.
    pub fn can_advance(&self) -> bool {
        let Ok(step) = self.gate() else {
            return false;
        };
        if self.state.is_exit_modal_open || self.is_busy() {
            return false;
        }
        match step {
            WizardStep::SelectDevices => self.readiness.can_leave_selection(),
            WizardStep::Review => true,
            WizardStep::Confirmation | WizardStep::Invalid(_) => false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.context.is_busy()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    /// Label of the current step, empty when the steps do not cover it.
    pub fn step_title(&self) -> &str {
        step_title(&self.context.steps, self.state.current_step)
    }

    pub fn context(&self) -> &EditContext {
        &self.context
    }

    pub fn readiness(&self) -> ReadinessContext {
        self.readiness
    }

    pub fn routes(&self) -> &DeviceRoutes {
        &self.routes
    }

    pub fn session_id(&self) -> Uuid {
        self.session
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    fn gate(&self) -> Result<WizardStep, BlockReason> {
        if self.lifecycle == Lifecycle::Ended {
            return Err(BlockReason::Inactive);
        }
        match self.step() {
            WizardStep::Invalid(_) => Err(BlockReason::InvalidStep),
            step => Ok(step),
        }
    }

    // Exit handling stays available on every valid step so an open prompt can
    // always be answered.
    fn require_open_exit(&self) -> Result<(), BlockReason> {
        self.gate()?;
        if !self.state.is_exit_modal_open {
            return Err(BlockReason::ExitNotOpen);
        }
        Ok(())
    }

    fn move_to(&mut self, step: WizardStep) {
        debug!(
            session = %self.session,
            from = self.state.current_step,
            to = step.index(),
            "step transition"
        );
        self.state.current_step = step.index();
    }

    fn end(&mut self) {
        self.lifecycle = Lifecycle::Ended;
    }

    fn blocked(&self, action: &'static str, reason: BlockReason) -> WizardEvent {
        debug!(session = %self.session, action, ?reason, "transition blocked");
        WizardEvent::Blocked(reason)
    }
}

fn non_empty(ids: &[String]) -> Option<Vec<String>> {
    if ids.is_empty() {
        None
    } else {
        Some(ids.to_vec())
    }
}
