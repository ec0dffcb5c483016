use crate::config::Config;
use crate::store::EditStore;
use crate::wizard::{
    ActionLog, NavigationLog, StepperView, WizardController, WizardEvent,
};

use super::commands;
use super::core::CommandError;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub type ShellController = WizardController<ActionLog, NavigationLog>;

/// Shell runtime state: the simulated store and the mounted controller.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config: Config,
    pub store: EditStore,
    controller: Option<ShellController>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config) -> Self {
        let store = EditStore::with_steps(config.default_steps.clone());
        Self {
            mode,
            registry: CommandRegistry::with_entries(commands::all_definitions()),
            config,
            store,
            controller: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        match &self.controller {
            Some(controller) if controller.is_active() => {
                format!("va-edit[{}]> ", controller.state().current_step)
            }
            Some(_) => "va-edit[done]> ".to_string(),
            None => "va-edit> ".to_string(),
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Replaces the store and mounts a fresh controller against it.
    pub fn mount(&mut self, store: EditStore) {
        self.store = store;
        let controller = WizardController::mount_with_routes(
            self.store.context(),
            ActionLog::new(),
            NavigationLog::new(),
            self.config.routes.clone(),
        );
        output::success(format!(
            "Edit flow mounted (session {}).",
            controller.session_id()
        ));
        self.controller = Some(controller);
        self.pump();
    }

    pub fn controller(&self) -> Result<&ShellController, CommandError> {
        self.controller.as_ref().ok_or(CommandError::NotMounted)
    }

    /// Runs one controller transition, reports its outcome and settles the
    /// resulting store updates.
    pub fn transition(
        &mut self,
        apply: impl FnOnce(&mut ShellController) -> WizardEvent,
    ) -> Result<WizardEvent, CommandError> {
        let controller = self.controller.as_mut().ok_or(CommandError::NotMounted)?;
        let event = apply(controller);
        report_event(&event);
        self.pump();
        Ok(event)
    }

    /// Applies queued dispatcher actions to the store, re-syncs the
    /// controller and prints requested navigations.
    pub fn pump(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let actions = controller.dispatcher_mut().drain();
        for action in &actions {
            output::info(format!("dispatch {action}"));
        }
        self.store.apply_all(actions);

        if controller.is_active() && controller.sync(self.store.context()) == WizardEvent::StaleContext
        {
            output::warning("Account context changed; leaving the edit flow.");
        }
        for navigation in controller.navigator_mut().drain() {
            output::success(navigation);
        }
    }

    pub fn status(&self) -> Result<String, CommandError> {
        let controller = self.controller()?;
        Ok(render::render_status(
            &StepperView::build(controller),
            controller.is_active(),
        ))
    }
}

fn report_event(event: &WizardEvent) {
    let text = render::describe_event(event);
    if event.is_blocked() {
        output::warning(text);
    } else {
        output::info(text);
    }
}
