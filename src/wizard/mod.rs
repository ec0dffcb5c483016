//! Multi-step edit wizard: the controller state machine, its outbound ports
//! and the derived view model.

pub mod controller;
pub mod identity;
pub mod ports;
pub mod view;

pub use controller::{BlockReason, Lifecycle, WizardController, WizardEvent, WizardState};
pub use identity::IdentityWatch;
pub use ports::{
    ActionLog, EditAction, EditDispatcher, Navigation, NavigationLog, Navigator, PageDirection,
};
pub use view::{ActionButton, StepContent, StepperView};
