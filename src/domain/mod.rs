//! Data model shared by the edit wizard: steps, call states, device views and
//! the read-only store snapshot the controller consumes each update cycle.

pub mod call_state;
pub mod context;
pub mod device_view;
pub mod step;
pub mod virtual_account;

pub use call_state::CallState;
pub use context::{EditContext, EligibleDevice, ReadinessContext, ReviewSummary, TargetVa};
pub use device_view::{DeviceRoutes, DeviceView};
pub use step::{step_title, Step, WizardStep};
pub use virtual_account::{target_assigned, VaChild, VaRecord};
