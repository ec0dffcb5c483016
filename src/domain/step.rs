use std::fmt;

use serde::{Deserialize, Serialize};

/// One stage of the edit workflow as loaded from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    pub index: i64,
    pub label: String,
}

impl Step {
    pub fn new(index: i64, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
        }
    }
}

/// Controller-level interpretation of the store's step index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectDevices,
    Review,
    Confirmation,
    /// Any index outside the known range. Carries the raw value for logging.
    Invalid(i64),
}

impl WizardStep {
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => WizardStep::SelectDevices,
            2 => WizardStep::Review,
            3 => WizardStep::Confirmation,
            other => WizardStep::Invalid(other),
        }
    }

    pub fn index(self) -> i64 {
        match self {
            WizardStep::SelectDevices => 1,
            WizardStep::Review => 2,
            WizardStep::Confirmation => 3,
            WizardStep::Invalid(raw) => raw,
        }
    }

    pub fn is_valid(self) -> bool {
        !matches!(self, WizardStep::Invalid(_))
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::SelectDevices => write!(f, "select devices"),
            WizardStep::Review => write!(f, "review"),
            WizardStep::Confirmation => write!(f, "confirmation"),
            WizardStep::Invalid(raw) => write!(f, "invalid step ({raw})"),
        }
    }
}

/// Returns the label of the step whose index matches `index`, or an empty
/// string when nothing matches.
pub fn step_title(steps: &[Step], index: i64) -> &str {
    steps
        .iter()
        .find(|step| step.index == index)
        .map(|step| step.label.as_str())
        .unwrap_or("")
}
