use serde::{Deserialize, Serialize};

/// Progress of an asynchronous store operation (data load or submission).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl CallState {
    pub fn is_loading(self) -> bool {
        self == CallState::Loading
    }

    pub fn label(self) -> &'static str {
        match self {
            CallState::Idle => "idle",
            CallState::Loading => "loading",
            CallState::Success => "success",
            CallState::Error => "error",
        }
    }
}
