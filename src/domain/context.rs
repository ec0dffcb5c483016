use serde::{Deserialize, Serialize};

use super::{target_assigned, CallState, DeviceView, Step, VaRecord};

/// Target virtual account picked on the selection step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetVa {
    pub va_id: String,
}

/// Device that passed licence eligibility on the selection step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibleDevice {
    pub id: String,
}

/// Snapshot of everything the surrounding store exposes to the wizard.
///
/// The controller never queries the store itself; the application hands it a
/// fresh snapshot every update cycle. Every field has a default so a partially
/// populated store (or one returning nulls) still yields a usable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditContext {
    pub device_view: DeviceView,
    pub current_account_id: Option<String>,
    pub account_id_list: Vec<String>,
    pub total_selected_devices: u32,
    pub total_selected_devices_with_licenses: u32,
    pub total_accounts_selected: u32,
    pub review_screen_data: serde_json::Value,
    pub transaction_message: String,
    pub submission_call_state: CallState,
    pub steps: Vec<Step>,
    pub current_step: i64,
    pub current_va_data: Vec<VaRecord>,
    pub all_data_load_call_state: CallState,
    pub target_va_selection: Option<TargetVa>,
    pub eligible_devices_from_step1: Vec<EligibleDevice>,
}

impl Default for EditContext {
    fn default() -> Self {
        Self {
            device_view: DeviceView::default(),
            current_account_id: None,
            account_id_list: Vec::new(),
            total_selected_devices: 0,
            total_selected_devices_with_licenses: 0,
            total_accounts_selected: 0,
            review_screen_data: serde_json::Value::Null,
            transaction_message: String::new(),
            submission_call_state: CallState::Idle,
            steps: Vec::new(),
            current_step: 1,
            current_va_data: Vec::new(),
            all_data_load_call_state: CallState::Idle,
            target_va_selection: None,
            eligible_devices_from_step1: Vec::new(),
        }
    }
}

impl EditContext {
    /// True while the store is loading edit data or processing a submission.
    pub fn is_busy(&self) -> bool {
        self.submission_call_state.is_loading() || self.all_data_load_call_state.is_loading()
    }

    pub fn readiness(&self) -> ReadinessContext {
        ReadinessContext::from(self)
    }

    pub fn review_summary(&self) -> ReviewSummary {
        ReviewSummary {
            total_devices: self.total_selected_devices,
            total_devices_with_licenses: self.total_selected_devices_with_licenses,
            total_accounts: self.total_accounts_selected,
            target_va: self
                .target_va_selection
                .as_ref()
                .map(|target| target.va_id.clone()),
        }
    }
}

/// Inputs to the step guards, derived from an [`EditContext`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadinessContext {
    pub target_assigned: bool,
    pub selected_device_count: usize,
    pub selected_devices_with_license_count: u32,
    pub device_view: DeviceView,
}

impl ReadinessContext {
    /// Guard for leaving the selection step.
    pub fn can_leave_selection(&self) -> bool {
        self.target_assigned && self.selected_device_count > 0
    }
}

impl From<&EditContext> for ReadinessContext {
    fn from(context: &EditContext) -> Self {
        Self {
            target_assigned: target_assigned(&context.current_va_data),
            selected_device_count: context.eligible_devices_from_step1.len(),
            selected_devices_with_license_count: context.total_selected_devices_with_licenses,
            device_view: context.device_view,
        }
    }
}

/// Totals shown on the review step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    pub total_devices: u32,
    pub total_devices_with_licenses: u32,
    pub total_accounts: u32,
    pub target_va: Option<String>,
}
