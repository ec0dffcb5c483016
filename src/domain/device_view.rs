use serde::{Deserialize, Serialize};

/// Device list the user came from; decides where the confirmation step
/// redirects to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceView {
    #[default]
    All,
    Assigned,
    Unassigned,
    /// Any value the store sends that this crate does not recognise.
    #[serde(other)]
    Unknown,
}

impl DeviceView {
    /// Destination of the confirmation redirect. `Unknown` shares the `All`
    /// destination.
    pub fn redirect_path(self, routes: &DeviceRoutes) -> &str {
        match self {
            DeviceView::All | DeviceView::Unknown => &routes.all,
            DeviceView::Unassigned => &routes.unassigned,
            DeviceView::Assigned => &routes.assigned,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceView::All => "ALL",
            DeviceView::Assigned => "ASSIGNED",
            DeviceView::Unassigned => "UNASSIGNED",
            DeviceView::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for DeviceView {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ALL" => DeviceView::All,
            "ASSIGNED" => DeviceView::Assigned,
            "UNASSIGNED" => DeviceView::Unassigned,
            _ => DeviceView::Unknown,
        }
    }
}

/// Route table for the device list pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceRoutes {
    pub all: String,
    pub unassigned: String,
    pub assigned: String,
}

impl Default for DeviceRoutes {
    fn default() -> Self {
        Self {
            all: "/devices".into(),
            unassigned: "/devices/unassigned".into(),
            assigned: "/devices/assigned".into(),
        }
    }
}
