use serde::{Deserialize, Serialize};

/// Virtual account record as loaded for the edit screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub children: Vec<VaChild>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VaChild {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub target_va: Option<Vec<String>>,
}

impl VaChild {
    pub fn has_target(&self) -> bool {
        self.target_va
            .as_ref()
            .map(|targets| !targets.is_empty())
            .unwrap_or(false)
    }
}

/// True when any child anywhere in `records` carries a non-empty `targetVa`.
pub fn target_assigned(records: &[VaRecord]) -> bool {
    records
        .iter()
        .flat_map(|record| record.children.iter())
        .any(VaChild::has_target)
}
