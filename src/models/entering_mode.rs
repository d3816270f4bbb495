use serde::{Deserialize, Serialize};

/// Bulk-edit mode of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnteringMode {
    #[default]
    Idle,
    Hours,
}

impl EnteringMode {
    pub fn is_entering_hours(&self) -> bool {
        matches!(self, EnteringMode::Hours)
    }
}
