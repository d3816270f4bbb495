use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Choices made by the user before importing hours.
/// `None` means "not chosen yet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportInfo {
    pub is_work_from_home: Option<bool>,
    pub selected_type_of_work_index: Option<usize>,
    pub work_from_home_start: Option<NaiveDate>,
}

/// One entry of the type-of-work catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeOfWork {
    pub key: Option<String>,
    pub name: Option<String>,
}

impl TypeOfWork {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            name: Some(name.to_string()),
        }
    }
}
