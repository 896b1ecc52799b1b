//! Dial-in number lookup results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{LOCAL_DIAL_IN_LABEL, TOLL_FREE_DIAL_IN_LABEL};

/// Bucket a dial-in record belongs to, decided by its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialInCategory {
    Local,
    TollFree,
}

impl DialInCategory {
    /// Exact, case-sensitive label match. Unknown labels have no bucket.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            LOCAL_DIAL_IN_LABEL => Some(Self::Local),
            TOLL_FREE_DIAL_IN_LABEL => Some(Self::TollFree),
            _ => None,
        }
    }
}

/// One dial-in number record.
///
/// The vendor schema for these records is loose; every leaf element is kept
/// in `fields` under its snake_case name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialInNumber {
    pub display_label: String,
    pub fields: BTreeMap<String, String>,
}

impl DialInNumber {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Dial-in numbers grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialInNumbers {
    pub local: Vec<DialInNumber>,
    pub toll_free: Vec<DialInNumber>,
}

impl DialInNumbers {
    /// Add a record to its bucket. Returns false when the label is unknown
    /// and the record was discarded.
    pub fn push(&mut self, number: DialInNumber) -> bool {
        match DialInCategory::from_label(&number.display_label) {
            Some(DialInCategory::Local) => self.local.push(number),
            Some(DialInCategory::TollFree) => self.toll_free.push(number),
            None => return false,
        }
        true
    }

    pub fn len(&self) -> usize {
        self.local.len() + self.toll_free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
