//! Attendance result

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const IS_SUCCESSFUL: &str = "isSuccessful";

/// Verdict of the contest service on an attendance request.
///
/// Serializes as one flat JSON object: `isSuccessful` plus any additional
/// flags the service reported (`isCsrfTokenValid`, `isAttendedContest`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResult {
    #[serde(rename = "isSuccessful")]
    pub is_successful: bool,
    #[serde(flatten)]
    flags: BTreeMap<String, bool>,
}

impl AttendanceResult {
    pub fn new(is_successful: bool) -> Self {
        Self {
            is_successful,
            flags: BTreeMap::new(),
        }
    }

    /// Attach an additional flag. `isSuccessful` sets the verdict itself,
    /// so the serialized object never carries the key twice.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        let name = name.into();
        if name == IS_SUCCESSFUL {
            self.is_successful = value;
        } else {
            self.flags.insert(name, value);
        }
        self
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        if name == IS_SUCCESSFUL {
            return Some(self.is_successful);
        }
        self.flags.get(name).copied()
    }
}
