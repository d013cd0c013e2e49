//! View selection types
//!
//! What the user has chosen to look at. Independent of task data and never
//! part of a task's identity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::task::{normalize, TaskStatus};
use crate::Error;

/// Which tab of the board is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    All,
    CompletedOnly,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::All
    }
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::CompletedOnly => "Completed",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "all" => Ok(Self::All),
            "completed" | "completedonly" | "done" => Ok(Self::CompletedOnly),
            _ => Err(Error::InvalidInput(format!(
                "unknown view '{}' (expected all or completed)",
                s
            ))),
        }
    }
}

/// Status dropdown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    All,
    Only(TaskStatus),
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl StatusFilter {
    /// Whether a task with `status` passes this filter
    pub fn admits(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }
}

// Serialized as `"All"` or the status itself, matching the dropdown values.
impl Serialize for StatusFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str("All"),
            Self::Only(status) => status.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize(s) == "all" {
            return Ok(Self::All);
        }
        s.parse::<TaskStatus>().map(Self::Only)
    }
}

/// The pair of (display mode, status filter) chosen by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSelection {
    pub mode: ViewMode,
    pub status_filter: StatusFilter,
}

impl ViewSelection {
    pub fn new(mode: ViewMode, status_filter: StatusFilter) -> Self {
        Self {
            mode,
            status_filter,
        }
    }

    /// Both constraints must pass
    pub fn admits(&self, status: TaskStatus) -> bool {
        let mode_ok = match self.mode {
            ViewMode::All => true,
            ViewMode::CompletedOnly => status == TaskStatus::Completed,
        };
        mode_ok && self.status_filter.admits(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_admits_everything() {
        let selection = ViewSelection::default();
        for status in TaskStatus::ALL {
            assert!(selection.admits(status));
        }
    }

    #[test]
    fn test_completed_only_and_filter_compose() {
        let selection = ViewSelection::new(
            ViewMode::CompletedOnly,
            StatusFilter::Only(TaskStatus::Pending),
        );
        for status in TaskStatus::ALL {
            assert!(!selection.admits(status));
        }

        let selection = ViewSelection::new(
            ViewMode::CompletedOnly,
            StatusFilter::Only(TaskStatus::Completed),
        );
        assert!(selection.admits(TaskStatus::Completed));
        assert!(!selection.admits(TaskStatus::InProgress));
    }

    #[test]
    fn test_parse_filter_and_mode() {
        assert_eq!("All".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "in-progress".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(TaskStatus::InProgress)
        );
        assert_eq!("completed".parse::<ViewMode>().unwrap(), ViewMode::CompletedOnly);
        assert!("archived".parse::<ViewMode>().is_err());
    }
}
