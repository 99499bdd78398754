//! Build domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a single build of a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    /// Build is queued but has not been scheduled
    Pending,

    /// Build is running
    Started,

    /// Build finished successfully
    Succeeded,

    /// Build finished and a task failed
    Failed,

    /// Build could not complete because of an infrastructure or config error
    Errored,

    /// Build was aborted by a user
    Aborted,

    /// Any status label this version does not know about
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    /// Whether the build has finished and its result is final
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BuildStatus::Succeeded | BuildStatus::Failed | BuildStatus::Errored | BuildStatus::Aborted
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildStatus::Pending => "pending",
            BuildStatus::Started => "started",
            BuildStatus::Succeeded => "succeeded",
            BuildStatus::Failed => "failed",
            BuildStatus::Errored => "errored",
            BuildStatus::Aborted => "aborted",
            BuildStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed status of a build
///
/// Outcomes are appended to a pipeline's history in the order they are
/// observed. A build moving from `started` to `succeeded` shows up as two
/// outcomes with the same job and build name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub id: Uuid,

    /// Job the build belongs to
    pub job: String,

    /// Build name within the job (usually a counter, e.g. "1")
    pub name: String,

    pub status: BuildStatus,

    /// When this status was observed
    pub at: DateTime<Utc>,
}

impl BuildOutcome {
    pub fn new(
        job: impl Into<String>,
        name: impl Into<String>,
        status: BuildStatus,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job: job.into(),
            name: name.into(),
            status,
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(BuildStatus::Succeeded.is_terminal());
        assert!(BuildStatus::Failed.is_terminal());
        assert!(BuildStatus::Errored.is_terminal());
        assert!(BuildStatus::Aborted.is_terminal());
        assert!(!BuildStatus::Pending.is_terminal());
        assert!(!BuildStatus::Started.is_terminal());
        assert!(!BuildStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_unknown_label_deserializes() {
        let status: BuildStatus = serde_json::from_str("\"exploded\"").unwrap();
        assert_eq!(status, BuildStatus::Unknown);

        let status: BuildStatus = serde_json::from_str("\"errored\"").unwrap();
        assert_eq!(status, BuildStatus::Errored);
    }

    #[test]
    fn test_display_matches_wire_name() {
        let json = serde_json::to_string(&BuildStatus::Aborted).unwrap();
        assert_eq!(json, format!("\"{}\"", BuildStatus::Aborted));
    }
}
