//! Pipeline DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::build::BuildStatus;

/// Request to register a pipeline before any event arrives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPipeline {
    pub name: String,

    /// Owning team, defaults to the service's default team
    #[serde(default)]
    pub team: Option<String>,

    #[serde(default)]
    pub public: bool,
}

/// A status change observed for a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PipelineEvent {
    /// A build of one of the pipeline's jobs changed status
    Build {
        job: String,
        build: String,
        status: BuildStatus,

        /// When the status was observed, defaults to receive time
        #[serde(default)]
        at: Option<DateTime<Utc>>,
    },
    Pause,
    Unpause,
}
