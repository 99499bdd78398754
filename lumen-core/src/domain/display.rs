//! Display descriptor types
//!
//! What the rendering layer receives for each pipeline. Nothing here knows how
//! it gets painted.

use serde::{Deserialize, Serialize};

use crate::domain::build::BuildStatus;
use crate::domain::pipeline::PipelineState;

/// Rendered view of one pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    pub pipeline: String,
    pub team: String,
    pub public: bool,
    pub state: PipelineState,
    pub color_class: String,
    pub color: String,
    pub status_label: String,

    /// Seconds since the state last changed
    pub elapsed_seconds: u64,

    /// Human-readable form of `elapsed_seconds`
    pub footer: String,
    pub jobs: Vec<JobNode>,
}

/// Latest build of one job, linked to its build page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobNode {
    pub job: String,
    pub build: String,
    pub status: BuildStatus,
    pub href: String,
}

/// Path of a build page
pub fn build_href(team: &str, pipeline: &str, job: &str, build: &str) -> String {
    format!("/teams/{team}/pipelines/{pipeline}/jobs/{job}/builds/{build}")
}

/// Formats elapsed seconds with the two most significant units
///
/// `45s`, `3m 12s`, `2h 5m`, `4d 3h`.
pub fn format_elapsed(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    if seconds >= DAY {
        format!("{}d {}h", seconds / DAY, (seconds % DAY) / HOUR)
    } else if seconds >= HOUR {
        format!("{}h {}m", seconds / HOUR, (seconds % HOUR) / MINUTE)
    } else if seconds >= MINUTE {
        format!("{}m {}s", seconds / MINUTE, seconds % MINUTE)
    } else {
        format!("{seconds}s")
    }
}
