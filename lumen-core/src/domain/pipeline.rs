//! Pipeline domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::build::{BuildOutcome, BuildStatus};

/// Health state shown for a pipeline on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineState {
    NoFinishedBuilds,
    Paused,
    AllPassing,
    HasFailed,
    HasErrored,
    HasAborted,
}

impl PipelineState {
    /// Evaluates the state from the pause flag and the full build history.
    ///
    /// Precedence, first match wins: paused, no finished builds, any aborted,
    /// any errored, any failed, all passing.
    pub fn evaluate(paused: bool, builds: &[BuildOutcome]) -> Self {
        if paused {
            return PipelineState::Paused;
        }

        let mut finished = false;
        let (mut aborted, mut errored, mut failed) = (false, false, false);

        for build in builds.iter().filter(|b| b.status.is_terminal()) {
            finished = true;
            match build.status {
                BuildStatus::Aborted => aborted = true,
                BuildStatus::Errored => errored = true,
                BuildStatus::Failed => failed = true,
                _ => {}
            }
        }

        if !finished {
            PipelineState::NoFinishedBuilds
        } else if aborted {
            PipelineState::HasAborted
        } else if errored {
            PipelineState::HasErrored
        } else if failed {
            PipelineState::HasFailed
        } else {
            PipelineState::AllPassing
        }
    }

    /// CSS class used by the rendering layer
    pub fn css_class(self) -> &'static str {
        match self {
            PipelineState::NoFinishedBuilds => "no-finished-builds",
            PipelineState::Paused => "paused",
            PipelineState::AllPassing => "all-passing",
            PipelineState::HasFailed => "has-failed",
            PipelineState::HasErrored => "has-errored",
            PipelineState::HasAborted => "has-aborted",
        }
    }

    /// Banner color from the dashboard palette
    pub fn color(self) -> &'static str {
        match self {
            PipelineState::NoFinishedBuilds => "#ecf0f1",
            PipelineState::Paused => "#3498db",
            PipelineState::AllPassing => "#11c560",
            PipelineState::HasFailed => "#ed4b35",
            PipelineState::HasErrored => "#f5a623",
            PipelineState::HasAborted => "#8b572a",
        }
    }

    /// Status text shown next to the pipeline name
    pub fn status_label(self) -> &'static str {
        match self {
            PipelineState::NoFinishedBuilds => "pending",
            PipelineState::Paused => "paused",
            PipelineState::AllPassing => "succeeded",
            PipelineState::HasFailed => "failed",
            PipelineState::HasErrored => "errored",
            PipelineState::HasAborted => "aborted",
        }
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Everything the dashboard knows about one pipeline
///
/// The derived state is kept in sync with the history on every mutation, and
/// `state_changed_at` only moves when the derived state takes a new value.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSnapshot {
    name: String,
    team: String,
    public: bool,
    paused: bool,
    builds: Vec<BuildOutcome>,
    state: PipelineState,
    state_changed_at: DateTime<Utc>,
}

impl PipelineSnapshot {
    /// Creates a snapshot for a pipeline observed for the first time
    pub fn new(name: impl Into<String>, team: impl Into<String>, observed_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            public: false,
            paused: false,
            builds: Vec::new(),
            state: PipelineState::NoFinishedBuilds,
            state_changed_at: observed_at,
        }
    }

    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Build history in execution order
    pub fn builds(&self) -> &[BuildOutcome] {
        &self.builds
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn state_changed_at(&self) -> DateTime<Utc> {
        self.state_changed_at
    }

    pub fn set_public(&mut self, public: bool) {
        self.public = public;
    }

    /// Appends a build outcome, timing any transition by the outcome's own
    /// timestamp. Returns true if the derived state changed.
    pub fn record(&mut self, outcome: BuildOutcome) -> bool {
        let at = outcome.at;
        self.record_observed(outcome, at)
    }

    /// Appends a build outcome, timing any transition by when it was
    /// observed rather than when the build reported it.
    /// Returns true if the derived state changed.
    pub fn record_observed(&mut self, outcome: BuildOutcome, observed_at: DateTime<Utc>) -> bool {
        self.builds.push(outcome);
        self.reevaluate(observed_at)
    }

    /// Pauses or unpauses the pipeline. Returns true if the derived state changed.
    pub fn set_paused(&mut self, paused: bool, at: DateTime<Utc>) -> bool {
        self.paused = paused;
        self.reevaluate(at)
    }

    /// Latest outcome per job, in the order jobs were first seen
    pub fn latest_per_job(&self) -> Vec<&BuildOutcome> {
        let mut latest: Vec<&BuildOutcome> = Vec::new();
        for build in &self.builds {
            match latest.iter_mut().find(|b| b.job == build.job) {
                Some(slot) => *slot = build,
                None => latest.push(build),
            }
        }
        latest
    }

    fn reevaluate(&mut self, at: DateTime<Utc>) -> bool {
        let next = PipelineState::evaluate(self.paused, &self.builds);
        if next == self.state {
            return false;
        }

        // Transitions never move backwards in time
        self.state = next;
        self.state_changed_at = at.max(self.state_changed_at);
        true
    }
}
