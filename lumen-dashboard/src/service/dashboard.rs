//! Dashboard Service
//!
//! Applies pipeline events to snapshots and produces display descriptors.

use lumen_core::clock::Clock;
use lumen_core::domain::build::BuildOutcome;
use lumen_core::domain::display::DisplayDescriptor;
use lumen_core::domain::pipeline::PipelineSnapshot;
use lumen_core::dto::pipeline::{PipelineEvent, RegisterPipeline};
use lumen_core::error::{
    CoreError, NameKind, validate_name, validate_pipeline_name, validate_team_name,
};
use lumen_core::reducer;
use std::sync::Arc;
use thiserror::Error;

use crate::store::SnapshotStore;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Pipeline {0} not found")]
    NotFound(String),

    #[error("Pipeline {name} already belongs to team {team}")]
    Conflict { name: String, team: String },

    #[error("{0}")]
    Validation(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Clone)]
pub struct DashboardService {
    store: SnapshotStore,
    clock: Arc<dyn Clock>,
    default_team: String,
}

impl DashboardService {
    pub fn new(store: SnapshotStore, clock: Arc<dyn Clock>, default_team: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            default_team: default_team.into(),
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Registers a pipeline. Registering an existing pipeline under the same
    /// team only updates its public flag.
    pub async fn register(&self, req: RegisterPipeline) -> Result<DisplayDescriptor> {
        validate_pipeline_name(&req.name)?;
        let team = req.team.unwrap_or_else(|| self.default_team.clone());
        validate_team_name(&team)?;

        let now = self.clock.now();
        let clock = self.clock.as_ref();

        self.store
            .upsert_with(
                &req.name,
                || {
                    tracing::info!("Pipeline registered: {} (team {})", req.name, team);
                    PipelineSnapshot::new(req.name.clone(), team.clone(), now)
                },
                |snapshot| {
                    if snapshot.team() != team {
                        return Err(DashboardError::Conflict {
                            name: req.name.clone(),
                            team: snapshot.team().to_string(),
                        });
                    }
                    snapshot.set_public(req.public);
                    Ok(reducer::derive(snapshot, clock))
                },
            )
            .await
    }

    /// Applies one event and returns the freshly derived descriptor
    ///
    /// Transitions are timed by receive time; the event's own timestamp is
    /// kept in the build history, capped at receive time.
    pub async fn apply_event(&self, name: &str, event: PipelineEvent) -> Result<DisplayDescriptor> {
        validate_pipeline_name(name)?;
        if let PipelineEvent::Build { job, build, .. } = &event {
            validate_name(NameKind::Job, job)?;
            validate_name(NameKind::Build, build)?;
        }

        let now = self.clock.now();
        let clock = self.clock.as_ref();
        let default_team = self.default_team.clone();

        let (changed, descriptor) = self
            .store
            .upsert_with(
                name,
                || {
                    tracing::info!("First event for pipeline {}, assigning team {}", name, default_team);
                    PipelineSnapshot::new(name, default_team, now)
                },
                |snapshot| {
                    let changed = match event {
                        PipelineEvent::Build {
                            job,
                            build,
                            status,
                            at,
                        } => {
                            tracing::debug!("Pipeline {}: {}/{} is {}", name, job, build, status);
                            let at = at.map_or(now, |at| at.min(now));
                            snapshot.record_observed(BuildOutcome::new(job, build, status, at), now)
                        }
                        PipelineEvent::Pause => snapshot.set_paused(true, now),
                        PipelineEvent::Unpause => snapshot.set_paused(false, now),
                    };
                    (changed, reducer::derive(snapshot, clock))
                },
            )
            .await;

        if changed {
            tracing::info!("Pipeline {} is now {}", name, descriptor.state);
        }

        Ok(descriptor)
    }

    pub async fn describe(&self, name: &str) -> Result<DisplayDescriptor> {
        let snapshot = self
            .store
            .get(name)
            .await
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))?;

        Ok(reducer::derive(&snapshot, self.clock.as_ref()))
    }

    pub async fn remove(&self, name: &str) -> Result<()> {
        if !self.store.remove(name).await {
            return Err(DashboardError::NotFound(name.to_string()));
        }

        tracing::info!("Pipeline removed: {}", name);
        Ok(())
    }

    /// Derives every pipeline at the current clock reading
    pub async fn board(&self) -> Vec<DisplayDescriptor> {
        self.store.derive_all(self.clock.as_ref()).await
    }
}

/// Filters a board down to what a caller may see
///
/// A team sees its own pipelines plus public pipelines of other teams.
/// Without a team only public pipelines are visible.
pub fn visible_to(board: &[DisplayDescriptor], team: Option<&str>) -> Vec<DisplayDescriptor> {
    board
        .iter()
        .filter(|d| d.public || team.is_some_and(|t| t == d.team))
        .cloned()
        .collect()
}
