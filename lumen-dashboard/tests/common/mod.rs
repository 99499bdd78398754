//! Per-scenario test context
//!
//! Every scenario gets its own store, clock and team, so no state leaks
//! between tests.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use lumen_core::clock::{Clock, ManualClock};
use lumen_core::domain::build::BuildStatus;
use lumen_core::domain::display::DisplayDescriptor;
use lumen_core::dto::pipeline::{PipelineEvent, RegisterPipeline};
use lumen_dashboard::service::DashboardService;
use lumen_dashboard::store::SnapshotStore;
use std::collections::HashMap;
use std::sync::Arc;

pub const PIPELINE: &str = "some-pipeline";

pub struct TestContext {
    pub team: String,
    pub clock: Arc<ManualClock>,
    pub service: DashboardService,
    build_counters: HashMap<String, u32>,
}

impl TestContext {
    /// Fresh team with `some-pipeline` registered and unpaused
    pub async fn new() -> Self {
        let team = format!("team-{}", uuid::Uuid::new_v4().simple());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        let service = DashboardService::new(SnapshotStore::new(), clock.clone(), team.clone());

        service
            .register(RegisterPipeline {
                name: PIPELINE.to_string(),
                team: Some(team.clone()),
                public: false,
            })
            .await
            .expect("register pipeline");

        Self {
            team,
            clock,
            service,
            build_counters: HashMap::new(),
        }
    }

    pub fn wait(&self, seconds: i64) {
        self.clock.advance(Duration::seconds(seconds));
    }

    /// Starts a build of `job` without waiting for it. Returns the build name.
    pub async fn start_job(&mut self, job: &str) -> String {
        let counter = self.build_counters.entry(job.to_string()).or_insert(0);
        *counter += 1;
        let build = counter.to_string();

        self.send(job, &build, BuildStatus::Pending).await;
        self.send(job, &build, BuildStatus::Started).await;
        build
    }

    /// Runs a build of `job` to completion with the given result
    pub async fn trigger_job(&mut self, job: &str, result: BuildStatus) -> String {
        let build = self.start_job(job).await;
        self.wait(1);
        self.send(job, &build, result).await;
        build
    }

    pub async fn abort_build(&self, job: &str, build: &str) {
        self.send(job, build, BuildStatus::Aborted).await;
    }

    pub async fn pause(&self) {
        self.service
            .apply_event(PIPELINE, PipelineEvent::Pause)
            .await
            .expect("pause pipeline");
    }

    pub async fn unpause(&self) {
        self.service
            .apply_event(PIPELINE, PipelineEvent::Unpause)
            .await
            .expect("unpause pipeline");
    }

    /// What the dashboard shows for the pipeline right now
    pub async fn dashboard_pipeline(&self) -> DisplayDescriptor {
        self.service.describe(PIPELINE).await.expect("pipeline on dashboard")
    }

    async fn send(&self, job: &str, build: &str, status: BuildStatus) {
        self.service
            .apply_event(
                PIPELINE,
                PipelineEvent::Build {
                    job: job.to_string(),
                    build: build.to_string(),
                    status,
                    at: Some(self.clock.now()),
                },
            )
            .await
            .expect("apply build event");
    }
}
