//! Dashboard state scenarios: one pipeline driven through builds, pauses and
//! aborts, checked against what the dashboard renders.

mod common;

use common::{PIPELINE, TestContext};
use lumen_core::domain::build::BuildStatus;
use lumen_core::domain::pipeline::PipelineState;

#[tokio::test]
async fn shows_pipelines_with_no_finished_builds_in_grey() {
    let ctx = TestContext::new().await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.pipeline, PIPELINE);
    assert_eq!(pipeline.status_label, "pending");
    assert_eq!(pipeline.color_class, "no-finished-builds");
    assert_eq!(pipeline.color, "#ecf0f1");
}

#[tokio::test]
async fn running_build_alone_is_still_pending() {
    let mut ctx = TestContext::new().await;
    ctx.start_job("running").await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.state, PipelineState::NoFinishedBuilds);
    assert_eq!(pipeline.jobs[0].status, BuildStatus::Started);
}

#[tokio::test]
async fn shows_paused_pipelines_in_blue() {
    let ctx = TestContext::new().await;
    ctx.pause().await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.status_label, "paused");
    assert_eq!(pipeline.color_class, "paused");
    assert_eq!(pipeline.color, "#3498db");
}

#[tokio::test]
async fn unpausing_restores_build_state() {
    let mut ctx = TestContext::new().await;
    ctx.trigger_job("failing", BuildStatus::Failed).await;
    ctx.pause().await;
    assert_eq!(ctx.dashboard_pipeline().await.state, PipelineState::Paused);

    ctx.unpause().await;
    assert_eq!(ctx.dashboard_pipeline().await.state, PipelineState::HasFailed);
}

#[tokio::test]
async fn shows_pipelines_with_only_passing_builds_in_green() {
    let mut ctx = TestContext::new().await;
    ctx.trigger_job("passing", BuildStatus::Succeeded).await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.color_class, "all-passing");
    assert_eq!(pipeline.color, "#11c560");
}

#[tokio::test]
async fn shows_pipelines_with_any_failed_builds_in_red() {
    let mut ctx = TestContext::new().await;
    ctx.trigger_job("passing", BuildStatus::Succeeded).await;
    ctx.trigger_job("failing", BuildStatus::Failed).await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.color_class, "has-failed");
    assert_eq!(pipeline.color, "#ed4b35");
}

#[tokio::test]
async fn a_later_pass_does_not_clear_a_failure() {
    let mut ctx = TestContext::new().await;
    ctx.trigger_job("failing", BuildStatus::Failed).await;
    ctx.trigger_job("passing", BuildStatus::Succeeded).await;

    assert_eq!(ctx.dashboard_pipeline().await.color_class, "has-failed");
}

#[tokio::test]
async fn shows_pipelines_with_any_errored_builds_in_orange() {
    let mut ctx = TestContext::new().await;
    ctx.trigger_job("passing", BuildStatus::Succeeded).await;
    ctx.trigger_job("erroring", BuildStatus::Errored).await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.color_class, "has-errored");
    assert_eq!(pipeline.color, "#f5a623");
}

#[tokio::test]
async fn shows_pipelines_with_any_aborted_builds_in_brown() {
    let mut ctx = TestContext::new().await;
    ctx.trigger_job("passing", BuildStatus::Succeeded).await;
    let build = ctx.start_job("running").await;
    ctx.abort_build("running", &build).await;

    let pipeline = ctx.dashboard_pipeline().await;
    assert_eq!(pipeline.color_class, "has-aborted");
    assert_eq!(pipeline.color, "#8b572a");
}

#[tokio::test]
async fn shows_time_since_last_state_change() {
    let mut ctx = TestContext::new().await;

    ctx.trigger_job("passing", BuildStatus::Succeeded).await;
    ctx.wait(5);
    let first = ctx.dashboard_pipeline().await;
    assert_eq!(first.color_class, "all-passing");

    ctx.trigger_job("passing", BuildStatus::Succeeded).await;
    ctx.wait(5);
    let second = ctx.dashboard_pipeline().await;
    assert!(second.elapsed_seconds >= first.elapsed_seconds);

    ctx.trigger_job("failing", BuildStatus::Failed).await;
    ctx.wait(5);
    let third = ctx.dashboard_pipeline().await;
    assert_eq!(third.color_class, "has-failed");
    assert!(third.elapsed_seconds < second.elapsed_seconds);
    assert_eq!(third.footer, format!("{}s", third.elapsed_seconds));
}

#[tokio::test]
async fn links_to_specific_builds() {
    let mut ctx = TestContext::new().await;
    let build = ctx.trigger_job("passing", BuildStatus::Succeeded).await;

    let pipeline = ctx.dashboard_pipeline().await;
    let node = pipeline
        .jobs
        .iter()
        .find(|j| j.job == "passing")
        .expect("passing job node");

    assert_eq!(node.build, build);
    assert_eq!(node.status, BuildStatus::Succeeded);
    assert_eq!(
        node.href,
        format!(
            "/teams/{}/pipelines/{}/jobs/passing/builds/1",
            ctx.team, PIPELINE
        )
    );
}
