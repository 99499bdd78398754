//! Dashboard state reducer
//!
//! Turns a [`PipelineSnapshot`] into the [`DisplayDescriptor`] the dashboard
//! renders. Pure: the only input besides the snapshot is the injected clock.

use crate::clock::Clock;
use crate::domain::display::{DisplayDescriptor, JobNode, build_href, format_elapsed};
use crate::domain::pipeline::PipelineSnapshot;

/// Derives the display descriptor for a snapshot at `clock.now()`
pub fn derive(snapshot: &PipelineSnapshot, clock: &dyn Clock) -> DisplayDescriptor {
    let state = snapshot.state();

    // Clamped so a lagging clock never renders negative time
    let elapsed_seconds = (clock.now() - snapshot.state_changed_at())
        .num_seconds()
        .max(0) as u64;

    let jobs = snapshot
        .latest_per_job()
        .into_iter()
        .map(|build| JobNode {
            job: build.job.clone(),
            build: build.name.clone(),
            status: build.status,
            href: build_href(snapshot.team(), snapshot.name(), &build.job, &build.name),
        })
        .collect();

    DisplayDescriptor {
        pipeline: snapshot.name().to_string(),
        team: snapshot.team().to_string(),
        public: snapshot.is_public(),
        state,
        color_class: state.css_class().to_string(),
        color: state.color().to_string(),
        status_label: state.status_label().to_string(),
        elapsed_seconds,
        footer: format_elapsed(elapsed_seconds),
        jobs,
    }
}
