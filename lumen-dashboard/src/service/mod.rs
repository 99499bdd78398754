//! Service Module
//!
//! Business logic between the HTTP layer and the snapshot store.

pub mod dashboard;

pub use dashboard as dashboard_service;
pub use dashboard::{DashboardError, DashboardService};
