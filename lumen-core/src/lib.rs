//! Lumen Core
//!
//! Core types and the state reducer for the Lumen pipeline dashboard.
//!
//! This crate contains:
//! - Domain types: builds, pipeline snapshots, display descriptors
//! - DTOs: inbound events consumed by the dashboard service
//! - The reducer that turns a snapshot into what the dashboard shows

pub mod clock;
pub mod domain;
pub mod dto;
pub mod error;
pub mod reducer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use reducer::derive;
