//! Lumen Dashboard
//!
//! Keeps one snapshot per pipeline, re-derives what the dashboard shows on a
//! fixed interval, and serves it over HTTP.
//!
//! Architecture:
//! - Configuration: settings from environment or defaults
//! - Store: in-memory snapshots, single writer / many readers
//! - Service: applies events, validation, visibility
//! - Refresher: scheduled re-evaluation publishing the latest board
//! - API: axum handlers

pub mod api;
pub mod config;
pub mod refresher;
pub mod service;
pub mod store;
