//! Data Transfer Objects
//!
//! Inbound requests and events accepted by the dashboard service.

pub mod pipeline;
