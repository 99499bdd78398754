//! Core domain types
//!
//! These types are shared between the reducer (pure derivation) and the
//! dashboard service (storage and scheduling).

pub mod build;
pub mod display;
pub mod pipeline;
