//! HTTP front end for the league standings engine.
//!
//! Serves group tables and tournament top scorers computed from an in-memory
//! snapshot that can be replaced at runtime.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
