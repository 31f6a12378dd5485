//! Little Years - a terminal client for the grandparent portal
//!
//! Read-only view of the kids a viewer may see and their timelines. This
//! library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
