//! Core library for the `pulsecheck` CLI.
//!
//! The crate loads a list of HTTP endpoints, probes all of them concurrently
//! once per run, and presents the results either as a colorized report in
//! completion order or as a live table refreshed from a shared result store.
//! The primary user-facing interface is the `pulsecheck` binary.
mod app;
pub mod args;
pub mod config;
mod entry;
pub mod error;
pub mod probe;
mod shutdown;
mod system;
pub mod ui;

pub use entry::run;
