//! `careercraft` library crate.
//!
//! The binary (`careercraft`) is a thin wrapper around this library so that:
//!
//! - the wizard and validation rules are testable without spawning processes
//! - the TUI and the plain CLI share one set of catalogs and state types
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod matching;
pub mod observability;
pub mod report;
pub mod tui;
pub mod wizard;
