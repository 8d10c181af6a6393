//! Plain-text rendering of wizard results and catalogs for the CLI.

pub mod format;

pub use format::*;
