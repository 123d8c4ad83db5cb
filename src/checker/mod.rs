// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - http: Makes one HTTP HEAD request and turns the answer into a LinkStatus
// - strategy: Runs the check over every bookmark, concurrently or one by one
// - progress: The text progress bar shown while checking
//
// This file (mod.rs) is the module root - it exports the public API that
// the rest of the application uses.
// =============================================================================

mod http;
mod progress;
mod strategy;

#[cfg(test)]
mod test_server;

pub use http::LinkStatus;
pub use strategy::{CheckSettings, CheckStrategy, Checker};
