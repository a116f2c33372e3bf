//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - MemPro export fixtures written to temporary directories
//! - Assertion helpers for issue lists and reports

pub mod assertions;
pub mod fixtures;
