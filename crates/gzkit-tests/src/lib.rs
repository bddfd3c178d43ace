//! gzkit integration testing support
//!
//! Shared helpers for the integration tests in `tests/`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
///
/// Deterministic data generators and temporary file helpers shared by the
/// integration tests.
pub mod test_utils;
