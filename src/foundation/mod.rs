//! Crate-wide plumbing shared by the selector, the backends, and the host loop.

/// Error type and result alias.
pub mod error;
/// Subscriber setup for binaries.
pub mod logging;
