//! Backend variants and the lifecycle contract they share.

/// Connected-I/O mode backend.
pub mod connected_io;
/// No-op fallback backend.
pub mod empty;
/// External mode backend.
pub mod external;
/// `ModelBackend` trait, kinds, status, and shared cycle bookkeeping.
pub mod lifecycle;
/// Normal mode backend.
pub mod normal;
