//! modelbridge is a pluggable backend seam for generated model code.
//!
//! A host asks the selector for a backend once, then drives it through the lifecycle without
//! knowing which variant it got:
//!
//! ```
//! use modelbridge::{ModelBackend, create_instance};
//!
//! let mut backend = create_instance();
//! backend.init();
//! for _ in 0..100 {
//!     backend.update();
//! }
//! backend.reset();
//! assert!(!backend.status().is_faulted());
//! ```
//!
//! Which variant is built depends on the Cargo features `external-mode`, `normal-mode`, and
//! `connectedio-mode`; with none enabled the no-op [`EmptyBackend`] is used. See [`select`] for the
//! precedence rules and [`ControlLoop`] for a host driver that enforces call order.
#![forbid(unsafe_code)]

/// Backend variants and the lifecycle trait.
pub mod backend;
mod foundation;
/// Host control loop.
pub mod host;
pub mod select;

pub use crate::backend::connected_io::ConnectedIoBackend;
pub use crate::backend::empty::EmptyBackend;
pub use crate::backend::external::ExternalModeBackend;
pub use crate::backend::lifecycle::{
    BackendHandle, BackendKind, BackendStatus, CycleTracker, LifecyclePhase, ModelBackend,
};
pub use crate::backend::normal::NormalModeBackend;
pub use crate::foundation::error::{BridgeError, BridgeResult};
pub use crate::foundation::logging::init_tracing;
pub use crate::host::{ControlLoop, LoopOpts, LoopStats};
pub use crate::select::{
    BridgeConfig, ModeMarkers, create_backend, create_from_config, create_instance,
    create_instance_with, select_kind,
};
