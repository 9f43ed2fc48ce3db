use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BridgeError, BridgeResult};

/// Lifecycle contract every model backend satisfies.
///
/// A host drives a backend through `init` once, `update` once per control cycle, and `reset`
/// whenever it needs the post-`init` state back. None of the three can fail from the host's point
/// of view; a backend that hits trouble records it and reports it through [`ModelBackend::status`].
///
/// Backends are owned through a [`BackendHandle`], and dropping the handle runs the concrete
/// backend's teardown.
pub trait ModelBackend: Send {
    /// One-time setup. Called exactly once, before the first `update`.
    fn init(&mut self);

    /// One cycle of backend work. Must not reallocate backend state.
    fn update(&mut self);

    /// Return to the post-`init` state. May be called any number of times.
    fn reset(&mut self);

    /// Which variant this is.
    fn kind(&self) -> BackendKind;

    /// Side channel for failures inside the lifecycle operations.
    fn status(&self) -> BackendStatus {
        BackendStatus::Ready
    }
}

/// Owning handle to a backend. Exactly one owner; dropping it destroys the backend.
pub type BackendHandle = Box<dyn ModelBackend>;

/// The closed set of backend variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// No-op fallback used when no mode marker is set.
    Empty,
    /// External mode: the model is tuned and monitored from an outside tool.
    External,
    /// Normal mode: the generated model runs standalone.
    Normal,
    /// Connected-I/O mode: model I/O is routed through a connected host.
    ConnectedIo,
}

impl BackendKind {
    /// Every kind, default last.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::External,
        BackendKind::Normal,
        BackendKind::ConnectedIo,
        BackendKind::Empty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Empty => "empty",
            BackendKind::External => "external",
            BackendKind::Normal => "normal",
            BackendKind::ConnectedIo => "connected-io",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> BridgeResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "none" => Ok(BackendKind::Empty),
            "external" | "ext" => Ok(BackendKind::External),
            "normal" => Ok(BackendKind::Normal),
            "connected-io" | "connectedio" | "connected_io" => Ok(BackendKind::ConnectedIo),
            other => Err(BridgeError::unknown_mode(other.to_string())),
        }
    }
}

/// Health reported by [`ModelBackend::status`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendStatus {
    /// Constructed or initialized, no cycle run since the last reset.
    Ready,
    /// At least one `update` since `init` or the last `reset`.
    Running,
    /// Something went wrong inside a lifecycle call.
    Faulted(String),
}

impl BackendStatus {
    pub fn is_faulted(&self) -> bool {
        matches!(self, BackendStatus::Faulted(_))
    }
}

/// Where a tracked backend sits in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    Constructed,
    Initialized,
    Running,
}

/// Phase, step, and fault bookkeeping shared by the mode backends.
///
/// A fault raised after `init` is cleared by the next `reset`; a fault raised before `init` sticks
/// because there is no post-`init` state to return to.
#[derive(Debug)]
pub struct CycleTracker {
    kind: BackendKind,
    phase: LifecyclePhase,
    steps: u64,
    resets: u64,
    fault: Option<String>,
}

impl CycleTracker {
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            phase: LifecyclePhase::Constructed,
            steps: 0,
            resets: 0,
            fault: None,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Updates since `init` or the last `reset`.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn on_init(&mut self) {
        if self.phase != LifecyclePhase::Constructed {
            self.raise(format!("{} backend initialized twice", self.kind));
            return;
        }
        self.phase = LifecyclePhase::Initialized;
        tracing::debug!(kind = %self.kind, "backend initialized");
    }

    /// Returns whether the backend should run its cycle body.
    pub fn on_update(&mut self) -> bool {
        if self.phase == LifecyclePhase::Constructed {
            self.raise(format!("{} backend updated before init", self.kind));
            return false;
        }
        self.phase = LifecyclePhase::Running;
        self.steps += 1;
        tracing::trace!(kind = %self.kind, step = self.steps, "backend cycle");
        true
    }

    pub fn on_reset(&mut self) {
        if self.phase == LifecyclePhase::Constructed {
            tracing::trace!(kind = %self.kind, "reset before init ignored");
            return;
        }
        self.phase = LifecyclePhase::Initialized;
        self.steps = 0;
        self.resets += 1;
        self.fault = None;
        tracing::debug!(kind = %self.kind, resets = self.resets, "backend reset");
    }

    pub fn status(&self) -> BackendStatus {
        match (&self.fault, self.phase) {
            (Some(msg), _) => BackendStatus::Faulted(msg.clone()),
            (None, LifecyclePhase::Running) => BackendStatus::Running,
            (None, _) => BackendStatus::Ready,
        }
    }

    fn raise(&mut self, msg: String) {
        tracing::warn!(kind = %self.kind, "{msg}");
        self.fault = Some(msg);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backend/lifecycle.rs"]
mod tests;
