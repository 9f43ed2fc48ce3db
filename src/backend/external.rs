use crate::backend::lifecycle::{
    BackendKind, BackendStatus, CycleTracker, LifecyclePhase, ModelBackend,
};

/// External-mode backend.
///
/// Stands in for generated code that is monitored and tuned from an outside tool while it runs.
/// Only lifecycle bookkeeping is performed here.
#[derive(Debug)]
pub struct ExternalModeBackend {
    cycles: CycleTracker,
}

impl ExternalModeBackend {
    pub fn new() -> Self {
        Self {
            cycles: CycleTracker::new(BackendKind::External),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.cycles.phase()
    }

    /// Updates since `init` or the last `reset`.
    pub fn steps(&self) -> u64 {
        self.cycles.steps()
    }

    pub fn resets(&self) -> u64 {
        self.cycles.resets()
    }
}

impl Default for ExternalModeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBackend for ExternalModeBackend {
    fn init(&mut self) {
        self.cycles.on_init();
    }

    fn update(&mut self) {
        self.cycles.on_update();
    }

    fn reset(&mut self) {
        self.cycles.on_reset();
    }

    fn kind(&self) -> BackendKind {
        BackendKind::External
    }

    fn status(&self) -> BackendStatus {
        self.cycles.status()
    }
}
