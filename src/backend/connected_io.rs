use crate::backend::lifecycle::{
    BackendKind, BackendStatus, CycleTracker, LifecyclePhase, ModelBackend,
};

/// Connected-I/O backend.
///
/// Stands in for generated code whose inputs and outputs are serviced by a connected host.
/// Only lifecycle bookkeeping is performed here.
#[derive(Debug)]
pub struct ConnectedIoBackend {
    cycles: CycleTracker,
}

impl ConnectedIoBackend {
    pub fn new() -> Self {
        Self {
            cycles: CycleTracker::new(BackendKind::ConnectedIo),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.cycles.phase()
    }

    pub fn steps(&self) -> u64 {
        self.cycles.steps()
    }

    pub fn resets(&self) -> u64 {
        self.cycles.resets()
    }
}

impl Default for ConnectedIoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBackend for ConnectedIoBackend {
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
        BackendKind::ConnectedIo
    }

    fn status(&self) -> BackendStatus {
        self.cycles.status()
    }
}

impl Drop for ConnectedIoBackend {
    fn drop(&mut self) {
        tracing::debug!(steps = self.cycles.steps(), "connected-io backend released");
    }
}
