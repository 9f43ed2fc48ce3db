use crate::backend::lifecycle::{
    BackendKind, BackendStatus, CycleTracker, LifecyclePhase, ModelBackend,
};

/// Normal-mode backend: generated code running standalone inside the host loop.
#[derive(Debug)]
pub struct NormalModeBackend {
    cycles: CycleTracker,
}

impl NormalModeBackend {
    pub fn new() -> Self {
        Self {
            cycles: CycleTracker::new(BackendKind::Normal),
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

impl Default for NormalModeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBackend for NormalModeBackend {
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
        BackendKind::Normal
    }

    fn status(&self) -> BackendStatus {
        self.cycles.status()
    }
}
