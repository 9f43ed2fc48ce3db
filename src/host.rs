//! Host-side driver for a backend handle.

use crate::backend::lifecycle::{BackendHandle, BackendStatus, ModelBackend};
use crate::foundation::error::{BridgeError, BridgeResult};

/// Options for [`ControlLoop`].
#[derive(Clone, Debug, Default)]
pub struct LoopOpts {
    /// Reset the backend after every N ticks. `None` or `Some(0)` never resets on its own.
    pub reset_every: Option<u64>,
}

/// Counters accumulated by a [`ControlLoop`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoopStats {
    /// `update` calls issued.
    pub ticks: u64,
    /// `reset` calls issued, scheduled or explicit.
    pub resets: u64,
}

/// Owns a backend and drives it `init` → `update`* → `reset`, enforcing call order.
///
/// The backend itself never reports errors through its lifecycle calls; the loop turns a
/// [`BackendStatus::Faulted`] into a [`BridgeError::Lifecycle`] after each tick.
pub struct ControlLoop {
    backend: BackendHandle,
    opts: LoopOpts,
    started: bool,
    since_reset: u64,
    stats: LoopStats,
}

impl ControlLoop {
    pub fn new(backend: BackendHandle, opts: LoopOpts) -> Self {
        Self {
            backend,
            opts,
            started: false,
            since_reset: 0,
            stats: LoopStats::default(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn backend(&self) -> &dyn ModelBackend {
        self.backend.as_ref()
    }

    /// Give the backend back to the caller.
    pub fn into_backend(self) -> BackendHandle {
        self.backend
    }

    /// Call `init` on the backend. Allowed once.
    pub fn start(&mut self) -> BridgeResult<()> {
        if self.started {
            return Err(BridgeError::lifecycle("control loop already started"));
        }
        tracing::info!(kind = %self.backend.kind(), "starting control loop");
        self.backend.init();
        self.started = true;
        self.check_status()
    }

    /// Run one cycle.
    pub fn tick(&mut self) -> BridgeResult<()> {
        self.require_started("tick")?;
        self.backend.update();
        self.stats.ticks += 1;
        self.since_reset += 1;
        self.check_status()?;

        if let Some(n) = self.opts.reset_every.filter(|n| *n > 0)
            && self.since_reset >= n
        {
            self.reset()?;
        }
        Ok(())
    }

    /// Return the backend to its post-`init` state.
    pub fn reset(&mut self) -> BridgeResult<()> {
        self.require_started("reset")?;
        self.backend.reset();
        self.stats.resets += 1;
        self.since_reset = 0;
        tracing::debug!(resets = self.stats.resets, "backend reset");
        self.check_status()
    }

    /// Start if needed, then tick `cycles` times.
    #[tracing::instrument(skip(self), fields(kind = %self.backend.kind()))]
    pub fn run(&mut self, cycles: u64) -> BridgeResult<LoopStats> {
        if !self.started {
            self.start()?;
        }
        for _ in 0..cycles {
            self.tick()?;
        }
        tracing::info!(ticks = self.stats.ticks, resets = self.stats.resets, "run finished");
        Ok(self.stats)
    }

    fn require_started(&self, op: &str) -> BridgeResult<()> {
        if !self.started {
            return Err(BridgeError::lifecycle(format!(
                "{op} called before the control loop was started"
            )));
        }
        Ok(())
    }

    fn check_status(&self) -> BridgeResult<()> {
        match self.backend.status() {
            BackendStatus::Faulted(msg) => Err(BridgeError::lifecycle(format!(
                "{} backend faulted: {msg}",
                self.backend.kind()
            ))),
            BackendStatus::Ready | BackendStatus::Running => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/host/control_loop.rs"]
mod tests;
