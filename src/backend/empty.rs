use crate::backend::lifecycle::{BackendKind, ModelBackend};

/// Fallback backend selected when no mode marker is set.
///
/// Every lifecycle call is a no-op, so a host always has something safe to drive. Neither `Clone`
/// nor `Copy`: an instance can be moved to a new owner but never duplicated.
///
/// ```compile_fail
/// use modelbridge::EmptyBackend;
///
/// let a = EmptyBackend::new();
/// let b = a.clone();
/// ```
///
/// ```compile_fail
/// use modelbridge::EmptyBackend;
///
/// let a = EmptyBackend::new();
/// let b = a;
/// let c = a;
/// ```
#[derive(Debug, Default)]
pub struct EmptyBackend {
    _unique: (),
}

impl EmptyBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ModelBackend for EmptyBackend {
    fn init(&mut self) {}

    fn update(&mut self) {}

    fn reset(&mut self) {}

    fn kind(&self) -> BackendKind {
        BackendKind::Empty
    }
}

#[cfg(test)]
#[path = "../../tests/unit/backend/empty.rs"]
mod tests;
