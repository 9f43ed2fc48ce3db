/// Crate-wide result alias.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors raised while configuring, selecting, or driving a backend.
///
/// The lifecycle operations on [`crate::ModelBackend`] never return these; they surface from the
/// selector, the config layer, and the host loop.
#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("ambiguous mode markers: {markers:?} are set at once")]
    AmbiguousMarkers { markers: Vec<&'static str> },

    #[error("unknown backend mode: {0}")]
    UnknownMode(String),

    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BridgeError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unknown_mode(msg: impl Into<String>) -> Self {
        Self::UnknownMode(msg.into())
    }

    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
