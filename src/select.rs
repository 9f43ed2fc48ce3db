//! Backend selection.
//!
//! Build configuration sets at most one mode marker (Cargo features `external-mode`,
//! `normal-mode`, `connectedio-mode`). The markers are read into a plain [`ModeMarkers`] value and
//! resolved by an ordered decision list, so every variant is compiled into every build and the
//! decision itself is ordinary code:
//!
//! 1. `external` → [`BackendKind::External`]
//! 2. `normal` → [`BackendKind::Normal`]
//! 3. `connected_io` → [`BackendKind::ConnectedIo`]
//! 4. nothing set → [`BackendKind::Empty`]
//!
//! First match wins if a build ever sets more than one marker; that case is logged as a
//! misconfiguration and can be turned into a hard error with [`BridgeConfig::strict`].

use std::path::Path;

use anyhow::Context as _;

use crate::backend::connected_io::ConnectedIoBackend;
use crate::backend::empty::EmptyBackend;
use crate::backend::external::ExternalModeBackend;
use crate::backend::lifecycle::{BackendHandle, BackendKind};
use crate::backend::normal::NormalModeBackend;
use crate::foundation::error::{BridgeError, BridgeResult};

/// Build-time mode markers. A well-formed build sets at most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeMarkers {
    pub external: bool,
    pub normal: bool,
    pub connected_io: bool,
}

impl ModeMarkers {
    /// No markers: selects the no-op backend.
    pub const NONE: ModeMarkers = ModeMarkers {
        external: false,
        normal: false,
        connected_io: false,
    };

    /// Markers baked into this build by Cargo features.
    pub const fn from_build() -> Self {
        Self {
            external: cfg!(feature = "external-mode"),
            normal: cfg!(feature = "normal-mode"),
            connected_io: cfg!(feature = "connectedio-mode"),
        }
    }

    /// Exactly one marker set for `kind`; `Empty` yields [`ModeMarkers::NONE`].
    pub const fn only(kind: BackendKind) -> Self {
        match kind {
            BackendKind::External => Self {
                external: true,
                ..Self::NONE
            },
            BackendKind::Normal => Self {
                normal: true,
                ..Self::NONE
            },
            BackendKind::ConnectedIo => Self {
                connected_io: true,
                ..Self::NONE
            },
            BackendKind::Empty => Self::NONE,
        }
    }

    /// Names of the set markers, in precedence order.
    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.external, "external"),
            (self.normal, "normal"),
            (self.connected_io, "connected_io"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.active().len() > 1
    }

    /// Reject marker sets that need the precedence tie-break.
    pub fn validate(&self) -> BridgeResult<()> {
        let markers = self.active();
        if markers.len() > 1 {
            return Err(BridgeError::AmbiguousMarkers { markers });
        }
        Ok(())
    }
}

/// Resolve markers to a backend kind. First match wins.
pub fn select_kind(markers: &ModeMarkers) -> BackendKind {
    if markers.is_ambiguous() {
        tracing::warn!(
            markers = ?markers.active(),
            "more than one backend mode marker is set; using the first in precedence order"
        );
    }

    let kind = if markers.external {
        BackendKind::External
    } else if markers.normal {
        BackendKind::Normal
    } else if markers.connected_io {
        BackendKind::ConnectedIo
    } else {
        BackendKind::Empty
    };
    tracing::debug!(%kind, "selected backend");
    kind
}

/// Construct a fresh backend of the given kind. `init` is not called.
pub fn create_backend(kind: BackendKind) -> BackendHandle {
    match kind {
        BackendKind::External => Box::new(ExternalModeBackend::new()),
        BackendKind::Normal => Box::new(NormalModeBackend::new()),
        BackendKind::ConnectedIo => Box::new(ConnectedIoBackend::new()),
        BackendKind::Empty => Box::new(EmptyBackend::new()),
    }
}

/// Construct the backend chosen by this build's markers.
///
/// Every call returns a new, independent instance. The caller owns it and must call `init`.
pub fn create_instance() -> BackendHandle {
    create_instance_with(&ModeMarkers::from_build())
}

/// Construct the backend chosen by `markers`.
pub fn create_instance_with(markers: &ModeMarkers) -> BackendHandle {
    create_backend(select_kind(markers))
}

/// Runtime selection config, usually loaded from JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Defaults to the build markers when omitted.
    #[serde(default = "ModeMarkers::from_build")]
    pub markers: ModeMarkers,
    /// Fail on ambiguous markers instead of applying the precedence order.
    #[serde(default)]
    pub strict: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            markers: ModeMarkers::from_build(),
            strict: false,
        }
    }
}

impl BridgeConfig {
    pub fn from_json_str(s: &str) -> BridgeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read bridge config '{}'", path.display()))?;
        if text.trim().is_empty() {
            return Err(BridgeError::config(format!(
                "bridge config '{}' is empty",
                path.display()
            )));
        }
        Self::from_json_str(&text)
    }

    /// The kind this config selects, honoring `strict`.
    pub fn resolve(&self) -> BridgeResult<BackendKind> {
        if self.strict {
            self.markers.validate()?;
        }
        Ok(select_kind(&self.markers))
    }
}

/// Construct the backend a config selects.
pub fn create_from_config(cfg: &BridgeConfig) -> BridgeResult<BackendHandle> {
    Ok(create_backend(cfg.resolve()?))
}

#[cfg(test)]
#[path = "../tests/unit/select/select.rs"]
mod tests;
