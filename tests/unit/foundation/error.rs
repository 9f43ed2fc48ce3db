use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(BridgeError::config("x").to_string().contains("config error:"));
    assert!(
        BridgeError::unknown_mode("x")
            .to_string()
            .contains("unknown backend mode:")
    );
    assert!(
        BridgeError::lifecycle("x")
            .to_string()
            .contains("lifecycle error:")
    );
    assert!(
        BridgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn ambiguous_markers_lists_every_marker() {
    let err = BridgeError::AmbiguousMarkers {
        markers: vec!["external", "normal"],
    };
    let msg = err.to_string();
    assert!(msg.contains("external"));
    assert!(msg.contains("normal"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BridgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: BridgeError = json_err.into();
    assert!(matches!(err, BridgeError::Serde(_)));
}
