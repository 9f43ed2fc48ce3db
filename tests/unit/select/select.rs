use super::*;

#[test]
fn precedence_table_for_single_markers() {
    assert_eq!(select_kind(&ModeMarkers::NONE), BackendKind::Empty);
    for kind in BackendKind::ALL {
        assert_eq!(select_kind(&ModeMarkers::only(kind)), kind);
    }
}

#[test]
fn ambiguous_markers_resolve_first_match_wins() {
    let all = ModeMarkers {
        external: true,
        normal: true,
        connected_io: true,
    };
    assert_eq!(select_kind(&all), BackendKind::External);

    let normal_and_io = ModeMarkers {
        normal: true,
        connected_io: true,
        ..ModeMarkers::NONE
    };
    assert_eq!(select_kind(&normal_and_io), BackendKind::Normal);

    let external_and_io = ModeMarkers {
        external: true,
        connected_io: true,
        ..ModeMarkers::NONE
    };
    assert_eq!(select_kind(&external_and_io), BackendKind::External);
}

#[test]
fn active_lists_markers_in_precedence_order() {
    let m = ModeMarkers {
        external: false,
        normal: true,
        connected_io: true,
    };
    assert_eq!(m.active(), vec!["normal", "connected_io"]);
    assert!(m.is_ambiguous());
    assert!(ModeMarkers::NONE.active().is_empty());
}

#[test]
fn validate_rejects_only_ambiguous_sets() {
    assert!(ModeMarkers::NONE.validate().is_ok());
    assert!(ModeMarkers::only(BackendKind::Normal).validate().is_ok());

    let err = ModeMarkers {
        external: true,
        normal: true,
        connected_io: false,
    }
    .validate()
    .unwrap_err();
    match err {
        BridgeError::AmbiguousMarkers { markers } => {
            assert_eq!(markers, vec!["external", "normal"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn create_backend_matches_requested_kind() {
    for kind in BackendKind::ALL {
        assert_eq!(create_backend(kind).kind(), kind);
    }
}

#[test]
fn create_instance_follows_build_markers() {
    let expected = select_kind(&ModeMarkers::from_build());
    assert_eq!(create_instance().kind(), expected);
}

#[test]
fn config_defaults_to_build_markers() {
    let cfg = BridgeConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg.markers, ModeMarkers::from_build());
    assert!(!cfg.strict);
    assert_eq!(cfg, BridgeConfig::default());
}

#[test]
fn config_markers_drive_selection() {
    let cfg = BridgeConfig::from_json_str(r#"{ "markers": { "connected_io": true } }"#).unwrap();
    assert_eq!(cfg.resolve().unwrap(), BackendKind::ConnectedIo);
    assert_eq!(
        create_from_config(&cfg).unwrap().kind(),
        BackendKind::ConnectedIo
    );
}

#[test]
fn strict_config_refuses_ambiguity() {
    let json = r#"{ "markers": { "external": true, "normal": true }, "strict": true }"#;
    let cfg = BridgeConfig::from_json_str(json).unwrap();
    assert!(matches!(
        create_from_config(&cfg),
        Err(BridgeError::AmbiguousMarkers { .. })
    ));

    let lenient = BridgeConfig {
        strict: false,
        ..cfg
    };
    assert_eq!(lenient.resolve().unwrap(), BackendKind::External);
}

#[test]
fn config_rejects_unknown_fields() {
    let err = BridgeConfig::from_json_str(r#"{ "markers": { "simulate": true } }"#).unwrap_err();
    assert!(matches!(err, BridgeError::Serde(_)));
}

#[test]
fn config_from_missing_path_reports_the_path() {
    let err = BridgeConfig::from_path("target/does-not-exist/bridge.json").unwrap_err();
    assert!(matches!(err, BridgeError::Other(_)));
    assert!(err.to_string().contains("bridge.json"));
}

#[test]
fn empty_config_file_is_a_config_error() {
    let dir = std::path::PathBuf::from("target").join("select_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.json");
    std::fs::write(&path, "  \n").unwrap();

    let err = BridgeConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}
