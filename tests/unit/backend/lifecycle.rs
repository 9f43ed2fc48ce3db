use super::*;

#[test]
fn kind_parses_aliases_and_round_trips_display() {
    for kind in BackendKind::ALL {
        assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
    }
    assert_eq!(
        " Connected_IO ".parse::<BackendKind>().unwrap(),
        BackendKind::ConnectedIo
    );
    assert_eq!("none".parse::<BackendKind>().unwrap(), BackendKind::Empty);
}

#[test]
fn kind_rejects_unknown_names() {
    let err = "simulate".parse::<BackendKind>().unwrap_err();
    assert!(matches!(err, BridgeError::UnknownMode(ref m) if m == "simulate"));
}

#[test]
fn kind_serializes_kebab_case() {
    let json = serde_json::to_string(&BackendKind::ConnectedIo).unwrap();
    assert_eq!(json, "\"connected-io\"");
    let back: BackendKind = serde_json::from_str("\"external\"").unwrap();
    assert_eq!(back, BackendKind::External);
}

#[test]
fn tracker_walks_init_update_reset() {
    let mut t = CycleTracker::new(BackendKind::Normal);
    assert_eq!(t.phase(), LifecyclePhase::Constructed);
    assert_eq!(t.status(), BackendStatus::Ready);

    t.on_init();
    assert_eq!(t.phase(), LifecyclePhase::Initialized);

    assert!(t.on_update());
    assert!(t.on_update());
    assert_eq!(t.steps(), 2);
    assert_eq!(t.status(), BackendStatus::Running);

    t.on_reset();
    assert_eq!(t.phase(), LifecyclePhase::Initialized);
    assert_eq!(t.steps(), 0);
    assert_eq!(t.resets(), 1);
    assert_eq!(t.status(), BackendStatus::Ready);
}

#[test]
fn update_before_init_faults_and_does_not_count() {
    let mut t = CycleTracker::new(BackendKind::External);
    assert!(!t.on_update());
    assert_eq!(t.steps(), 0);
    assert!(t.status().is_faulted());

    // No post-init state yet, so reset leaves the fault in place.
    t.on_reset();
    assert_eq!(t.resets(), 0);
    assert!(t.status().is_faulted());
}

#[test]
fn double_init_faults_until_reset() {
    let mut t = CycleTracker::new(BackendKind::ConnectedIo);
    t.on_init();
    t.on_init();
    match t.status() {
        BackendStatus::Faulted(msg) => assert!(msg.contains("initialized twice")),
        other => panic!("expected fault, got {other:?}"),
    }

    t.on_reset();
    assert_eq!(t.status(), BackendStatus::Ready);
}
