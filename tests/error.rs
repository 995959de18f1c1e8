//! Tests for error module

use crawlrace::{RaceError, Racer, Scenario, Track};

#[test]
fn test_invalid_track_cell() {
    let err = Track::from_pattern("0012001").unwrap_err();
    assert!(matches!(
        err,
        RaceError::InvalidTrackCell { index: 2, cell: '2' }
    ));
    assert!(err.to_string().contains("'2'"));
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn test_invalid_racer_specs() {
    for spec in ["", ":0.5:1.0", "Ana", "Ana:fast:1.0", "Ana:0.5:soon", "Ana:0.5", "Ana:inf:1.0"] {
        let err = Racer::parse(spec).unwrap_err();
        assert!(
            matches!(err, RaceError::InvalidRacerSpec { .. }),
            "{spec:?} gave {err:?}"
        );
    }
}

#[test]
fn test_racer_spec_error_names_the_spec() {
    let err = Racer::parse("Ana:fast:1.0").unwrap_err();
    assert!(err.to_string().contains("Ana:fast:1.0"));
    assert!(err.to_string().contains("not a number"));
}

#[test]
fn test_empty_scenario() {
    let err = Scenario::new(vec![], Track::from_pattern("01").unwrap()).unwrap_err();
    assert!(matches!(err, RaceError::EmptyScenario));
}

#[test]
fn test_missing_scenario_file_is_io_error() {
    let err = Scenario::from_json_file(std::path::Path::new("/no/such/scenario.json")).unwrap_err();
    assert!(matches!(err, RaceError::Io(_)));
}

#[test]
fn test_malformed_scenario_file_is_json_error() {
    let path = std::env::temp_dir().join("crawlrace-malformed-scenario.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Scenario::from_json_file(&path).unwrap_err();
    assert!(matches!(err, RaceError::Json(_)));

    let _ = std::fs::remove_file(&path);
}
