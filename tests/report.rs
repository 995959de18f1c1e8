//! Tests for report rendering

use std::time::Duration;

use crawlrace::{
    render_replay, render_sequential_block, run_repetitions, NoopObserver, RaceResult, Repetition,
    Scenario,
};

fn winning_repetition(index: usize) -> Repetition {
    Repetition {
        index,
        result: RaceResult {
            winner: Some("Luis".to_string()),
            best_time: 12.0,
        },
        duration: Duration::from_micros(2500),
    }
}

#[test]
fn test_sequential_block_dumps_track_and_table() {
    let mut out = Vec::new();
    render_sequential_block(&mut out, &Scenario::default(), &winning_repetition(0)).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("--- Repetition 1 ---"));
    assert!(text.contains("Track of 7 cells"));
    assert!(text.contains("0 0 0 1 0 0 1"));
    assert!(text.contains("Racer"));
    // Per-racer times, 3 decimal places
    assert!(text.contains("18.000"));
    assert!(text.contains("12.000"));
    assert!(text.contains("14.667"));
    assert!(text.contains("Winner: Luis"));
}

#[test]
fn test_sequential_block_marks_non_finishers() {
    let scenario = Scenario::new(
        vec![crawlrace::Racer::new("stopped", 0.0, 1.0)],
        crawlrace::Track::from_pattern("01").unwrap(),
    )
    .unwrap();
    let repetition = Repetition {
        index: 0,
        result: RaceResult::no_winner(),
        duration: Duration::ZERO,
    };

    let mut out = Vec::new();
    render_sequential_block(&mut out, &scenario, &repetition).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("never"));
    assert!(text.contains("Nobody finished"));
}

#[test]
fn test_replay_lists_every_duration_in_order() {
    let report = run_repetitions(&Scenario::default(), 5, &NoopObserver);

    let mut out = Vec::new();
    render_replay(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();

    for i in 1..=5 {
        assert!(text.contains(&format!("Repetition {i}: ")));
    }
    assert!(text.contains("Total time for all 5 repetitions:"));
}

#[test]
fn test_durations_use_six_decimal_places() {
    let mut repetition = winning_repetition(0);
    repetition.duration = Duration::from_nanos(1_234_567);

    let report = crawlrace::HarnessReport {
        repetitions: vec![repetition],
        total: Duration::from_millis(42),
    };

    let mut out = Vec::new();
    render_replay(&mut out, &report).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("0.001235 seconds")); // rounded to 6 places
    assert!(text.contains("0.042000 seconds"));
}
