//! Repetition harness with wall-clock timing.
//!
//! Runs the full race-selection computation a fixed number of times,
//! measuring each repetition with a monotonic clock and the grand total
//! around the whole run. The parallel variant runs the repetition loop
//! itself as data-parallel work; each repetition then re-runs the
//! internally-parallel selector, giving three nested levels of parallelism
//! (repetitions, racers, track cells) on rayon's work-stealing pool.
//!
//! Every repetition owns exactly one slot of the timing log, so the log
//! needs no synchronization; only the observer has to be thread-safe.

use std::time::{Duration, Instant};

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::selector::select_winner;
#[cfg(feature = "parallel")]
use crate::selector::select_winner_parallel;
use crate::{RaceResult, Scenario};

/// One timed repetition: the race outcome plus how long it took to compute.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    /// Repetition index, 0-based
    pub index: usize,
    /// Outcome of this repetition's race
    pub result: RaceResult,
    /// Wall-clock time this repetition's selection took
    pub duration: Duration,
}

/// Everything the harness recorded: one entry per repetition, in index
/// order, plus the grand total measured around the whole run.
#[derive(Debug, Clone)]
pub struct HarnessReport {
    /// Timed outcomes, index `i` holds repetition `i`
    pub repetitions: Vec<Repetition>,
    /// Wall-clock time for the whole run, including harness overhead
    pub total: Duration,
}

impl HarnessReport {
    /// Sum of the individual repetition durations.
    ///
    /// Under sequential execution `total` is at least this sum (measurement
    /// overhead only adds); under parallel execution the sum usually
    /// exceeds `total`, which is the point of the exercise.
    pub fn summed_durations(&self) -> Duration {
        self.repetitions.iter().map(|r| r.duration).sum()
    }
}

/// Observer notified as repetitions complete.
///
/// The parallel harness calls this from rayon worker threads, so
/// implementations must be `Send + Sync` and serialize their own output.
/// Completion order across concurrent repetitions is unspecified.
pub trait RaceObserver: Send + Sync {
    /// Called exactly once per repetition, immediately after it finishes.
    fn on_repetition(&self, repetition: &Repetition);
}

/// Observer that discards everything. Used when only the final report
/// matters.
pub struct NoopObserver;

impl RaceObserver for NoopObserver {
    fn on_repetition(&self, _repetition: &Repetition) {}
}

/// Run the scenario `repetitions` times, strictly one after another.
///
/// # Example
/// ```
/// use crawlrace::{run_repetitions, NoopObserver, Scenario};
///
/// let report = run_repetitions(&Scenario::default(), 10, &NoopObserver);
/// assert_eq!(report.repetitions.len(), 10);
/// assert!(report.total >= report.summed_durations());
/// ```
pub fn run_repetitions(
    scenario: &Scenario,
    repetitions: usize,
    observer: &dyn RaceObserver,
) -> HarnessReport {
    debug!(
        "sequential run: {} repetitions, {} racers, {} cells",
        repetitions,
        scenario.racers.len(),
        scenario.track.len()
    );

    let run_start = Instant::now();

    let mut log = Vec::with_capacity(repetitions);
    for index in 0..repetitions {
        let start = Instant::now();
        let result = select_winner(&scenario.racers, &scenario.track);
        let repetition = Repetition {
            index,
            result,
            duration: start.elapsed(),
        };

        observer.on_repetition(&repetition);
        log.push(repetition);
    }

    HarnessReport {
        repetitions: log,
        total: run_start.elapsed(),
    }
}

/// Run the scenario `repetitions` times as a data-parallel loop.
///
/// Each repetition independently re-runs the parallel selector, which in
/// turn fans out across racers and track cells. Results come back in index
/// order regardless of completion order.
#[cfg(feature = "parallel")]
pub fn run_repetitions_parallel(
    scenario: &Scenario,
    repetitions: usize,
    observer: &dyn RaceObserver,
) -> HarnessReport {
    debug!(
        "parallel run: {} repetitions on {} rayon threads",
        repetitions,
        rayon::current_num_threads()
    );

    let run_start = Instant::now();

    let log: Vec<Repetition> = (0..repetitions)
        .into_par_iter()
        .map(|index| {
            let start = Instant::now();
            let result = select_winner_parallel(&scenario.racers, &scenario.track);
            let repetition = Repetition {
                index,
                result,
                duration: start.elapsed(),
            };

            observer.on_repetition(&repetition);
            repetition
        })
        .collect();

    HarnessReport {
        repetitions: log,
        total: run_start.elapsed(),
    }
}
