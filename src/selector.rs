//! Winner selection across racers.
//!
//! Every racer's crossing time is evaluated and the strict minimum wins;
//! ties keep the racer that was evaluated first. The parallel variant fans
//! the evaluations out as concurrent tasks, joins them, and performs the
//! min-reduction over the joined `(racer, time)` pairs in the calling
//! thread — no shared best-so-far register and no lock, so the tie-break
//! is exactly as deterministic as the sequential path.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::evaluate::crossing_time;
#[cfg(feature = "parallel")]
use crate::evaluate::crossing_time_parallel;
use crate::{RaceResult, Racer, Track};

/// Evaluate all racers sequentially and pick the winner.
///
/// Returns [`RaceResult::no_winner`] when no racer has positive speed; the
/// caller must treat that as a normal outcome.
///
/// # Example
/// ```
/// use crawlrace::{select_winner, Scenario};
///
/// let scenario = Scenario::default();
/// let result = select_winner(&scenario.racers, &scenario.track);
/// assert_eq!(result.winner.as_deref(), Some("Luis"));
/// ```
pub fn select_winner(racers: &[Racer], track: &Track) -> RaceResult {
    pick_best(
        racers
            .iter()
            .map(|racer| (racer, crossing_time(racer, track))),
    )
}

/// Parallel variant of [`select_winner`].
///
/// Racers are evaluated as concurrently spawned tasks (each evaluation
/// itself a parallel reduction over the track cells), joined, and reduced
/// in evaluation order. Produces the same winner and best time as the
/// sequential variant for any input, including ties.
#[cfg(feature = "parallel")]
pub fn select_winner_parallel(racers: &[Racer], track: &Track) -> RaceResult {
    let times: Vec<(&Racer, f64)> = racers
        .par_iter()
        .map(|racer| (racer, crossing_time_parallel(racer, track)))
        .collect();

    pick_best(times.into_iter())
}

/// Min-reduction with strict `<`: the earliest-evaluated racer keeps a tie.
fn pick_best<'a>(times: impl Iterator<Item = (&'a Racer, f64)>) -> RaceResult {
    let mut best = RaceResult::no_winner();

    for (racer, time) in times {
        if time < best.best_time {
            best.best_time = time;
            best.winner = Some(racer.name.clone());
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nobody_finishes_without_positive_speed() {
        let racers = vec![Racer::new("A", 0.0, 1.0), Racer::new("B", -1.0, 1.0)];
        let track = Track::from_pattern("101").unwrap();

        let result = select_winner(&racers, &track);
        assert_eq!(result, RaceResult::no_winner());
    }

    #[test]
    fn tie_keeps_first_evaluated() {
        let racers = vec![Racer::new("First", 1.0, 0.0), Racer::new("Second", 1.0, 0.0)];
        let track = Track::from_pattern("000").unwrap();

        let result = select_winner(&racers, &track);
        assert_eq!(result.winner.as_deref(), Some("First"));
    }
}
