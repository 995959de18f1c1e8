//! Crossing-time evaluation for a single racer.
//!
//! The cost of one cell is `1 / speed`, plus the racer's toy delay when the
//! cell holds a toy. The total crossing time is the plain sum over all cells,
//! which makes the parallel variant a true reduction: per-cell costs are
//! computed independently and combined with `+`, never accumulated into a
//! shared variable.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{Racer, Track};

/// Sentinel crossing time for a racer that can never finish.
///
/// Returned whenever `speed <= 0`; such a racer loses against any finisher
/// but is still a normal, comparable outcome.
pub const MAX_TIME: f64 = f64::MAX;

/// Compute the total crossing time for one racer.
///
/// Returns [`MAX_TIME`] immediately for non-positive speed, without looking
/// at the track. An empty track costs 0 seconds for any finisher. Pure
/// function of its inputs.
///
/// # Example
/// ```
/// use crawlrace::{crossing_time, Racer, Track};
///
/// let luis = Racer::new("Luis", 0.7, 1.0);
/// let track = Track::from_pattern("0001001").unwrap();
///
/// let time = crossing_time(&luis, &track);
/// assert!((time - 12.0).abs() < 1e-9); // 7 / 0.7 + 2 * 1.0
/// ```
pub fn crossing_time(racer: &Racer, track: &Track) -> f64 {
    if !racer.can_finish() {
        return MAX_TIME;
    }

    track
        .cells()
        .iter()
        .map(|&has_toy| cell_cost(racer, has_toy))
        .sum()
}

/// Parallel variant of [`crossing_time`]: the per-cell costs are computed
/// and summed with a rayon parallel reduction.
///
/// Agrees with the sequential variant on every input; for a sum of per-cell
/// costs the reduction order does not matter.
#[cfg(feature = "parallel")]
pub fn crossing_time_parallel(racer: &Racer, track: &Track) -> f64 {
    if !racer.can_finish() {
        return MAX_TIME;
    }

    track
        .cells()
        .par_iter()
        .map(|&has_toy| cell_cost(racer, has_toy))
        .sum()
}

/// Cost of traversing one cell.
#[inline]
fn cell_cost(racer: &Racer, has_toy: bool) -> f64 {
    let mut cost = 1.0 / racer.speed;
    if has_toy {
        cost += racer.obstacle_delay;
    }
    cost
}
