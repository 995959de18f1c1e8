//! # Crawlrace
//!
//! Toy baby crawl-race simulator.
//!
//! A fixed set of racers crosses a discrete track of cells. Some cells hold a
//! toy; a racer that reaches one stops to play for a fixed delay. Crossing
//! time is `cells / speed` plus the accumulated toy delays, the fastest racer
//! wins, and the whole race is repeated many times under wall-clock timing.
//!
//! This library provides:
//! - Crossing-time evaluation for a single racer over a track
//! - Winner selection across racers (strict minimum, stable tie-break)
//! - A repetition harness that times every repetition and the grand total
//! - Sequential baselines plus nested-parallel variants of all of the above
//!
//! ## Features
//!
//! - **`parallel`** (default) - Nested parallel execution with rayon:
//!   repetitions, racers within a repetition, and track cells within one
//!   evaluation all run as data-parallel work.
//!
//! ## Quick Start
//!
//! ```rust
//! use crawlrace::{select_winner, Scenario};
//!
//! let scenario = Scenario::default(); // Ana, Luis and Mia on a 7-cell track
//! let result = select_winner(&scenario.racers, &scenario.track);
//!
//! assert_eq!(result.winner.as_deref(), Some("Luis"));
//! assert!((result.best_time - 12.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{RaceError, Result};

// Crossing-time evaluation for a single racer
pub mod evaluate;
#[cfg(feature = "parallel")]
pub use evaluate::crossing_time_parallel;
pub use evaluate::{crossing_time, MAX_TIME};

// Winner selection across racers
pub mod selector;
#[cfg(feature = "parallel")]
pub use selector::select_winner_parallel;
pub use selector::select_winner;

// Repetition harness with wall-clock timing
pub mod harness;
#[cfg(feature = "parallel")]
pub use harness::run_repetitions_parallel;
pub use harness::{run_repetitions, HarnessReport, NoopObserver, RaceObserver, Repetition};

// Human-readable report rendering
pub mod report;
pub use report::{render_replay, render_sequential_block, ConsoleObserver};

/// Number of repetitions in the standard timing demonstration.
pub const REPETITIONS: usize = 100_000;

// ============================================================================
// Core Types
// ============================================================================

/// A racer with a constant crawl speed and a fixed per-toy delay.
///
/// # Example
/// ```
/// use crawlrace::Racer;
/// let ana = Racer::new("Ana", 0.5, 2.0);
/// assert!(ana.can_finish());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Racer {
    /// Display name
    pub name: String,
    /// Crawl speed in cells per second. Must be positive to finish.
    pub speed: f64,
    /// Seconds lost at every cell that holds a toy
    pub obstacle_delay: f64,
}

impl Racer {
    /// Create a new racer.
    pub fn new(name: &str, speed: f64, obstacle_delay: f64) -> Self {
        Self {
            name: name.to_string(),
            speed,
            obstacle_delay,
        }
    }

    /// Whether this racer can finish the race at all.
    ///
    /// A non-positive speed means the racer never reaches the end; the
    /// evaluator reports [`MAX_TIME`] for it instead of an error.
    pub fn can_finish(&self) -> bool {
        self.speed > 0.0
    }

    /// Parse an inline racer spec of the form `NAME:SPEED:DELAY`.
    ///
    /// # Example
    /// ```
    /// use crawlrace::Racer;
    /// let luis = Racer::parse("Luis:0.7:1.0").unwrap();
    /// assert_eq!(luis.name, "Luis");
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = |reason: &str| RaceError::InvalidRacerSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = spec.splitn(3, ':');
        let name = parts
            .next()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| invalid("missing name"))?;
        let speed = parts
            .next()
            .ok_or_else(|| invalid("missing speed"))?
            .parse::<f64>()
            .map_err(|_| invalid("speed is not a number"))?;
        let obstacle_delay = parts
            .next()
            .ok_or_else(|| invalid("missing delay"))?
            .parse::<f64>()
            .map_err(|_| invalid("delay is not a number"))?;

        if !speed.is_finite() || !obstacle_delay.is_finite() {
            return Err(invalid("values must be finite"));
        }

        Ok(Self::new(name, speed, obstacle_delay))
    }
}

/// An ordered track of cells, each optionally holding a toy.
///
/// Immutable once built; shared read-only across all racer evaluations and
/// repetitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    cells: Vec<bool>,
}

impl Track {
    /// Build a track from explicit cell markers (`true` = toy present).
    pub fn new(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    /// Parse a track pattern such as `"0001001"` (`0` = empty, `1` = toy).
    ///
    /// # Example
    /// ```
    /// use crawlrace::Track;
    /// let track = Track::from_pattern("0001001").unwrap();
    /// assert_eq!(track.len(), 7);
    /// assert_eq!(track.obstacle_count(), 2);
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        pattern
            .chars()
            .enumerate()
            .map(|(index, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(RaceError::InvalidTrackCell { index, cell: c }),
            })
            .collect::<Result<Vec<bool>>>()
            .map(Self::new)
    }

    /// Cell markers, in crossing order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of cells in the track.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the track has no cells. An empty track costs 0 seconds for
    /// any racer that can finish.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells holding a toy.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Outcome of one full race across all racers.
///
/// `winner` is `None` when no racer can finish (every speed non-positive);
/// callers must treat that as a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Name of the fastest racer, or `None` if nobody finished
    pub winner: Option<String>,
    /// Crossing time of the winner, or [`MAX_TIME`] if nobody finished
    pub best_time: f64,
}

impl RaceResult {
    /// The "nobody finished" outcome.
    pub fn no_winner() -> Self {
        Self {
            winner: None,
            best_time: MAX_TIME,
        }
    }
}

/// A complete race setup: the racers and the track they cross.
///
/// The default scenario is the fixed demonstration setup: Ana, Luis and Mia
/// on a 7-cell track with toys at cells 3 and 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub racers: Vec<Racer>,
    pub track: Track,
}

impl Scenario {
    /// Create a scenario, rejecting setups with no racers or unnamed racers.
    pub fn new(racers: Vec<Racer>, track: Track) -> Result<Self> {
        if racers.is_empty() {
            return Err(RaceError::EmptyScenario);
        }
        if let Some(racer) = racers.iter().find(|r| r.name.is_empty()) {
            return Err(RaceError::InvalidRacerSpec {
                spec: format!("{racer:?}"),
                reason: "racer name is empty".to_string(),
            });
        }
        Ok(Self { racers, track })
    }

    /// Load a scenario from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&content)?;
        // Re-validate; serde accepts structurally valid but empty setups
        Self::new(scenario.racers, scenario.track)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            racers: vec![
                Racer::new("Ana", 0.5, 2.0),
                Racer::new("Luis", 0.7, 1.0),
                Racer::new("Mia", 0.6, 1.5),
            ],
            track: Track::new(vec![false, false, false, true, false, false, true]),
        }
    }
}
