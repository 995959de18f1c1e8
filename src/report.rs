//! Human-readable report rendering.
//!
//! Formatting convention: race times use 3 decimal places, wall-clock
//! durations use 6. The exact labels and column widths are presentation
//! only; tests assert on the numeric formatting, not the prose.

use std::io::{self, Write};

use crate::evaluate::crossing_time;
use crate::harness::{HarnessReport, RaceObserver, Repetition};
use crate::{Scenario, MAX_TIME};

/// Display name used when no racer finished.
const NO_WINNER: &str = "none";

/// Observer that prints one block per repetition to stdout.
///
/// Each call takes the stdout lock for the whole block, so lines from
/// concurrent repetitions never interleave mid-block. With `show_track`
/// set it also dumps the track and a per-racer results table, matching
/// the verbose sequential output.
pub struct ConsoleObserver {
    scenario: Scenario,
    show_track: bool,
}

impl ConsoleObserver {
    /// Winner/time/duration blocks only.
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            show_track: false,
        }
    }

    /// Full blocks including the track dump and per-racer table.
    pub fn with_track_dump(scenario: Scenario) -> Self {
        Self {
            scenario,
            show_track: true,
        }
    }
}

impl RaceObserver for ConsoleObserver {
    fn on_repetition(&self, repetition: &Repetition) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // Output errors on stdout are not recoverable mid-run; drop them.
        let _ = if self.show_track {
            render_sequential_block(&mut out, &self.scenario, repetition)
        } else {
            render_repetition_block(&mut out, repetition)
        };
    }
}

/// Render the short per-repetition block: winner, winning time, duration.
pub fn render_repetition_block(w: &mut impl Write, repetition: &Repetition) -> io::Result<()> {
    writeln!(w, "\n--- Repetition {} ---", repetition.index + 1)?;
    writeln!(
        w,
        "Winner: {}",
        repetition.result.winner.as_deref().unwrap_or(NO_WINNER)
    )?;
    if repetition.result.winner.is_some() {
        writeln!(w, "Winner time: {:.3} sec", repetition.result.best_time)?;
    } else {
        writeln!(w, "Nobody finished the race (check speeds > 0).")?;
    }
    writeln!(
        w,
        "Repetition wall time: {:.6} seconds",
        repetition.duration.as_secs_f64()
    )
}

/// Render the verbose per-repetition block used by the sequential variant:
/// track dump, per-racer results table, then the winner and duration.
pub fn render_sequential_block(
    w: &mut impl Write,
    scenario: &Scenario,
    repetition: &Repetition,
) -> io::Result<()> {
    writeln!(w, "\n--- Repetition {} ---", repetition.index + 1)?;

    write!(
        w,
        "Track of {} cells (0=empty, 1=toy): ",
        scenario.track.len()
    )?;
    for &has_toy in scenario.track.cells() {
        write!(w, "{} ", if has_toy { 1 } else { 0 })?;
    }
    writeln!(w, "\n\nResults:")?;
    writeln!(
        w,
        "{:<10} {:<12} {:<12} {:<12}",
        "Racer", "Speed(c/s)", "Delay(sec)", "Time(sec)"
    )?;

    for racer in &scenario.racers {
        let time = crossing_time(racer, &scenario.track);
        let time_col = if time == MAX_TIME {
            format!("{:<12}", "never")
        } else {
            format!("{time:<12.3}")
        };
        writeln!(
            w,
            "{:<10} {:<12.3} {:<12.3} {}",
            racer.name, racer.speed, racer.obstacle_delay, time_col
        )?;
    }

    match &repetition.result.winner {
        Some(winner) => {
            writeln!(w, "\nWinner: {winner}")?;
            writeln!(w, "Winner time: {:.3} sec", repetition.result.best_time)?;
        }
        None => writeln!(w, "\nNobody finished the race (check speeds > 0).")?,
    }
    writeln!(
        w,
        "Repetition wall time: {:.6} seconds",
        repetition.duration.as_secs_f64()
    )
}

/// Render the chronological replay of all recorded durations plus the
/// grand total line.
pub fn render_replay(w: &mut impl Write, report: &HarnessReport) -> io::Result<()> {
    writeln!(w, "\n===== INDIVIDUAL TIMING REPLAY =====")?;
    for repetition in &report.repetitions {
        writeln!(
            w,
            "Repetition {}: {:.6} seconds",
            repetition.index + 1,
            repetition.duration.as_secs_f64()
        )?;
    }

    writeln!(
        w,
        "\nTotal time for all {} repetitions: {:.6} seconds",
        report.repetitions.len(),
        report.total.as_secs_f64()
    )
}
