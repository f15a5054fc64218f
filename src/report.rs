//! Plain-text experiment reports.
//!
//! Each result type implements [`fmt::Display`] with its report layout;
//! [`Report::render`] produces the text. Where a report goes, and what it
//! is called, is up to the caller.

use crate::roulette::RouletteResult;
use crate::tournament::TournamentResult;
use crate::truncation::TruncationResult;
use std::fmt;
use std::time::Duration;

/// Renders a result as a human-readable report.
pub trait Report: fmt::Display {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Report for RouletteResult {}
impl Report for TruncationResult {}
impl Report for TournamentResult {}

/// `mm:ss:mmm`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{seconds:02}:{millis:03}")
}

fn or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for RouletteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stochastic (roulette wheel) selection with replacement.")?;
        writeln!(f, "Elapsed: {} (mm:ss:ms).", format_elapsed(self.elapsed))?;
        writeln!(f, "Seed: {}.", self.seed)?;
        writeln!(f, "Selection cycles: {}.", self.cycles)?;
        writeln!(f, "Generations per cycle: {}.", self.generations)?;
        writeln!(
            f,
            "Cycles affected by genetic drift: {} ({:.2}%).",
            self.drifted_cycles,
            self.drift_ratio * 100.0
        )?;
        let summary = self.drift.as_ref();
        writeln!(
            f,
            "Mean first drifted generation: {}.",
            or_na(summary.map(|d| d.mean))
        )?;
        writeln!(
            f,
            "Median first drifted generation: {}.",
            or_na(summary.map(|d| d.median))
        )?;
        match summary {
            Some(d) => writeln!(f, "Earliest drifted generation: {}.", d.earliest)?,
            None => writeln!(f, "Earliest drifted generation: n/a.")?,
        }
        writeln!(f)?;
        writeln!(f, "Mean attribute balance per generation:")?;
        for b in &self.balance {
            writeln!(
                f,
                "Generation {}: majority {:.3}, minority {:.3}.",
                b.generation, b.majority, b.minority
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for TruncationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.with_replacement {
            "with replacement"
        } else {
            "without replacement"
        };
        writeln!(f, "Truncation selection, stochastic sampling {mode}.")?;
        writeln!(f, "Threshold: {}.", self.threshold)?;
        writeln!(f, "Elapsed: {} (mm:ss:ms).", format_elapsed(self.elapsed))?;
        writeln!(f, "Seed: {}.", self.seed)?;
        writeln!(f, "Selection cycles: {}.", self.cycles)?;
        writeln!(f, "Generations per cycle: {}.", self.generations)?;
        writeln!(f, "Mean material loss: {:.4}.", self.material_loss)?;
        writeln!(f, "Mean selection loss per member: {:.4}.", self.selection_loss)?;
        writeln!(f)?;
        writeln!(f, "Survival per initial member:")?;
        for r in &self.survivors {
            writeln!(
                f,
                "Member {} (fitness {}) survived {:.2}% of cycles.",
                r.index,
                r.fitness,
                r.survival_ratio(self.cycles) * 100.0
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for TournamentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "q-tournament selection with replacement, take-over monitoring.")?;
        writeln!(f, "Elapsed: {} (mm:ss:ms).", format_elapsed(self.elapsed))?;
        writeln!(f, "q: {}.", self.q)?;
        writeln!(f, "Seed: {}.", self.seed)?;
        writeln!(f, "Selection cycles: {}.", self.cycles)?;
        writeln!(f, "Generations per cycle: {}.", self.generations)?;
        writeln!(f)?;
        match &self.shape {
            Some(shape) => writeln!(f, "Population: {}.", shape.describe(self.population_size))?,
            None => writeln!(
                f,
                "Population: {} members, best fitness {}.",
                self.population_size, self.top_fitness
            )?,
        }
        writeln!(f)?;
        writeln!(f, "Full take-overs: {}.", self.successes)?;
        writeln!(f, "Partial take-overs: {}.", self.partials)?;
        writeln!(f, "Failures: {}.", self.failures)?;
        writeln!(f, "Mean first generation per milestone (full take-overs only):")?;
        match &self.milestones {
            Some(m) => {
                for (percent, generation) in m.iter() {
                    writeln!(f, "  {percent:>3}%: {generation:.3}")?;
                }
            }
            None => writeln!(f, "  n/a (no full take-over)")?,
        }
        Ok(())
    }
}
