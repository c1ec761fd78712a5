//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Whole pipe pairs cleared.
    pub score: u32,
    /// Ticks survived.
    pub ticks: u64,
    /// Still alive when the tick cap was reached.
    pub timed_out: bool,
    /// Largest pipe list seen during the run.
    pub max_pipes_alive: usize,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_ticks_per_run: u64,

    pub avg_score: f64,
    pub best_score: u32,
    pub worst_score: u32,
    pub median_score: u32,
    pub avg_ticks: f64,
    pub max_pipes_alive: usize,

    /// score -> number of runs ending with it
    pub score_distribution: BTreeMap<u32, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_ticks_per_run: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let best_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let worst_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let median_score = {
            let mut sorted: Vec<u32> = runs.iter().map(|r| r.score).collect();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };
        let max_pipes_alive = runs.iter().map(|r| r.max_pipes_alive).max().unwrap_or(0);

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out,
            max_ticks_per_run,
            avg_score,
            best_score,
            worst_score,
            median_score,
            avg_ticks,
            max_pipes_alive,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} cut off at {} ticks\n\n",
            self.num_runs, self.runs_timed_out, self.max_ticks_per_run
        ));

        report.push_str("── SCORES ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:       {:.2}\n", self.avg_score));
        report.push_str(&format!("  Median Score:    {}\n", self.median_score));
        report.push_str(&format!("  Best Score:      {}\n", self.best_score));
        report.push_str(&format!("  Worst Score:     {}\n", self.worst_score));
        report.push_str(&format!(
            "  Avg Survival:    {:.0} ticks ({:.1}s)\n",
            self.avg_ticks,
            self.avg_ticks / 60.0
        ));
        report.push_str(&format!("  Peak Pipe Count: {}\n\n", self.max_pipes_alive));

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:4}: {:>5.1}% {}\n", score, pct, bar));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
