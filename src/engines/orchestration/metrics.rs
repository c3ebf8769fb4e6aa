use serde::Serialize;

/// Per-round summary emitted after every evaluated round. The core computes
/// it but never persists it; sinks own all logging and telemetry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub round_index: usize,
    /// Sum of match counts across the whole population.
    pub total_matches: usize,
    /// Best single-player match count this round.
    pub best_matches: usize,
    /// Match count of a uniformly random pick, for comparison only.
    pub random_baseline_matches: usize,
    pub champion_id: u64,
    pub champion_score: f64,
    pub population_avg_fitness: f64,
    pub cycle_boundary: bool,
}

pub trait MetricsSink: Send {
    fn on_round_complete(&mut self, summary: &RoundSummary);
}

pub struct ConsoleMetricsSink;

impl MetricsSink for ConsoleMetricsSink {
    fn on_round_complete(&mut self, summary: &RoundSummary) {
        println!(
            "Round {}: matches = {} (best {}, baseline {}), champion #{} score = {:.1}, avg fitness = {:.3}{}",
            summary.round_index + 1,
            summary.total_matches,
            summary.best_matches,
            summary.random_baseline_matches,
            summary.champion_id,
            summary.champion_score,
            summary.population_avg_fitness,
            if summary.cycle_boundary { " [cycle]" } else { "" },
        );
    }
}

// For driving an external UI or logger from another thread
pub struct ChannelMetricsSink {
    sender: std::sync::mpsc::Sender<RoundSummary>,
}

impl ChannelMetricsSink {
    pub fn new(sender: std::sync::mpsc::Sender<RoundSummary>) -> Self {
        Self { sender }
    }
}

impl MetricsSink for ChannelMetricsSink {
    fn on_round_complete(&mut self, summary: &RoundSummary) {
        let _ = self.sender.send(summary.clone());
    }
}

/// No-op sink for headless runs and tests.
pub struct NullMetricsSink;

impl MetricsSink for NullMetricsSink {
    fn on_round_complete(&mut self, _summary: &RoundSummary) {}
}
