use crate::error::Result;

/// External predictive model: one probability/score per candidate number.
///
/// The core never trains or retries a model; failures propagate and the round
/// that triggered them leaves the population untouched. Implementations must
/// be safe to call from multiple threads (wrap a non-reentrant model behind a
/// lock or queue before handing it to the orchestrator) and should be
/// deterministic for a fixed input if reproducible runs are wanted.
pub trait Predictor: Sync {
    fn predict(&self, input: &[f64]) -> Result<Vec<f64>>;
}

/// Supplies one historical draw plus its model input per call.
///
/// Wrapping the underlying dataset is the source's responsibility; it must
/// report `cycle_boundary = true` exactly once per full pass, on the final
/// draw before wrapping back to the first one.
pub trait FeatureSource {
    fn next_round(&mut self) -> Result<RoundContext>;
}

/// One round's worth of external input.
#[derive(Debug, Clone)]
pub struct RoundContext {
    /// Unique numbers within `[1, number_range]`, cardinality `draw_size`.
    pub drawn_numbers: Vec<u32>,
    pub model_input: Vec<f64>,
    /// True when this draw is the last of a full pass over the dataset.
    pub cycle_boundary: bool,
}
