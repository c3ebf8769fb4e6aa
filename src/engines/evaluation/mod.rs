pub mod evaluator;
pub mod niche;
pub mod reward;

pub use evaluator::{apply_outcome, random_baseline_matches, score_prediction, RoundOutcome};
pub use niche::{niche_bonus, Niche};
pub use reward::reward;
