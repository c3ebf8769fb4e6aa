use super::traits::ConfigSection;
use crate::error::DrawbiasError;
use serde::{Deserialize, Serialize};

/// Parameters of the number game itself: candidate range, draw cardinality
/// and the telemetry threshold for exceptional rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Upper bound of the candidate range `[1, number_range]`.
    pub number_range: u32,
    /// How many numbers a draw (and every prediction) contains.
    pub draw_size: usize,
    /// Match count at or above which a round is logged as exceptional.
    pub highlight_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            number_range: 25,
            draw_size: 15,
            highlight_threshold: 13,
        }
    }
}

impl ConfigSection for GameConfig {
    fn section_name() -> &'static str {
        "game"
    }

    fn validate(&self) -> Result<(), DrawbiasError> {
        if self.draw_size == 0 {
            return Err(DrawbiasError::Configuration(
                "Draw size must be at least 1".to_string(),
            ));
        }
        if self.draw_size as u32 > self.number_range {
            return Err(DrawbiasError::Configuration(format!(
                "Draw size {} exceeds number range {}",
                self.draw_size, self.number_range
            )));
        }
        if self.highlight_threshold > self.draw_size {
            return Err(DrawbiasError::Configuration(
                "Highlight threshold cannot exceed draw size".to_string(),
            ));
        }
        Ok(())
    }
}
