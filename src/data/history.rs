use crate::config::GameConfig;
use crate::error::{DrawbiasError, Result};
use crate::model::{FeatureSource, RoundContext};
use std::collections::HashSet;

/// Check one draw against the game contract: exact cardinality, unique
/// numbers, all within `[1, number_range]`.
pub fn validate_draw(drawn: &[u32], game: &GameConfig) -> Result<()> {
    if drawn.len() != game.draw_size {
        return Err(DrawbiasError::DataSource(format!(
            "Draw has {} numbers, expected {}",
            drawn.len(),
            game.draw_size
        )));
    }
    let mut seen = HashSet::new();
    for &n in drawn {
        if n < 1 || n > game.number_range {
            return Err(DrawbiasError::DataSource(format!(
                "Number {} outside [1, {}]",
                n, game.number_range
            )));
        }
        if !seen.insert(n) {
            return Err(DrawbiasError::DataSource(format!(
                "Duplicate number {} in draw",
                n
            )));
        }
    }
    Ok(())
}

/// In-memory historical dataset: one draw plus its model input per row.
///
/// Wraps around indefinitely and reports the cycle boundary on the final row
/// of each pass, exactly once per pass.
pub struct DrawHistory {
    rows: Vec<(Vec<u32>, Vec<f64>)>,
    cursor: usize,
}

impl DrawHistory {
    pub fn new(rows: Vec<(Vec<u32>, Vec<f64>)>, game: &GameConfig) -> Result<Self> {
        if rows.is_empty() {
            return Err(DrawbiasError::DataSource("Draw history is empty".to_string()));
        }
        for (i, (drawn, _)) in rows.iter().enumerate() {
            validate_draw(drawn, game)
                .map_err(|e| DrawbiasError::DataSource(format!("Row {}: {}", i, e)))?;
        }
        Ok(Self { rows, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FeatureSource for DrawHistory {
    fn next_round(&mut self) -> Result<RoundContext> {
        let (drawn_numbers, model_input) = self.rows[self.cursor].clone();
        let cycle_boundary = self.cursor == self.rows.len() - 1;
        self.cursor = (self.cursor + 1) % self.rows.len();
        Ok(RoundContext {
            drawn_numbers,
            model_input,
            cycle_boundary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameConfig {
        GameConfig {
            number_range: 10,
            draw_size: 3,
            highlight_threshold: 3,
        }
    }

    fn rows() -> Vec<(Vec<u32>, Vec<f64>)> {
        vec![
            (vec![1, 2, 3], vec![0.1; 10]),
            (vec![4, 5, 6], vec![0.2; 10]),
            (vec![7, 8, 9], vec![0.3; 10]),
        ]
    }

    #[test]
    fn test_cycle_boundary_once_per_pass() {
        let mut history = DrawHistory::new(rows(), &game()).unwrap();
        for pass in 0..3 {
            let boundaries: Vec<bool> = (0..history.len())
                .map(|_| history.next_round().unwrap().cycle_boundary)
                .collect();
            assert_eq!(boundaries, vec![false, false, true], "pass {}", pass);
        }
    }

    #[test]
    fn test_wraps_back_to_first_draw() {
        let mut history = DrawHistory::new(rows(), &game()).unwrap();
        for _ in 0..3 {
            history.next_round().unwrap();
        }
        assert_eq!(history.next_round().unwrap().drawn_numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_bad_rows() {
        let game = game();
        // Wrong cardinality
        assert!(DrawHistory::new(vec![(vec![1, 2], vec![])], &game).is_err());
        // Duplicate
        assert!(DrawHistory::new(vec![(vec![1, 1, 2], vec![])], &game).is_err());
        // Out of range
        assert!(DrawHistory::new(vec![(vec![0, 1, 2], vec![])], &game).is_err());
        assert!(DrawHistory::new(vec![(vec![9, 10, 11], vec![])], &game).is_err());
        // Empty dataset
        assert!(DrawHistory::new(vec![], &game).is_err());
    }
}
