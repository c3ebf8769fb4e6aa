use super::niche::{niche_bonus, Niche};
use super::reward::reward;
use crate::engines::generation::player::Player;
use rand::Rng;

/// Outcome of scoring one player's prediction against a draw.
#[derive(Debug, Clone, Copy)]
pub struct RoundOutcome {
    pub matches: usize,
    pub reward: f64,
    pub niche_bonus: f64,
}

/// Score a prediction against the drawn numbers. Pure: player state is not
/// touched, so this half can run in parallel across players.
pub fn score_prediction(niche: Niche, predicted: &[u32], drawn: &[u32]) -> RoundOutcome {
    let matches = predicted.iter().filter(|n| drawn.contains(n)).count();
    RoundOutcome {
        matches,
        reward: reward(matches),
        niche_bonus: niche_bonus(niche, drawn, predicted),
    }
}

/// Apply a scored outcome to the player: fitness is overwritten (matches plus
/// niche bonus, never accumulated), score accumulates the signed reward.
pub fn apply_outcome(player: &mut Player, predicted: Vec<u32>, outcome: &RoundOutcome) {
    player.fitness = outcome.matches as f64 + outcome.niche_bonus;
    player.score += outcome.reward;
    player.last_prediction = Some(predicted);
}

/// Match count of a uniformly random draw-sized pick from `[1, number_range]`.
///
/// Reporting-only metric: it must never feed back into any player's score or
/// fitness.
pub fn random_baseline_matches<R: Rng>(
    drawn: &[u32],
    draw_size: usize,
    number_range: u32,
    rng: &mut R,
) -> usize {
    let amount = draw_size.min(number_range as usize);
    rand::seq::index::sample(rng, number_range as usize, amount)
        .iter()
        .map(|i| i as u32 + 1)
        .filter(|n| drawn.contains(n))
        .count()
}
