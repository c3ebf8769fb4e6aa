use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sticky categorical specialization biasing a player's fitness toward a
/// numeric pattern. Reassigned only with a small probability during mutation,
/// so lineages tend to stay specialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Niche {
    EvenBiased,
    OddBiased,
    Sequential,
    Generalist,
}

impl Niche {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Niche::EvenBiased,
            1 => Niche::OddBiased,
            2 => Niche::Sequential,
            _ => Niche::Generalist,
        }
    }
}

/// Bonus contribution of a player's niche for one round.
///
/// The generalist bonus is intentionally small so the population drifts
/// toward specialization instead of genericism.
pub fn niche_bonus(niche: Niche, drawn: &[u32], predicted: &[u32]) -> f64 {
    match niche {
        Niche::EvenBiased => 0.8 * count_parity(drawn, 0) + 0.5 * count_parity(predicted, 0),
        Niche::OddBiased => 0.8 * count_parity(drawn, 1) + 0.5 * count_parity(predicted, 1),
        Niche::Sequential => {
            1.2 * consecutive_triples(drawn) + 0.8 * consecutive_triples(predicted)
        }
        Niche::Generalist => 0.3,
    }
}

fn count_parity(numbers: &[u32], parity: u32) -> f64 {
    numbers.iter().filter(|n| *n % 2 == parity).count() as f64
}

/// Count of positions i in the sorted sequence where sorted[i]+1 and
/// sorted[i]+2 both follow immediately.
fn consecutive_triples(numbers: &[u32]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(3)
        .filter(|w| w[1] == w[0] + 1 && w[2] == w[0] + 2)
        .count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_biased_bonus() {
        // 2 even in draw, 1 even in prediction
        let bonus = niche_bonus(Niche::EvenBiased, &[2, 4, 5], &[3, 6, 7]);
        assert!((bonus - (0.8 * 2.0 + 0.5 * 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_odd_biased_bonus() {
        let bonus = niche_bonus(Niche::OddBiased, &[2, 4, 5], &[3, 6, 7]);
        assert!((bonus - (0.8 * 1.0 + 0.5 * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_sequential_counts_overlapping_triples() {
        // 1,2,3,4 contains two overlapping triples; order must not matter.
        let bonus = niche_bonus(Niche::Sequential, &[4, 1, 3, 2], &[10, 20, 30]);
        assert!((bonus - 1.2 * 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_generalist_flat() {
        assert_eq!(niche_bonus(Niche::Generalist, &[1, 2, 3], &[4, 5, 6]), 0.3);
    }
}
