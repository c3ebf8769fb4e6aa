use super::player::{next_player_id, Player, Population};
use crate::error::{DrawbiasError, Result};
use rand::Rng;

/// Tracks the best-scoring player and drives cycle-boundary repopulation.
///
/// The champion is a reference into the population, recomputed after every
/// round, never an owning copy; cloning happens only when a full pass over
/// the historical draws completes.
#[derive(Debug, Default)]
pub struct ChampionTracker {
    champion_id: Option<u64>,
}

impl ChampionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn champion_id(&self) -> Option<u64> {
        self.champion_id
    }

    /// Recompute the champion as the maximum-score player; ties break to the
    /// lowest id so the choice is stable across runs.
    pub fn recompute<'a>(&mut self, players: &'a [Player]) -> Result<&'a Player> {
        let champion = players
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score).then(b.id.cmp(&a.id)))
            .ok_or(DrawbiasError::EmptyPopulation)?;
        self.champion_id = Some(champion.id);
        Ok(champion)
    }

    /// Per-clone mutation radius, strictly decreasing in the clone index:
    /// early clones explore widely, late clones hug the champion.
    pub fn mutation_scale(clone_index: usize, population_size: usize) -> f64 {
        (-(clone_index as f64) / (population_size as f64 * 0.5)).exp()
    }

    /// Cycle-boundary repopulation around the champion.
    ///
    /// Slot 0 keeps the champion verbatim (id, genome, accumulated score and
    /// age all intact); slots 1..N get fresh-id clones with per-weight
    /// perturbation `w + (rand - 0.5) * w * scale` and zeroed outcome state.
    /// Every slot, the untouched champion copy included, moves to
    /// `generation = champion.generation + 1`.
    pub fn repopulate<R: Rng>(
        &mut self,
        population: &mut Population,
        rng: &mut R,
        next_id: &mut u64,
    ) -> Result<()> {
        let size = population.len();
        let champion = self.recompute(population.players())?.clone();
        let next_generation = champion.generation + 1;

        let mut next = Vec::with_capacity(size);
        let mut keeper = champion.clone();
        keeper.generation = next_generation;
        next.push(keeper);

        for i in 1..size {
            let scale = Self::mutation_scale(i, size);
            let mut genome = champion.genome.clone();
            for weight in genome.iter_mut() {
                *weight += (rng.gen::<f64>() - 0.5) * *weight * scale;
            }
            next.push(Player::offspring(
                next_player_id(next_id),
                genome,
                next_generation,
                champion.niche,
            ));
        }

        population.replace(next)?;
        self.champion_id = Some(champion.id);
        Ok(())
    }
}
