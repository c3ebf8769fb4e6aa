use super::operators::{
    clone_mutation_rate, crossover_mutation_rate, inherit_niche, maybe_switch_niche,
    mutate_additive, mutate_multiplicative, uniform_crossover,
};
use super::player::{next_player_id, Player, Population};
use crate::config::EvolutionConfig;
use crate::error::Result;
use rand::Rng;

/// Mid-cycle generational pressure: survivor selection plus offspring refill.
///
/// Runs after every non-boundary round. The top half by fitness survives
/// unchanged (ids, scores and predictions intact); the bottom half is
/// replaced by crossover offspring or mutated clones of survivors, keeping
/// the population size constant.
#[derive(Debug)]
pub struct EvolutionOperator {
    config: EvolutionConfig,
}

impl EvolutionOperator {
    pub fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// One evolutionary step: age every player, keep the top `ceil(N/2)` by
    /// fitness (ties to the lower id) and refill to N.
    pub fn step<R: Rng>(
        &self,
        population: &mut Population,
        rng: &mut R,
        next_id: &mut u64,
    ) -> Result<()> {
        let size = population.len();
        for player in population.players_mut() {
            player.age += 1;
        }

        let mut survivors: Vec<Player> = population.players().to_vec();
        survivors.sort_by(|a, b| b.fitness.total_cmp(&a.fitness).then(a.id.cmp(&b.id)));
        survivors.truncate(size.div_ceil(2));

        let mut next = survivors.clone();
        while next.len() < size {
            let child = if survivors.len() >= 2 && rng.gen::<f64>() < self.config.crossover_rate {
                self.crossover_child(&survivors, rng, next_id)
            } else {
                self.cloned_child(&survivors, rng, next_id)
            };
            next.push(child);
        }

        population.replace(next)
    }

    /// Uniform crossover of two distinct random survivors, then additive
    /// mutation at the generation-scaled rate.
    fn crossover_child<R: Rng>(
        &self,
        survivors: &[Player],
        rng: &mut R,
        next_id: &mut u64,
    ) -> Player {
        let i = rng.gen_range(0..survivors.len());
        let mut j = rng.gen_range(0..survivors.len());
        while j == i {
            j = rng.gen_range(0..survivors.len());
        }
        let (a, b) = (&survivors[i], &survivors[j]);

        let generation = a.generation.max(b.generation) + 1;
        let mut genome = uniform_crossover(&a.genome, &b.genome, rng);
        let rate = crossover_mutation_rate(self.config.mutation_rate, generation);
        mutate_additive(&mut genome, rate, rng);

        // The 5% niche switch belongs to the mutated-clone path; crossover
        // offspring roll inheritance exactly once against the configured bias.
        let fitter = if a.fitness >= b.fitness { a.niche } else { b.niche };
        let niche = inherit_niche(fitter, self.config.niche_inherit_bias, rng);

        Player::offspring(next_player_id(next_id), genome, generation, niche)
    }

    /// Mutated clone of a single random survivor, with the rate scaled up by
    /// the parent's age.
    fn cloned_child<R: Rng>(
        &self,
        survivors: &[Player],
        rng: &mut R,
        next_id: &mut u64,
    ) -> Player {
        let parent = &survivors[rng.gen_range(0..survivors.len())];
        let generation = parent.generation + 1;

        let mut genome = parent.genome.clone();
        let rate = clone_mutation_rate(self.config.mutation_rate, generation, parent.age);
        mutate_multiplicative(&mut genome, rate, rng);

        let niche = maybe_switch_niche(parent.niche, self.config.niche_switch_rate, rng);
        Player::offspring(next_player_id(next_id), genome, generation, niche)
    }
}
