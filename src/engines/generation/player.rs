use super::genome::Genome;
use super::operators::random_genome;
use crate::engines::evaluation::Niche;
use crate::error::{DrawbiasError, Result};
use rand::Rng;

/// One evolutionary individual.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: u64,
    pub genome: Genome,
    /// Cumulative reward across all rounds. May go negative; never clamped
    /// and never reset except on offspring creation.
    pub score: f64,
    /// Per-round match count plus niche bonus. Overwritten every round, not
    /// accumulated.
    pub fitness: f64,
    /// Lineage depth; offspring get `max(parent generations) + 1`.
    pub generation: u32,
    /// Rounds survived since creation; resets to 0 for offspring and clones.
    pub age: u32,
    pub niche: Niche,
    /// Most recent chosen number set; overwritten each round.
    pub last_prediction: Option<Vec<u32>>,
}

impl Player {
    /// World-initialization player: generation 1, random genome and niche.
    pub fn random<R: Rng>(id: u64, genome_length: usize, rng: &mut R) -> Self {
        let niche = Niche::random(rng);
        Self::offspring(id, random_genome(genome_length, rng), 1, niche)
    }

    /// Fresh player shell around a genome: zeroed outcome state.
    pub fn offspring(id: u64, genome: Genome, generation: u32, niche: Niche) -> Self {
        Self {
            id,
            genome,
            score: 0.0,
            fitness: 0.0,
            generation,
            age: 0,
            niche,
            last_prediction: None,
        }
    }
}

/// Hand out the next player id. Ids are unique for the life of a world and
/// stable across clone/crossover survival; only new players get new ids.
pub fn next_player_id(counter: &mut u64) -> u64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Fixed-size, ordered collection of players.
///
/// The size is set at creation and never changes: deaths are always paired
/// with births, and every replacement goes through [`Population::replace`],
/// which re-checks the size and genome-length invariants.
#[derive(Debug, Clone)]
pub struct Population {
    players: Vec<Player>,
    genome_length: usize,
}

impl Population {
    pub fn random<R: Rng>(
        size: usize,
        genome_length: usize,
        rng: &mut R,
        next_id: &mut u64,
    ) -> Result<Self> {
        let players = (0..size)
            .map(|_| Player::random(next_player_id(next_id), genome_length, rng))
            .collect();
        Self::from_players(players)
    }

    pub fn from_players(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(DrawbiasError::EmptyPopulation);
        }
        let population = Self {
            genome_length: players[0].genome.len(),
            players,
        };
        population.validate()?;
        Ok(population)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn genome_length(&self) -> usize {
        self.genome_length
    }

    /// Check the population-wide genome-length invariant. A shared length of
    /// zero is rejected too: an empty genome can never weight a selection.
    pub fn validate(&self) -> Result<()> {
        if self.genome_length == 0 {
            return Err(DrawbiasError::Configuration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        for player in &self.players {
            if player.genome.len() != self.genome_length {
                return Err(DrawbiasError::GenomeLengthMismatch {
                    player_id: player.id,
                    expected: self.genome_length,
                    actual: player.genome.len(),
                });
            }
        }
        Ok(())
    }

    /// Swap in a full replacement generation. The new set must keep the
    /// population size and genome length unchanged.
    pub fn replace(&mut self, players: Vec<Player>) -> Result<()> {
        if players.len() != self.players.len() {
            return Err(DrawbiasError::Configuration(format!(
                "Population size must stay {}, got {}",
                self.players.len(),
                players.len()
            )));
        }
        let next = Self {
            genome_length: self.genome_length,
            players,
        };
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn avg_fitness(&self) -> f64 {
        self.players.iter().map(|p| p.fitness).sum::<f64>() / self.players.len() as f64
    }
}
