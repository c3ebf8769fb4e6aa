use super::traits::ConfigSection;
use crate::error::DrawbiasError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Genome length `W`, shared by every player in the population.
    pub genome_length: usize,
    /// Base per-weight mutation probability; scaled up with lineage depth
    /// and, for mutated clones, with the parent's age.
    pub mutation_rate: f64,
    /// Probability an offspring slot is filled by crossover rather than a
    /// mutated clone of a single survivor.
    pub crossover_rate: f64,
    /// Probability a mutating player switches to a uniformly random niche.
    pub niche_switch_rate: f64,
    /// Probability a crossover offspring inherits the fitter parent's niche.
    pub niche_inherit_bias: f64,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 32,
            genome_length: 20,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            niche_switch_rate: 0.05,
            niche_inherit_bias: 0.8,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), DrawbiasError> {
        if self.population_size < 2 {
            return Err(DrawbiasError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.genome_length == 0 {
            return Err(DrawbiasError::Configuration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        for (name, rate) in [
            ("Mutation rate", self.mutation_rate),
            ("Crossover rate", self.crossover_rate),
            ("Niche switch rate", self.niche_switch_rate),
            ("Niche inherit bias", self.niche_inherit_bias),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(DrawbiasError::Configuration(format!(
                    "{} must be between 0 and 1",
                    name
                )));
            }
        }
        Ok(())
    }
}
