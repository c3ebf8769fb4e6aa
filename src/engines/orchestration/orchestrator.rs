use super::metrics::{MetricsSink, RoundSummary};
use crate::config::AppConfig;
use crate::data::validate_draw;
use crate::engines::evaluation::{
    apply_outcome, random_baseline_matches, score_prediction, RoundOutcome,
};
use crate::engines::generation::{ChampionTracker, EvolutionOperator, Population};
use crate::engines::prediction::select;
use crate::error::Result;
use crate::model::{FeatureSource, Predictor};
use crate::snapshot::{PlayerSnapshot, PopulationSnapshot};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Drives the round loop over one population.
///
/// All mutable state lives here explicitly (population, champion tracker,
/// RNG, round index, id counter); there is no process-wide model or
/// population. Exactly one round is in flight at a time, but within a round
/// per-player evaluation fans out across threads since players share no
/// mutable state during evaluation.
#[derive(Debug)]
pub struct RoundOrchestrator {
    config: AppConfig,
    population: Population,
    champion: ChampionTracker,
    evolution: EvolutionOperator,
    rng: StdRng,
    round_index: usize,
    next_id: u64,
}

impl RoundOrchestrator {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut next_id = 1;
        let population = Population::random(
            config.evolution.population_size,
            config.evolution.genome_length,
            &mut rng,
            &mut next_id,
        )?;
        Ok(Self {
            evolution: EvolutionOperator::new(config.evolution.clone()),
            config,
            population,
            champion: ChampionTracker::new(),
            rng,
            round_index: 0,
            next_id,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn champion_id(&self) -> Option<u64> {
        self.champion.champion_id()
    }

    /// Run one round end to end: pull the next draw, call the model once,
    /// evaluate every player, recompute the champion, emit the summary, then
    /// evolve (mid-cycle) or repopulate around the champion (cycle boundary).
    ///
    /// Any failure from the feature source, the model or the selector aborts
    /// the round before the first player mutation, so the population is never
    /// left partially evaluated.
    pub fn run_round<P, F, M>(
        &mut self,
        predictor: &P,
        source: &mut F,
        sink: &mut M,
    ) -> Result<RoundSummary>
    where
        P: Predictor + ?Sized,
        F: FeatureSource + ?Sized,
        M: MetricsSink + ?Sized,
    {
        let context = source.next_round()?;
        validate_draw(&context.drawn_numbers, &self.config.game)?;
        self.population.validate()?;

        let model_output = predictor.predict(&context.model_input)?;
        debug!(
            "round {}: draw {:?}, model output len {}",
            self.round_index,
            context.drawn_numbers,
            model_output.len()
        );

        // Pure scoring fan-out; mutation only happens after the join, so an
        // error here leaves every player untouched.
        let draw_size = self.config.game.draw_size;
        let number_range = self.config.game.number_range;
        let drawn = &context.drawn_numbers;
        let scored: Vec<(Vec<u32>, RoundOutcome)> = self
            .population
            .players()
            .par_iter()
            .map(|player| {
                let predicted = select(&model_output, &player.genome, draw_size, number_range)?;
                let outcome = score_prediction(player.niche, &predicted, drawn);
                Ok((predicted, outcome))
            })
            .collect::<Result<Vec<_>>>()?;

        let baseline = random_baseline_matches(drawn, draw_size, number_range, &mut self.rng);

        let mut total_matches = 0;
        let mut best_matches = 0;
        for (player, (predicted, outcome)) in
            self.population.players_mut().iter_mut().zip(scored)
        {
            total_matches += outcome.matches;
            best_matches = best_matches.max(outcome.matches);
            apply_outcome(player, predicted, &outcome);
        }

        if best_matches >= self.config.game.highlight_threshold {
            info!(
                "round {}: exceptional result, best player hit {} of {} numbers",
                self.round_index, best_matches, draw_size
            );
        }

        let champion = self.champion.recompute(self.population.players())?;
        let summary = RoundSummary {
            round_index: self.round_index,
            total_matches,
            best_matches,
            random_baseline_matches: baseline,
            champion_id: champion.id,
            champion_score: champion.score,
            population_avg_fitness: self.population.avg_fitness(),
            cycle_boundary: context.cycle_boundary,
        };
        sink.on_round_complete(&summary);

        if context.cycle_boundary {
            info!(
                "round {}: cycle complete, repopulating around champion {} (score {:.1})",
                self.round_index, summary.champion_id, summary.champion_score
            );
            self.champion
                .repopulate(&mut self.population, &mut self.rng, &mut self.next_id)?;
        } else {
            self.evolution
                .step(&mut self.population, &mut self.rng, &mut self.next_id)?;
        }

        self.round_index += 1;
        Ok(summary)
    }

    /// Run `rounds` consecutive rounds, collecting the summaries.
    pub fn run<P, F, M>(
        &mut self,
        predictor: &P,
        source: &mut F,
        sink: &mut M,
        rounds: usize,
    ) -> Result<Vec<RoundSummary>>
    where
        P: Predictor + ?Sized,
        F: FeatureSource + ?Sized,
        M: MetricsSink + ?Sized,
    {
        let mut summaries = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            summaries.push(self.run_round(predictor, source, sink)?);
        }
        Ok(summaries)
    }

    /// Pure-data snapshot of the evolving state for an external checkpoint
    /// mechanism. The RNG stream is not captured; a restored world reseeds
    /// from its config.
    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            players: self.population.players().iter().map(PlayerSnapshot::from).collect(),
            round_index: self.round_index,
            next_id: self.next_id,
            champion_id: self.champion.champion_id(),
        }
    }

    /// Rebuild a world from a snapshot, re-validating the genome-length
    /// invariant. The population size comes from the snapshot, not the
    /// config.
    pub fn restore(config: AppConfig, snapshot: PopulationSnapshot) -> Result<Self> {
        config.validate()?;
        let rng = match config.evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let players = snapshot.players.into_iter().map(PlayerSnapshot::into_player).collect();
        let population = Population::from_players(players)?;

        let mut champion = ChampionTracker::new();
        if snapshot.champion_id.is_some() {
            champion.recompute(population.players())?;
        }

        let mut next_id = snapshot.next_id;
        // Guard against snapshots whose counter lags behind their own ids.
        if let Some(max_id) = population.players().iter().map(|p| p.id).max() {
            next_id = next_id.max(max_id + 1);
        }

        Ok(Self {
            evolution: EvolutionOperator::new(config.evolution.clone()),
            config,
            population,
            champion,
            rng,
            round_index: snapshot.round_index,
            next_id,
        })
    }
}
