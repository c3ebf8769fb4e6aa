use drawbias::config::{AppConfig, EvolutionConfig, GameConfig};
use drawbias::data::DrawHistory;
use drawbias::engines::orchestration::{ConsoleMetricsSink, RoundOrchestrator};
use drawbias::model::Predictor;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

/// Normalizes the per-number frequency features into a score vector.
struct FrequencyPredictor;

impl Predictor for FrequencyPredictor {
    fn predict(&self, input: &[f64]) -> drawbias::Result<Vec<f64>> {
        let total: f64 = input.iter().sum();
        if total <= 0.0 {
            return Err(drawbias::DrawbiasError::Model(
                "frequency features sum to zero".to_string(),
            ));
        }
        Ok(input.iter().map(|f| f / total).collect())
    }
}

/// Build a synthetic pass of draws with per-number frequency features.
fn synthetic_history(game: &GameConfig, draws: usize, seed: u64) -> drawbias::Result<DrawHistory> {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = game.number_range as usize;
    let mut frequency = vec![1.0; range];

    let mut rows = Vec::with_capacity(draws);
    for _ in 0..draws {
        let mut drawn: Vec<u32> = rand::seq::index::sample(&mut rng, range, game.draw_size)
            .iter()
            .map(|i| i as u32 + 1)
            .collect();
        drawn.sort_unstable();
        for &n in &drawn {
            frequency[n as usize - 1] += 1.0;
        }
        rows.push((drawn, frequency.clone()));
    }
    DrawHistory::new(rows, game)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rounds = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(60);
    let population_size = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(32);
    let seed = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);

    println!("=== drawbias round runner ===");
    println!("  Rounds: {}", rounds);
    println!("  Population: {}", population_size);
    println!("  Seed: {}", seed);
    println!();

    let config = AppConfig {
        game: GameConfig::default(),
        evolution: EvolutionConfig {
            population_size,
            seed: Some(seed),
            ..EvolutionConfig::default()
        },
    };

    let mut history = synthetic_history(&config.game, 20, seed)?;
    let mut orchestrator = RoundOrchestrator::new(config)?;
    let mut sink = ConsoleMetricsSink;

    let summaries = orchestrator.run(&FrequencyPredictor, &mut history, &mut sink, rounds)?;

    let last = summaries.last().expect("at least one round");
    println!();
    println!(
        "Finished {} rounds: champion #{} with score {:.1}",
        summaries.len(),
        last.champion_id,
        last.champion_score
    );
    Ok(())
}
