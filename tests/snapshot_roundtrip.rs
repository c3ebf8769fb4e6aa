use drawbias::config::{AppConfig, EvolutionConfig, GameConfig};
use drawbias::data::DrawHistory;
use drawbias::engines::orchestration::{NullMetricsSink, RoundOrchestrator};
use drawbias::error::Result;
use drawbias::model::Predictor;
use drawbias::snapshot::PopulationSnapshot;

struct PassthroughPredictor;

impl Predictor for PassthroughPredictor {
    fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(input.to_vec())
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        game: GameConfig {
            number_range: 10,
            draw_size: 3,
            highlight_threshold: 3,
        },
        evolution: EvolutionConfig {
            population_size: 6,
            genome_length: 5,
            seed: Some(2024),
            ..EvolutionConfig::default()
        },
    }
}

fn test_history(game: &GameConfig) -> DrawHistory {
    let rows = vec![
        (vec![1, 2, 3], vec![0.9, 0.8, 0.7, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.05]),
        (vec![4, 5, 6], vec![0.2, 0.3, 0.1, 0.9, 0.8, 0.7, 0.4, 0.5, 0.6, 0.05]),
        (vec![7, 8, 9], vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.9, 0.8, 0.7, 0.05]),
    ];
    DrawHistory::new(rows, game).unwrap()
}

#[test]
fn test_snapshot_json_roundtrip_preserves_state() {
    let config = test_config();
    let mut history = test_history(&config.game);
    let mut orchestrator = RoundOrchestrator::new(config.clone()).unwrap();
    let mut sink = NullMetricsSink;

    orchestrator
        .run(&PassthroughPredictor, &mut history, &mut sink, 5)
        .unwrap();

    let snapshot = orchestrator.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: PopulationSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.round_index, 5);
    assert_eq!(decoded.players.len(), 6);
    assert_eq!(decoded.champion_id, orchestrator.champion_id());

    let restored = RoundOrchestrator::restore(config, decoded).unwrap();
    assert_eq!(restored.round_index(), orchestrator.round_index());
    assert_eq!(restored.population().len(), orchestrator.population().len());
    for (a, b) in restored
        .population()
        .players()
        .iter()
        .zip(orchestrator.population().players())
    {
        assert_eq!(a.id, b.id);
        assert_eq!(a.genome, b.genome);
        assert_eq!(a.score, b.score);
        assert_eq!(a.fitness, b.fitness);
        assert_eq!(a.generation, b.generation);
        assert_eq!(a.age, b.age);
        assert_eq!(a.niche, b.niche);
        assert_eq!(a.last_prediction, b.last_prediction);
    }
}

#[test]
fn test_restored_world_keeps_running() {
    let config = test_config();
    let mut history = test_history(&config.game);
    let mut orchestrator = RoundOrchestrator::new(config.clone()).unwrap();
    let mut sink = NullMetricsSink;

    orchestrator
        .run(&PassthroughPredictor, &mut history, &mut sink, 4)
        .unwrap();

    let snapshot = orchestrator.snapshot();
    let mut restored = RoundOrchestrator::restore(config, snapshot).unwrap();

    let summary = restored
        .run_round(&PassthroughPredictor, &mut history, &mut sink)
        .unwrap();
    assert_eq!(summary.round_index, 4);
    assert_eq!(restored.population().len(), 6);
    restored.population().validate().unwrap();

    // Ids stay unique after offspring are created post-restore.
    let mut ids: Vec<u64> = restored.population().players().iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), restored.population().len());
}

#[test]
fn test_restore_rejects_corrupt_genomes() {
    let config = test_config();
    let mut history = test_history(&config.game);
    let mut orchestrator = RoundOrchestrator::new(config.clone()).unwrap();
    let mut sink = NullMetricsSink;
    orchestrator
        .run(&PassthroughPredictor, &mut history, &mut sink, 1)
        .unwrap();

    let mut snapshot = orchestrator.snapshot();
    snapshot.players[2].genome.pop();

    let err = RoundOrchestrator::restore(config, snapshot).unwrap_err();
    assert!(matches!(
        err,
        drawbias::DrawbiasError::GenomeLengthMismatch { .. }
    ));
}

#[test]
fn test_restore_rejects_all_empty_genomes() {
    // Every genome emptied: the lengths still agree with each other, but the
    // restore must fail cleanly rather than let the next round divide by a
    // zero genome length.
    let config = test_config();
    let mut history = test_history(&config.game);
    let mut orchestrator = RoundOrchestrator::new(config.clone()).unwrap();
    let mut sink = NullMetricsSink;
    orchestrator
        .run(&PassthroughPredictor, &mut history, &mut sink, 1)
        .unwrap();

    let mut snapshot = orchestrator.snapshot();
    for player in &mut snapshot.players {
        player.genome.clear();
    }

    let err = RoundOrchestrator::restore(config, snapshot).unwrap_err();
    assert!(matches!(err, drawbias::DrawbiasError::Configuration(_)));
}
