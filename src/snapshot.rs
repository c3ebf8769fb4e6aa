//! Pure-data snapshot types for external checkpointing.
//!
//! The core owns no file or network I/O; it only exposes lossless serde data
//! that an external mechanism can persist and hand back to
//! `RoundOrchestrator::restore`.

use crate::engines::evaluation::Niche;
use crate::engines::generation::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: u64,
    pub genome: Vec<f64>,
    pub score: f64,
    pub fitness: f64,
    pub generation: u32,
    pub age: u32,
    pub niche: Niche,
    pub last_prediction: Option<Vec<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub round_index: usize,
    pub next_id: u64,
    pub champion_id: Option<u64>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            genome: player.genome.clone(),
            score: player.score,
            fitness: player.fitness,
            generation: player.generation,
            age: player.age,
            niche: player.niche,
            last_prediction: player.last_prediction.clone(),
        }
    }
}

impl PlayerSnapshot {
    pub fn into_player(self) -> Player {
        Player {
            id: self.id,
            genome: self.genome,
            score: self.score,
            fitness: self.fitness,
            generation: self.generation,
            age: self.age,
            niche: self.niche,
            last_prediction: self.last_prediction,
        }
    }
}
