pub mod champion;
pub mod evolution;
pub mod genome;
pub mod operators;
pub mod player;

pub use champion::ChampionTracker;
pub use evolution::EvolutionOperator;
pub use genome::Genome;
pub use player::{Player, Population};
