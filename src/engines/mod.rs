pub mod evaluation;
pub mod generation;
pub mod orchestration;
pub mod prediction;
