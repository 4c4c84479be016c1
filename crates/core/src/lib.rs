//! Deterministic cellular-automaton cave generation split into coherent submodules.

pub mod config;
pub mod map;
pub mod rng;
pub mod types;

mod automaton;
mod generator;
mod regions;

pub use config::{ConfigError, GenerationConfig};
pub use generator::CaveGenerator;
pub use map::Map;
pub use rng::{ChaChaSource, RandomSource};
pub use types::{Pos, Tile};

/// Validates `config` and runs the full generation pipeline once,
/// seeding the random stream from `config.seed`.
pub fn generate_map(config: GenerationConfig) -> Result<Map, ConfigError> {
    Ok(CaveGenerator::new(config)?.generate())
}
