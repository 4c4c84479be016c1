//! Generation parameters and their up-front validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tunable inputs for one generation run. The pipeline is a pure function
/// of this value, so equal configs always reproduce the same map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    /// Chance in percent that a cell starts out as `Wall`.
    pub fill_percent: u32,
    /// A `Floor` cell becomes `Wall` when more than this many of its eight
    /// neighbours are walls.
    pub birth_limit: u32,
    /// A `Wall` cell becomes `Floor` when fewer than this many of its eight
    /// neighbours are walls.
    pub death_limit: u32,
    /// Number of automaton smoothing iterations. Zero leaves the random
    /// initial grid untouched.
    pub steps: u32,
    /// Floor regions smaller than this are filled back in, unless they are
    /// the single largest region.
    pub min_cave_size: usize,
    pub seed: u64,
    /// When set, callers are expected to draw a fresh seed before building
    /// the generator. The core never reads ambient entropy itself.
    pub use_random_seed: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 120,
            fill_percent: 45,
            birth_limit: 4,
            death_limit: 3,
            steps: 5,
            min_cave_size: 50,
            seed: 0,
            use_random_seed: true,
        }
    }
}

/// Rejection reason for an out-of-range configuration field. Validation
/// stops at the first offending field; no map is ever produced from a
/// rejected config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    FillPercentOutOfRange(u32),
    BirthLimitOutOfRange(u32),
    DeathLimitOutOfRange(u32),
    MinCaveSizeTooSmall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "width must be greater than zero"),
            Self::ZeroHeight => write!(f, "height must be greater than zero"),
            Self::FillPercentOutOfRange(value) => {
                write!(f, "fill_percent must be within 0..=100, got {value}")
            }
            Self::BirthLimitOutOfRange(value) => {
                write!(f, "birth_limit must be within 0..=8, got {value}")
            }
            Self::DeathLimitOutOfRange(value) => {
                write!(f, "death_limit must be within 0..=8, got {value}")
            }
            Self::MinCaveSizeTooSmall => write!(f, "min_cave_size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.fill_percent > 100 {
            return Err(ConfigError::FillPercentOutOfRange(self.fill_percent));
        }
        if self.birth_limit > 8 {
            return Err(ConfigError::BirthLimitOutOfRange(self.birth_limit));
        }
        if self.death_limit > 8 {
            return Err(ConfigError::DeathLimitOutOfRange(self.death_limit));
        }
        if self.min_cave_size < 1 {
            return Err(ConfigError::MinCaveSizeTooSmall);
        }
        Ok(())
    }
}
