use thiserror::Error;

use crate::sim::Tier;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Session duration must be at least one second")]
    ZeroDuration,

    #[error("Spawn interval must be non-zero")]
    ZeroSpawnInterval,

    #[error("Item lifetime must be non-zero")]
    ZeroLifetime,

    #[error("Play area is empty or inverted: min={min:?} max={max:?}")]
    InvalidPlayArea { min: (f32, f32), max: (f32, f32) },

    #[error("Item size range is inverted: {0}..{1}")]
    InvalidSizeRange(f32, f32),

    #[error("Tier {0:?} is worth zero points")]
    WorthlessTier(Tier),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
