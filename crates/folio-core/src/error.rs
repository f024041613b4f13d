use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("radius range {min}..={max} is invalid")]
    RadiusRange { min: f32, max: f32 },

    #[error("speed range {min}..={max} is invalid")]
    SpeedRange { min: f32, max: f32 },

    #[error("{name} must be in (0, 1), got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },

    #[error("trail capacity must be non-zero")]
    ZeroCapacity,
}
