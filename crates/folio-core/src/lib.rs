pub mod analytics;
pub mod clock;
pub mod constants;
pub mod contact;
pub mod error;
pub mod particles;
pub mod pointer;
pub mod presentation;
pub mod rate_limit;
pub mod scope;
pub mod spring;
pub mod surface;

pub use analytics::*;
pub use clock::*;
pub use contact::*;
pub use error::*;
pub use particles::{FieldConfig, Palette, Particle, ParticleField, Variant};
pub use pointer::*;
pub use presentation::*;
pub use rate_limit::*;
pub use scope::*;
pub use spring::*;
pub use surface::*;
