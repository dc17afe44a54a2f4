//! Procedural spiral-galaxy star field.
//!
//! Generates a disk of stars whose masses follow a Salpeter IMF, whose
//! positions follow an exponential disk and whose initial velocities follow
//! an enclosed-mass rotation curve, then evolves the positions through a
//! pluggable [`Integrator`] with ping-pong buffers.

pub mod buffers;
pub mod config;
pub mod disk;
pub mod error;
pub mod field;
pub mod gpu;
pub mod integrator;
pub mod rotation;
pub mod view;


pub use config::{GalaxyConfig, VelocityMass};
pub use error::ConfigError;
pub use field::{Particle, ParticleField};
pub use integrator::{AnalyticDiskVerlet, Integrator, StepParams};
pub use view::{FieldSnapshot, RenderView};
