//! Construction parameters for a star field.
//!
//! `GalaxyConfig` is `serde`-deserializable so scenarios can be kept in YAML.
//! Every field has a default, so a scenario only lists what it changes:
//!
//! ```yaml
//! disk_stars: 20000       # n
//! cloud_stars: 5000       # n_cloud
//! radial_scale: 200.0     # hr
//! vertical_scale: 20.0    # hz
//! min_mass: 0.1           # lower IMF bound, solar masses
//! max_mass: 100.0         # upper IMF bound, solar masses
//! dt: 0.1                 # integration step
//! seed: 42
//! velocity_mass: running_total   # or converged_total
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which cumulative mass the rotation curve sees while a field is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityMass {
    /// Mass summed over the particles generated so far, including the one
    /// being placed. Velocities depend on generation order.
    #[default]
    RunningTotal,
    /// Mass of the whole population, applied in a second pass.
    ConvergedTotal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub disk_stars: usize,
    pub cloud_stars: usize,
    pub radial_scale: f64,
    pub vertical_scale: f64,
    pub min_mass: f64,
    pub max_mass: f64,
    pub dt: f64,
    pub seed: u64,
    pub velocity_mass: VelocityMass,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            disk_stars: 20_000,
            cloud_stars: 5_000,
            radial_scale: 200.0,
            vertical_scale: 20.0,
            min_mass: 0.1,
            max_mass: 100.0,
            dt: 0.1,
            seed: 42,
            velocity_mass: VelocityMass::RunningTotal,
        }
    }
}

impl GalaxyConfig {
    /// Positional constructor in the order `(n, n_cloud, hr, hz, gm_min, gm_max, dt, seed)`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        disk_stars: usize,
        cloud_stars: usize,
        radial_scale: f64,
        vertical_scale: f64,
        min_mass: f64,
        max_mass: f64,
        dt: f64,
        seed: u64,
    ) -> Self {
        Self {
            disk_stars,
            cloud_stars,
            radial_scale,
            vertical_scale,
            min_mass,
            max_mass,
            dt,
            seed,
            velocity_mass: VelocityMass::default(),
        }
    }

    pub fn with_velocity_mass(mut self, velocity_mass: VelocityMass) -> Self {
        self.velocity_mass = velocity_mass;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total particle count, `n + n_cloud`
    pub fn particle_count(&self) -> usize {
        self.disk_stars + self.cloud_stars
    }

    /// Reject parameters that would produce degenerate particles
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats = [
            ("radial_scale", self.radial_scale),
            ("vertical_scale", self.vertical_scale),
            ("min_mass", self.min_mass),
            ("max_mass", self.max_mass),
            ("dt", self.dt),
        ];
        if let Some(&(name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { name, value });
        }

        if self.radial_scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale {
                name: "radial_scale",
                value: self.radial_scale,
            });
        }
        if self.vertical_scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale {
                name: "vertical_scale",
                value: self.vertical_scale,
            });
        }
        if self.min_mass <= 0.0 || self.max_mass < self.min_mass {
            return Err(ConfigError::InvalidMassRange {
                min: self.min_mass,
                max: self.max_mass,
            });
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }

        Ok(())
    }
}
