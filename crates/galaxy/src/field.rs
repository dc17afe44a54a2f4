//! The star field: generation and per-step evolution of a fixed population.

use log::{debug, trace};
use nalgebra::Point3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{SalpeterImf, StellarAttributes, StellarColor};

use crate::buffers::PositionBuffers;
use crate::config::{GalaxyConfig, VelocityMass};
use crate::disk::ExponentialDisk;
use crate::error::ConfigError;
use crate::gpu::{self, GpuVec4};
use crate::integrator::{Integrator, StepParams};
use crate::rotation::RotationCurve;
use crate::view::{FieldSnapshot, RenderView};

/// One star's full record, copied out of the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub mass: f64,
    pub position: Point3<f64>,
    pub previous_position: Point3<f64>,
    pub luminosity: f64,
    pub temperature: f64,
    pub color: StellarColor,
}

/// A fixed-size population of `n` disk stars followed by `n_cloud` cloud
/// stars, stored as parallel arrays
///
/// Both groups are drawn from the same laws; they differ only in where they
/// sit in the generation order. Construction performs the first
/// [`reset`](ParticleField::reset).
///
/// # Examples
///
/// ```
/// use galaxy::{AnalyticDiskVerlet, GalaxyConfig, ParticleField};
///
/// let config = GalaxyConfig::new(500, 100, 200.0, 20.0, 0.1, 100.0, 0.1, 42);
/// let mut field = ParticleField::new(config).unwrap();
/// assert_eq!(field.len(), 600);
///
/// field.step(&AnalyticDiskVerlet::new());
/// assert_eq!(field.steps(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: GalaxyConfig,
    imf: SalpeterImf,
    disk: ExponentialDisk,
    curve: RotationCurve,
    rng: ChaChaRng,

    masses: Vec<f64>,
    luminosities: Vec<f64>,
    temperatures: Vec<f64>,
    colors: Vec<StellarColor>,
    positions: PositionBuffers,

    /// Sum of all masses once generation finishes
    total_mass: f64,
    /// Steps completed since the last reset
    steps: u64,
}

impl ParticleField {
    /// Validate `config`, allocate storage and generate the first population
    pub fn new(config: GalaxyConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let len = config.particle_count();
        let mut field = Self {
            imf: SalpeterImf::new(config.min_mass, config.max_mass),
            disk: ExponentialDisk::new(config.radial_scale, config.vertical_scale),
            curve: RotationCurve::new(config.radial_scale, config.vertical_scale),
            rng: ChaChaRng::seed_from_u64(config.seed),
            masses: vec![0.0; len],
            luminosities: vec![0.0; len],
            temperatures: vec![0.0; len],
            colors: vec![StellarColor::WHITE; len],
            positions: PositionBuffers::new(len),
            total_mass: 0.0,
            steps: 0,
            config,
        };
        field.reset();

        Ok(field)
    }

    /// Draw a fresh population over the existing storage
    ///
    /// Particles are processed in index order. Each one draws its mass, then
    /// its position, then gets a previous position from the rotation curve
    /// and its attributes from its mass. With [`VelocityMass::RunningTotal`]
    /// the rotation curve sees the mass generated so far, this particle
    /// included; with [`VelocityMass::ConvergedTotal`] previous positions are
    /// derived afterwards from the full mass. The random stream continues
    /// across resets, so each call yields an independent sample.
    pub fn reset(&mut self) {
        let dt = self.config.dt;
        let running = self.config.velocity_mass == VelocityMass::RunningTotal;

        self.total_mass = 0.0;
        self.steps = 0;
        self.positions.reset_roles();
        let (current, previous) = self.positions.both_mut();

        for i in 0..current.len() {
            let mass = self.imf.sample_from(&mut self.rng);
            let position = self.disk.sample_from(&mut self.rng);
            self.total_mass += mass;

            current[i] = position;
            if running {
                previous[i] = self.curve.initial_offset(&position, dt, self.total_mass);
            }

            let attributes = StellarAttributes::from_mass(mass);
            self.masses[i] = mass;
            self.luminosities[i] = attributes.luminosity;
            self.temperatures[i] = attributes.temperature;
            self.colors[i] = attributes.color;
        }

        if !running {
            let total_mass = self.total_mass;
            previous
                .iter_mut()
                .zip(current.iter())
                .for_each(|(prev, cur)| *prev = self.curve.initial_offset(cur, dt, total_mass));
        }

        debug!(
            "Generated {} stars ({} disk, {} cloud), total mass {:.3} M☉",
            self.len(),
            self.config.disk_stars,
            self.config.cloud_stars,
            self.total_mass
        );
    }

    /// Advance every particle by one step, then swap buffer roles
    pub fn step(&mut self, integrator: &dyn Integrator) {
        let params = self.step_params();
        let (current, previous) = self.positions.split_mut();
        integrator.advance(&params, current, previous);
        self.positions.swap();
        self.steps += 1;

        trace!("Step {} done, t = {:.3}", self.steps, self.elapsed());
    }

    /// Take `n_steps` steps and return the simulated time since the last reset
    pub fn run(&mut self, integrator: &dyn Integrator, n_steps: usize) -> f64 {
        for _ in 0..n_steps {
            self.step(integrator);
        }
        self.elapsed()
    }

    /// Scalars handed to the integrator every step
    pub fn step_params(&self) -> StepParams {
        StepParams {
            total_mass: self.total_mass,
            dt: self.config.dt,
            radial_scale: self.config.radial_scale,
            vertical_scale: self.config.vertical_scale,
        }
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    /// Number of particles, `n + n_cloud`
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn disk_stars(&self) -> usize {
        self.config.disk_stars
    }

    pub fn cloud_stars(&self) -> usize {
        self.config.cloud_stars
    }

    /// Whether index `i` belongs to the cloud group
    pub fn is_cloud_star(&self, i: usize) -> bool {
        i >= self.config.disk_stars && i < self.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    pub fn dt(&self) -> f64 {
        self.config.dt
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time since the last reset
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.config.dt
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn luminosities(&self) -> &[f64] {
        &self.luminosities
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn colors(&self) -> &[StellarColor] {
        &self.colors
    }

    pub fn current_positions(&self) -> &[Point3<f64>] {
        self.positions.current()
    }

    pub fn previous_positions(&self) -> &[Point3<f64>] {
        self.positions.previous()
    }

    /// Whether the second position buffer is currently the current one
    pub fn buffers_flipped(&self) -> bool {
        self.positions.is_flipped()
    }

    pub fn particle(&self, i: usize) -> Option<Particle> {
        (i < self.len()).then(|| Particle {
            mass: self.masses[i],
            position: self.positions.current()[i],
            previous_position: self.positions.previous()[i],
            luminosity: self.luminosities[i],
            temperature: self.temperatures[i],
            color: self.colors[i],
        })
    }

    pub fn particles(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).filter_map(|i| self.particle(i))
    }

    pub fn render_view(&self) -> RenderView<'_> {
        RenderView {
            positions: self.positions.current(),
            colors: &self.colors,
            luminosities: &self.luminosities,
            masses: &self.masses,
        }
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            time: self.elapsed(),
            steps: self.steps,
            total_mass: self.total_mass,
            positions: self
                .positions
                .current()
                .iter()
                .map(|p| [p.x, p.y, p.z])
                .collect(),
            colors: self.colors.clone(),
            luminosities: self.luminosities.clone(),
            masses: self.masses.clone(),
        }
    }

    /// Current positions as homogeneous `vec4`s
    pub fn gpu_positions(&self) -> Vec<GpuVec4> {
        gpu::positions(self.positions.current())
    }

    pub fn gpu_previous_positions(&self) -> Vec<GpuVec4> {
        gpu::positions(self.positions.previous())
    }

    pub fn gpu_colors(&self) -> Vec<GpuVec4> {
        gpu::colors(&self.colors)
    }

    pub fn gpu_masses(&self) -> Vec<f32> {
        gpu::masses(&self.masses)
    }
}
