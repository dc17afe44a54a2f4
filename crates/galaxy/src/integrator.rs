//! Per-step position update boundary
//!
//! A star field never integrates itself. Once per step it hands its two
//! position buffers and a few scalars to an [`Integrator`], which writes the
//! new positions over the previous buffer; the field then swaps buffer
//! roles. The production kernel runs on a GPU; [`AnalyticDiskVerlet`] is a
//! CPU reference with the same contract.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rotation::{AXIS_EPSILON, RotationCurve};

/// System-level scalars passed to the integrator every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    /// Converged mass of the whole population
    pub total_mass: f64,
    pub dt: f64,
    pub radial_scale: f64,
    pub vertical_scale: f64,
}

/// Advances every particle by one time step
///
/// Implementations must:
/// - write `previous[i]` for every `i`, using only `current[i]`,
///   `previous[i]` and `params`
/// - be deterministic for identical inputs
/// - never reorder or resize the particle arrays
///
/// `current` is immutable for the whole step, so no particle can observe
/// another particle's updated position.
pub trait Integrator: Send + Sync {
    fn advance(&self, params: &StepParams, current: &[Point3<f64>], previous: &mut [Point3<f64>]);
}

/// Position Verlet in the analytic disk potential
///
/// `x_next = 2 x - x_prev + a(x) dt²`, with `a` pointing at the origin and
/// `|a| = v_c² / r` for the rotation-curve speed `v_c`. Particles are
/// updated in parallel unless built with [`AnalyticDiskVerlet::sequential`].
///
/// # Example
/// ```
/// use galaxy::integrator::{AnalyticDiskVerlet, Integrator, StepParams};
/// use nalgebra::Point3;
///
/// let params = StepParams { total_mass: 100.0, dt: 0.1, radial_scale: 1.0, vertical_scale: 1.0 };
/// let current = [Point3::new(1.0, 0.0, 0.5)];
/// let mut previous = [Point3::new(1.0, 0.1, 0.5)];
///
/// AnalyticDiskVerlet::new().advance(&params, &current, &mut previous);
/// assert!(previous[0].y < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticDiskVerlet {
    pub parallel: bool,
}

impl AnalyticDiskVerlet {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Evaluate particles one after another in index order
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Acceleration at `position` in the analytic disk potential
    pub fn acceleration(params: &StepParams, position: &Point3<f64>) -> Vector3<f64> {
        if position.x.hypot(position.y) < AXIS_EPSILON {
            return Vector3::zeros();
        }

        let curve = RotationCurve::new(params.radial_scale, params.vertical_scale);
        let r = position.coords.norm();
        let enclosed = curve.enclosed_mass(position, params.total_mass);
        -position.coords * (enclosed / (r * r * r))
    }

    fn next_position(
        params: &StepParams,
        current: &Point3<f64>,
        previous: &Point3<f64>,
    ) -> Point3<f64> {
        let accel = Self::acceleration(params, current);
        current + (current - previous) + accel * (params.dt * params.dt)
    }
}

impl Default for AnalyticDiskVerlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for AnalyticDiskVerlet {
    fn advance(&self, params: &StepParams, current: &[Point3<f64>], previous: &mut [Point3<f64>]) {
        if self.parallel {
            previous
                .par_iter_mut()
                .zip(current.par_iter())
                .for_each(|(prev, cur)| *prev = Self::next_position(params, cur, prev));
        } else {
            previous
                .iter_mut()
                .zip(current.iter())
                .for_each(|(prev, cur)| *prev = Self::next_position(params, cur, prev));
        }
    }
}
