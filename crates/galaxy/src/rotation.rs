//! Rotation curve of the analytic disk
//!
//! The enclosed mass seen by a star at cylindrical radius `R` and height `z`
//! is approximated as
//!
//! ```text
//! M(R, z) = M_tot (1 - exp(-R / h_r)) (1 - exp(-|z| / h_z))
//! ```
//!
//! and the orbital speed follows from `v² = M(R, z) / r`. Initial
//! velocities are encoded as a previous position for Verlet integration,
//! `x_prev = x - v dt`.

use nalgebra::{Point3, Vector3};

/// Cylindrical radius below which a star is treated as sitting on the axis
pub const AXIS_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationCurve {
    pub radial_scale: f64,
    pub vertical_scale: f64,
}

impl RotationCurve {
    pub fn new(radial_scale: f64, vertical_scale: f64) -> Self {
        Self {
            radial_scale,
            vertical_scale,
        }
    }

    /// Fraction of `total_mass` enclosed at `position`
    pub fn enclosed_mass(&self, position: &Point3<f64>, total_mass: f64) -> f64 {
        let r_xy = position.x.hypot(position.y);
        total_mass
            * (1.0 - (-r_xy / self.radial_scale).exp())
            * (1.0 - (-position.z.abs() / self.vertical_scale).exp())
    }

    /// Orbital speed at `position` for the given total mass
    ///
    /// Zero on the rotation axis (including the origin).
    pub fn circular_speed(&self, position: &Point3<f64>, total_mass: f64) -> f64 {
        let r_xy = position.x.hypot(position.y);
        if r_xy < AXIS_EPSILON {
            return 0.0;
        }
        let r = position.coords.norm();
        (self.enclosed_mass(position, total_mass) / r).sqrt()
    }

    /// Velocity at `position`: the planar part is tangential (clockwise seen
    /// from +z), the vertical part points away from the midplane
    ///
    /// The speed is split by the elevation angle θ of the position vector,
    /// `cos θ = R / r`.
    pub fn velocity(&self, position: &Point3<f64>, total_mass: f64) -> Vector3<f64> {
        let r_xy = position.x.hypot(position.y);
        if r_xy < AXIS_EPSILON {
            return Vector3::zeros();
        }

        let r = position.coords.norm();
        let v_tot = self.circular_speed(position, total_mass);
        let cos_theta = r_xy / r;
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let v_proj = v_tot * cos_theta;

        Vector3::new(
            v_proj * position.y / r_xy,
            -v_proj * position.x / r_xy,
            sign(position.z) * v_tot * sin_theta,
        )
    }

    /// Companion "previous step" position giving the rotation-curve velocity
    /// under Verlet integration with step `dt`
    ///
    /// # Example
    /// ```
    /// use galaxy::rotation::RotationCurve;
    /// use nalgebra::Point3;
    ///
    /// let curve = RotationCurve::new(1.0, 1.0);
    ///
    /// // On the axis there is no rotation
    /// let on_axis = Point3::new(0.0, 0.0, 3.0);
    /// assert_eq!(curve.initial_offset(&on_axis, 0.1, 10.0), on_axis);
    /// ```
    pub fn initial_offset(&self, position: &Point3<f64>, dt: f64, total_mass: f64) -> Point3<f64> {
        *position - self.velocity(position, total_mass) * dt
    }
}

/// Sign with `sign(0) == 0`, unlike `f64::signum`
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
