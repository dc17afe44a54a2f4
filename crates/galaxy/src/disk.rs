//! Exponential disk density profile
//!
//! Positions are drawn by inverse-CDF sampling of:
//!
//! - Radial: exponential disk, `r = -h_r ln(1 - u)`
//! - Azimuth: uniform, `φ = 2π u`
//! - Vertical: double exponential (Laplace), density ∝ exp(-|z| / h_z)

use std::f64::consts::PI;

use nalgebra::Point3;
use rand::Rng;
use rand_chacha::ChaChaRng;

/// An exponential disk with radial and vertical scale lengths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDisk {
    /// Radial scale length h_r
    pub radial_scale: f64,
    /// Vertical scale height h_z
    pub vertical_scale: f64,
}

impl ExponentialDisk {
    pub fn new(radial_scale: f64, vertical_scale: f64) -> Self {
        Self {
            radial_scale,
            vertical_scale,
        }
    }

    /// Cylindrical radius for a uniform deviate in `[0, 1)`
    ///
    /// `u = 0` gives the center; the radius grows without bound as `u → 1`.
    pub fn radius(&self, u: f64) -> f64 {
        -self.radial_scale * (1.0 - u).ln()
    }

    /// Height above the midplane for a uniform deviate in `[0, 1)`
    ///
    /// Deviates below one half map to `z >= 0`, the rest to `z < 0`. Both
    /// ends of the range sit on the midplane and both tails diverge towards
    /// `u = 0.5`; that single point is pinned to `z = 0` so no infinite
    /// height is ever produced.
    pub fn height(&self, u: f64) -> f64 {
        if u == 0.5 {
            return 0.0;
        }

        if u <= 0.5 {
            -self.vertical_scale * (1.0 - 2.0 * u).ln()
        } else {
            self.vertical_scale * (2.0 * u - 1.0).ln()
        }
    }

    /// Position for three uniform deviates (radius, height, azimuth)
    ///
    /// # Example
    /// ```
    /// use galaxy::disk::ExponentialDisk;
    ///
    /// let disk = ExponentialDisk::new(200.0, 20.0);
    /// let center = disk.sample(0.0, 0.0, 0.3);
    /// assert_eq!(center.coords.norm(), 0.0);
    /// ```
    pub fn sample(&self, ur: f64, uz: f64, uphi: f64) -> Point3<f64> {
        let r = self.radius(ur);
        let phi = 2.0 * PI * uphi;
        Point3::new(r * phi.cos(), r * phi.sin(), self.height(uz))
    }

    /// Draw one position from `rng`, consuming the radius, height and
    /// azimuth deviates in that order
    pub fn sample_from(&self, rng: &mut ChaChaRng) -> Point3<f64> {
        let ur: f64 = rng.random();
        let uz: f64 = rng.random();
        let uphi: f64 = rng.random();
        self.sample(ur, uz, uphi)
    }
}
