use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Power-law slope of the Salpeter (1955) IMF in its cumulative form
pub const SALPETER_SLOPE: f64 = 1.35;

/// Inverse-CDF sampler for a Salpeter initial mass function truncated to
/// `[min_mass, max_mass]`
///
/// The three constants are fixed at construction so that each draw costs a
/// single `powf`:
///
/// ```text
/// a = min_mass^(-1.35)
/// b = a - max_mass^(-1.35)
/// c = -1 / 1.35
/// m = (a - b * u)^c
/// ```
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sampling::SalpeterImf;
///
/// let imf = SalpeterImf::new(0.1, 100.0);
/// let mut rng = ChaChaRng::seed_from_u64(42);
///
/// let mass = imf.sample_from(&mut rng);
/// assert!((0.1..=100.0).contains(&mass));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalpeterImf {
    a: f64,
    b: f64,
    c: f64,
}

impl SalpeterImf {
    /// Precompute sampling constants for the mass range
    ///
    /// Callers guarantee `0 < min_mass <= max_mass`. Equal bounds give a
    /// sampler that always returns `min_mass`.
    pub fn new(min_mass: f64, max_mass: f64) -> Self {
        let a = min_mass.powf(-SALPETER_SLOPE);
        let b = a - max_mass.powf(-SALPETER_SLOPE);
        Self {
            a,
            b,
            c: -1.0 / SALPETER_SLOPE,
        }
    }

    /// Mass for a uniform deviate `u` in `[0, 1]`
    ///
    /// `u = 0` maps to the lower mass bound and `u = 1` to the upper one,
    /// monotonic in between.
    pub fn sample(&self, u: f64) -> f64 {
        (self.a - self.b * u).powf(self.c)
    }

    /// Draw one mass from `rng`
    pub fn sample_from(&self, rng: &mut ChaChaRng) -> f64 {
        self.sample(rng.random())
    }

    /// The `(a, b, c)` constants, in that order
    pub fn constants(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}
