//! Mass-derived properties of main sequence stars.
//!
//! Everything here is a pure function of stellar mass (solar masses), so a
//! star field only needs to store the sampled mass to reproduce its
//! attributes.

use serde::{Deserialize, Serialize};

use crate::stellar_color::StellarColor;

/// Scale of the mass-temperature relation (K)
pub const TEMPERATURE_SCALE: f64 = 5772.005317;

/// Upper mass of each mass-luminosity segment paired with `(coefficient, exponent)`
const LUMINOSITY_SEGMENTS: [(f64, f64, f64); 3] = [
    (0.43, 0.23, 2.3),
    (2.0, 1.0, 4.0),
    (55.0, 1.4, 3.5),
];

/// Linear slope of the mass-luminosity relation above 55 M☉
const MASSIVE_LUMINOSITY_SLOPE: f64 = 32000.0;

/// Luminosity in solar luminosities from the piecewise mass-luminosity relation
///
/// ```text
/// M < 0.43      L = 0.23 M^2.3
/// M < 2         L = M^4
/// M < 55        L = 1.4 M^3.5
/// otherwise     L = 32000 M
/// ```
///
/// Segments are checked in order and the first match wins. No smoothing is
/// applied across boundaries.
pub fn luminosity(mass: f64) -> f64 {
    LUMINOSITY_SEGMENTS
        .iter()
        .find(|(upper, _, _)| mass < *upper)
        .map(|(_, coeff, exp)| coeff * mass.powf(*exp))
        .unwrap_or(MASSIVE_LUMINOSITY_SLOPE * mass)
}

/// Effective temperature (K) for a star of the given luminosity and mass
///
/// `T = 5772.005317 (L M^1.5)^(1/4)`
pub fn temperature_from(luminosity: f64, mass: f64) -> f64 {
    TEMPERATURE_SCALE * (luminosity * mass.powf(1.5)).powf(0.25)
}

/// Effective temperature (K) from mass alone
///
/// Requires `mass > 0`.
///
/// # Example
/// ```
/// use stellar::main_sequence::temperature;
///
/// let sun = temperature(1.0);
/// assert!((sun - 5772.005317).abs() < 1e-9);
/// ```
pub fn temperature(mass: f64) -> f64 {
    temperature_from(luminosity(mass), mass)
}

/// All attributes a renderer needs for one star, derived from its mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarAttributes {
    /// Solar masses
    pub mass: f64,
    /// Solar luminosities
    pub luminosity: f64,
    /// Kelvin
    pub temperature: f64,
    pub color: StellarColor,
}

impl StellarAttributes {
    pub fn from_mass(mass: f64) -> Self {
        let luminosity = luminosity(mass);
        let temperature = temperature_from(luminosity, mass);

        Self {
            mass,
            luminosity,
            temperature,
            color: StellarColor::from_temperature(temperature),
        }
    }
}
