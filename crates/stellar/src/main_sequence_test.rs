use approx::assert_relative_eq;

use crate::main_sequence::{
    StellarAttributes, TEMPERATURE_SCALE, luminosity, temperature, temperature_from,
};
use crate::stellar_color::StellarColor;

#[test]
fn solar_mass_has_solar_luminosity() {
    assert_eq!(luminosity(1.0), 1.0);
}

#[test]
fn luminosity_segments() {
    assert_relative_eq!(luminosity(0.2), 0.23 * 0.2_f64.powf(2.3), max_relative = 1e-12);
    assert_relative_eq!(luminosity(1.5), 1.5_f64.powi(4), max_relative = 1e-12);
    assert_relative_eq!(luminosity(10.0), 1.4 * 10.0_f64.powf(3.5), max_relative = 1e-12);
    assert_relative_eq!(luminosity(80.0), 32000.0 * 80.0, max_relative = 1e-12);
}

#[test]
fn luminosity_boundaries_belong_to_upper_segment() {
    // Lower bounds are inclusive on the next segment
    assert_relative_eq!(luminosity(0.43), 0.43_f64.powi(4), max_relative = 1e-12);
    assert_relative_eq!(luminosity(2.0), 1.4 * 2.0_f64.powf(3.5), max_relative = 1e-12);
    assert_relative_eq!(luminosity(55.0), 32000.0 * 55.0, max_relative = 1e-12);
}

#[test]
fn solar_mass_has_reference_temperature() {
    assert_relative_eq!(temperature(1.0), TEMPERATURE_SCALE, max_relative = 1e-12);
}

#[test]
fn temperature_increases_with_luminosity() {
    let mass = 1.3;
    let mut previous = temperature_from(0.01, mass);
    for i in 1..100 {
        let t = temperature_from(0.01 + i as f64 * 0.5, mass);
        assert!(t > previous, "Temperature should grow with luminosity");
        previous = t;
    }
}

#[test]
fn temperature_matches_formula() {
    let mass = 3.0;
    let expected = TEMPERATURE_SCALE * (luminosity(mass) * mass.powf(1.5)).powf(0.25);
    assert_relative_eq!(temperature(mass), expected, max_relative = 1e-12);
}

#[test]
fn attributes_chain_from_mass() {
    let attrs = StellarAttributes::from_mass(0.8);

    assert_eq!(attrs.mass, 0.8);
    assert_eq!(attrs.luminosity, luminosity(0.8));
    assert_eq!(attrs.temperature, temperature(0.8));
    assert_eq!(attrs.color, StellarColor::from_temperature(attrs.temperature));
}

#[test]
fn massive_stars_are_blue() {
    let attrs = StellarAttributes::from_mass(40.0);
    assert_eq!(attrs.color.b, 1.0);
    assert!(attrs.color.r < 1.0);
}
