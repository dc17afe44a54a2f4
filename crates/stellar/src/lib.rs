//! Stellar mass sampling and mass-derived stellar attributes.

pub mod main_sequence;
pub mod sampling;
pub mod stellar_color;

#[cfg(test)]
mod main_sequence_test;
#[cfg(test)]
mod stellar_color_test;

pub use main_sequence::{StellarAttributes, luminosity, temperature, temperature_from};
pub use sampling::SalpeterImf;
pub use stellar_color::StellarColor;
