//! Read-only access for renderers.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use stellar::StellarColor;

/// Borrowed per-particle arrays a renderer may read
///
/// All slices have the same length and share indexing. Holding a view
/// borrows the field, so it can never observe a half-finished reset or step.
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub positions: &'a [Point3<f64>],
    pub colors: &'a [StellarColor],
    pub luminosities: &'a [f64],
    pub masses: &'a [f64],
}

impl RenderView<'_> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Brightest star's luminosity, for normalizing point sizes
    pub fn max_luminosity(&self) -> Option<f64> {
        self.luminosities.iter().copied().reduce(f64::max)
    }
}

/// Owned, serializable copy of a field's renderable state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    /// Simulated time since the last reset
    pub time: f64,
    pub steps: u64,
    pub total_mass: f64,
    pub positions: Vec<[f64; 3]>,
    pub colors: Vec<StellarColor>,
    pub luminosities: Vec<f64>,
    pub masses: Vec<f64>,
}
