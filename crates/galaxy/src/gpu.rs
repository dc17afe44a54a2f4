//! Plain-old-data layouts for uploading a field to GPU storage buffers.
//!
//! Positions go up as homogeneous `vec4`s with `w = 1.0`, colors as `vec4`
//! RGBA and masses as tightly packed `f32`s, matching std430 layout.

use bytemuck::{Pod, Zeroable};
use nalgebra::Point3;
use stellar::StellarColor;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct GpuVec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl GpuVec4 {
    pub fn from_point(p: &Point3<f64>) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
            z: p.z as f32,
            w: 1.0,
        }
    }

    pub fn from_color(c: &StellarColor) -> Self {
        let [x, y, z, w] = c.to_rgba_f32();
        Self { x, y, z, w }
    }
}

pub fn positions(points: &[Point3<f64>]) -> Vec<GpuVec4> {
    points.iter().map(GpuVec4::from_point).collect()
}

pub fn colors(colors: &[StellarColor]) -> Vec<GpuVec4> {
    colors.iter().map(GpuVec4::from_color).collect()
}

pub fn masses(masses: &[f64]) -> Vec<f32> {
    masses.iter().map(|&m| m as f32).collect()
}

/// Raw bytes of a buffer, ready for a `queue.write_buffer`-style upload
pub fn as_bytes<T: Pod>(data: &[T]) -> &[u8] {
    bytemuck::cast_slice(data)
}
