// src/world/density.rs

use noise::{NoiseFn, Perlin};

use crate::world::coords::{BlockPos, LayerIndex};

/// Densities use the signed 8-bit convention: fully solid is -128, air is 127.
pub const DENSITY_SOLID: f32 = -128.0;
pub const DENSITY_AIR: f32 = 127.0;

/// Scalar density lookup for voxels.
///
/// Negative values are solid terrain; the closer to zero, the closer the voxel
/// is to the surface. `None` means the world has no sample for that voxel
/// (unloaded chunk, unknown layer).
pub trait DensityField {
    fn density(&self, layer: LayerIndex, pos: BlockPos) -> Option<f32>;
}

impl<F> DensityField for F
where
    F: Fn(LayerIndex, BlockPos) -> Option<f32>,
{
    fn density(&self, layer: LayerIndex, pos: BlockPos) -> Option<f32> {
        self(layer, pos)
    }
}

const HEIGHT_RANGE: f32 = 32.0;

/// Density change per block of vertical distance from the surface.
const DENSITY_PER_BLOCK: f32 = 64.0;

/// Heightfield terrain built from fractal Perlin noise.
///
/// Only layer 0 exists; every other layer has no samples.
pub struct NoiseDensityField {
    noise: Perlin,
    base_frequency: f64,
    octaves: usize,
    persistence: f64,
    lacunarity: f64,
}

impl NoiseDensityField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            base_frequency: 0.01,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Surface height at the given column, in `[-HEIGHT_RANGE, HEIGHT_RANGE]`.
    pub fn surface_height(&self, x: i32, z: i32) -> f32 {
        let mut amplitude = 1.0;
        let mut frequency = self.base_frequency;
        let mut total = 0.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            total += self.noise.get([x as f64 * frequency, z as f64 * frequency]) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        (total / max_value) as f32 * HEIGHT_RANGE
    }
}

impl DensityField for NoiseDensityField {
    fn density(&self, layer: LayerIndex, pos: BlockPos) -> Option<f32> {
        if layer != 0 {
            return None;
        }
        // sample at the voxel center
        let above_surface = pos.y as f32 + 0.5 - self.surface_height(pos.x, pos.z);
        Some((above_surface * DENSITY_PER_BLOCK).clamp(DENSITY_SOLID, DENSITY_AIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_deep_voxels_are_fully_solid() {
        let field = NoiseDensityField::new(42);
        let density = field.density(0, BlockPos::new(3, -100, 7)).unwrap();
        assert_eq!(density, DENSITY_SOLID);
    }

    #[test]
    fn test_high_voxels_are_air() {
        let field = NoiseDensityField::new(42);
        let density = field.density(0, BlockPos::new(3, 100, 7)).unwrap();
        assert_eq!(density, DENSITY_AIR);
    }

    #[test_case(1)]
    #[test_case(7)]
    fn test_unknown_layer_has_no_sample(layer: LayerIndex) {
        let field = NoiseDensityField::new(42);
        assert_eq!(field.density(layer, BlockPos::new(0, 0, 0)), None);
    }

    #[test]
    fn test_density_crosses_zero_at_surface() {
        let field = NoiseDensityField::new(42);
        let height = field.surface_height(10, -4);
        let below = BlockPos::new(10, height.floor() as i32 - 2, -4);
        let above = BlockPos::new(10, height.ceil() as i32 + 1, -4);
        assert!(field.density(0, below).unwrap() < 0.0);
        assert!(field.density(0, above).unwrap() > 0.0);
    }

    #[test]
    fn test_seed_determinism() {
        let a = NoiseDensityField::new(42);
        let b = NoiseDensityField::new(42);
        for x in -5..5 {
            assert_eq!(a.surface_height(x, 3), b.surface_height(x, 3));
        }
    }

    #[test]
    fn test_closure_density_field() {
        let field = |_layer: LayerIndex, pos: BlockPos| Some(pos.y as f32);
        assert_eq!(field.density(0, BlockPos::new(0, -5, 0)), Some(-5.0));
    }
}
