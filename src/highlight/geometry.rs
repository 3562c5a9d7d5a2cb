// src/highlight/geometry.rs

use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    config::HighlightConfig,
    world::{coords::block_corner, BlockPos, RaycastHit},
};

/// Vertical wireframe scale for a solid voxel.
///
/// Grows with how solid the voxel is, so thin surface voxels get a low
/// wireframe and deep ones a tall one. Always within
/// `[config.min_scale, config.max_scale]`.
pub fn wireframe_scale_y(density: f32, config: &HighlightConfig) -> f32 {
    let raw = config.density_gain * density / config.density_reference;
    raw.max(config.min_scale).min(config.max_scale)
}

pub fn wireframe_scale(density: f32, config: &HighlightConfig) -> Vector3<f32> {
    Vector3::new(
        config.horizontal_scale,
        wireframe_scale_y(density, config),
        config.horizontal_scale,
    )
}

/// Wireframe position relative to the render origin, shifted by the mesh padding.
pub fn wireframe_position(
    pos: BlockPos,
    origin: Vector3<f32>,
    config: &HighlightConfig,
) -> Vector3<f32> {
    block_corner(pos) - origin - config.padding
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireframeTransform {
    pub position: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
}

impl WireframeTransform {
    pub fn compute(
        hit: &RaycastHit,
        density: f32,
        origin: Vector3<f32>,
        config: &HighlightConfig,
    ) -> Self {
        Self {
            position: wireframe_position(hit.block_pos, origin, config),
            scale: wireframe_scale(density, config),
            rotation: hit.block_value.rotation(),
        }
    }
}
