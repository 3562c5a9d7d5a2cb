// src/world/coords.rs

use nalgebra::Vector3;

/// Integer voxel coordinates in world space.
pub type BlockPos = Vector3<i32>;

/// Index of the render layer (chunk cluster) a voxel belongs to.
pub type LayerIndex = u32;

/// World-space position of the voxel's minimum corner.
pub fn block_corner(pos: BlockPos) -> Vector3<f32> {
    pos.cast::<f32>()
}
