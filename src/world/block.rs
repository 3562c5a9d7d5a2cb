// src/world/block.rs

use std::f32::consts::{FRAC_PI_2, PI};

use nalgebra::{UnitQuaternion, Vector3};

use crate::world::coords::{BlockPos, LayerIndex};

/// What kind of object a raycast stopped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTag {
    Terrain,
    Block,
    LootContainer,
    Entity,
    Other,
}

impl HitTag {
    pub fn is_block_or_terrain(self) -> bool {
        matches!(self, HitTag::Terrain | HitTag::Block)
    }
}

/// How a block's mesh is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockShape {
    /// Generated from the density field.
    Terrain,
    /// Solid unit cube.
    Cube,
    /// Fixed prefab mesh.
    Model,
}

/// Rotation indices per face (four quarter turns about the face normal).
const TURNS_PER_FACE: u8 = 4;
const ROTATION_COUNT: u8 = 24;

impl BlockShape {
    pub fn is_terrain(self) -> bool {
        self == BlockShape::Terrain
    }

    /// Orientation of the block's mesh.
    ///
    /// Terrain is never multi-dimensional nor rotated. Other shapes decode the
    /// rotation index: `index / 4` picks the face the block's up axis points
    /// to (+Y, -Y, +Z, -Z, +X, -X), `index % 4` adds quarter turns about Y.
    pub fn rotation(self, value: &BlockValue) -> UnitQuaternion<f32> {
        if self.is_terrain() {
            return UnitQuaternion::identity();
        }

        let index = value.rotation % ROTATION_COUNT;
        let face = match index / TURNS_PER_FACE {
            0 => UnitQuaternion::identity(),
            1 => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI),
            2 => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2),
            3 => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
            4 => UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -FRAC_PI_2),
            _ => UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
        };
        let turns = (index % TURNS_PER_FACE) as f32;
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), turns * FRAC_PI_2);
        face * yaw
    }
}

/// Per-voxel block data as stored by the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockValue {
    pub raw: u32,
    pub shape: BlockShape,
    pub rotation: u8,
}

impl BlockValue {
    pub fn terrain(raw: u32) -> Self {
        Self {
            raw,
            shape: BlockShape::Terrain,
            rotation: 0,
        }
    }

    pub fn rotation(&self) -> UnitQuaternion<f32> {
        self.shape.rotation(self)
    }
}

/// What the player is currently aiming at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    pub layer: LayerIndex,
    pub block_pos: BlockPos,
    /// Squared distance from the eye to the hit point.
    pub distance_sq: f32,
    pub block_value: BlockValue,
    pub tag: HitTag,
}
