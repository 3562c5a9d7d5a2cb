// src/highlight/overlay.rs

//! Overlay objects owned by the highlight renderer.
//!
//! Every handle the host may not have created yet is an `Option`; writers
//! check for presence and skip the write otherwise.

use nalgebra::{UnitQuaternion, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderer {
    pub material: Material,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransformId(pub u32);

/// A scene node. `position` is in world space (relative to the render
/// origin), `local_position` relative to `parent`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub id: TransformId,
    pub position: Vector3<f32>,
    pub local_position: Vector3<f32>,
    pub scale: Vector3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub parent: Option<TransformId>,
    pub active: bool,
}

impl Transform {
    pub fn new(id: TransformId) -> Self {
        Self {
            id,
            position: Vector3::zeros(),
            local_position: Vector3::zeros(),
            scale: Vector3::repeat(1.0),
            rotation: UnitQuaternion::identity(),
            parent: None,
            active: false,
        }
    }
}

/// The secondary indicator drawn inside the wireframe.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusCube {
    pub transform: Transform,
    /// Renderers of every child object.
    pub renderers: Vec<Renderer>,
}

impl FocusCube {
    pub fn set_color(&mut self, color: Color) {
        for renderer in &mut self.renderers {
            renderer.material.color = color;
        }
    }
}

/// The preview of the block about to be placed, built by the default path.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewObject {
    pub transform: Transform,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Vector3<f32>,
    pub size: Vector3<f32>,
}

impl Bounds {
    /// Footprint of a single voxel cell.
    pub const UNIT_VOXEL: Bounds = Bounds {
        center: Vector3::new(0.5, 0.5, 0.5),
        size: Vector3::new(1.0, 1.0, 1.0),
    };
}

/// Mutable state of the block highlight, carried across frames by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayState {
    pub local_bounds: Bounds,
    /// Extent of the focused block in cells.
    pub multi_dim: Vector3<i32>,
    /// Time (seconds) the overlay was last placed.
    pub last_moved: f32,
    pub wireframe: Option<Transform>,
    pub focus: Option<FocusCube>,
    pub preview: Option<PreviewObject>,
    pub preview_material: Option<Material>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            local_bounds: Bounds::UNIT_VOXEL,
            multi_dim: Vector3::repeat(1),
            last_moved: 0.0,
            wireframe: None,
            focus: None,
            preview: None,
            preview_material: None,
        }
    }
}

impl OverlayState {
    pub const WIREFRAME_ID: TransformId = TransformId(1);
    pub const FOCUS_ID: TransformId = TransformId(2);
    pub const PREVIEW_ID: TransformId = TransformId(3);

    /// State with both overlay objects created, as the host sets it up.
    pub fn with_overlays(focus_renderers: usize) -> Self {
        Self {
            wireframe: Some(Transform::new(Self::WIREFRAME_ID)),
            focus: Some(FocusCube {
                transform: Transform::new(Self::FOCUS_ID),
                renderers: vec![
                    Renderer {
                        material: Material { color: Color::WHITE },
                    };
                    focus_renderers
                ],
            }),
            ..Default::default()
        }
    }

    pub fn destroy_preview(&mut self) {
        self.preview = None;
    }

    pub fn discard_preview_material(&mut self) {
        self.preview_material = None;
    }

    pub fn touch(&mut self, now: f32) {
        self.last_moved = now;
    }

    pub fn is_stale(&self, now: f32, after: f32) -> bool {
        now - self.last_moved > after
    }

    pub fn set_active(&mut self, active: bool) {
        if let Some(wireframe) = self.wireframe.as_mut() {
            wireframe.active = active;
        }
        if let Some(focus) = self.focus.as_mut() {
            focus.transform.active = active;
        }
    }
}
