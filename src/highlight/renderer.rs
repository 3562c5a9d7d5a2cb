// src/highlight/renderer.rs

use log::trace;
use nalgebra::Vector3;

use crate::{
    highlight::{
        decider::{HighlightFrame, OverrideDecision},
        overlay::{Bounds, Color, Material, OverlayState, PreviewObject, Transform},
    },
    world::coords::block_corner,
};

/// Seconds without a placement after which the overlay is hidden.
pub const DEFAULT_STALE_AFTER: f32 = 0.5;

/// A hook run before the default highlight logic each frame.
///
/// Returning `TakeOver` means the hook has drawn the highlight and the
/// default path must not run this frame.
pub trait HighlightOverride {
    fn update(&self, frame: &HighlightFrame<'_>, state: &mut OverlayState) -> OverrideDecision;
}

/// Draws the highlight cube around the block the player aims at.
pub struct DisplacedCubeRenderer {
    state: OverlayState,
    overrides: Vec<Box<dyn HighlightOverride>>,
    stale_after: f32,
}

impl Default for DisplacedCubeRenderer {
    fn default() -> Self {
        Self::new(OverlayState::with_overlays(1))
    }
}

impl DisplacedCubeRenderer {
    pub fn new(state: OverlayState) -> Self {
        Self {
            state,
            overrides: Vec::new(),
            stale_after: DEFAULT_STALE_AFTER,
        }
    }

    pub fn with_stale_after(mut self, seconds: f32) -> Self {
        self.stale_after = seconds;
        self
    }

    /// Hooks run in registration order; the first to take over wins.
    pub fn register(&mut self, hook: Box<dyn HighlightOverride>) {
        self.overrides.push(hook);
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Per-frame update while something is aimed at.
    ///
    /// Returns `true` when the default highlight ran, `false` when a hook
    /// took over.
    pub fn update(&mut self, frame: &HighlightFrame<'_>) -> bool {
        for hook in &self.overrides {
            if !hook.update(frame, &mut self.state).continue_default() {
                return false;
            }
        }
        self.default_update(frame);
        true
    }

    /// Hides the overlay once nothing has placed it for a while.
    pub fn late_update(&mut self, now: f32) {
        if self.state.is_stale(now, self.stale_after) {
            self.state.set_active(false);
        }
    }

    fn default_update(&mut self, frame: &HighlightFrame<'_>) {
        let Some(hit) = frame.hit else {
            self.state.set_active(false);
            return;
        };

        let position = block_corner(hit.block_pos) - frame.origin;
        let rotation = hit.block_value.rotation();

        let mut preview = Transform::new(OverlayState::PREVIEW_ID);
        preview.position = position;
        preview.rotation = rotation;
        preview.active = true;
        self.state.preview = Some(PreviewObject { transform: preview });
        self.state.preview_material = Some(Material { color: Color::WHITE });

        if let Some(wireframe) = self.state.wireframe.as_mut() {
            wireframe.position = position;
            wireframe.scale = Vector3::repeat(1.0);
            wireframe.rotation = rotation;
        }
        if let Some(focus) = self.state.focus.as_mut() {
            focus.transform.parent = None;
            focus.set_color(Color::WHITE);
        }

        self.state.local_bounds = Bounds::UNIT_VOXEL;
        self.state.multi_dim = Vector3::repeat(1);
        self.state.touch(frame.time);
        self.state.set_active(true);

        trace!("Default highlight at {:?}", hit.block_pos);
    }
}
