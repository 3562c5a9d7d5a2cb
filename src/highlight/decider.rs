// src/highlight/decider.rs

use log::{debug, trace};
use nalgebra::Vector3;

use crate::{
    config::{ConfigError, HighlightConfig},
    highlight::{
        geometry::WireframeTransform,
        overlay::{Bounds, OverlayState},
        renderer::HighlightOverride,
    },
    item::{hoe_range_sq, Holder},
    world::{DensityField, RaycastHit},
};

/// Outcome of a highlight override for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverrideDecision {
    /// The override drew the highlight; skip the default path.
    TakeOver,
    /// Leave the highlight to the default path.
    Defer,
}

impl OverrideDecision {
    /// The renderer's signal: `true` keeps the default behavior running.
    pub fn continue_default(self) -> bool {
        self == OverrideDecision::Defer
    }
}

/// Everything the highlight update sees for one frame. Borrowed, never kept.
#[derive(Clone, Copy)]
pub struct HighlightFrame<'a> {
    pub world: &'a dyn DensityField,
    pub holder: Option<&'a Holder>,
    pub hit: Option<&'a RaycastHit>,
    /// World position of the render origin (floating origin).
    pub origin: Vector3<f32>,
    /// Current time in seconds.
    pub time: f32,
}

/// Draws a density-scaled wireframe around solid terrain while a density
/// hoe is in range.
#[derive(Clone, Debug, Default)]
pub struct DensityHoeOverride {
    config: HighlightConfig,
}

impl DensityHoeOverride {
    pub fn new(config: HighlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn decide(&self, frame: &HighlightFrame<'_>) -> OverrideDecision {
        match eligible_density(frame) {
            Some(_) => OverrideDecision::TakeOver,
            None => OverrideDecision::Defer,
        }
    }

    /// Replace the default highlight with the wireframe for `hit`.
    pub fn apply(
        &self,
        hit: &RaycastHit,
        density: f32,
        frame: &HighlightFrame<'_>,
        state: &mut OverlayState,
    ) {
        // whatever the default path started building is ours to tear down
        state.destroy_preview();
        state.discard_preview_material();
        state.touch(frame.time);

        let transform = WireframeTransform::compute(hit, density, frame.origin, &self.config);
        let wireframe_id = state.wireframe.as_ref().map(|wireframe| wireframe.id);

        if let Some(wireframe) = state.wireframe.as_mut() {
            wireframe.position = transform.position;
            wireframe.scale = transform.scale;
            wireframe.rotation = transform.rotation;
        }

        if let Some(focus) = state.focus.as_mut() {
            focus.transform.local_position = Bounds::UNIT_VOXEL.center;
            focus.transform.scale = Vector3::repeat(1.0);
            focus.transform.parent = wireframe_id;
        }

        // terrain is always a single cell
        state.local_bounds = Bounds::UNIT_VOXEL;
        state.multi_dim = Vector3::repeat(1);

        state.set_active(true);
        if let Some(focus) = state.focus.as_mut() {
            focus.set_color(self.config.color);
        }

        debug!(
            "Density wireframe at {:?}: density {}, scale {:?}",
            hit.block_pos, density, transform.scale
        );
    }
}

impl HighlightOverride for DensityHoeOverride {
    fn update(&self, frame: &HighlightFrame<'_>, state: &mut OverlayState) -> OverrideDecision {
        let Some((hit, density)) = frame.hit.zip(eligible_density(frame)) else {
            return OverrideDecision::Defer;
        };
        self.apply(hit, density, frame, state);
        OverrideDecision::TakeOver
    }
}

/// Density of the aimed voxel if the hoe may take over the highlight.
fn eligible_density(frame: &HighlightFrame<'_>) -> Option<f32> {
    let hit = frame.hit?;

    let range_sq = hoe_range_sq(frame.holder.and_then(Holder::held_actions));
    if range_sq < hit.distance_sq {
        trace!("Hit at distance² {} beyond hoe range² {}", hit.distance_sq, range_sq);
        return None;
    }

    if !hit.tag.is_block_or_terrain() || !hit.block_value.shape.is_terrain() {
        trace!("Hit {:?} / {:?} is not terrain", hit.tag, hit.block_value.shape);
        return None;
    }

    let density = frame.world.density(hit.layer, hit.block_pos)?;
    if density < 0.0 {
        Some(density)
    } else {
        trace!("Voxel {:?} is empty (density {})", hit.block_pos, density);
        None
    }
}
