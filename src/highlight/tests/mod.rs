
use nalgebra::Vector3;

use crate::{
    highlight::HighlightFrame,
    item::{DensityHoeAction, HeldItem, Holder, ItemAction},
    world::{coords::LayerIndex, BlockPos, BlockValue, DensityField, HitTag, RaycastHit},
};

pub(super) const FRAME_TIME: f32 = 12.0;

pub(super) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(super) fn constant_density(density: f32) -> impl Fn(LayerIndex, BlockPos) -> Option<f32> {
    move |_, _| Some(density)
}

pub(super) fn terrain_hit(distance_sq: f32) -> RaycastHit {
    RaycastHit {
        layer: 0,
        block_pos: BlockPos::new(10, 4, -3),
        distance_sq,
        block_value: BlockValue::terrain(1),
        tag: HitTag::Terrain,
    }
}

pub(super) fn hoe_holder(block_range: f32) -> Holder {
    Holder::holding(HeldItem {
        name: "meleeToolDensityHoe".to_string(),
        actions: vec![
            ItemAction::DensityHoe(DensityHoeAction::new(block_range)),
            ItemAction::Use,
        ],
    })
}

pub(super) fn frame<'a>(
    world: &'a dyn DensityField,
    holder: Option<&'a Holder>,
    hit: Option<&'a RaycastHit>,
) -> HighlightFrame<'a> {
    HighlightFrame {
        world,
        holder,
        hit,
        origin: Vector3::new(2.0, 0.0, 1.0),
        time: FRAME_TIME,
    }
}
