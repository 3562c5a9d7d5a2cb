pub mod decider;
pub mod geometry;
pub mod overlay;
pub mod renderer;

pub use decider::{DensityHoeOverride, HighlightFrame, OverrideDecision};
pub use geometry::{wireframe_position, wireframe_scale, wireframe_scale_y, WireframeTransform};
pub use overlay::{Bounds, Color, OverlayState};
pub use renderer::{DisplacedCubeRenderer, HighlightOverride};

#[cfg(test)]
mod tests;
