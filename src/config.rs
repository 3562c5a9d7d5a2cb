// src/config.rs

use nalgebra::Vector3;
use thiserror::Error;

use crate::highlight::overlay::Color;

/// Visual tuning for the density wireframe.
///
/// The padding and color are empirically tuned against the wireframe mesh and
/// have no derivation beyond "looks right in game".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightConfig {
    /// Subtracted from the block position so the padded mesh lines up with the cell.
    pub padding: Vector3<f32>,
    /// Applied to every renderer under the focus cube.
    pub color: Color,
    /// Fixed scale on the X and Z axes.
    pub horizontal_scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub density_gain: f32,
    /// Density mapped to a raw scale of `density_gain`.
    pub density_reference: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            padding: Vector3::new(0.05, 0.25, 0.05),
            color: Color::GREEN,
            horizontal_scale: 1.1,
            min_scale: 1.1,
            max_scale: 1.75,
            density_gain: 1.25,
            density_reference: -50.0,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("non-finite value for {0}")]
    NotFinite(&'static str),

    #[error("scale range is empty: min {min} > max {max}")]
    EmptyScaleRange { min: f32, max: f32 },

    #[error("minimum scale must be positive, got {0}")]
    NonPositiveScale(f32),

    #[error("density reference must be non-zero")]
    ZeroReference,
}

impl HighlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("horizontal_scale", self.horizontal_scale),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("density_gain", self.density_gain),
            ("density_reference", self.density_reference),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }
        if self.padding.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NotFinite("padding"));
        }

        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.min_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::EmptyScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if self.density_reference == 0.0 {
            return Err(ConfigError::ZeroReference);
        }
        Ok(())
    }
}
