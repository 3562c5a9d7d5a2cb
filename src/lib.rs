//! Density hoe highlight override.
//!
//! Replaces the default preview cube with a density-scaled wireframe while a
//! density hoe is aimed at solid terrain. Everything else falls through to the
//! host's default highlight path.

use log::info;

pub mod config;
pub mod highlight;
pub mod item;
pub mod world;

pub use config::{ConfigError, HighlightConfig};
pub use highlight::{
    DensityHoeOverride, DisplacedCubeRenderer, HighlightFrame, HighlightOverride,
    OverlayState, OverrideDecision,
};

/// Mod entry point, called once by the host when the mod is loaded.
pub fn init_mod(renderer: &mut DisplacedCubeRenderer) -> Result<(), ConfigError> {
    // the host may already have installed a logger
    let _ = env_logger::try_init();

    let hook = DensityHoeOverride::new(HighlightConfig::default())?;
    info!("Registering highlight override: {}", std::any::type_name::<DensityHoeOverride>());
    renderer.register(Box::new(hook));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_mod_registers_override() {
        let mut renderer = DisplacedCubeRenderer::default();
        init_mod(&mut renderer).unwrap();
        assert_eq!(renderer.override_count(), 1);
    }
}
