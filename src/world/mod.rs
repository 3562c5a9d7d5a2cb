pub mod block;
pub mod coords;
pub mod density;

pub use block::{BlockShape, BlockValue, HitTag, RaycastHit};
pub use coords::BlockPos;
pub use density::{DensityField, NoiseDensityField};
