pub mod action;

pub use action::{hoe_range_sq, DensityHoeAction, HeldItem, Holder, ItemAction};
