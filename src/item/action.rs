// src/item/action.rs

/// The density hoe's configured action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityHoeAction {
    block_range: f32,
}

impl DensityHoeAction {
    pub fn new(block_range: f32) -> Self {
        Self { block_range }
    }

    /// Maximum distance, in blocks, at which the hoe can work a voxel.
    pub fn block_range(&self) -> f32 {
        self.block_range
    }
}

/// One configured action on a held item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ItemAction {
    DensityHoe(DensityHoeAction),
    Dig { block_range: f32 },
    Melee { range: f32 },
    Use,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeldItem {
    pub name: String,
    pub actions: Vec<ItemAction>,
}

/// An entity that can hold an item (usually the local player).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Holder {
    pub held: Option<HeldItem>,
}

impl Holder {
    pub fn holding(item: HeldItem) -> Self {
        Self { held: Some(item) }
    }

    pub fn held_actions(&self) -> Option<&[ItemAction]> {
        self.held.as_ref().map(|item| item.actions.as_slice())
    }
}

/// Squared reach of the density hoe among `actions`.
///
/// Only density hoe actions count; anything else (including missing actions)
/// contributes zero.
pub fn hoe_range_sq(actions: Option<&[ItemAction]>) -> f32 {
    let range = actions
        .unwrap_or_default()
        .iter()
        .filter_map(|action| match action {
            ItemAction::DensityHoe(hoe) => Some(hoe.block_range()),
            _ => None,
        })
        .fold(0.0_f32, f32::max);
    range * range
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hoe(range: f32) -> ItemAction {
        ItemAction::DensityHoe(DensityHoeAction::new(range))
    }

    #[test]
    fn test_missing_actions_have_no_range() {
        assert_eq!(hoe_range_sq(None), 0.0);
        let empty: [ItemAction; 0] = [];
        assert_eq!(hoe_range_sq(Some(empty.as_slice())), 0.0);
    }

    #[test]
    fn test_other_actions_do_not_contribute() {
        let actions = [
            ItemAction::Dig { block_range: 9.0 },
            ItemAction::Melee { range: 3.0 },
            ItemAction::Use,
        ];
        assert_eq!(hoe_range_sq(Some(actions.as_slice())), 0.0);
    }

    #[test]
    fn test_largest_hoe_range_wins() {
        let actions = [hoe(3.0), ItemAction::Dig { block_range: 20.0 }, hoe(5.0)];
        assert_relative_eq!(hoe_range_sq(Some(actions.as_slice())), 25.0);
    }

    #[test]
    fn test_negative_range_floors_at_zero() {
        let actions = [hoe(-4.0)];
        assert_eq!(hoe_range_sq(Some(actions.as_slice())), 0.0);
    }

    #[test]
    fn test_empty_hands() {
        let holder = Holder::default();
        assert_eq!(holder.held_actions(), None);
        assert_eq!(hoe_range_sq(holder.held_actions()), 0.0);
    }
}
