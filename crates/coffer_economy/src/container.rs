//! # Bounded Container Contract
//!
//! The exchange never owns storage. It talks to whatever holds the coins
//! through this trait: insert with leftover, remove with shortfall, and a walk
//! over the occupied stacks.

use crate::inventory::{ItemId, ItemStack, UnitType};

/// A fixed-capacity store of unit stacks.
///
/// Implementations must never place more than requested and must never let a
/// slot exceed the unit's `max_stack`.
pub trait Container {
    /// Places up to `count` units of `unit`.
    ///
    /// Returns the leftover: how many units could not be placed because
    /// capacity ran out. Zero means everything fit.
    fn insert(&mut self, unit: UnitType, count: u32) -> u32;

    /// Takes up to `count` units of `item_id`.
    ///
    /// Returns the shortfall: how many units could not be taken because fewer
    /// were present. Zero means everything was removed.
    fn remove(&mut self, item_id: ItemId, count: u32) -> u32;

    /// Iterates over every occupied slot.
    fn stacks(&self) -> impl Iterator<Item = ItemStack> + '_;
}
