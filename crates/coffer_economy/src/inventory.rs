//! # Inventory System
//!
//! Slot inventory used as the reference [`Container`].
//! Slots are allocated once at creation; the slot count never changes.

use crate::container::Container;
use crate::error::{EconomyError, EconomyResult};

/// Unique identifier for an item type. Zero marks an empty slot.
pub type ItemId = u32;

/// Stack limit used when a config does not name one.
pub const DEFAULT_MAX_STACK: u32 = 64;

/// Slot count of [`Inventory::new`].
pub const DEFAULT_INVENTORY_SLOTS: usize = 36;

/// A physical unit type: which item it is and how many fit in one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitType {
    /// Item identifier.
    pub item_id: ItemId,
    /// Maximum number of this item per slot.
    pub max_stack: u32,
}

impl UnitType {
    /// Creates a unit type.
    #[inline]
    #[must_use]
    pub const fn new(item_id: ItemId, max_stack: u32) -> Self {
        Self { item_id, max_stack }
    }

    /// Creates a unit type with the default stack limit.
    #[inline]
    #[must_use]
    pub const fn stackable(item_id: ItemId) -> Self {
        Self::new(item_id, DEFAULT_MAX_STACK)
    }
}

/// A stack of items in an inventory slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStack {
    /// The item type ID, or 0 for empty slot.
    pub item_id: ItemId,
    /// Number of items in this stack.
    pub count: u32,
}

impl ItemStack {
    /// Creates an empty item stack.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item_id: 0,
            count: 0,
        }
    }

    /// Creates a new item stack.
    #[inline]
    #[must_use]
    pub const fn new(item_id: ItemId, count: u32) -> Self {
        Self { item_id, count }
    }

    /// Returns true if this slot is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0 || self.item_id == 0
    }

    /// Clears this slot.
    #[inline]
    pub fn clear(&mut self) {
        self.item_id = 0;
        self.count = 0;
    }
}

/// A bounded slot inventory.
///
/// Inserting tops up partial stacks of the same item first, then claims empty
/// slots. Removing drains matching slots front to back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: Box<[ItemStack]>,
    used_slots: usize,
}

impl Inventory {
    /// Creates an empty inventory with [`DEFAULT_INVENTORY_SLOTS`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_INVENTORY_SLOTS)
    }

    /// Creates an empty inventory with exactly `slots` slots.
    #[must_use]
    pub fn with_slots(slots: usize) -> Self {
        Self {
            slots: vec![ItemStack::empty(); slots].into_boxed_slice(),
            used_slots: 0,
        }
    }

    /// Returns the number of used slots.
    #[inline]
    #[must_use]
    pub const fn used_slots(&self) -> usize {
        self.used_slots
    }

    /// Returns the number of empty slots.
    #[inline]
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.slots.len() - self.used_slots
    }

    /// Returns the total capacity in slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Checks if every slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.used_slots >= self.slots.len()
    }

    /// Gets an item stack at a specific slot.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot)
    }

    /// Counts the total number of a specific item across all slots.
    #[must_use]
    pub fn count_item(&self, item_id: ItemId) -> u64 {
        self.slots
            .iter()
            .filter(|s| s.item_id == item_id)
            .map(|s| u64::from(s.count))
            .sum()
    }

    /// Finds the first slot containing a specific item.
    #[must_use]
    pub fn find_item(&self, item_id: ItemId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.item_id == item_id && s.count > 0)
    }

    /// Finds the first empty slot.
    #[must_use]
    pub fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(ItemStack::is_empty)
    }

    /// Creates a snapshot of the inventory for rollback.
    #[must_use]
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            slots: self.slots.clone(),
            used_slots: self.used_slots,
        }
    }

    /// Restores inventory from a snapshot (rollback).
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::SnapshotMismatch` if the snapshot was taken from
    /// an inventory with a different slot count. The inventory is left as is.
    pub fn restore(&mut self, snapshot: &InventorySnapshot) -> EconomyResult<()> {
        if snapshot.slots.len() != self.capacity() {
            return Err(EconomyError::SnapshotMismatch {
                snapshot_slots: snapshot.slots.len(),
                inventory_slots: self.capacity(),
            });
        }
        self.slots.clone_from(&snapshot.slots);
        self.used_slots = snapshot.used_slots;
        Ok(())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for Inventory {
    fn insert(&mut self, unit: UnitType, count: u32) -> u32 {
        if unit.item_id == 0 || unit.max_stack == 0 {
            return count;
        }

        let mut remaining = count;

        // Top up existing stacks
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }

            if slot.item_id == unit.item_id && slot.count < unit.max_stack {
                let can_add = (unit.max_stack - slot.count).min(remaining);
                slot.count += can_add;
                remaining -= can_add;
            }
        }

        // Then claim empty slots
        while remaining > 0 {
            let Some(slot_idx) = self.find_empty_slot() else {
                break;
            };
            let add_count = remaining.min(unit.max_stack);
            self.slots[slot_idx] = ItemStack::new(unit.item_id, add_count);
            self.used_slots += 1;
            remaining -= add_count;
        }

        remaining
    }

    fn remove(&mut self, item_id: ItemId, count: u32) -> u32 {
        if item_id == 0 {
            return count;
        }

        let mut remaining = count;

        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }

            if slot.item_id == item_id {
                let remove_count = slot.count.min(remaining);
                slot.count -= remove_count;
                remaining -= remove_count;

                if slot.count == 0 {
                    slot.clear();
                    self.used_slots = self.used_slots.saturating_sub(1);
                }
            }
        }

        remaining
    }

    fn stacks(&self) -> impl Iterator<Item = ItemStack> + '_ {
        self.slots.iter().copied().filter(|s| !s.is_empty())
    }
}

/// Snapshot of inventory state for transactional rollback.
#[derive(Clone, Debug)]
pub struct InventorySnapshot {
    slots: Box<[ItemStack]>,
    used_slots: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: UnitType = UnitType::new(1, 64);
    const PEARL: UnitType = UnitType::new(2, 16);

    #[test]
    fn test_insert_items() {
        let mut inv = Inventory::new();
        assert_eq!(inv.insert(GOLD, 10), 0);
        assert_eq!(inv.count_item(1), 10);
        assert_eq!(inv.used_slots(), 1);
    }

    #[test]
    fn test_insert_stacking() {
        let mut inv = Inventory::new();
        assert_eq!(inv.insert(GOLD, 64), 0);
        assert_eq!(inv.insert(GOLD, 10), 0);
        assert_eq!(inv.count_item(1), 74);
        assert_eq!(inv.used_slots(), 2);
    }

    #[test]
    fn test_insert_tops_up_partial_stack_first() {
        let mut inv = Inventory::with_slots(2);
        assert_eq!(inv.insert(PEARL, 10), 0);
        assert_eq!(inv.insert(PEARL, 6), 0);
        assert_eq!(inv.used_slots(), 1);
        assert_eq!(inv.get(0), Some(&ItemStack::new(2, 16)));
    }

    #[test]
    fn test_insert_reports_leftover_when_full() {
        let mut inv = Inventory::with_slots(1);
        assert_eq!(inv.insert(GOLD, 100), 36);
        assert_eq!(inv.count_item(1), 64);
        assert!(inv.is_full());

        // Full of gold, nothing else fits
        assert_eq!(inv.insert(PEARL, 5), 5);
    }

    #[test]
    fn test_insert_never_exceeds_stack_limit() {
        let mut inv = Inventory::with_slots(4);
        assert_eq!(inv.insert(PEARL, 50), 0);
        assert!(inv.stacks().all(|s| s.count <= PEARL.max_stack));
        assert_eq!(inv.used_slots(), 4);
        assert_eq!(inv.count_item(2), 50);
    }

    #[test]
    fn test_insert_rejects_degenerate_units() {
        let mut inv = Inventory::new();
        assert_eq!(inv.insert(UnitType::new(0, 64), 3), 3);
        assert_eq!(inv.insert(UnitType::new(5, 0), 3), 3);
        assert_eq!(inv.used_slots(), 0);
    }

    #[test]
    fn test_remove_items() {
        let mut inv = Inventory::new();
        assert_eq!(inv.insert(GOLD, 100), 0);
        assert_eq!(inv.remove(1, 30), 0);
        assert_eq!(inv.count_item(1), 70);
    }

    #[test]
    fn test_remove_insufficient_takes_what_is_there() {
        let mut inv = Inventory::new();
        assert_eq!(inv.insert(GOLD, 10), 0);
        assert_eq!(inv.remove(1, 20), 10);
        assert_eq!(inv.count_item(1), 0);
        assert_eq!(inv.used_slots(), 0);
        assert_eq!(inv.find_item(1), None);
    }

    #[test]
    fn test_stacks_skip_empty_slots() {
        let mut inv = Inventory::with_slots(8);
        assert_eq!(inv.insert(GOLD, 3), 0);
        assert_eq!(inv.insert(PEARL, 20), 0);
        let stacks: Vec<_> = inv.stacks().collect();
        assert_eq!(
            stacks,
            vec![
                ItemStack::new(1, 3),
                ItemStack::new(2, 16),
                ItemStack::new(2, 4)
            ]
        );
        assert_eq!(inv.free_slots(), 5);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut inv = Inventory::new();
        assert_eq!(inv.insert(GOLD, 50), 0);

        let snapshot = inv.snapshot();

        assert_eq!(inv.insert(PEARL, 30), 0);
        assert_eq!(inv.count_item(2), 30);

        inv.restore(&snapshot).unwrap();
        assert_eq!(inv.count_item(2), 0);
        assert_eq!(inv.count_item(1), 50);
    }

    #[test]
    fn test_restore_rejects_foreign_snapshot() {
        let mut small = Inventory::with_slots(1);
        assert_eq!(small.insert(PEARL, 3), 0);
        let mut big = Inventory::with_slots(4);
        assert_eq!(big.insert(GOLD, 5), 0);

        let result = small.restore(&big.snapshot());
        assert!(matches!(
            result,
            Err(EconomyError::SnapshotMismatch {
                snapshot_slots: 4,
                inventory_slots: 1
            })
        ));
        // Untouched
        assert_eq!(small.count_item(2), 3);
        assert_eq!(small.count_item(1), 0);
        assert_eq!(small.used_slots(), 1);

        big.restore(&Inventory::with_slots(4).snapshot()).unwrap();
        assert_eq!(big.count_item(1), 0);
        assert_eq!(big.used_slots(), 0);
    }

    #[test]
    fn test_capacity_is_fixed() {
        let mut inv = Inventory::with_slots(3);
        assert_eq!(inv.capacity(), 3);
        assert_eq!(inv.insert(PEARL, 100), 52);
        assert_eq!(inv.capacity(), 3);
        assert_eq!(inv.free_slots(), 0);
        assert_eq!(Inventory::new().capacity(), DEFAULT_INVENTORY_SLOTS);
    }
}
