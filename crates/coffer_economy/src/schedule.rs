//! # Denomination Schedule
//!
//! The parameter set for every conversion: which items count as money and
//! what each one is worth.
//!
//! A [`Schedule`] is validated once at construction and never mutated after
//! that. Adding a denomination produces a new schedule; callers that need to
//! swap schedules at runtime share them through `Arc` (see
//! [`crate::currency::CurrencyHandle`]).
//!
//! Denominations are kept sorted by value, largest first. Denominations with
//! equal value keep the order they were added in.

use std::collections::HashMap;
use std::fmt;

use crate::error::{EconomyError, EconomyResult};
use crate::inventory::{ItemId, ItemStack, UnitType};

/// A currency amount in atomic units.
pub type Value = i64;

/// One physical currency unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Denomination {
    /// Worth of a single unit, in atomic currency units.
    pub value: Value,
    /// The item representing this denomination.
    pub unit: UnitType,
    /// Display name for one unit.
    pub unit_name: String,
    /// Display name for several units.
    pub unit_name_plural: String,
}

impl Denomination {
    /// Creates a denomination whose plural name equals its singular name.
    #[must_use]
    pub fn new(unit: UnitType, value: Value, unit_name: impl Into<String>) -> Self {
        let unit_name = unit_name.into();
        Self {
            value,
            unit,
            unit_name_plural: unit_name.clone(),
            unit_name,
        }
    }

    /// Sets the plural display name.
    #[must_use]
    pub fn with_plural(mut self, unit_name_plural: impl Into<String>) -> Self {
        self.unit_name_plural = unit_name_plural.into();
        self
    }

    /// Display name matching `count`.
    #[must_use]
    pub fn name_for(&self, count: u64) -> &str {
        if count == 1 {
            &self.unit_name
        } else {
            &self.unit_name_plural
        }
    }

    fn validate(&self) -> EconomyResult<()> {
        let reason = if self.value <= 0 {
            format!("value must be positive, got {}", self.value)
        } else if self.unit.item_id == 0 {
            "item id 0 is reserved for empty slots".to_string()
        } else if self.unit.max_stack == 0 {
            "max stack must be at least 1".to_string()
        } else {
            return Ok(());
        };

        Err(EconomyError::InvalidDenomination {
            unit_name: self.unit_name.clone(),
            reason,
        })
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (value {}, item {}, stack {})",
            self.unit_name, self.value, self.unit.item_id, self.unit.max_stack
        )
    }
}

/// An immutable, validated list of denominations sorted by value descending.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    /// Largest value first.
    denominations: Vec<Denomination>,
    /// Item id -> index into `denominations`.
    by_item: HashMap<ItemId, usize>,
}

impl Schedule {
    /// Builds a schedule.
    ///
    /// # Errors
    ///
    /// Fails fast on a non-positive value, a zero stack limit, the reserved
    /// item id 0, or two denominations sharing an item.
    pub fn new(mut denominations: Vec<Denomination>) -> EconomyResult<Self> {
        for denomination in &denominations {
            denomination.validate()?;
        }

        // Stable: equal values keep insertion order
        denominations.sort_by(|a, b| b.value.cmp(&a.value));

        let mut by_item = HashMap::with_capacity(denominations.len());
        for (index, denomination) in denominations.iter().enumerate() {
            let item_id = denomination.unit.item_id;
            if by_item.insert(item_id, index).is_some() {
                return Err(EconomyError::DuplicateUnit { item_id });
            }
        }

        Ok(Self {
            denominations,
            by_item,
        })
    }

    /// A schedule with no denominations. Every conversion against it realizes 0.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new schedule with `denomination` added.
    ///
    /// # Errors
    ///
    /// Same validation as [`Schedule::new`].
    pub fn with_denomination(&self, denomination: Denomination) -> EconomyResult<Self> {
        let mut denominations = self.denominations.clone();
        denominations.push(denomination);
        Self::new(denominations)
    }

    /// Denominations, largest value first.
    #[inline]
    #[must_use]
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Denominations, smallest value first.
    pub fn ascending(&self) -> impl Iterator<Item = &Denomination> {
        self.denominations.iter().rev()
    }

    /// Looks up the denomination carried by an item.
    #[must_use]
    pub fn find(&self, item_id: ItemId) -> Option<&Denomination> {
        self.by_item.get(&item_id).map(|&i| &self.denominations[i])
    }

    /// The lowest-valued denomination.
    #[must_use]
    pub fn smallest(&self) -> Option<&Denomination> {
        self.denominations.last()
    }

    /// Worth of a stack, or 0 when its item is not money.
    #[must_use]
    pub fn value_of(&self, stack: ItemStack) -> i128 {
        self.find(stack.item_id)
            .map_or(0, |d| i128::from(stack.count) * i128::from(d.value))
    }

    /// Number of denominations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    /// True when there are no denominations.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }
}
