//! # Economy Error Types
//!
//! Errors raised while building schedules, loading currency configs, or
//! parsing amounts. Conversions themselves never fail: shortfall and overshoot
//! are reported through the returned value.

use thiserror::Error;

use crate::inventory::ItemId;

/// Errors that can occur in the economy system.
#[derive(Error, Debug)]
pub enum EconomyError {
    /// A denomination failed validation when a schedule was built.
    #[error("invalid denomination '{unit_name}': {reason}")]
    InvalidDenomination {
        /// Display name of the offending denomination.
        unit_name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two denominations in one schedule share an item type.
    #[error("item {item_id} is used by more than one denomination")]
    DuplicateUnit {
        /// The shared item id.
        item_id: ItemId,
    },

    /// A currency amount could not be parsed.
    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The raw input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A snapshot was restored into an inventory with a different slot count.
    #[error("snapshot has {snapshot_slots} slots, inventory has {inventory_slots}")]
    SnapshotMismatch {
        /// Slot count of the snapshot.
        snapshot_slots: usize,
        /// Slot count of the inventory it was restored into.
        inventory_slots: usize,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for EconomyError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
