//! # Coffer Economy
//!
//! Money as physical coins. A value is stored as a countable pile of unit
//! items inside a bounded inventory, and this crate converts between the two.
//!
//! ## Design Principles
//!
//! 1. **Integer only** - values are `i64` atomic units, intermediates `i128`
//! 2. **Never fails mid-conversion** - shortfall and overshoot are reported
//!    through the returned value, never as errors
//! 3. **Fail fast on config** - bad denominations are rejected when a
//!    schedule is built
//! 4. **External configuration** - currencies live in TOML files
//!
//! ## Thread Safety
//!
//! Conversions take `&mut` to the container, so each call has it to itself.
//! Schedules are immutable and shared by `Arc`; [`CurrencyHandle`] swaps the
//! active currency on reload without disturbing calls already in flight.
//!
//! ## Example
//!
//! ```rust
//! use coffer_economy::{deposit, withdraw, balance, Denomination, Inventory, Schedule, UnitType};
//!
//! let schedule = Schedule::new(vec![
//!     Denomination::new(UnitType::stackable(1), 1, "Penny"),
//!     Denomination::new(UnitType::stackable(2), 5, "Nickel"),
//!     Denomination::new(UnitType::stackable(3), 10, "Dime"),
//! ])?;
//! let mut inventory = Inventory::new();
//!
//! assert_eq!(deposit(&mut inventory, &schedule, 23), 23);
//! assert_eq!(balance(&inventory, &schedule), 23);
//! assert_eq!(withdraw(&mut inventory, &schedule, 23), 23);
//! # Ok::<(), coffer_economy::EconomyError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod container;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod inventory;
pub mod schedule;

pub use config::{CurrencyConfig, DenominationConfig};
pub use container::Container;
pub use currency::{Currency, CurrencyHandle};
pub use error::{EconomyError, EconomyResult};
pub use exchange::{balance, deposit, withdraw, Purse};
pub use inventory::{Inventory, InventorySnapshot, ItemId, ItemStack, UnitType};
pub use schedule::{Denomination, Schedule, Value};
