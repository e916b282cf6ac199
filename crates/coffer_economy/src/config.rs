//! # Currency Configuration
//!
//! Currencies are defined in external TOML files and loaded at startup (and
//! again on reload):
//!
//! ```toml
//! name = "Crown"
//! name_plural = "Crowns"
//! digits = 2
//!
//! [[denomination]]
//! item_id = 266
//! value = 100
//! unit_name = "Crown"
//! unit_name_plural = "Crowns"
//!
//! [[denomination]]
//! item_id = 371
//! max_stack = 64
//! value = 1
//! unit_name = "Penny"
//! unit_name_plural = "Pennies"
//! ```
//!
//! Values are atomic units. Everything is validated by [`CurrencyConfig::build`].

use std::path::Path;

use serde::Deserialize;

use crate::currency::Currency;
use crate::error::EconomyResult;
use crate::inventory::{ItemId, UnitType, DEFAULT_MAX_STACK};
use crate::schedule::{Denomination, Schedule, Value};

const fn default_digits() -> u8 {
    2
}

const fn default_max_stack() -> u32 {
    DEFAULT_MAX_STACK
}

/// Top-level currency file.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurrencyConfig {
    /// Singular currency name.
    pub name: String,
    /// Plural currency name. Defaults to `name`.
    #[serde(default)]
    pub name_plural: Option<String>,
    /// Fractional digits shown. Defaults to 2.
    #[serde(default = "default_digits")]
    pub digits: u8,
    /// Denominations, in any order.
    #[serde(default, rename = "denomination")]
    pub denominations: Vec<DenominationConfig>,
}

/// One `[[denomination]]` entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DenominationConfig {
    /// Item carrying the value.
    pub item_id: ItemId,
    /// Units per slot. Defaults to [`DEFAULT_MAX_STACK`].
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Worth of one unit in atomic units.
    pub value: Value,
    /// Singular unit name.
    pub unit_name: String,
    /// Plural unit name. Defaults to `unit_name`.
    #[serde(default)]
    pub unit_name_plural: Option<String>,
}

impl DenominationConfig {
    fn to_denomination(&self) -> Denomination {
        let denomination = Denomination::new(
            UnitType::new(self.item_id, self.max_stack),
            self.value,
            self.unit_name.as_str(),
        );
        match &self.unit_name_plural {
            Some(plural) => denomination.with_plural(plural.as_str()),
            None => denomination,
        }
    }
}

impl CurrencyConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> EconomyResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::Io` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_path(path: impl AsRef<Path>) -> EconomyResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the config into a [`Currency`].
    ///
    /// # Errors
    ///
    /// Any denomination or currency validation error.
    pub fn build(&self) -> EconomyResult<Currency> {
        let schedule = Schedule::new(
            self.denominations
                .iter()
                .map(DenominationConfig::to_denomination)
                .collect(),
        )?;

        Currency::new(
            self.name.as_str(),
            self.name_plural.as_deref().unwrap_or(&self.name),
            self.digits,
            schedule,
        )
    }
}
