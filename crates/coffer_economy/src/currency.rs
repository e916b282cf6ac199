//! # Currency
//!
//! Names, display precision and the active [`Schedule`] of one currency, plus
//! [`CurrencyHandle`] for swapping the whole thing on reload.
//!
//! Values are atomic units. With `digits = 2`, the value `1234` displays as
//! `12.34`. Formatting and parsing are integer-only.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::config::CurrencyConfig;
use crate::error::{EconomyError, EconomyResult};
use crate::schedule::{Denomination, Schedule, Value};

/// Most fractional digits a currency may display. `10^18` still fits in `i64`.
pub const MAX_DIGITS: u8 = 18;

/// A currency: display names, precision, and its denominations.
#[derive(Clone, Debug)]
pub struct Currency {
    name: String,
    name_plural: String,
    digits: u8,
    schedule: Arc<Schedule>,
}

impl Currency {
    /// Creates a currency.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidConfig` if `digits` exceeds [`MAX_DIGITS`].
    pub fn new(
        name: impl Into<String>,
        name_plural: impl Into<String>,
        digits: u8,
        schedule: Schedule,
    ) -> EconomyResult<Self> {
        if digits > MAX_DIGITS {
            return Err(EconomyError::InvalidConfig(format!(
                "digits must be at most {MAX_DIGITS}, got {digits}"
            )));
        }

        Ok(Self {
            name: name.into(),
            name_plural: name_plural.into(),
            digits,
            schedule: Arc::new(schedule),
        })
    }

    /// Singular display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plural display name.
    #[must_use]
    pub fn name_plural(&self) -> &str {
        &self.name_plural
    }

    /// Number of fractional digits shown.
    #[must_use]
    pub const fn digits(&self) -> u8 {
        self.digits
    }

    /// The denominations in effect.
    #[must_use]
    pub fn schedule(&self) -> &Arc<Schedule> {
        &self.schedule
    }

    /// Atomic units per displayed whole unit (`10^digits`).
    #[must_use]
    pub fn scale(&self) -> Value {
        10_i64.pow(u32::from(self.digits))
    }

    /// Returns a copy of this currency with one more denomination.
    ///
    /// # Errors
    ///
    /// Fails if the denomination does not validate against the schedule.
    pub fn with_denomination(&self, denomination: Denomination) -> EconomyResult<Self> {
        Ok(Self {
            schedule: Arc::new(self.schedule.with_denomination(denomination)?),
            ..self.clone()
        })
    }

    /// Renders the numeric part of a value, e.g. `-12.05`.
    #[must_use]
    pub fn format_amount(&self, value: Value) -> String {
        let sign = if value < 0 { "-" } else { "" };
        let magnitude = value.unsigned_abs();

        if self.digits == 0 {
            return format!("{sign}{magnitude}");
        }

        let scale = self.scale().unsigned_abs();
        let width = usize::from(self.digits);
        format!(
            "{sign}{}.{:0width$}",
            magnitude / scale,
            magnitude % scale,
        )
    }

    /// Renders a value with the currency name, e.g. `12.34 Crowns`.
    ///
    /// The singular name is used for exactly one displayed unit.
    #[must_use]
    pub fn format_value(&self, value: Value) -> String {
        let name = if value == self.scale() {
            &self.name
        } else {
            &self.name_plural
        };
        format!("{} {name}", self.format_amount(value))
    }

    /// Parses a displayed amount such as `12.34`, `-3` or `.5` into atomic
    /// units. Accepts every string [`format_amount`](Self::format_amount)
    /// produces, `Value::MIN` included.
    ///
    /// # Errors
    ///
    /// Returns `EconomyError::InvalidAmount` on empty input, non-digit
    /// characters, more fractional digits than the currency shows, or a value
    /// that does not fit in `i64`.
    pub fn parse_value(&self, input: &str) -> EconomyResult<Value> {
        let invalid = |reason: &str| EconomyError::InvalidAmount {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("no digits"));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits"));
        }
        if frac.len() > usize::from(self.digits) {
            return Err(invalid("too many decimal places"));
        }

        let overflow = || invalid("amount too large");

        // i128 so that the magnitude of Value::MIN still parses
        let whole_units = if whole.is_empty() {
            0
        } else {
            whole.parse::<i128>().map_err(|_| overflow())?
        };

        // Right-pad the fraction to `digits`
        let frac_units = if frac.is_empty() {
            0
        } else {
            let pad = u32::from(self.digits) - u32::try_from(frac.len()).map_err(|_| overflow())?;
            frac.parse::<i128>().map_err(|_| overflow())? * 10_i128.pow(pad)
        };

        let magnitude = whole_units
            .checked_mul(i128::from(self.scale()))
            .and_then(|v| v.checked_add(frac_units))
            .ok_or_else(overflow)?;

        Value::try_from(if negative { -magnitude } else { magnitude }).map_err(|_| overflow())
    }

    /// Human-readable listing of the currency and its denominations.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.schedule.len() + 2);
        lines.push(format!(
            "{} / {} ({} digits)",
            self.name, self.name_plural, self.digits
        ));
        lines.push("Denominations:".to_string());

        for denomination in self.schedule.denominations() {
            lines.push(format!(
                " - {}: {} (item {})",
                denomination.unit_name,
                self.format_value(denomination.value),
                denomination.unit.item_id
            ));
        }

        lines
    }
}

/// Shared, swappable access to the active currency.
///
/// Readers take an `Arc` snapshot once per operation; a concurrent
/// [`replace`](Self::replace) never changes the schedule under them.
#[derive(Debug)]
pub struct CurrencyHandle {
    current: RwLock<Arc<Currency>>,
}

impl CurrencyHandle {
    /// Wraps the initial currency.
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            current: RwLock::new(Arc::new(currency)),
        }
    }

    /// Snapshot of the active currency.
    #[must_use]
    pub fn current(&self) -> Arc<Currency> {
        Arc::clone(&*self.current.read())
    }

    /// Swaps in a new currency and returns the previous one.
    pub fn replace(&self, currency: Currency) -> Arc<Currency> {
        info!(
            name = %currency.name,
            denominations = currency.schedule.len(),
            "currency replaced"
        );
        std::mem::replace(&mut *self.current.write(), Arc::new(currency))
    }

    /// Loads a currency config from disk and swaps it in.
    ///
    /// # Errors
    ///
    /// On any read, parse or validation error the active currency is kept.
    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> EconomyResult<Arc<Currency>> {
        let currency = Arc::new(CurrencyConfig::from_path(path)?.build()?);
        info!(
            name = %currency.name,
            denominations = currency.schedule.len(),
            "currency reloaded"
        );
        *self.current.write() = Arc::clone(&currency);
        Ok(currency)
    }
}
