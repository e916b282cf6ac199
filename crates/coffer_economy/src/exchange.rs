//! # Exchange - Value <-> Coins
//!
//! Converts between an integer value and physical coins in a [`Container`].
//!
//! ## Policy
//!
//! ```text
//! deposit:  largest denomination first, floor(remaining / value) units each
//! withdraw: smallest denomination first, ceil(remaining / value) units each
//! ```
//!
//! Both walk each denomination in chunks no larger than its stack limit and
//! give up on that denomination at the first chunk the container only partly
//! honours. Neither ever fails: a deposit that runs out of room and a
//! withdrawal that runs out of coins simply realize less than requested, and
//! a withdrawal may realize more (rounded up to whole coins). The caller
//! compares the returned value against the request.
//!
//! This is a fixed greedy walk, not a search for the fewest coins.

use tracing::{debug, trace};

use crate::container::Container;
use crate::schedule::{Schedule, Value};

/// Total worth of the coins in `container`.
///
/// Stacks of items that are not in the schedule count as 0.
#[must_use]
pub fn balance<C: Container>(container: &C, schedule: &Schedule) -> Value {
    let total: i128 = container.stacks().map(|s| schedule.value_of(s)).sum();
    saturate(total)
}

/// Inserts coins worth at most `requested` into `container`.
///
/// Returns the value actually placed, always in `0..=requested`. The
/// difference is what did not fit or could not be composed from the schedule.
pub fn deposit<C: Container>(container: &mut C, schedule: &Schedule, requested: Value) -> Value {
    if requested <= 0 {
        return 0;
    }

    let mut remaining = requested;

    for denomination in schedule.denominations() {
        let value = denomination.value;
        if value > remaining {
            continue;
        }

        let mut wanted = remaining / value;
        while wanted > 0 {
            let chunk = chunk_size(i128::from(wanted), denomination.unit.max_stack);
            let leftover = container.insert(denomination.unit, chunk);
            let placed = i64::from(chunk.saturating_sub(leftover));

            // placed <= wanted, so placed * value <= remaining
            wanted -= placed;
            remaining -= placed * value;

            trace!(
                item_id = denomination.unit.item_id,
                chunk,
                leftover,
                remaining,
                "deposit chunk"
            );

            if leftover > 0 {
                break;
            }
        }
    }

    let deposited = requested - remaining;
    debug!(requested, deposited, "deposit complete");
    deposited
}

/// Removes coins worth at least `requested` from `container` where possible.
///
/// Returns the value actually removed. It exceeds `requested` when the
/// request is not a whole number of the coins taken (overshoot), and falls
/// below it when the container does not hold enough.
///
/// An overshoot that would push the result past `Value::MAX` is reported as
/// `Value::MAX`; the coins are still removed. This needs denominations close
/// to `i64::MAX` in value.
pub fn withdraw<C: Container>(container: &mut C, schedule: &Schedule, requested: Value) -> Value {
    if requested <= 0 {
        return 0;
    }

    // Goes negative on overshoot
    let mut remaining = i128::from(requested);

    for denomination in schedule.ascending() {
        let value = i128::from(denomination.value);

        let mut wanted = ceil_div(remaining, value);
        while wanted > 0 {
            let chunk = chunk_size(wanted, denomination.unit.max_stack);
            let shortfall = container.remove(denomination.unit.item_id, chunk);
            let removed = i128::from(chunk.saturating_sub(shortfall));

            wanted -= removed;
            remaining -= removed * value;

            trace!(
                item_id = denomination.unit.item_id,
                chunk,
                shortfall,
                "withdraw chunk"
            );

            if shortfall > 0 {
                break;
            }
        }
    }

    let withdrawn = saturate(i128::from(requested) - remaining);
    debug!(requested, withdrawn, "withdraw complete");
    withdrawn
}

/// One container bound to one schedule, the way an account sees its coins.
pub struct Purse<'a, C> {
    container: &'a mut C,
    schedule: &'a Schedule,
}

impl<'a, C: Container> Purse<'a, C> {
    /// Binds `container` to `schedule`.
    pub fn new(container: &'a mut C, schedule: &'a Schedule) -> Self {
        Self {
            container,
            schedule,
        }
    }

    /// See [`balance`].
    #[must_use]
    pub fn balance(&self) -> Value {
        balance(&*self.container, self.schedule)
    }

    /// See [`deposit`].
    pub fn deposit(&mut self, value: Value) -> Value {
        deposit(&mut *self.container, self.schedule, value)
    }

    /// See [`withdraw`].
    pub fn withdraw(&mut self, value: Value) -> Value {
        withdraw(&mut *self.container, self.schedule, value)
    }

    /// True when the purse holds coins worth at least `value`.
    #[must_use]
    pub fn has_at_least(&self, value: Value) -> bool {
        self.balance() >= value
    }
}

/// Units to move in the next chunk: `wanted`, capped at one full stack.
fn chunk_size(wanted: i128, max_stack: u32) -> u32 {
    u32::try_from(wanted).map_or(max_stack, |w| w.min(max_stack))
}

/// Ceiling division for a positive divisor; 0 when `n <= 0`.
fn ceil_div(n: i128, d: i128) -> i128 {
    if n <= 0 {
        0
    } else {
        (n + d - 1) / d
    }
}

fn saturate(value: i128) -> Value {
    Value::try_from(value).unwrap_or(if value < 0 { Value::MIN } else { Value::MAX })
}
