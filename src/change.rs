//! Making change with US coins.

use std::collections::BTreeMap;
use std::convert::TryFrom;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Coin values in cents, largest first: quarter, dime, nickel, penny.
pub const COIN_DENOMINATIONS: [u32; 4] = [25, 10, 5, 1];

/// Splits `amount` cents into coins, greedily taking as many of the largest
/// coin as fit before moving to the next. Every denomination appears in the
/// result, with a count of zero if it isn't needed.
///
/// # Errors
///
/// [`Error::NegativeAmount`] if `amount` is below zero.
///
/// # Examples
///
/// ```
/// use exercises::change::make_change;
///
/// let coins = make_change(41).unwrap();
/// assert_eq!(coins[&25], 1);
/// assert_eq!(coins[&10], 1);
/// assert_eq!(coins[&5], 1);
/// assert_eq!(coins[&1], 1);
///
/// assert!(make_change(-1).is_err());
/// ```
pub fn make_change(amount: i64) -> Result<BTreeMap<u32, u64>> {
    let mut remaining = u64::try_from(amount).map_err(|_| {
        warn!(amount, "refusing to make change for a negative amount");
        Error::NegativeAmount(amount)
    })?;

    let mut counts = BTreeMap::new();
    for &denomination in COIN_DENOMINATIONS.iter() {
        let denomination_value = u64::from(denomination);
        counts.insert(denomination, remaining / denomination_value);
        remaining %= denomination_value;
    }

    debug!(amount, ?counts, "made change");
    Ok(counts)
}
