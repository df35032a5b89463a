//! Persist-or-resample balance walk
//!
//! Produces one client's daily balance series: the walk keeps a current
//! value, initialized uniformly within the balance range, and on each day
//! either persists it (with the configured no-change probability) or
//! redraws it uniformly from the range. Redraws are independent of the
//! previous value, so a redraw may land on the same balance again.

use crate::types::GeneratorError;
use rand::Rng;

/// Generate a daily balance series of `days` values within [min, max]
///
/// # Arguments
///
/// * `days` - Length of the series to produce
/// * `min_balance` - Inclusive lower balance bound
/// * `max_balance` - Inclusive upper balance bound
/// * `no_change_probability` - Chance that a day repeats the previous value
/// * `rng` - Random number source to draw from
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidBalanceRange`] when `min_balance`
/// exceeds `max_balance`.
pub fn balance_walk<R: Rng>(
    days: usize,
    min_balance: i64,
    max_balance: i64,
    no_change_probability: f64,
    rng: &mut R,
) -> Result<Vec<i64>, GeneratorError> {
    if min_balance > max_balance {
        return Err(GeneratorError::invalid_balance_range(min_balance, max_balance));
    }

    let mut values = Vec::with_capacity(days);
    let mut current = rng.gen_range(min_balance..=max_balance);

    for _ in 0..days {
        if rng.gen::<f64>() < no_change_probability {
            values.push(current);
        } else {
            current = rng.gen_range(min_balance..=max_balance);
            values.push(current);
        }
    }

    Ok(values)
}
