//! Balance table builder
//!
//! Composes the client code sampler, the calendar range and the balance walk
//! into a flat row-per-(client, date) table. No reconciliation logic lives
//! here: the table is pure cartesian composition, and is the sole input of
//! the reconciliation engine in [`crate::core::points`].

use crate::core::calendar::{date_range, DateInput};
use crate::core::sampler::sample_client_codes;
use crate::core::walk::balance_walk;
use crate::types::{BalanceRow, GeneratorError};
use chrono::NaiveDate;
use rand::Rng;

/// Default chance that a client's balance repeats the previous day's value
pub const DEFAULT_NO_CHANGE_PROBABILITY: f64 = 0.3;

/// Generator for the daily balance table
///
/// Produces one [`BalanceRow`] per (client, date) pair: `clients` distinct
/// codes, each carrying a persist-or-resample balance series aligned to the
/// end-exclusive [start, end) day sequence.
///
/// # Examples
///
/// ```
/// use benefit_datagen::core::balances::BalanceGenerator;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let rows = BalanceGenerator::new(3, "2024-01-01", "2024-01-10", 100, 200)
///     .unwrap()
///     .generate(&mut rng)
///     .unwrap();
///
/// // 3 clients x 9 days
/// assert_eq!(rows.len(), 27);
/// ```
#[derive(Debug, Clone)]
pub struct BalanceGenerator {
    clients: usize,
    start: NaiveDate,
    end: NaiveDate,
    min_balance: i64,
    max_balance: i64,
    no_change_probability: f64,
}

impl BalanceGenerator {
    /// Create a generator for `clients` accounts over the [start, end) range
    ///
    /// Dates are accepted as native values or ISO `YYYY-MM-DD` text. The
    /// no-change probability starts at [`DEFAULT_NO_CHANGE_PROBABILITY`];
    /// override it with [`Self::with_no_change_probability`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDate`] when a text date does not
    /// parse.
    pub fn new(
        clients: usize,
        start: impl DateInput,
        end: impl DateInput,
        min_balance: i64,
        max_balance: i64,
    ) -> Result<Self, GeneratorError> {
        Ok(BalanceGenerator {
            clients,
            start: start.resolve()?,
            end: end.resolve()?,
            min_balance,
            max_balance,
            no_change_probability: DEFAULT_NO_CHANGE_PROBABILITY,
        })
    }

    /// Set the chance that a day repeats the previous day's balance
    pub fn with_no_change_probability(mut self, probability: f64) -> Self {
        self.no_change_probability = probability;
        self
    }

    /// Generate the balance table
    ///
    /// Row count is `clients * days`. Rows are emitted client-major, dates
    /// ascending within a client; every value lies within the configured
    /// balance range.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::IdSpaceExhausted`] for oversized client
    /// counts and [`GeneratorError::InvalidBalanceRange`] when the balance
    /// range is inverted.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<BalanceRow>, GeneratorError> {
        let codes = sample_client_codes(self.clients, rng)?;
        let dates = date_range(self.start, self.end);

        let mut rows = Vec::with_capacity(codes.len() * dates.len());
        for code in codes {
            let values = balance_walk(
                dates.len(),
                self.min_balance,
                self.max_balance,
                self.no_change_probability,
                rng,
            )?;

            for (bal_date, value) in dates.iter().copied().zip(values) {
                rows.push(BalanceRow { code, bal_date, value });
            }
        }

        Ok(rows)
    }
}

/// Generate a balance table with the default no-change probability
///
/// Convenience wrapper over [`BalanceGenerator`] for callers that do not
/// need to tune the walk.
///
/// # Errors
///
/// Propagates the same errors as [`BalanceGenerator::new`] and
/// [`BalanceGenerator::generate`].
pub fn generate_benefit_balances<R: Rng>(
    clients: usize,
    start: impl DateInput,
    end: impl DateInput,
    min_balance: i64,
    max_balance: i64,
    rng: &mut R,
) -> Result<Vec<BalanceRow>, GeneratorError> {
    BalanceGenerator::new(clients, start, end, min_balance, max_balance)?.generate(rng)
}
