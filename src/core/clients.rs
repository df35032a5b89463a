//! Client record generator
//!
//! Produces onboarding records independently of the balance and transaction
//! tables: per client, an open date uniform within the requested window and,
//! for clients flagged as having operations, a first working date uniform
//! between the open date and the window end. The only shared machinery is
//! the client code sampler.

use crate::core::calendar::DateInput;
use crate::core::sampler::sample_client_codes;
use crate::types::{ClientRow, GeneratorError};
use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

/// Default chance that a client has operations at all
pub const DEFAULT_OPERATION_PROBABILITY: f64 = 0.9;

/// Generator for the client onboarding table
///
/// # Examples
///
/// ```
/// use benefit_datagen::core::clients::ClientGenerator;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let rows = ClientGenerator::new(10, "2024-01-01", "2024-01-31")
///     .unwrap()
///     .generate(&mut rng)
///     .unwrap();
///
/// assert_eq!(rows.len(), 10);
/// for row in &rows {
///     if let Some(first_working) = row.first_working_date {
///         assert!(row.open_date <= first_working);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClientGenerator {
    clients: usize,
    start: NaiveDate,
    end: NaiveDate,
    operation_probability: f64,
}

impl ClientGenerator {
    /// Create a generator for `clients` records over the inclusive window
    ///
    /// Dates are accepted as native values or ISO `YYYY-MM-DD` text. The
    /// operation probability starts at [`DEFAULT_OPERATION_PROBABILITY`];
    /// override it with [`Self::with_operation_probability`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDate`] when a text date does not
    /// parse.
    pub fn new(
        clients: usize,
        start: impl DateInput,
        end: impl DateInput,
    ) -> Result<Self, GeneratorError> {
        Ok(ClientGenerator {
            clients,
            start: start.resolve()?,
            end: end.resolve()?,
            operation_probability: DEFAULT_OPERATION_PROBABILITY,
        })
    }

    /// Set the chance that a client has operations
    pub fn with_operation_probability(mut self, probability: f64) -> Self {
        self.operation_probability = probability;
        self
    }

    /// Generate the client table
    ///
    /// Open dates fall within [start, end] inclusive; a first working date,
    /// when present, falls within [open, end]. Both are emitted as midnight
    /// datetimes. Zero clients yields an empty table regardless of the
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDateWindow`] when the window end
    /// precedes its start, and [`GeneratorError::IdSpaceExhausted`] for
    /// oversized client counts.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<ClientRow>, GeneratorError> {
        if self.clients == 0 {
            return Ok(Vec::new());
        }
        if self.end < self.start {
            return Err(GeneratorError::invalid_date_window(self.start, self.end));
        }

        let codes = sample_client_codes(self.clients, rng)?;
        let window_days = (self.end - self.start).num_days();

        let mut rows = Vec::with_capacity(codes.len());
        for code in codes {
            let open = self.start + Duration::days(rng.gen_range(0..=window_days));

            let first_working_date = if rng.gen::<f64>() < self.operation_probability {
                let days_since_open = rng.gen_range(0..=(self.end - open).num_days());
                Some((open + Duration::days(days_since_open)).and_time(NaiveTime::MIN))
            } else {
                None
            };

            rows.push(ClientRow {
                code,
                open_date: open.and_time(NaiveTime::MIN),
                first_working_date,
            });
        }

        Ok(rows)
    }
}

/// Generate a client table with the default operation probability
///
/// Convenience wrapper over [`ClientGenerator`] for callers that do not
/// need to tune the operation probability.
///
/// # Errors
///
/// Propagates the same errors as [`ClientGenerator::new`] and
/// [`ClientGenerator::generate`].
pub fn generate_client_data<R: Rng>(
    clients: usize,
    start: impl DateInput,
    end: impl DateInput,
    rng: &mut R,
) -> Result<Vec<ClientRow>, GeneratorError> {
    ClientGenerator::new(clients, start, end)?.generate(rng)
}
