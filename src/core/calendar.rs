//! Calendar helpers: date parsing and range enumeration
//!
//! Generator entry points accept dates either as native [`NaiveDate`] values
//! or as ISO `YYYY-MM-DD` text; the [`DateInput`] trait unifies the two.
//! [`date_range`] expands a start/end pair into the ordered, contiguous,
//! end-exclusive day sequence every per-client series is aligned to.

use crate::types::GeneratorError;
use chrono::{Duration, NaiveDate};

/// Date format accepted from text inputs
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date argument: either a native date or ISO `YYYY-MM-DD` text
///
/// Generator constructors are generic over this trait so callers can pass
/// whichever form is at hand:
///
/// ```
/// use benefit_datagen::core::calendar::DateInput;
/// use chrono::NaiveDate;
///
/// let from_text = "2024-01-15".resolve().unwrap();
/// let native = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().resolve().unwrap();
/// assert_eq!(from_text, native);
/// ```
pub trait DateInput {
    /// Resolve this input into a concrete date
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDate`] when text input does not parse
    /// as an ISO `YYYY-MM-DD` date.
    fn resolve(self) -> Result<NaiveDate, GeneratorError>;
}

impl DateInput for NaiveDate {
    fn resolve(self) -> Result<NaiveDate, GeneratorError> {
        Ok(self)
    }
}

impl DateInput for &str {
    fn resolve(self) -> Result<NaiveDate, GeneratorError> {
        NaiveDate::parse_from_str(self, ISO_DATE_FORMAT)
            .map_err(|e| GeneratorError::invalid_date(self, e))
    }
}

impl DateInput for String {
    fn resolve(self) -> Result<NaiveDate, GeneratorError> {
        self.as_str().resolve()
    }
}

/// Enumerate the calendar days in [start, end)
///
/// Returns the ordered, contiguous sequence of days starting at `start` and
/// stopping before `end`; its length is `(end - start)` in days. A zero or
/// negative range yields an empty sequence rather than an error.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let days = (end - start).num_days();
    if days <= 0 {
        return Vec::new();
    }

    (0..days).map(|offset| start + Duration::days(offset)).collect()
}
