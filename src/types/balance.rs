//! Balance table types for the benefit data generator
//!
//! This module defines the client code identifier and the daily balance
//! snapshot row that the balance table builder emits and the reconciliation
//! engine consumes.

use chrono::NaiveDate;
use serde::Serialize;

/// Client code identifier
///
/// Codes are drawn from the eight-digit space [10,000,000, 99,999,999]
/// and are unique within a single generation run.
pub type ClientCode = u32;

/// Daily balance snapshot for one client
///
/// The collection of rows for one client forms an ordered time series:
/// dates are contiguous with no gaps, strictly increasing, covering the
/// requested [start, end) range. Serialized field names match the table
/// columns consumed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceRow {
    /// The client this snapshot belongs to
    #[serde(rename = "CODE")]
    pub code: ClientCode,

    /// Calendar day of the snapshot
    #[serde(rename = "BAL_DATE")]
    pub bal_date: NaiveDate,

    /// Account balance at the start of the day
    #[serde(rename = "VALUE")]
    pub value: i64,
}
