//! Transaction ("benefit point") types for the benefit data generator
//!
//! This module defines the credit/debit direction flag and the individual
//! transaction row emitted by the reconciliation engine.

use super::balance::ClientCode;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Direction of a transaction
///
/// Amounts are always non-negative; the direction flag encodes sign.
/// Serialized as the integer flag downstream loaders expect:
/// credit = 1, debit = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Funds leaving the account
    Debit = 0,
    /// Funds entering the account
    Credit = 1,
}

impl Direction {
    /// The integer flag for this direction (credit = 1, debit = 0)
    pub fn flag(self) -> u8 {
        self as u8
    }
}

// Serialize as the bare integer flag rather than a variant name, so CSV
// output carries 0/1 in the DIRECTION column.
impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.flag())
    }
}

/// A single generated transaction
///
/// Each point belongs to exactly one client and one calendar day; the
/// timestamp is a uniformly random second within that day. Per day and
/// client, credits minus debits reproduce the tracked balance delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointRow {
    /// The client this transaction belongs to
    #[serde(rename = "CODE")]
    pub code: ClientCode,

    /// Credit (1) or debit (0)
    #[serde(rename = "DIRECTION")]
    pub direction: Direction,

    /// Timestamp within the transaction's day, [00:00:00, 23:59:59]
    #[serde(rename = "CREATED_AT")]
    pub created_at: NaiveDateTime,

    /// Non-negative transaction amount
    #[serde(rename = "CUST_SUM")]
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flags() {
        assert_eq!(Direction::Debit.flag(), 0);
        assert_eq!(Direction::Credit.flag(), 1);
    }
}
