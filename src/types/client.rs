//! Client record types for the benefit data generator

use super::balance::ClientCode;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Client onboarding record
///
/// The open date always falls inside the requested window. The first
/// working date is present only for clients flagged as having operations;
/// when present it falls on or after the open date and on or before the
/// window end. Both are carried as midnight datetimes so the serialized
/// table has a uniform datetime column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRow {
    /// The client code
    #[serde(rename = "CODE")]
    pub code: ClientCode,

    /// Date the client account was opened
    #[serde(rename = "OPEN_DATE")]
    pub open_date: NaiveDateTime,

    /// Date of the client's first activity, if any
    ///
    /// `None` marks a client with no operations; serialized as an empty
    /// field rather than a sentinel date.
    #[serde(rename = "FIRST_WORKING_DATE")]
    pub first_working_date: Option<NaiveDateTime>,
}
