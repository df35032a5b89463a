//! CSV export for the generated tables
//!
//! One writer per table, serializing rows with the column headers
//! downstream loaders expect (CODE, BAL_DATE, VALUE, ...). Headers are
//! written explicitly so an empty table still produces its column set.
//! All functions take a plain `Write` sink, so tests can capture output in
//! memory.

use crate::types::{BalanceRow, ClientRow, GeneratorError, PointRow};
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// Column headers of the balance table
const BALANCE_HEADERS: [&str; 3] = ["CODE", "BAL_DATE", "VALUE"];

/// Column headers of the transaction table
const POINT_HEADERS: [&str; 4] = ["CODE", "DIRECTION", "CREATED_AT", "CUST_SUM"];

/// Column headers of the client table
const CLIENT_HEADERS: [&str; 3] = ["CODE", "OPEN_DATE", "FIRST_WORKING_DATE"];

/// Write one table: explicit header record, then serialized rows
fn write_table<T: Serialize>(
    headers: &[&str],
    rows: &[T],
    output: &mut dyn Write,
) -> Result<(), GeneratorError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the balance table as CSV
///
/// Columns: CODE, BAL_DATE, VALUE. Rows keep generation order.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] or [`GeneratorError::Csv`] when the sink
/// rejects a write.
pub fn write_balances_csv(
    rows: &[BalanceRow],
    output: &mut dyn Write,
) -> Result<(), GeneratorError> {
    write_table(&BALANCE_HEADERS, rows, output)
}

/// Write the transaction table as CSV
///
/// Columns: CODE, DIRECTION (1 = credit, 0 = debit), CREATED_AT, CUST_SUM.
/// Rows keep generation order.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] or [`GeneratorError::Csv`] when the sink
/// rejects a write.
pub fn write_points_csv(rows: &[PointRow], output: &mut dyn Write) -> Result<(), GeneratorError> {
    write_table(&POINT_HEADERS, rows, output)
}

/// Write the client table as CSV
///
/// Columns: CODE, OPEN_DATE, FIRST_WORKING_DATE. An absent first working
/// date is written as an empty field.
///
/// # Errors
///
/// Returns [`GeneratorError::Io`] or [`GeneratorError::Csv`] when the sink
/// rejects a write.
pub fn write_clients_csv(
    rows: &[ClientRow],
    output: &mut dyn Write,
) -> Result<(), GeneratorError> {
    write_table(&CLIENT_HEADERS, rows, output)
}
