//! I/O module
//!
//! Handles CSV export of the generated tables.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (headers, row serialization)

pub mod csv_format;

pub use csv_format::{write_balances_csv, write_clients_csv, write_points_csv};
