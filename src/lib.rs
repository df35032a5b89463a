//! Benefit Data Generator Library
//! # Overview
//!
//! This library synthesizes realistic, internally-consistent tabular test
//! data for a financial account/benefits domain: client records, daily
//! account balances, and individual credit/debit transactions ("points")
//! that reconcile to those balances. It exists to populate a database or
//! fixture set for downstream testing without touching real customer data.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Row and error types (BalanceRow, PointRow, ClientRow, ...)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Generation logic:
//!   - [`core::sampler`] - unique client code sampling
//!   - [`core::calendar`] - date parsing and range enumeration
//!   - [`core::walk`] - persist-or-resample balance walk
//!   - [`core::balances`] - balance table builder
//!   - [`core::points`] - transaction reconciliation engine
//!   - [`core::clients`] - client onboarding record generator
//! - [`io`] - CSV export of the generated tables
//!
//! # Reconciliation
//!
//! The reconciliation engine is the only non-trivial piece: it folds over
//! each client's date-ordered balance series, turns each day's delta into
//! credit and debit totals that net to it, splits the totals into a random
//! number of transactions, and occasionally injects a tracked-balance
//! mismatch so the emitted stream carries realistic data-quality noise.
//!
//! # Randomness
//!
//! Every generator takes an explicit `&mut impl Rng`; there is no ambient
//! random state. Seeding a [`rand::rngs::StdRng`] makes a whole run
//! reproducible:
//!
//! ```
//! use benefit_datagen::{generate_benefit_balances, generate_benefit_points};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let balances =
//!     generate_benefit_balances(3, "2024-01-01", "2024-01-08", 0, 10_000, &mut rng).unwrap();
//! let points = generate_benefit_points(&balances, &mut rng);
//!
//! assert_eq!(balances.len(), 3 * 7);
//! assert!(points.iter().all(|p| p.amount >= 0));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    generate_benefit_balances, generate_benefit_points, generate_client_data, BalanceGenerator,
    ClientGenerator, DateInput, PointsEngine,
};
pub use io::{write_balances_csv, write_clients_csv, write_points_csv};
pub use types::{BalanceRow, ClientCode, ClientRow, Direction, GeneratorError, PointRow};
