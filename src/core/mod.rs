//! Core generation logic
//!
//! This module contains the data generation components:
//! - `sampler` - unique client code sampling
//! - `calendar` - date parsing and end-exclusive range enumeration
//! - `walk` - persist-or-resample daily balance walk
//! - `balances` - balance table builder composing the three above
//! - `points` - transaction reconciliation engine (the core)
//! - `clients` - client onboarding record generator

pub mod balances;
pub mod calendar;
pub mod clients;
pub mod points;
pub mod sampler;
pub mod walk;

pub use balances::{generate_benefit_balances, BalanceGenerator};
pub use calendar::{date_range, DateInput};
pub use clients::{generate_client_data, ClientGenerator};
pub use points::{generate_benefit_points, split_amount, PointsEngine};
pub use sampler::{sample_client_codes, CODE_MAX, CODE_MIN};
pub use walk::balance_walk;
