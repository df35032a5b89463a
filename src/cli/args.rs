use crate::core::balances::DEFAULT_NO_CHANGE_PROBABILITY;
use crate::core::clients::DEFAULT_OPERATION_PROBABILITY;
use crate::core::points::{DEFAULT_MAX_TRANSACTIONS_PER_DAY, DEFAULT_MISMATCH_PROBABILITY};
use clap::Parser;
use std::path::PathBuf;

/// Generate consistent benefit fixture tables
#[derive(Parser, Debug)]
#[command(name = "benefit-datagen")]
#[command(
    about = "Generate internally-consistent benefit balance, transaction and client fixture tables",
    long_about = None
)]
pub struct CliArgs {
    /// Directory the CSV tables are written into
    #[arg(value_name = "OUT_DIR", default_value = ".", help = "Output directory for the CSV tables")]
    pub out_dir: PathBuf,

    /// Number of clients in each generated table
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 100,
        help = "Number of clients per table"
    )]
    pub clients: usize,

    /// First day of the balance range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", help = "First balance day (YYYY-MM-DD)")]
    pub start: String,

    /// Day after the last balance day (YYYY-MM-DD); also the end of the
    /// client open-date window
    #[arg(long, value_name = "DATE", help = "Day after the last balance day (YYYY-MM-DD)")]
    pub end: String,

    /// Inclusive lower balance bound
    #[arg(
        long = "min-balance",
        value_name = "AMOUNT",
        default_value_t = 0,
        help = "Inclusive lower balance bound"
    )]
    pub min_balance: i64,

    /// Inclusive upper balance bound
    #[arg(
        long = "max-balance",
        value_name = "AMOUNT",
        default_value_t = 100_000,
        help = "Inclusive upper balance bound"
    )]
    pub max_balance: i64,

    /// Chance that a day repeats the previous day's balance
    #[arg(
        long = "no-change-prob",
        value_name = "PROB",
        default_value_t = DEFAULT_NO_CHANGE_PROBABILITY,
        help = "Chance a day repeats the previous balance (default: 0.3)"
    )]
    pub no_change_probability: f64,

    /// Upper bound on transactions per client per day and side
    #[arg(
        long = "max-tx-per-day",
        value_name = "COUNT",
        default_value_t = DEFAULT_MAX_TRANSACTIONS_PER_DAY,
        help = "Max transactions per client per day and side (default: 3, 0 falls back)"
    )]
    pub max_transactions_per_day: u32,

    /// Chance of injecting a tracked-balance mismatch after a day
    #[arg(
        long = "mismatch-prob",
        value_name = "PROB",
        default_value_t = DEFAULT_MISMATCH_PROBABILITY,
        help = "Chance of a tracked-balance mismatch per day (default: 0.1)"
    )]
    pub mismatch_probability: f64,

    /// Chance that a client has operations at all
    #[arg(
        long = "operation-prob",
        value_name = "PROB",
        default_value_t = DEFAULT_OPERATION_PROBABILITY,
        help = "Chance a client has a first working date (default: 0.9)"
    )]
    pub operation_probability: f64,

    /// Seed for the random number source
    ///
    /// A missing seed is drawn from OS entropy; the run reports the seed it
    /// used so the output can be reproduced.
    #[arg(long, value_name = "SEED", help = "Seed for reproducible runs (default: OS entropy)")]
    pub seed: Option<u64>,
}
