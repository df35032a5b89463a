//! Transaction reconciliation engine
//!
//! This is the heart of the generator: given a table of daily balance
//! snapshots, it synthesizes credit/debit transactions ("benefit points")
//! whose per-day net effect reproduces the day-to-day balance deltas.
//!
//! The engine works as a sequential fold over each client's date-ordered
//! series. It keeps a *tracked* balance (what it believes the account
//! currently holds) and reconciles each day against that value, not
//! against the nominal snapshot. With the configured mismatch probability
//! the tracked balance is nudged by a random offset after a day is
//! processed, so later days reconcile against the drifted value. Injected
//! errors are never corrected, which makes the emitted stream diverge from
//! the snapshot series the way noisy production data does.
//!
//! Per-day totals are split into several transactions: each side's total is
//! decomposed into 1..=max parts by repeatedly drawing a uniform amount
//! from the remaining budget. The last part absorbs the remainder, which
//! skews split sizes toward earlier pieces; the skew is intentional.

use crate::types::{BalanceRow, ClientCode, Direction, PointRow};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

/// Default upper bound on transactions per client per day and side
pub const DEFAULT_MAX_TRANSACTIONS_PER_DAY: u32 = 3;

/// Default chance of injecting a tracked-balance mismatch after a day
pub const DEFAULT_MISMATCH_PROBABILITY: f64 = 0.1;

/// Largest absolute tracked-balance offset a mismatch can inject
pub const MISMATCH_OFFSET_BOUND: i64 = 100;

/// Transaction reconciliation engine
///
/// Consumes a balance table and emits a transaction table whose per-day
/// credits and debits net to the observed balance deltas, with intentional
/// mismatch injection. Input rows may arrive in any order; the engine sorts
/// by (client, date) before reconciling.
///
/// # Examples
///
/// ```
/// use benefit_datagen::core::points::PointsEngine;
/// use benefit_datagen::types::{BalanceRow, Direction};
/// use chrono::NaiveDate;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let balances = vec![
///     BalanceRow { code: 10_000_001, bal_date: day(1), value: 100 },
///     BalanceRow { code: 10_000_001, bal_date: day(2), value: 150 },
/// ];
///
/// let engine = PointsEngine::new().with_mismatch_probability(0.0);
/// let points = engine.generate(&balances, &mut StdRng::seed_from_u64(7));
///
/// let net: i64 = points
///     .iter()
///     .map(|p| match p.direction {
///         Direction::Credit => p.amount,
///         Direction::Debit => -p.amount,
///     })
///     .sum();
/// assert_eq!(net, 50);
/// ```
#[derive(Debug, Clone)]
pub struct PointsEngine {
    max_transactions_per_day: u32,
    mismatch_probability: f64,
}

impl PointsEngine {
    /// Create an engine with the default knobs
    ///
    /// Defaults: at most [`DEFAULT_MAX_TRANSACTIONS_PER_DAY`] transactions
    /// per side per day, mismatch probability
    /// [`DEFAULT_MISMATCH_PROBABILITY`].
    pub fn new() -> Self {
        PointsEngine {
            max_transactions_per_day: DEFAULT_MAX_TRANSACTIONS_PER_DAY,
            mismatch_probability: DEFAULT_MISMATCH_PROBABILITY,
        }
    }

    /// Set the upper bound on transactions per client per day and side
    ///
    /// The per-day transaction count is drawn uniformly from [1, max].
    /// Zero is not a usable bound; it falls back to the default instead.
    pub fn with_max_transactions_per_day(mut self, max: u32) -> Self {
        self.max_transactions_per_day = if max == 0 {
            DEFAULT_MAX_TRANSACTIONS_PER_DAY
        } else {
            max
        };
        self
    }

    /// Set the chance of nudging the tracked balance after each day
    pub fn with_mismatch_probability(mut self, probability: f64) -> Self {
        self.mismatch_probability = probability;
        self
    }

    /// Generate the transaction table for a balance table
    ///
    /// Rows are grouped by client and ordered by date before reconciling,
    /// so the input may arrive unsorted. Output order is client-major
    /// (ascending code), date-ascending, credits before debits within a
    /// day. A client with a single snapshot emits nothing, since no day
    /// pair exists to reconcile. Days whose delta and extra draws are all
    /// zero emit nothing.
    pub fn generate<R: Rng>(&self, balances: &[BalanceRow], rng: &mut R) -> Vec<PointRow> {
        let mut sorted: Vec<&BalanceRow> = balances.iter().collect();
        sorted.sort_by_key(|row| (row.code, row.bal_date));

        let mut points = Vec::new();
        for client_rows in sorted.chunk_by(|a, b| a.code == b.code) {
            self.reconcile_client(client_rows, &mut points, rng);
        }

        points
    }

    /// Fold one client's date-ordered series into transactions
    ///
    /// The tracked balance starts at the first snapshot's value and is
    /// re-anchored to each day's nominal value after that day is emitted,
    /// then possibly nudged by a mismatch offset.
    fn reconcile_client<R: Rng>(
        &self,
        rows: &[&BalanceRow],
        points: &mut Vec<PointRow>,
        rng: &mut R,
    ) {
        let mut tracked = match rows.first() {
            Some(row) => row.value,
            None => return,
        };

        for row in &rows[1..] {
            let delta = row.value - tracked;

            // Pad both sides with the same extra amount so the day nets to
            // the delta while still showing activity in both directions.
            let (total_credit, total_debit) = if delta > 0 {
                let extra_debit = rng.gen_range(0..=delta);
                (delta + extra_debit, extra_debit)
            } else if delta < 0 {
                let extra_credit = rng.gen_range(0..=delta.abs());
                (extra_credit, delta.abs() + extra_credit)
            } else {
                (0, 0)
            };

            self.emit_side(row.code, row.bal_date, Direction::Credit, total_credit, points, rng);
            self.emit_side(row.code, row.bal_date, Direction::Debit, total_debit, points, rng);

            tracked = row.value;
            if rng.gen::<f64>() < self.mismatch_probability {
                tracked += rng.gen_range(-MISMATCH_OFFSET_BOUND..=MISMATCH_OFFSET_BOUND);
            }
        }
    }

    /// Split one side's total into transactions and stamp them
    ///
    /// A zero total emits nothing: a quiet side produces no zero-amount
    /// noise rows.
    fn emit_side<R: Rng>(
        &self,
        code: ClientCode,
        day: NaiveDate,
        direction: Direction,
        total: i64,
        points: &mut Vec<PointRow>,
        rng: &mut R,
    ) {
        if total == 0 {
            return;
        }

        let parts = rng.gen_range(1..=self.max_transactions_per_day);
        for amount in split_amount(total, parts, rng) {
            points.push(PointRow {
                code,
                direction,
                created_at: random_time_in_day(day, rng),
                amount,
            });
        }
    }
}

impl Default for PointsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a transaction table with the default engine knobs
///
/// Convenience wrapper over [`PointsEngine`] for callers that do not need
/// to tune the engine knobs.
pub fn generate_benefit_points<R: Rng>(balances: &[BalanceRow], rng: &mut R) -> Vec<PointRow> {
    PointsEngine::new().generate(balances, rng)
}

/// Split a non-negative total into `parts` amounts summing exactly to it
///
/// Every part but the last is drawn uniformly from [0, remaining]; the last
/// absorbs the remainder. Earlier parts therefore tend to consume more of
/// the budget; this is not a uniform partition over all compositions. A
/// zero total yields a list of zeros.
///
/// Callers must pass `total >= 0` and `parts >= 1`.
pub fn split_amount<R: Rng>(total: i64, parts: u32, rng: &mut R) -> Vec<i64> {
    debug_assert!(total >= 0);
    debug_assert!(parts >= 1);

    let parts = parts as usize;
    if total == 0 {
        return vec![0; parts];
    }

    let mut remaining = total;
    let mut splits = Vec::with_capacity(parts);
    for _ in 0..parts - 1 {
        let part = rng.gen_range(0..=remaining);
        splits.push(part);
        remaining -= part;
    }
    splits.push(remaining);

    splits
}

/// Stamp a uniformly random second-of-day onto a calendar day
///
/// The offset covers [00:00:00, 23:59:59].
fn random_time_in_day<R: Rng>(day: NaiveDate, rng: &mut R) -> NaiveDateTime {
    const SECONDS_IN_DAY: i64 = 60 * 60 * 24;
    let offset = rng.gen_range(0..SECONDS_IN_DAY);
    day.and_time(NaiveTime::MIN) + Duration::seconds(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(code: u32, bal_date: NaiveDate, value: i64) -> BalanceRow {
        BalanceRow { code, bal_date, value }
    }

    /// Net credit minus debit per (client, day)
    fn net_by_client_day(points: &[PointRow]) -> BTreeMap<(u32, NaiveDate), i64> {
        let mut net = BTreeMap::new();
        for point in points {
            let signed = match point.direction {
                Direction::Credit => point.amount,
                Direction::Debit => -point.amount,
            };
            *net.entry((point.code, point.created_at.date())).or_insert(0) += signed;
        }
        net
    }

    #[rstest]
    #[case::one_part(100, 1)]
    #[case::a_few_parts(100, 5)]
    #[case::more_parts_than_units(3, 10)]
    #[case::zero_total(0, 4)]
    fn test_split_amount_sums_exactly(#[case] total: i64, #[case] parts: u32) {
        let mut rng = StdRng::seed_from_u64(21);
        let splits = split_amount(total, parts, &mut rng);

        assert_eq!(splits.len(), parts as usize);
        assert_eq!(splits.iter().sum::<i64>(), total);
        assert!(splits.iter().all(|&s| s >= 0));
    }

    #[test]
    fn test_split_amount_zero_total_is_all_zeros() {
        let mut rng = StdRng::seed_from_u64(22);
        assert_eq!(split_amount(0, 3, &mut rng), vec![0, 0, 0]);
    }

    #[test]
    fn test_net_matches_delta_without_mismatch() {
        let balances = vec![
            row(10_000_001, date(2024, 1, 1), 100),
            row(10_000_001, date(2024, 1, 2), 150),
            row(10_000_001, date(2024, 1, 3), 120),
            row(10_000_001, date(2024, 1, 4), 120),
            row(10_000_002, date(2024, 1, 1), 500),
            row(10_000_002, date(2024, 1, 2), 50),
            row(10_000_002, date(2024, 1, 3), 700),
        ];

        let engine = PointsEngine::new().with_mismatch_probability(0.0);
        let points = engine.generate(&balances, &mut StdRng::seed_from_u64(23));
        let net = net_by_client_day(&points);

        assert_eq!(net.get(&(10_000_001, date(2024, 1, 2))), Some(&50));
        assert_eq!(net.get(&(10_000_001, date(2024, 1, 3))), Some(&-30));
        // quiet day emits nothing at all
        assert_eq!(net.get(&(10_000_001, date(2024, 1, 4))), None);
        assert_eq!(net.get(&(10_000_002, date(2024, 1, 2))), Some(&-450));
        assert_eq!(net.get(&(10_000_002, date(2024, 1, 3))), Some(&650));
    }

    #[test]
    fn test_unsorted_input_is_grouped_and_ordered() {
        // Same series as above, shuffled across clients and days
        let balances = vec![
            row(10_000_002, date(2024, 1, 3), 700),
            row(10_000_001, date(2024, 1, 3), 120),
            row(10_000_002, date(2024, 1, 1), 500),
            row(10_000_001, date(2024, 1, 1), 100),
            row(10_000_002, date(2024, 1, 2), 50),
            row(10_000_001, date(2024, 1, 2), 150),
        ];

        let engine = PointsEngine::new().with_mismatch_probability(0.0);
        let points = engine.generate(&balances, &mut StdRng::seed_from_u64(24));
        let net = net_by_client_day(&points);

        assert_eq!(net.get(&(10_000_001, date(2024, 1, 2))), Some(&50));
        assert_eq!(net.get(&(10_000_001, date(2024, 1, 3))), Some(&-30));
        assert_eq!(net.get(&(10_000_002, date(2024, 1, 2))), Some(&-450));
        assert_eq!(net.get(&(10_000_002, date(2024, 1, 3))), Some(&650));

        // client-major output, dates ascending within a client
        let order: Vec<_> = points
            .iter()
            .map(|p| (p.code, p.created_at.date()))
            .collect();
        let mut expected = order.clone();
        expected.sort();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_growth_day_with_single_part_split() {
        let balances = vec![
            row(10_000_001, date(2024, 1, 1), 100),
            row(10_000_001, date(2024, 1, 2), 150),
        ];

        let engine = PointsEngine::new()
            .with_max_transactions_per_day(1)
            .with_mismatch_probability(0.0);
        let points = engine.generate(&balances, &mut StdRng::seed_from_u64(25));

        let credits: Vec<_> = points
            .iter()
            .filter(|p| p.direction == Direction::Credit)
            .collect();
        let debits: Vec<_> = points
            .iter()
            .filter(|p| p.direction == Direction::Debit)
            .collect();

        // One credit covering the delta plus the padding; at most one debit
        // carrying the same padding back out.
        assert_eq!(credits.len(), 1);
        assert!(debits.len() <= 1);
        let debit_total: i64 = debits.iter().map(|p| p.amount).sum();
        assert_eq!(credits[0].amount - debit_total, 50);
        assert!(points.iter().all(|p| p.created_at.date() == date(2024, 1, 2)));
    }

    #[test]
    fn test_single_snapshot_client_emits_nothing() {
        let balances = vec![row(10_000_001, date(2024, 1, 1), 100)];
        let points = generate_benefit_points(&balances, &mut StdRng::seed_from_u64(26));
        assert!(points.is_empty());
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        let points = generate_benefit_points(&[], &mut StdRng::seed_from_u64(27));
        assert!(points.is_empty());
    }

    #[test]
    fn test_amounts_non_negative_and_timestamps_inside_day() {
        let balances = vec![
            row(10_000_001, date(2024, 1, 1), 1000),
            row(10_000_001, date(2024, 1, 2), 0),
            row(10_000_001, date(2024, 1, 3), 5000),
        ];

        let points = generate_benefit_points(&balances, &mut StdRng::seed_from_u64(28));

        for point in &points {
            assert!(point.amount >= 0);
            let midnight = point.created_at.date().and_time(NaiveTime::MIN);
            let offset = (point.created_at - midnight).num_seconds();
            assert!((0..=86_399).contains(&offset));
        }
    }

    #[test]
    fn test_transactions_per_side_respect_the_bound() {
        let balances = vec![
            row(10_000_001, date(2024, 1, 1), 0),
            row(10_000_001, date(2024, 1, 2), 10_000),
        ];

        let engine = PointsEngine::new()
            .with_max_transactions_per_day(4)
            .with_mismatch_probability(0.0);
        let points = engine.generate(&balances, &mut StdRng::seed_from_u64(29));

        let credits = points
            .iter()
            .filter(|p| p.direction == Direction::Credit)
            .count();
        let debits = points
            .iter()
            .filter(|p| p.direction == Direction::Debit)
            .count();

        assert!((1..=4).contains(&credits));
        assert!(debits <= 4);
    }

    #[test]
    fn test_zero_max_transactions_falls_back_to_default() {
        let balances = vec![
            row(10_000_001, date(2024, 1, 1), 0),
            row(10_000_001, date(2024, 1, 2), 100),
        ];

        let engine = PointsEngine::new()
            .with_max_transactions_per_day(0)
            .with_mismatch_probability(0.0);
        let points = engine.generate(&balances, &mut StdRng::seed_from_u64(30));

        let credits = points
            .iter()
            .filter(|p| p.direction == Direction::Credit)
            .count();
        assert!((1..=DEFAULT_MAX_TRANSACTIONS_PER_DAY as usize).contains(&credits));
    }

    #[test]
    fn test_mismatch_drift_stays_within_the_offset_bound() {
        // With mismatch on every day, each day's net may differ from the
        // nominal delta, but never by more than the injected offset bound.
        let values = [1000, 1200, 900, 900, 1500, 100, 100, 2000];
        let balances: Vec<_> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| row(10_000_001, date(2024, 1, 1 + i as u32), value))
            .collect();

        let engine = PointsEngine::new().with_mismatch_probability(1.0);
        let points = engine.generate(&balances, &mut StdRng::seed_from_u64(31));
        let net = net_by_client_day(&points);

        for (i, pair) in values.windows(2).enumerate() {
            let nominal = pair[1] - pair[0];
            let day = date(2024, 1, 2 + i as u32);
            let observed = net.get(&(10_000_001, day)).copied().unwrap_or(0);
            assert!(
                (observed - nominal).abs() <= MISMATCH_OFFSET_BOUND,
                "day {day}: net {observed} vs nominal {nominal}"
            );
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let balances = vec![
            row(10_000_001, date(2024, 1, 1), 100),
            row(10_000_001, date(2024, 1, 2), 300),
            row(10_000_001, date(2024, 1, 3), 250),
        ];

        let points_a =
            generate_benefit_points(&balances, &mut StdRng::seed_from_u64(32));
        let points_b =
            generate_benefit_points(&balances, &mut StdRng::seed_from_u64(32));

        assert_eq!(points_a, points_b);
    }
}
