use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::fares::FareSchedule;
use crate::domain::ticket::TicketType;

/// A month needs more than this many selected dates before a monthly pass
/// enters the recommendation.
const MONTHLY_PASS_THRESHOLD: usize = 17;

/// Composite month key; ordered so bucket iteration runs chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// Buckets the selection by calendar month, grants a monthly pass to each
/// month concentrated enough to justify one, and sends all remaining dates
/// through the window pipeline as a single residual set. Expects `dates`
/// sorted and deduplicated.
///
/// A selection spanning exactly two qualifying months buys only one pass:
/// the denser month keeps it and the other month's dates are priced on
/// their own (on equal counts the later month keeps the pass).
pub fn resolve_monthly(dates: &[NaiveDate], fares: &FareSchedule) -> Vec<TicketType> {
    let mut buckets: BTreeMap<MonthKey, Vec<NaiveDate>> = BTreeMap::new();
    for &date in dates {
        buckets.entry(MonthKey::of(date)).or_default().push(date);
    }

    let eligible: Vec<MonthKey> = buckets
        .iter()
        .filter(|(_, bucket)| bucket.len() > MONTHLY_PASS_THRESHOLD)
        .map(|(key, _)| *key)
        .collect();

    let pass_months: Vec<MonthKey> = if buckets.len() == 2 && eligible.len() == 2 {
        let counts: Vec<(MonthKey, usize)> =
            buckets.iter().map(|(key, bucket)| (*key, bucket.len())).collect();
        if counts[0].1 > counts[1].1 {
            vec![counts[0].0]
        } else {
            vec![counts[1].0]
        }
    } else {
        eligible
    };

    let mut tickets = Vec::new();
    let mut residual = Vec::new();
    for (key, bucket) in &buckets {
        if pass_months.contains(key) {
            tracing::debug!(
                year = key.year,
                month = key.month,
                dates = bucket.len(),
                "month qualifies for a monthly pass"
            );
            tickets.push(TicketType::MonthlyPass);
        } else {
            residual.extend_from_slice(bucket);
        }
    }

    if !residual.is_empty() {
        tickets.extend(super::lesser_tickets(&residual, fares));
    }
    tickets
}
