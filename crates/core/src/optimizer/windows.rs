use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::ticket::TicketType;

/// The window discipline a candidate pass must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPolicy {
    /// Calendar-aligned Saturday-to-Friday week.
    Weekly,
    /// Any rolling 30-day span.
    Flex,
}

impl WindowPolicy {
    pub fn ticket_type(&self) -> TicketType {
        match self {
            WindowPolicy::Weekly => TicketType::WeeklyPass,
            WindowPolicy::Flex => TicketType::FlexPass,
        }
    }

    /// Whether a window whose first and last selected dates are `first` and
    /// `last` still fits inside one pass validity window.
    fn fits(&self, first: NaiveDate, last: NaiveDate) -> bool {
        match self {
            // Same Saturday-anchored week; this covers both the 7-day span
            // and the no-boundary-crossing rule at once.
            WindowPolicy::Weekly => week_start_saturday(first) == week_start_saturday(last),
            WindowPolicy::Flex => (last - first).num_days() <= 30,
        }
    }

    fn bounds(&self, first: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            WindowPolicy::Weekly => {
                let start = week_start_saturday(first);
                (start, start + Duration::days(6))
            }
            WindowPolicy::Flex => (first, first + Duration::days(30)),
        }
    }
}

/// A group of selected dates that would all be covered by one pass, tagged
/// with the pass kind and the validity boundary of that pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWindow {
    pub policy: WindowPolicy,
    pub dates: Vec<NaiveDate>,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl CandidateWindow {
    fn new(policy: WindowPolicy, dates: Vec<NaiveDate>) -> Self {
        let (starts_on, ends_on) = policy.bounds(dates[0]);
        Self {
            policy,
            dates,
            starts_on,
            ends_on,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.policy.ticket_type()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Enumerates every window of exactly one of the qualifying lengths that
/// fits the policy. Input order does not matter; windows may overlap in
/// membership. Pure enumeration, no cost reasoning.
pub fn find_windows(
    dates: &[NaiveDate],
    qualifying_lengths: &[usize],
    policy: WindowPolicy,
) -> Vec<CandidateWindow> {
    let mut sorted = dates.to_vec();
    sorted.sort();

    let mut windows = Vec::new();
    for &len in qualifying_lengths {
        windows.extend(scan(&sorted, len, policy));
    }
    windows
}

/// Two-pointer scan emitting every fitting window of exactly `target_len`
/// dates. On a fit of the right size the start advances (so overlapping
/// windows are still found); on a misfit the start advances without
/// emitting; otherwise the end grows.
fn scan(sorted: &[NaiveDate], target_len: usize, policy: WindowPolicy) -> Vec<CandidateWindow> {
    let n = sorted.len();
    if target_len == 0 || n < target_len {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut start = 0;
    let mut end = 0;
    while end < n {
        if !policy.fits(sorted[start], sorted[end]) {
            start += 1;
        } else if end - start + 1 == target_len {
            out.push(CandidateWindow::new(policy, sorted[start..=end].to_vec()));
            start += 1;
        } else {
            end += 1;
        }
    }
    out
}

/// The Saturday opening the week containing `date`.
fn week_start_saturday(date: NaiveDate) -> NaiveDate {
    // Saturday maps to 0, Friday to 6.
    let days_since_saturday = (date.weekday().num_days_from_sunday() + 1) % 7;
    date - Duration::days(days_since_saturday as i64)
}
