pub mod monthly;
pub mod partition;
pub mod windows;

use chrono::NaiveDate;

use crate::domain::fares::FareSchedule;
use crate::domain::selection;
use crate::domain::ticket::{Recommendation, TicketType};
use windows::WindowPolicy;

/// Window sizes worth pricing as a weekly pass. Anything smaller loses to
/// round trips outright at sane fare ratios, but the evaluator settles that.
pub(crate) const WEEKLY_QUALIFYING_LENGTHS: &[usize] = &[4, 5, 6, 7];

/// Window sizes worth pricing as a flex pass.
pub(crate) const FLEX_QUALIFYING_LENGTHS: &[usize] = &[8, 9, 10];

/// Recommends the cheapest combination of fare products covering every
/// selected date. The input is treated as a set: order does not matter and
/// duplicate calendar days collapse to one.
pub fn calculate_optimal_ticket(dates: &[NaiveDate], fares: &FareSchedule) -> Recommendation {
    let dates = selection::normalize(dates.to_vec());
    if dates.is_empty() {
        return Recommendation {
            tickets: Vec::new(),
            total_cents: 0,
        };
    }

    let tickets = monthly::resolve_monthly(&dates, fares);
    let total_cents = fares.total_cents(&tickets);
    tracing::debug!(
        dates = dates.len(),
        tickets = tickets.len(),
        total_cents,
        "computed fare recommendation"
    );
    Recommendation {
        tickets,
        total_cents,
    }
}

/// The sub-monthly pipeline: enumerate weekly and flex candidate windows,
/// then let the partition evaluator pick the cheapest covering.
pub(crate) fn lesser_tickets(dates: &[NaiveDate], fares: &FareSchedule) -> Vec<TicketType> {
    let mut candidates = windows::find_windows(dates, WEEKLY_QUALIFYING_LENGTHS, WindowPolicy::Weekly);
    candidates.extend(windows::find_windows(
        dates,
        FLEX_QUALIFYING_LENGTHS,
        WindowPolicy::Flex,
    ));
    tracing::debug!(
        dates = dates.len(),
        candidates = candidates.len(),
        "enumerated candidate pass windows"
    );
    partition::choose_optimal_partition(dates, &candidates, fares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TicketType::{FlexPass, MonthlyPass, RoundTrip, WeeklyPass};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(y: i32, m: u32, range: std::ops::RangeInclusive<u32>) -> Vec<NaiveDate> {
        range.map(|d| ymd(y, m, d)).collect()
    }

    fn recommend(dates: &[NaiveDate]) -> Vec<TicketType> {
        calculate_optimal_ticket(dates, &FareSchedule::default()).tickets
    }

    #[test]
    fn empty_selection_yields_empty_recommendation() {
        let rec = calculate_optimal_ticket(&[], &FareSchedule::default());
        assert!(rec.is_empty());
        assert_eq!(rec.total_cents, 0);
    }

    #[test]
    fn one_day_is_a_round_trip() {
        assert_eq!(recommend(&[ymd(2023, 2, 1)]), vec![RoundTrip]);
    }

    #[test]
    fn weekday_run_is_a_weekly_pass() {
        assert_eq!(recommend(&days(2023, 1, 2..=6)), vec![WeeklyPass]);
    }

    #[test]
    fn saturday_to_wednesday_is_a_weekly_pass() {
        // 2023-11-25 is a Saturday, so all five dates share one pass window.
        assert_eq!(recommend(&days(2023, 11, 25..=29)), vec![WeeklyPass]);
    }

    #[test]
    fn weekday_run_late_in_the_month_is_a_weekly_pass() {
        // Sunday 11-19 through Thursday 11-23, inside the week of Sat 11-18.
        assert_eq!(recommend(&days(2023, 11, 19..=23)), vec![WeeklyPass]);
    }

    #[test]
    fn two_distant_sundays_stay_round_trips() {
        let dates = vec![ymd(2023, 1, 1), ymd(2023, 1, 15)];
        assert_eq!(recommend(&dates), vec![RoundTrip, RoundTrip]);
    }

    #[test]
    fn three_scattered_dates_stay_round_trips() {
        let dates = vec![ymd(2023, 1, 2), ymd(2023, 1, 3), ymd(2023, 1, 9)];
        assert_eq!(recommend(&dates), vec![RoundTrip; 3]);
    }

    #[test]
    fn weekly_pass_plus_round_trips_for_the_next_week() {
        let mut dates = days(2023, 1, 1..=5);
        dates.push(ymd(2023, 1, 10));
        dates.push(ymd(2023, 1, 11));
        assert_eq!(recommend(&dates), vec![WeeklyPass, RoundTrip, RoundTrip]);
    }

    #[test]
    fn weekly_pass_plus_a_single_round_trip() {
        let mut dates = days(2023, 1, 1..=6);
        dates.push(ymd(2023, 1, 10));
        assert_eq!(recommend(&dates), vec![WeeklyPass, RoundTrip]);
    }

    #[test]
    fn six_date_week_plus_two_outside_dates() {
        let mut dates = days(2023, 1, 1..=6);
        dates.push(ymd(2023, 1, 10));
        dates.push(ymd(2023, 1, 11));
        assert_eq!(recommend(&dates), vec![WeeklyPass, RoundTrip, RoundTrip]);
    }

    #[test]
    fn a_full_month_is_a_monthly_pass() {
        assert_eq!(recommend(&days(2023, 5, 1..=30)), vec![MonthlyPass]);
    }

    #[test]
    fn monthly_pass_plus_round_trips_in_the_preceding_month() {
        let mut dates = days(2023, 4, 29..=30);
        dates.extend(days(2023, 5, 1..=31));
        assert_eq!(recommend(&dates), vec![MonthlyPass, RoundTrip, RoundTrip]);
    }

    #[test]
    fn monthly_pass_plus_round_trips_in_the_following_month() {
        let mut dates = days(2023, 6, 1..=2);
        dates.extend(days(2023, 5, 1..=31));
        assert_eq!(recommend(&dates), vec![MonthlyPass, RoundTrip, RoundTrip]);
    }

    #[test]
    fn weekly_and_flex_passes_cover_three_weeks_of_weekdays() {
        let mut dates = days(2023, 1, 2..=6);
        dates.extend(days(2023, 1, 9..=13));
        dates.extend(days(2023, 1, 16..=20));
        assert_eq!(recommend(&dates), vec![WeeklyPass, FlexPass]);
    }

    #[test]
    fn monthly_pass_with_a_weekly_pass_in_the_next_month() {
        let mut dates = days(2023, 1, 1..=31);
        dates.extend(days(2023, 2, 6..=10));
        assert_eq!(recommend(&dates), vec![MonthlyPass, WeeklyPass]);
    }

    #[test]
    fn monthly_pass_with_a_flex_pass_in_the_next_month() {
        let mut dates = days(2023, 1, 1..=31);
        dates.extend(days(2023, 2, 6..=9));
        dates.extend(days(2023, 2, 13..=16));
        dates.push(ymd(2023, 2, 20));
        assert_eq!(recommend(&dates), vec![MonthlyPass, FlexPass]);
    }

    #[test]
    fn recommendation_ignores_input_order() {
        let sorted = days(2023, 1, 2..=6);
        let mut shuffled = vec![
            ymd(2023, 1, 4),
            ymd(2023, 1, 6),
            ymd(2023, 1, 2),
            ymd(2023, 1, 5),
            ymd(2023, 1, 3),
        ];
        assert_eq!(recommend(&sorted), recommend(&shuffled));
        shuffled.reverse();
        assert_eq!(recommend(&sorted), recommend(&shuffled));
    }

    #[test]
    fn duplicate_calendar_days_collapse() {
        let mut dates = days(2023, 1, 2..=6);
        dates.push(ymd(2023, 1, 4));
        assert_eq!(recommend(&dates), vec![WeeklyPass]);
    }

    #[test]
    fn adding_a_date_never_costs_more_than_one_round_trip() {
        let fares = FareSchedule::default();
        let additions = [ymd(2023, 1, 6), ymd(2023, 1, 9), ymd(2023, 2, 20)];
        let mut dates = days(2023, 1, 2..=5);
        for addition in additions {
            let before = calculate_optimal_ticket(&dates, &fares).total_cents;
            dates.push(addition);
            let after = calculate_optimal_ticket(&dates, &fares).total_cents;
            assert!(
                after <= before + fares.round_trip_cents,
                "adding {addition} jumped the total from {before} to {after}"
            );
        }
    }

    #[test]
    fn total_reflects_the_fare_schedule() {
        let mut dates = days(2023, 1, 1..=5);
        dates.push(ymd(2023, 1, 10));
        dates.push(ymd(2023, 1, 11));
        let rec = calculate_optimal_ticket(&dates, &FareSchedule::default());
        assert_eq!(rec.tickets, vec![WeeklyPass, RoundTrip, RoundTrip]);
        assert_eq!(rec.total_cents, 6_350);
    }
}
