use serde::{Deserialize, Serialize};

use crate::domain::ticket::TicketType;

/// Prices for every fare product, in cents. Every product always has a
/// price; there is no notion of an unconfigured entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareSchedule {
    pub round_trip_cents: u32,
    pub weekly_pass_cents: u32,
    pub flex_pass_cents: u32,
    pub monthly_pass_cents: u32,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            round_trip_cents: 1_000,
            weekly_pass_cents: 4_350,
            flex_pass_cents: 8_000,
            monthly_pass_cents: 14_500,
        }
    }
}

impl FareSchedule {
    /// Derives the pass prices from a single round-trip fare using the
    /// standard ratios (weekly 4.35x, flex 8x, monthly 14.5x), rounding
    /// half-up to whole cents.
    pub fn from_round_trip(round_trip_cents: u32) -> Self {
        Self {
            round_trip_cents,
            weekly_pass_cents: (round_trip_cents * 435 + 50) / 100,
            flex_pass_cents: round_trip_cents * 8,
            monthly_pass_cents: (round_trip_cents * 1_450 + 50) / 100,
        }
    }

    pub fn price_cents(&self, ticket: TicketType) -> u32 {
        match ticket {
            TicketType::RoundTrip => self.round_trip_cents,
            TicketType::WeeklyPass => self.weekly_pass_cents,
            TicketType::FlexPass => self.flex_pass_cents,
            TicketType::MonthlyPass => self.monthly_pass_cents,
        }
    }

    pub fn total_cents(&self, tickets: &[TicketType]) -> u32 {
        tickets.iter().map(|t| self.price_cents(*t)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_published_prices() {
        let fares = FareSchedule::default();
        assert_eq!(fares.price_cents(TicketType::RoundTrip), 1_000);
        assert_eq!(fares.price_cents(TicketType::WeeklyPass), 4_350);
        assert_eq!(fares.price_cents(TicketType::FlexPass), 8_000);
        assert_eq!(fares.price_cents(TicketType::MonthlyPass), 14_500);
    }

    #[test]
    fn from_round_trip_applies_ratios() {
        assert_eq!(FareSchedule::from_round_trip(1_000), FareSchedule::default());

        let halved = FareSchedule::from_round_trip(500);
        assert_eq!(halved.weekly_pass_cents, 2_175);
        assert_eq!(halved.flex_pass_cents, 4_000);
        assert_eq!(halved.monthly_pass_cents, 7_250);
    }

    #[test]
    fn from_round_trip_rounds_half_cents_up() {
        // 1050 x 4.35 = 4567.5, which rounds to 4568.
        let fares = FareSchedule::from_round_trip(1_050);
        assert_eq!(fares.weekly_pass_cents, 4_568);
        assert_eq!(fares.monthly_pass_cents, 15_225);
    }

    #[test]
    fn totals_sum_per_entry() {
        let fares = FareSchedule::default();
        let tickets = vec![
            TicketType::WeeklyPass,
            TicketType::RoundTrip,
            TicketType::RoundTrip,
        ];
        assert_eq!(fares.total_cents(&tickets), 6_350);
    }
}
