pub mod domain;
pub mod optimizer;

pub mod config {
    use anyhow::Context;

    use crate::domain::fares::FareSchedule;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub round_trip_cents: Option<u32>,
        pub weekly_pass_cents: Option<u32>,
        pub flex_pass_cents: Option<u32>,
        pub monthly_pass_cents: Option<u32>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                round_trip_cents: parse_cents("FARE_ROUND_TRIP_CENTS")?,
                weekly_pass_cents: parse_cents("FARE_WEEKLY_PASS_CENTS")?,
                flex_pass_cents: parse_cents("FARE_FLEX_PASS_CENTS")?,
                monthly_pass_cents: parse_cents("FARE_MONTHLY_PASS_CENTS")?,
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        /// Builds the fare schedule, falling back to the default price for
        /// any product without an env override.
        pub fn fare_schedule(&self) -> FareSchedule {
            let defaults = FareSchedule::default();
            FareSchedule {
                round_trip_cents: self.round_trip_cents.unwrap_or(defaults.round_trip_cents),
                weekly_pass_cents: self
                    .weekly_pass_cents
                    .unwrap_or(defaults.weekly_pass_cents),
                flex_pass_cents: self.flex_pass_cents.unwrap_or(defaults.flex_pass_cents),
                monthly_pass_cents: self
                    .monthly_pass_cents
                    .unwrap_or(defaults.monthly_pass_cents),
            }
        }
    }

    // A present-but-unparsable price is a configuration error, not a default.
    fn parse_cents(var: &str) -> anyhow::Result<Option<u32>> {
        match std::env::var(var) {
            Ok(raw) => {
                let cents = raw
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("{var} must be a whole number of cents, got {raw:?}"))?;
                Ok(Some(cents))
            }
            Err(_) => Ok(None),
        }
    }
}
