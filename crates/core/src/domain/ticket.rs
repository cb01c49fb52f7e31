use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fare products a rider can be told to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketType {
    #[serde(rename = "Round Trip")]
    RoundTrip,
    #[serde(rename = "Weekly Pass")]
    WeeklyPass,
    #[serde(rename = "Flex Pass")]
    FlexPass,
    #[serde(rename = "Monthly Pass")]
    MonthlyPass,
}

impl TicketType {
    pub fn label(&self) -> &'static str {
        match self {
            TicketType::RoundTrip => "Round Trip",
            TicketType::WeeklyPass => "Weekly Pass",
            TicketType::FlexPass => "Flex Pass",
            TicketType::MonthlyPass => "Monthly Pass",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The engine's output: one entry per purchased product, passes before the
/// round trips they leave uncovered, priced against the schedule used for
/// the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tickets: Vec<TicketType>,
    pub total_cents: u32,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
