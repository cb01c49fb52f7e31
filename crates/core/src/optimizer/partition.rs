use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::domain::fares::FareSchedule;
use crate::domain::ticket::TicketType;
use crate::optimizer::windows::CandidateWindow;

/// The winning way to split the selection: one pass-covered window, an
/// optional second pass inside its complement, and round trips for the rest.
#[derive(Debug, Clone)]
struct Pairing {
    window_pass: TicketType,
    complement_pass: Option<TicketType>,
    uncovered: usize,
}

/// Picks the cheapest combination of at most two passes plus round trips
/// that covers every selected date. Expects `dates` sorted and deduplicated.
///
/// Buying a round trip for every date is always a valid plan; a pass
/// pairing replaces it only when strictly cheaper, and ties between
/// pairings keep the first one in candidate order.
pub fn choose_optimal_partition(
    dates: &[NaiveDate],
    candidates: &[CandidateWindow],
    fares: &FareSchedule,
) -> Vec<TicketType> {
    if dates.is_empty() {
        return Vec::new();
    }

    let rt = fares.round_trip_cents;
    let baseline = rt * dates.len() as u32;
    let mut best: Option<(u32, Pairing)> = None;

    for window in candidates {
        // Membership is by full calendar date; two windows in different
        // months never alias each other.
        let covered: BTreeSet<NaiveDate> = window.dates.iter().copied().collect();
        let complement: Vec<NaiveDate> = dates
            .iter()
            .copied()
            .filter(|d| !covered.contains(d))
            .collect();

        let mut complement_cost = rt * complement.len() as u32;
        let mut complement_pass = None;
        let mut uncovered = complement.len();

        if !complement.is_empty() {
            let complement_set: BTreeSet<NaiveDate> = complement.iter().copied().collect();
            for other in candidates {
                if !other.dates.iter().all(|d| complement_set.contains(d)) {
                    continue;
                }
                let leftover = complement.len() - other.len();
                let cost = fares.price_cents(other.ticket_type()) + rt * leftover as u32;
                if cost < complement_cost {
                    complement_cost = cost;
                    complement_pass = Some(other.ticket_type());
                    uncovered = leftover;
                }
            }
        }

        let total = fares.price_cents(window.ticket_type()) + complement_cost;
        if best.as_ref().map_or(true, |(cheapest, _)| total < *cheapest) {
            best = Some((
                total,
                Pairing {
                    window_pass: window.ticket_type(),
                    complement_pass,
                    uncovered,
                },
            ));
        }
    }

    match best {
        Some((cost, pairing)) if cost < baseline => {
            let mut tickets = vec![pairing.window_pass];
            if let Some(pass) = pairing.complement_pass {
                tickets.push(pass);
            }
            tickets.extend(std::iter::repeat(TicketType::RoundTrip).take(pairing.uncovered));
            tickets
        }
        _ => vec![TicketType::RoundTrip; dates.len()],
    }
}
