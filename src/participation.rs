//! Round Participation Resolver
//!
//! For one round, works out which holders hold a direct instrument and which
//! exercised a pro-rata allocation.
//!
//! # Rules
//!
//! - Only instruments with a `holder_name` count.
//! - Results follow the order of the `holders` collection, never instrument order.
//! - A holder with both kinds of instrument appears in both lists.
//! - Names that match no holder are dropped silently.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::types::{Holder, InstrumentKind, Round};

/// Holders with a direct instrument in `round`, in `holders` order.
pub fn direct_holders<'a>(round: &Round, holders: &'a [Holder]) -> Vec<&'a Holder> {
    holders_of_kind(round, holders, InstrumentKind::Direct)
}

/// Holders with a pro-rata instrument in `round`, in `holders` order.
pub fn pro_rata_holders<'a>(round: &Round, holders: &'a [Holder]) -> Vec<&'a Holder> {
    holders_of_kind(round, holders, InstrumentKind::ProRata)
}

fn holders_of_kind<'a>(
    round: &Round,
    holders: &'a [Holder],
    kind: InstrumentKind,
) -> Vec<&'a Holder> {
    let referenced: HashSet<&str> = round
        .instruments
        .iter()
        .filter(|i| i.kind() == kind)
        .filter_map(|i| i.holder())
        .collect();

    if referenced.is_empty() {
        return Vec::new();
    }

    holders
        .iter()
        .filter(|h| referenced.contains(h.name.as_str()))
        .collect()
}

/// Participation summary for one round, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RoundParticipation<'a> {
    /// Position of the round in the host's collection
    pub index: usize,
    pub label: String,
    pub round_date: Option<NaiveDate>,
    pub direct: Vec<&'a Holder>,
    pub pro_rata: Vec<&'a Holder>,
}

impl RoundParticipation<'_> {
    /// Whether nobody participates in this round (directly or via pro-rata)
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.pro_rata.is_empty()
    }
}

/// Summarize every round, in round order.
pub fn summarize_rounds<'a>(rounds: &[Round], holders: &'a [Holder]) -> Vec<RoundParticipation<'a>> {
    rounds
        .iter()
        .enumerate()
        .map(|(index, round)| RoundParticipation {
            index,
            label: round.display_label(index),
            round_date: round.round_date,
            direct: direct_holders(round, holders),
            pro_rata: pro_rata_holders(round, holders),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Instrument, ProRataType};

    fn cast() -> Vec<Holder> {
        vec![
            Holder::new("Carol"),
            Holder::new("Alice").with_group("Founders"),
            Holder::new("Bob"),
        ]
    }

    fn names(holders: &[&Holder]) -> Vec<String> {
        holders.iter().map(|h| h.name.clone()).collect()
    }

    #[test]
    fn test_direct_follows_holder_order() {
        let holders = cast();
        let round = Round::new("Seed")
            .with_instrument(Instrument::direct("Bob"))
            .with_instrument(Instrument::direct("Carol"));
        assert_eq!(names(&direct_holders(&round, &holders)), vec!["Carol", "Bob"]);
        assert!(pro_rata_holders(&round, &holders).is_empty());
    }

    #[test]
    fn test_dual_participation() {
        let holders = cast();
        let round = Round::new("Series A")
            .with_instrument(Instrument::direct("Alice"))
            .with_instrument(Instrument::pro_rata("Alice", ProRataType::Standard));
        assert_eq!(names(&direct_holders(&round, &holders)), vec!["Alice"]);
        assert_eq!(names(&pro_rata_holders(&round, &holders)), vec!["Alice"]);
    }

    #[test]
    fn test_dangling_and_anonymous_instruments_ignored() {
        let holders = cast();
        let round = Round::new("Seed")
            .with_instrument(Instrument::direct("Mallory"))
            .with_instrument(Instrument::default())
            .with_instrument(Instrument {
                holder_name: None,
                pro_rata_type: Some(ProRataType::Super),
                amount: Some(10.0),
            });
        assert!(direct_holders(&round, &holders).is_empty());
        assert!(pro_rata_holders(&round, &holders).is_empty());
    }

    #[test]
    fn test_repeated_instruments_do_not_duplicate() {
        let holders = cast();
        let round = Round::new("Seed")
            .with_instrument(Instrument::direct("Bob").with_amount(100.0))
            .with_instrument(Instrument::direct("Bob").with_amount(50.0));
        assert_eq!(names(&direct_holders(&round, &holders)), vec!["Bob"]);
    }

    #[test]
    fn test_summarize_rounds_labels_and_order() {
        let holders = cast();
        let rounds = vec![
            Round::new("Seed").with_instrument(Instrument::direct("Alice")),
            Round::default()
                .with_instrument(Instrument::pro_rata("Alice", ProRataType::Standard)),
            Round::default(),
        ];
        let summary = summarize_rounds(&rounds, &holders);
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].label, "Seed");
        assert_eq!(summary[1].label, "Round 2");
        assert_eq!(summary[1].index, 1);
        assert_eq!(names(&summary[1].pro_rata), vec!["Alice"]);
        assert!(summary[2].is_empty());
    }
}
