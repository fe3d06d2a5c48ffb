//! Grouping of draw results and scenario fingerprints.

use crate::cards::{Card, CardSlot};
use crate::draws::{Outs, PossibleHand};
use crate::evaluator::Category;
use core::fmt;
use std::collections::BTreeMap;

/// All ways of reaching one category, with their summed probability.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CombinedPossibleHand {
    pub category: Category,
    /// Outs in suit/rank order.
    pub outs: Vec<(Outs, f64)>,
    pub total: f64,
}

/// Group possible hands by category.
///
/// Groups are sorted by total probability, strongest category first on ties.
pub fn combine(hands: &[PossibleHand]) -> Vec<CombinedPossibleHand> {
    let mut groups: BTreeMap<Category, Vec<(Outs, f64)>> = BTreeMap::new();
    for h in hands {
        groups.entry(h.category).or_default().push((h.outs, h.probability));
    }
    let mut combined: Vec<CombinedPossibleHand> = groups
        .into_iter()
        .map(|(category, mut outs)| {
            outs.sort_by(|a, b| a.0.cmp(&b.0));
            let total = outs.iter().map(|(_, p)| p).sum();
            CombinedPossibleHand { category, outs, total }
        })
        .collect();
    combined.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| b.category.cmp(&a.category)));
    combined
}

/// Deterministic identifier for a set of card slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn slot_code(slot: &CardSlot) -> String {
    slot.map_or_else(|| "--".to_string(), |c: Card| c.code().iter().collect())
}

fn join_slots(slots: &[CardSlot]) -> String {
    slots.iter().map(slot_code).collect::<Vec<_>>().join(",")
}

/// Encode hero, board and opponent slots, e.g. `As,Kd,--,--,--,--,--`.
///
/// Opponents follow a `|`, hands separated by `;`.
///
/// ```
/// use holdem_odds::summary::fingerprint;
///
/// let hero = [Some("As".parse().unwrap()), None];
/// let board = [None; 5];
/// let opponents = [[Some("Qh".parse().unwrap()), Some("Qs".parse().unwrap())]];
/// assert_eq!(fingerprint(&hero, &board, &opponents).as_str(), "As,--,--,--,--,--,--|Qh,Qs");
/// ```
pub fn fingerprint(hero: &[CardSlot; 2], board: &[CardSlot; 5], opponents: &[[CardSlot; 2]]) -> Fingerprint {
    let mut out = join_slots(hero);
    out.push(',');
    out.push_str(&join_slots(board));
    if !opponents.is_empty() {
        out.push('|');
        let hands: Vec<String> = opponents.iter().map(|h| join_slots(h)).collect();
        out.push_str(&hands.join(";"));
    }
    Fingerprint(out)
}
