//! Draw detection: which categories the hero can still improve to, and how.
//!
//! Each improvement family looks at the known cards, lists its outs, and
//! gets one Monte Carlo estimate of landing on exactly its category while
//! beating the current hand. The estimate is split evenly across the
//! family's outs. All families share a single simulation pass.

use crate::cards::{Card, Rank, Suit};
use crate::config::SimulationConfig;
use crate::evaluator::hand_analysis::HandAnalysis;
use crate::evaluator::straight_info::WINDOWS;
use crate::evaluator::{evaluate, Category, Evaluation};
use crate::simulation::estimate_many;
use crate::task::{CancelToken, Outcome};
use core::fmt;
use rand::Rng;
use std::collections::BTreeMap;

/// How a straight draw is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StraightDraw {
    /// The out sits at either end of four consecutive values (the ace also counts low).
    OpenEnded,
    /// The out fills an inside gap of its window.
    Gutshot,
}

/// The cards that complete a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outs {
    /// `needed` more cards of `suit`.
    Suit { suit: Suit, needed: u8 },
    /// `needed` more cards of `rank`.
    Rank { rank: Rank, needed: u8 },
    /// One card of `rank` fills a straight window.
    Straight { rank: Rank, draw: StraightDraw },
}

impl fmt::Display for Outs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outs::Suit { suit, needed } => write!(f, "{needed} more {suit}"),
            Outs::Rank { rank, needed: 1 } => write!(f, "any {rank}"),
            Outs::Rank { rank, needed } => write!(f, "{needed} more {rank}"),
            Outs::Straight { rank, draw: StraightDraw::OpenEnded } => {
                write!(f, "any {rank} (open-ended)")
            }
            Outs::Straight { rank, draw: StraightDraw::Gutshot } => write!(f, "any {rank} (gutshot)"),
        }
    }
}

/// A category the hero could still reach, through one set of outs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct PossibleHand {
    pub category: Category,
    pub outs: Outs,
    pub probability: f64,
}

/// One improvement family: target category, its outs, and optionally the
/// ranks the finished hand must be built on.
#[derive(Debug, Clone)]
struct Family {
    category: Category,
    outs: Vec<Outs>,
    lead: Option<Vec<Rank>>,
}

impl Family {
    fn hits(&self, finished: &Evaluation, current: &Evaluation) -> bool {
        if finished.category != self.category || !finished.beats(Some(current)) {
            return false;
        }
        match &self.lead {
            None => true,
            Some(ranks) => finished
                .tie_break
                .values()
                .first()
                .is_some_and(|&v| ranks.iter().any(|r| r.value() == v)),
        }
    }
}

fn dedup_desc(mut ranks: Vec<Rank>) -> Vec<Rank> {
    ranks.sort_by(|a, b| b.cmp(a));
    ranks.dedup();
    ranks
}

/// Ranks that each fill a straight window missing exactly one card.
///
/// A rank filling some window at either end is open-ended, since the other
/// four values of that window are consecutive (the ace also counts low).
fn straight_outs(analysis: &HandAnalysis) -> Vec<Outs> {
    let mut draws: BTreeMap<Rank, StraightDraw> = BTreeMap::new();
    for w in WINDOWS.iter() {
        let mut gaps = w.iter().enumerate().filter(|&(_, &v)| !analysis.present[v as usize]);
        let (Some((pos, &v)), None) = (gaps.next(), gaps.next()) else { continue };
        let Some(rank) = Rank::from_value(v) else { continue };
        let draw = if pos == 0 || pos == w.len() - 1 { StraightDraw::OpenEnded } else { StraightDraw::Gutshot };
        draws.entry(rank).and_modify(|d| *d = (*d).min(draw)).or_insert(draw);
    }
    draws.into_iter().rev().map(|(rank, draw)| Outs::Straight { rank, draw }).collect()
}

fn rank_outs(ranks: &[Rank], needed: u8) -> Vec<Outs> {
    ranks.iter().map(|&rank| Outs::Rank { rank, needed }).collect()
}

/// Build every family the known cards allow, weakest targets last.
fn families(hero: &[Card], analysis: &HandAnalysis, current: Category, cards_to_see: usize) -> Vec<Family> {
    let groups = &analysis.rank_groups;
    let pairs = groups.pairs();
    let trips = groups.trips();
    let hero_singles =
        dedup_desc(hero.iter().map(|c| c.rank()).filter(|&r| groups.count(r) == 1).collect());
    let mut out = Vec::new();
    let mut push = |category: Category, outs: Vec<Outs>, lead: Option<Vec<Rank>>| {
        if current < category && !outs.is_empty() {
            out.push(Family { category, outs, lead });
        }
    };

    let quads_from: Vec<Rank> = trips.clone();
    push(Category::FourOfAKind, rank_outs(&quads_from, 1), Some(quads_from));

    if !trips.is_empty() || pairs.len() >= 2 {
        let ranks = if pairs.len() >= 2 && trips.is_empty() {
            pairs.clone()
        } else {
            let trip = trips[0];
            groups.ranks().into_iter().filter(|&r| r != trip).collect()
        };
        let outs = ranks
            .iter()
            .map(|&rank| Outs::Rank { rank, needed: 2u8.saturating_sub(groups.count(rank)).max(1) })
            .collect();
        push(Category::FullHouse, outs, None);
    }

    let flush_outs: Vec<Outs> = Suit::ALL
        .iter()
        .filter_map(|&suit| {
            let count = analysis.suit_info.count(suit);
            let needed = 5u8.saturating_sub(count);
            ((count == 3 || count == 4) && needed as usize <= cards_to_see)
                .then_some(Outs::Suit { suit, needed })
        })
        .collect();
    push(Category::Flush, flush_outs, None);

    push(Category::Straight, straight_outs(analysis), None);

    push(Category::ThreeOfAKind, rank_outs(&pairs, 1), Some(pairs.clone()));
    if cards_to_see >= 2 {
        push(Category::ThreeOfAKind, rank_outs(&hero_singles, 2), Some(hero_singles.clone()));
    }

    if pairs.len() == 1 && trips.is_empty() {
        push(Category::TwoPair, rank_outs(&groups.singles(), 1), None);
    }

    push(Category::OnePair, rank_outs(&hero_singles, 1), Some(hero_singles.clone()));

    out
}

/// List the draws open to the hero, one entry per distinct out.
///
/// Needs exactly two hero cards and at most five board cards; anything else,
/// or a complete board, yields an empty list.
pub fn possible_hands<R: Rng + ?Sized>(
    hero: &[Card],
    board: &[Card],
    config: &SimulationConfig,
    rng: &mut R,
    cancel: &CancelToken,
) -> Outcome<Vec<PossibleHand>> {
    if hero.len() != 2 || board.len() > 5 {
        return Outcome::Completed(Vec::new());
    }
    let cards_to_see = 7 - (hero.len() + board.len());
    if cards_to_see == 0 {
        return Outcome::Completed(Vec::new());
    }

    let mut known = hero.to_vec();
    known.extend_from_slice(board);
    let Some(current) = evaluate(&known) else {
        return Outcome::Completed(Vec::new());
    };
    let analysis = HandAnalysis::new(&known);
    let families = families(hero, &analysis, current.category, cards_to_see);
    if families.is_empty() {
        return Outcome::Completed(Vec::new());
    }
    for f in &families {
        log::trace!("draw family {} with {} outs", f.category, f.outs.len());
    }

    let estimates = estimate_many(hero, board, &[], families.len(), config, rng, cancel, |trial, counts| {
        let Some(finished) = evaluate(&trial.hero_hand()) else { return };
        for (i, f) in families.iter().enumerate() {
            if f.hits(&finished, &current) {
                counts[i] += 1;
            }
        }
    });
    let Outcome::Completed(estimates) = estimates else {
        return Outcome::Cancelled;
    };

    let hands = families
        .iter()
        .zip(estimates)
        .flat_map(|(f, p)| {
            let share = p / f.outs.len() as f64;
            f.outs.iter().map(move |&outs| PossibleHand { category: f.category, outs, probability: share })
        })
        .collect();
    Outcome::Completed(hands)
}
