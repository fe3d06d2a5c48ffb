use super::rank_groups::RankGroups;
use super::straight_info::{presence, StraightInfo};
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

const ROYAL: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Pre-computed analysis of a 2-7 card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub cards: Vec<Card>,
    pub rank_counts: [u8; 15],
    pub present: [bool; 15],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        for c in cards {
            rank_counts[c.rank().value() as usize] += 1;
        }
        let present = presence(cards.iter().map(|c| c.rank()));

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&present);

        Self { cards: cards.to_vec(), rank_counts, present, rank_groups, suit_info, straight_info }
    }

    /// T, J, Q, K and A all present, in any suits.
    pub fn has_royal_ranks(&self) -> bool {
        ROYAL.iter().all(|r| self.present[r.value() as usize])
    }

    pub fn flush_ranks(&self) -> Vec<Rank> {
        self.suit_info.flush_ranks(&self.cards)
    }
}
