use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, TieBreak};

/// Strategy pattern: each category detector knows how to detect its category
/// and how to build that category's tie-break vector.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak;
}

fn ranks(rs: impl IntoIterator<Item = Rank>) -> TieBreak {
    TieBreak::new(rs.into_iter().map(Rank::value).collect())
}

fn straight_high(analysis: &HandAnalysis) -> TieBreak {
    TieBreak::new(analysis.straight_info.high.into_iter().collect())
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: a flush and a straight with T-J-Q-K-A all present
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
            && analysis.straight_info.is_straight
            && analysis.has_royal_ranks()
    }

    fn tie_break(&self, _analysis: &HandAnalysis) -> TieBreak {
        // every royal flush ties
        TieBreak::new(vec![Rank::Ace.value()])
    }
}

/// Straight Flush: a flush and a straight in the same hand
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush() && analysis.straight_info.is_straight
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        straight_high(analysis)
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        !analysis.rank_groups.quads().is_empty()
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        let groups = &analysis.rank_groups;
        let Some(&quad) = groups.quads().first() else {
            return TieBreak::default();
        };
        ranks(std::iter::once(quad).chain(groups.kickers(&[quad], 1)))
    }
}

/// Full House: Three of a kind plus another rank held at least twice
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        let groups = &analysis.rank_groups;
        let Some(&trips) = groups.trips().first() else {
            return TieBreak::default();
        };
        ranks(std::iter::once(trips).chain(groups.full_house_pair(trips)))
    }
}

/// Flush: Five or more cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush()
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        ranks(analysis.flush_ranks())
    }
}

/// Straight: Five consecutive ranks
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        straight_high(analysis)
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        !analysis.rank_groups.trips().is_empty()
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        let groups = &analysis.rank_groups;
        let Some(&trips) = groups.trips().first() else {
            return TieBreak::default();
        };
        ranks(std::iter::once(trips).chain(groups.kickers(&[trips], 2)))
    }
}

/// Two Pair: Two ranks held twice
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() >= 2
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        let groups = &analysis.rank_groups;
        let pairs = groups.pairs();
        if pairs.len() < 2 {
            return TieBreak::default();
        }
        let top = [pairs[0], pairs[1]];
        ranks(top.into_iter().chain(groups.kickers(&top, 1)))
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        !analysis.rank_groups.pairs().is_empty()
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        let groups = &analysis.rank_groups;
        let Some(&pair) = groups.pairs().first() else {
            return TieBreak::default();
        };
        ranks(std::iter::once(pair).chain(groups.kickers(&[pair], 3)))
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn tie_break(&self, analysis: &HandAnalysis) -> TieBreak {
        ranks(analysis.rank_groups.kickers(&[], 5))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

/// The detector responsible for `category`.
pub fn detector_for(category: Category) -> &'static dyn CategoryDetector {
    match category {
        Category::RoyalFlush => &RoyalFlushDetector,
        Category::StraightFlush => &StraightFlushDetector,
        Category::FourOfAKind => &FourOfAKindDetector,
        Category::FullHouse => &FullHouseDetector,
        Category::Flush => &FlushDetector,
        Category::Straight => &StraightDetector,
        Category::ThreeOfAKind => &ThreeOfAKindDetector,
        Category::TwoPair => &TwoPairDetector,
        Category::OnePair => &OnePairDetector,
        Category::HighCard => &HighCardDetector,
    }
}
