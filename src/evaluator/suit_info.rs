use crate::cards::{Card, Rank, Suit};

/// Per-suit card counts and the flush suit, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub counts: [u8; 4],
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Count suits; a suit holding five or more cards is a flush.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suit().index()] += 1;
        }
        // with more than nine cards two suits could qualify; prefer the longer one
        let flush_suit = Suit::ALL
            .iter()
            .copied()
            .filter(|s| counts[s.index()] >= 5)
            .max_by_key(|s| (counts[s.index()], *s));
        SuitInfo { counts, flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.counts[suit.index()]
    }

    /// Top five ranks of the flush suit, descending. Empty without a flush.
    pub fn flush_ranks(&self, cards: &[Card]) -> Vec<Rank> {
        let Some(suit) = self.flush_suit else {
            return Vec::new();
        };
        let mut ranks: Vec<Rank> =
            cards.iter().filter(|c| c.suit() == suit).map(|c| c.rank()).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks.truncate(5);
        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_in_seven_cards() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush());
        assert_eq!(info.flush_suit, Some(Suit::Spades));
        assert_eq!(info.count(Suit::Spades), 6);
        assert_eq!(
            info.flush_ranks(&cards),
            vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]
        );
    }

    #[test]
    fn test_not_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush());
        assert_eq!(info.flush_suit, None);
        assert_eq!(info.count(Suit::Spades), 3);
        assert!(info.flush_ranks(&cards).is_empty());
    }
}
