use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// The unseen part of a 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// Standard deck minus every card in `dealt`.
    ///
    /// ```
    /// use holdem_odds::cards::{Card, Rank, Suit};
    /// use holdem_odds::deck::Deck;
    ///
    /// let deck = Deck::remaining(&[Card::new(Rank::Ace, Suit::Spades)]);
    /// assert_eq!(deck.len(), 51);
    /// ```
    pub fn remaining(dealt: &[Card]) -> Self {
        let mut seen = [[false; 4]; 15];
        for c in dealt {
            seen[c.rank().value() as usize][c.suit().index()] = true;
        }
        let mut deck = Self::standard();
        deck.cards.retain(|c| !seen[c.rank().value() as usize][c.suit().index()]);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Draw `n` distinct cards uniformly at random, without removing them.
    ///
    /// Only the first `n` positions are permuted, which is equivalent to taking
    /// the prefix of a full shuffle. Returns `None` when fewer than `n` remain.
    pub fn sample_with<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> Option<&[Card]> {
        if n > self.cards.len() {
            return None;
        }
        let (picked, _) = self.cards.partial_shuffle(rng, n);
        Some(picked)
    }
}
