//! Slot-bounded game state owned by the caller.

use crate::cards::{filled, parse_cards, Card, CardSlot};
use crate::summary::{fingerprint, Fingerprint};
use std::collections::HashSet;

pub const HERO_SLOTS: usize = 2;
pub const BOARD_SLOTS: usize = 5;
pub const MAX_OPPONENTS: usize = 6;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hero slot {0} out of range (0..2)")]
    HeroSlot(usize),
    #[error("board slot {0} out of range (0..5)")]
    BoardSlot(usize),
    #[error("no opponent at index {0}")]
    OpponentIndex(usize),
    #[error("opponent slot {0} out of range (0..2)")]
    OpponentSlot(usize),
    #[error("too many opponents: {0} (max 6)")]
    TooManyOpponents(usize),
    #[error("too many cards for {area}: {count}")]
    TooManyCards { area: &'static str, count: usize },
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Hero hole cards, community cards and known opponent hands, by slot.
///
/// Slots never grow past their declared bounds. Placing a card that is
/// already used elsewhere is rejected, so a scenario built through the
/// setters always satisfies the engine's distinct-card precondition.
///
/// ```
/// use holdem_odds::cards::{Card, Rank, Suit};
/// use holdem_odds::hand::Scenario;
///
/// let mut s = Scenario::new();
/// s.set_hero(0, Some(Card::new(Rank::Ace, Suit::Spades))).unwrap();
/// s.set_board(2, Some(Card::new(Rank::King, Suit::Hearts))).unwrap();
/// assert_eq!(s.hero_cards().len(), 1);
/// assert!(s.set_board(5, None).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    hero: [CardSlot; HERO_SLOTS],
    board: [CardSlot; BOARD_SLOTS],
    opponents: Vec<[CardSlot; 2]>,
}

impl Scenario {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill slots in order from card lists.
    pub fn from_cards(hero: &[Card], board: &[Card], opponents: &[Vec<Card>]) -> Result<Self, HandError> {
        let mut s = Self::new();
        if hero.len() > HERO_SLOTS {
            return Err(HandError::TooManyCards { area: "hero", count: hero.len() });
        }
        if board.len() > BOARD_SLOTS {
            return Err(HandError::TooManyCards { area: "board", count: board.len() });
        }
        for (i, c) in hero.iter().enumerate() {
            s.set_hero(i, Some(*c))?;
        }
        for (i, c) in board.iter().enumerate() {
            s.set_board(i, Some(*c))?;
        }
        for hand in opponents {
            if hand.len() > 2 {
                return Err(HandError::TooManyCards { area: "opponent", count: hand.len() });
            }
            let idx = s.add_opponent()?;
            for (slot, c) in hand.iter().enumerate() {
                s.set_opponent(idx, slot, Some(*c))?;
            }
        }
        Ok(s)
    }

    /// Parse whitespace/comma separated card lists, e.g. `"As Kd"`.
    pub fn parse(hero: &str, board: &str, opponents: &[&str]) -> Result<Self, HandError> {
        let parse = |s: &str| parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()));
        let hero = parse(hero)?;
        let board = parse(board)?;
        let opponents = opponents.iter().map(|o| parse(o)).collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&hero, &board, &opponents)
    }

    fn ensure_unused(&self, card: CardSlot, current: CardSlot) -> Result<(), HandError> {
        match card {
            Some(c) if current != Some(c) && self.all_cards().contains(&c) => {
                Err(HandError::DuplicateCard(c))
            }
            _ => Ok(()),
        }
    }

    pub fn set_hero(&mut self, slot: usize, card: CardSlot) -> Result<(), HandError> {
        let current = *self.hero.get(slot).ok_or(HandError::HeroSlot(slot))?;
        self.ensure_unused(card, current)?;
        self.hero[slot] = card;
        Ok(())
    }

    pub fn set_board(&mut self, slot: usize, card: CardSlot) -> Result<(), HandError> {
        let current = *self.board.get(slot).ok_or(HandError::BoardSlot(slot))?;
        self.ensure_unused(card, current)?;
        self.board[slot] = card;
        Ok(())
    }

    /// Append an empty opponent hand and return its index.
    pub fn add_opponent(&mut self) -> Result<usize, HandError> {
        if self.opponents.len() >= MAX_OPPONENTS {
            return Err(HandError::TooManyOpponents(self.opponents.len() + 1));
        }
        self.opponents.push([None, None]);
        Ok(self.opponents.len() - 1)
    }

    pub fn set_opponent(&mut self, index: usize, slot: usize, card: CardSlot) -> Result<(), HandError> {
        let hand = self.opponents.get(index).ok_or(HandError::OpponentIndex(index))?;
        let current = *hand.get(slot).ok_or(HandError::OpponentSlot(slot))?;
        self.ensure_unused(card, current)?;
        self.opponents[index][slot] = card;
        Ok(())
    }

    pub fn remove_opponent(&mut self, index: usize) -> Result<(), HandError> {
        if index >= self.opponents.len() {
            return Err(HandError::OpponentIndex(index));
        }
        self.opponents.remove(index);
        Ok(())
    }

    pub fn clear_hero(&mut self) {
        self.hero = [None; HERO_SLOTS];
    }

    pub fn clear_board(&mut self) {
        self.board = [None; BOARD_SLOTS];
    }

    pub fn clear_opponents(&mut self) {
        self.opponents.clear();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn hero_slots(&self) -> &[CardSlot; HERO_SLOTS] {
        &self.hero
    }

    pub fn board_slots(&self) -> &[CardSlot; BOARD_SLOTS] {
        &self.board
    }

    pub fn opponent_slots(&self) -> &[[CardSlot; 2]] {
        &self.opponents
    }

    pub fn hero_cards(&self) -> Vec<Card> {
        filled(&self.hero)
    }

    pub fn board_cards(&self) -> Vec<Card> {
        filled(&self.board)
    }

    /// Opponents whose two hole cards are both known, in index order.
    pub fn opponent_hands(&self) -> Vec<[Card; 2]> {
        self.opponents
            .iter()
            .filter_map(|h| match h {
                [Some(a), Some(b)] => Some([*a, *b]),
                _ => None,
            })
            .collect()
    }

    /// Every placed card: hero, board, then opponents.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = self.hero_cards();
        cards.extend(self.board_cards());
        for h in &self.opponents {
            cards.extend(filled(h));
        }
        cards
    }

    /// Check that no card appears twice and the opponent bound holds.
    pub fn validate(&self) -> Result<(), HandError> {
        if self.opponents.len() > MAX_OPPONENTS {
            return Err(HandError::TooManyOpponents(self.opponents.len()));
        }
        let mut seen = HashSet::new();
        for c in self.all_cards() {
            if !seen.insert(c) {
                return Err(HandError::DuplicateCard(c));
            }
        }
        Ok(())
    }

    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(&self.hero, &self.board, &self.opponents)
    }
}
