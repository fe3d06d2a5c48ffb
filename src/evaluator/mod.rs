//! Hand classification and tie-breaking over 2-7 cards.

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use core::cmp::Ordering;
use core::fmt;

/// Poker hand category from weakest to strongest.
///
/// The discriminant is the category strength (1-10); higher beats lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank values that order hands within one category.
///
/// Vectors compare lexicographically over their common prefix only, so a
/// shorter vector that matches the start of a longer one is a tie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TieBreak(Vec<u8>);

impl TieBreak {
    pub fn new(values: Vec<u8>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Compare position by position; the first differing value decides.
    pub fn compare(&self, other: &TieBreak) -> Ordering {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Category plus tie-break for one set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub tie_break: TieBreak,
}

impl Evaluation {
    /// Category strength first, then tie-break.
    ///
    /// Not an `Ord` impl: truncated tie-break comparison is not transitive
    /// across vectors of different lengths.
    pub fn compare(&self, other: &Evaluation) -> Ordering {
        self.category.cmp(&other.category).then_with(|| self.tie_break.compare(&other.tie_break))
    }

    /// Strictly stronger than `current`; anything beats a missing hand.
    pub fn beats(&self, current: Option<&Evaluation>) -> bool {
        match current {
            None => true,
            Some(c) => self.compare(c) == Ordering::Greater,
        }
    }
}

/// Evaluate a hand of two or more cards.
///
/// Returns `None` for fewer than two cards.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("7c 7d 7h 2s 2c").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::FullHouse);
/// assert_eq!(eval.tie_break.values(), &[7, 2]);
/// ```
pub fn evaluate(cards: &[Card]) -> Option<Evaluation> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.len() < 2 {
        return None;
    }
    let analysis = HandAnalysis::new(cards);

    DETECTORS.iter().find(|d| d.detect(&analysis)).map(|d| Evaluation {
        category: d.category(),
        tie_break: d.tie_break(&analysis),
    })
}

/// Classify a hand into its category; `None` for fewer than two cards.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::evaluator::{classify, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th").unwrap();
/// assert_eq!(classify(&cards), Some(Category::RoyalFlush));
/// assert_eq!(classify(&cards[..1]), None);
/// ```
pub fn classify(cards: &[Card]) -> Option<Category> {
    evaluate(cards).map(|e| e.category)
}

/// Build the tie-break vector `category` would use for `cards`.
///
/// Parts that `cards` cannot supply are left out, so asking for a category
/// the cards do not hold yields a short or empty vector.
pub fn tie_break_vector(category: Category, cards: &[Card]) -> TieBreak {
    let analysis = hand_analysis::HandAnalysis::new(cards);
    detector::detector_for(category).tie_break(&analysis)
}

/// Whether a candidate hand beats the current one.
///
/// Always true with no current category. Equal vectors are a tie, and a tie
/// never beats.
pub fn beats(
    candidate_category: Category,
    candidate: &TieBreak,
    current_category: Option<Category>,
    current: &TieBreak,
) -> bool {
    let Some(current_category) = current_category else {
        return true;
    };
    match candidate_category.cmp(&current_category) {
        Ordering::Equal => candidate.compare(current) == Ordering::Greater,
        ord => ord == Ordering::Greater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn too_few_cards_is_none() {
        assert!(evaluate(&[]).is_none());
        assert!(evaluate(&parse_cards("As").unwrap()).is_none());
        assert_eq!(classify(&parse_cards("As Kd").unwrap()), Some(Category::HighCard));
    }

    #[test]
    fn categories_over_partial_and_full_hands() {
        assert_eq!(eval("As Ad").category, Category::OnePair);
        assert_eq!(eval("As Ad Ks Kd").category, Category::TwoPair);
        assert_eq!(eval("As Ad Ac").category, Category::ThreeOfAKind);
        assert_eq!(eval("As Ad Ac Ah").category, Category::FourOfAKind);
        assert_eq!(eval("9c Th Jd Qs Kc 2d 2h").category, Category::Straight);
        assert_eq!(eval("2h 5h 9h Jh Kh Ks Kd").category, Category::Flush);
        assert_eq!(eval("5d 6d 7d 8d 9d").category, Category::StraightFlush);
        assert_eq!(eval("Ah Kh Qh Jh Th 9h").category, Category::RoyalFlush);
    }

    #[test]
    fn flush_and_straight_across_suits_is_straight_flush() {
        // flush and straight are detected independently over all cards
        let e = eval("2h 4h 6h 8h Th 7c 9d");
        assert_eq!(e.category, Category::StraightFlush);
        assert_eq!(e.tie_break.values(), &[10]);
    }

    #[test]
    fn quads_outrank_full_house_in_seven() {
        let e = eval("9c 9d 9h 9s Ac Ah 5c");
        assert_eq!(e.category, Category::FourOfAKind);
        assert_eq!(e.tie_break.values(), &[9, 14]);
    }

    #[test]
    fn tie_break_compare_is_truncated() {
        let a = TieBreak::new(vec![5]);
        let b = TieBreak::new(vec![5, 3]);
        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_eq!(TieBreak::new(vec![6, 2]).compare(&b), Ordering::Greater);
        assert_eq!(TieBreak::new(vec![5, 2]).compare(&b), Ordering::Less);
    }

    #[test]
    fn beats_rules() {
        let v = TieBreak::new(vec![10, 4]);
        assert!(beats(Category::HighCard, &v, None, &TieBreak::default()));
        assert!(!beats(Category::Flush, &v, Some(Category::Flush), &v));
        assert!(beats(Category::Flush, &v, Some(Category::Straight), &TieBreak::new(vec![14])));
        assert!(!beats(Category::Straight, &TieBreak::new(vec![14]), Some(Category::Flush), &v));
        assert!(beats(Category::Flush, &TieBreak::new(vec![10, 5]), Some(Category::Flush), &v));
    }

    #[test]
    fn evaluation_beats_matches_free_function() {
        let strong = eval("As Ad Kc 7h 2d");
        let weak = eval("Ks Kd Qc 7h 2d");
        assert!(strong.beats(Some(&weak)));
        assert!(!weak.beats(Some(&strong)));
        assert!(!strong.beats(Some(&strong.clone())));
        assert!(weak.beats(None));
    }

    #[test]
    fn tie_break_vector_for_requested_category() {
        let cards = parse_cards("7c 7d 7h 2s 2c").unwrap();
        assert_eq!(tie_break_vector(Category::FullHouse, &cards).values(), &[7, 2]);
        assert_eq!(tie_break_vector(Category::ThreeOfAKind, &cards).values(), &[7, 2]);
        assert_eq!(tie_break_vector(Category::RoyalFlush, &cards).values(), &[14]);
    }

    #[test]
    fn category_strengths_are_one_to_ten() {
        let strengths: Vec<u8> = Category::ALL.iter().map(|c| c.strength()).collect();
        assert_eq!(strengths, (1..=10).collect::<Vec<u8>>());
        assert_eq!(Category::FullHouse.to_string(), "Full House");
    }
}
