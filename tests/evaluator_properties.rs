use holdem_odds::cards::{Card, Rank, Suit};
use holdem_odds::evaluator::{beats, classify, evaluate, Category};
use proptest::prelude::*;
use std::cmp::Ordering;

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).unwrap_or(Rank::Ace)
}

/// Up to seven distinct cards.
fn distinct_cards(min: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::btree_set((2u8..=14u8, any_suit()), min..=7)
        .prop_map(|set| set.into_iter().map(|(v, s)| Card::new(rank_from_val(v), s)).collect())
}

fn straight_cards(top: u8) -> [Card; 5] {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let mut vals: Vec<u8> = set.iter().copied().collect();
            vals.sort_unstable();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

fn compare_desc(a: &[Rank], b: &[Rank]) -> Ordering {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(|x, y| y.cmp(x));
    b.sort_by(|x, y| y.cmp(x));
    a.cmp(&b)
}

proptest! {
    #[test]
    fn classify_is_permutation_invariant(cards in distinct_cards(2), rotate in 0usize..7) {
        let mut shuffled = cards.clone();
        shuffled.reverse();
        let n = shuffled.len();
        shuffled.rotate_left(rotate % n);
        prop_assert_eq!(evaluate(&cards), evaluate(&shuffled));
    }

    #[test]
    fn two_or_more_cards_always_classify(cards in distinct_cards(2)) {
        prop_assert!(classify(&cards).is_some());
        prop_assert!(classify(&cards[..1]).is_none());
    }

    #[test]
    fn an_evaluation_never_beats_itself(cards in distinct_cards(2)) {
        let e = evaluate(&cards).unwrap();
        prop_assert!(!beats(e.category, &e.tie_break, Some(e.category), &e.tie_break));
        prop_assert!(!e.beats(Some(&e)));
    }

    #[test]
    fn adding_a_card_never_weakens_the_category(cards in distinct_cards(3)) {
        let fewer = classify(&cards[..cards.len() - 1]).unwrap();
        let more = classify(&cards).unwrap();
        prop_assert!(more >= fewer);
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let hi = evaluate(&straight_cards(top_hi)).unwrap();
        let lo = evaluate(&straight_cards(top_lo)).unwrap();
        prop_assert_eq!(hi.category, Category::Straight);
        prop_assert_eq!(lo.category, Category::Straight);
        prop_assert!(hi.beats(Some(&lo)));
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let wheel = evaluate(&straight_cards(5)).unwrap();
        let higher = evaluate(&straight_cards(top)).unwrap();
        prop_assert_eq!(wheel.tie_break.values(), &[5]);
        prop_assert!(higher.beats(Some(&wheel)));
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand = |ranks: &[Rank]| ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect::<Vec<_>>();
        let e_a = evaluate(&hand(&a[..])).unwrap();
        let e_b = evaluate(&hand(&b[..])).unwrap();
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);
        prop_assert_eq!(e_a.compare(&e_b), compare_desc(&a, &b));
    }
}
