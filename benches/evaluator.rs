use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_odds::cards::{parse_cards, Card, Rank, Suit};
use holdem_odds::config::SimulationConfig;
use holdem_odds::draws::possible_hands;
use holdem_odds::evaluator::{classify, evaluate};
use holdem_odds::simulation::win_probability;
use holdem_odds::task::CancelToken;

fn bench_evaluate(c: &mut Criterion) {
    let hi = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let seven = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Nine, Suit::Spades),
    ];

    let mut g = c.benchmark_group("evaluate");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi[..], |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("royal", "7 cards"), &seven[..], |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.finish();

    c.bench_function("classify_two", |b| b.iter(|| classify(black_box(&seven[..2]))));
}

fn bench_simulation(c: &mut Criterion) {
    let config = SimulationConfig::default().with_trials(1_000).with_seed(1);
    let cancel = CancelToken::new();
    let hero = parse_cards("Ah Kh").unwrap();
    let board = parse_cards("2h 7h 9c").unwrap();

    c.bench_function("win_probability_1k", |b| {
        b.iter(|| win_probability(black_box(&hero), &board, &[], &config, &mut config.rng(), &cancel))
    });
    c.bench_function("possible_hands_1k", |b| {
        b.iter(|| possible_hands(black_box(&hero), &board, &config, &mut config.rng(), &cancel))
    });
}

criterion_group!(benches, bench_evaluate, bench_simulation);
criterion_main!(benches);
