//! Which hands a random opponent most often beats the hero with.

use crate::cards::Card;
use crate::config::SimulationConfig;
use crate::evaluator::{evaluate, Category, Evaluation};
use crate::simulation::Sampler;
use crate::task::{run_batched, CancelToken, Outcome};
use core::cmp::Ordering;
use rand::Rng;
use std::collections::BTreeMap;

/// Opponent hole cards together with the board they were realised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentExample {
    pub hole: [Card; 2],
    pub board: Vec<Card>,
}

impl OpponentExample {
    fn evaluation(&self) -> Option<Evaluation> {
        let mut cards = self.hole.to_vec();
        cards.extend_from_slice(&self.board);
        evaluate(&cards)
    }
}

/// How often an opponent beats the hero holding `category`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct OpponentHandEstimate {
    pub category: Category,
    pub probability: f64,
    /// Strongest of the retained examples for this category.
    pub example: Option<OpponentExample>,
}

#[derive(Debug, Default)]
struct Tally {
    count: usize,
    examples: Vec<OpponentExample>,
}

impl Tally {
    fn best_example(self) -> Option<OpponentExample> {
        let mut best: Option<(OpponentExample, Evaluation)> = None;
        for ex in self.examples {
            let Some(e) = ex.evaluation() else { continue };
            let stronger = match &best {
                None => true,
                Some((_, b)) => e.compare(b) == Ordering::Greater,
            };
            if stronger {
                best = Some((ex, e));
            }
        }
        best.map(|(ex, _)| ex)
    }
}

/// Sample random opponents and collect the categories they win with.
///
/// Both hands are evaluated on every completed board, so a hero who improves
/// on the runout is judged by the improved hand. Without a `current` hero
/// category every sampled opponent counts as a winner. Returns an empty list
/// when the deck cannot supply an opponent.
pub fn infer<R: Rng + ?Sized>(
    hero: &[Card],
    board: &[Card],
    current: Option<Category>,
    config: &SimulationConfig,
    rng: &mut R,
    cancel: &CancelToken,
) -> Outcome<Vec<OpponentHandEstimate>> {
    let mut sampler = Sampler::new(hero, board, &[], true);
    if !sampler.can_sample() {
        return Outcome::Completed(Vec::new());
    }

    let mut tallies: BTreeMap<Category, Tally> = BTreeMap::new();
    let mut realized = 0usize;
    let run = run_batched(config.trials, config.batch_size, cancel, || {
        let Some(trial) = sampler.sample(&mut *rng) else { return };
        let Some(hole) = trial.opponent else { return };
        realized += 1;
        let Some(theirs) = evaluate(&trial.hand_with(&hole)) else { return };
        let ours = current.and_then(|_| evaluate(&trial.hero_hand()));
        if !theirs.beats(ours.as_ref()) {
            return;
        }
        let tally = tallies.entry(theirs.category).or_default();
        tally.count += 1;
        if tally.examples.len() < config.max_examples {
            tally.examples.push(OpponentExample { hole, board: trial.board.to_vec() });
        }
    });
    if run.is_cancelled() {
        return Outcome::Cancelled;
    }
    if realized == 0 {
        return Outcome::Completed(Vec::new());
    }

    let mut estimates: Vec<OpponentHandEstimate> = tallies
        .into_iter()
        .map(|(category, tally)| OpponentHandEstimate {
            category,
            probability: tally.count as f64 / realized as f64,
            example: tally.best_example(),
        })
        .collect();
    estimates.sort_by(|a, b| {
        b.probability.total_cmp(&a.probability).then_with(|| b.category.cmp(&a.category))
    });
    log::debug!("opponent inference: {} categories over {realized} trials", estimates.len());
    Outcome::Completed(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::classify;
    use crate::simulation::win_probability;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn run(hero: &str, board: &str, trials: usize) -> Vec<OpponentHandEstimate> {
        let hero = cards(hero);
        let board = cards(board);
        let mut known = hero.clone();
        known.extend_from_slice(&board);
        let config = SimulationConfig::default().with_trials(trials).with_seed(9);
        infer(&hero, &board, classify(&known), &config, &mut config.rng(), &CancelToken::new())
            .completed()
            .unwrap()
    }

    #[test]
    fn estimates_are_sorted_and_bounded() {
        let est = run("2c 7d", "9h Jc Ks", 3_000);
        assert!(!est.is_empty());
        let total: f64 = est.iter().map(|e| e.probability).sum();
        assert!(total <= 1.0 + 1e-9);
        for pair in est.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn nut_hand_has_no_threats() {
        assert!(run("Ah Kh", "Qh Jh Th 2c 3d", 500).is_empty());
    }

    #[test]
    fn examples_actually_beat_the_hero_category() {
        let est = run("Qc Qd", "2h 7s 9c", 2_000);
        for e in &est {
            let ex = e.example.as_ref().unwrap();
            assert_eq!(ex.board.len(), 5);
            let mut opp = ex.hole.to_vec();
            opp.extend_from_slice(&ex.board);
            assert_eq!(classify(&opp), Some(e.category));
            assert!(e.category >= Category::OnePair);
        }
    }

    #[test]
    fn examples_beat_the_hero_on_their_own_board() {
        // queens stay one pair on the flop but often improve on the runout
        let hero = cards("Qc Qd");
        let est = run("Qc Qd", "2h 7s 9c", 4_000);
        for e in &est {
            let ex = e.example.as_ref().unwrap();
            let mut ours = hero.clone();
            ours.extend_from_slice(&ex.board);
            let ours = evaluate(&ours).unwrap();
            assert!(ex.evaluation().unwrap().beats(Some(&ours)), "{e:?}");
        }
    }

    #[test]
    fn total_matches_a_head_to_head_showdown() {
        let hero = cards("Qc Qd");
        let board = cards("2h 7s 9c");
        let est = run("Qc Qd", "2h 7s 9c", 20_000);
        let total: f64 = est.iter().map(|e| e.probability).sum();

        let config = SimulationConfig::default().with_trials(20_000).with_seed(31);
        let w = win_probability(&hero, &board, &[], &config, &mut config.rng(), &CancelToken::new())
            .completed()
            .unwrap();
        // inference counts ties as trials the opponent did not win
        let expected = w.opponents[0] * w.decided as f64 / (w.decided + w.ties) as f64;
        assert!((total - expected).abs() < 0.02, "inferred {total}, showdown {expected}");
    }

    #[test]
    fn best_example_is_the_strongest_retained() {
        let board = cards("2h 7s 9c Jd 3c");
        let example = |hole: &str| {
            let h = cards(hole);
            OpponentExample { hole: [h[0], h[1]], board: board.clone() }
        };
        let tally = Tally {
            count: 3,
            examples: vec![example("4c 4d"), example("Kc Kd"), example("8c 8d")],
        };
        assert_eq!(tally.best_example(), Some(example("Kc Kd")));
        assert_eq!(Tally::default().best_example(), None);
    }

    #[test]
    fn missing_current_counts_every_opponent() {
        let config = SimulationConfig::default().with_trials(1_000).with_seed(2);
        let est = infer(&cards("2c 7d"), &[], None, &config, &mut config.rng(), &CancelToken::new())
            .completed()
            .unwrap();
        let total: f64 = est.iter().map(|e| e.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn examples_are_capped() {
        let config = SimulationConfig::default().with_trials(500).with_seed(4).with_max_examples(0);
        let est = infer(&cards("2c 7d"), &[], None, &config, &mut config.rng(), &CancelToken::new())
            .completed()
            .unwrap();
        assert!(est.iter().all(|e| e.example.is_none()));
    }

    #[test]
    fn cancelled_before_start() {
        let config = SimulationConfig::default();
        let token = CancelToken::new();
        token.cancel();
        let out = infer(&cards("2c 7d"), &[], None, &config, &mut config.rng(), &token);
        assert!(out.is_cancelled());
    }
}
