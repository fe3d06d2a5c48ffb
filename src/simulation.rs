//! Monte Carlo estimation over the unseen deck.
//!
//! Every trial completes the board from a uniformly random prefix of the
//! remaining deck and, when asked, deals a random opponent the next two
//! cards. Estimates are statistical: precision is about `1/sqrt(trials)`.

use crate::cards::Card;
use crate::config::SimulationConfig;
use crate::deck::Deck;
use crate::evaluator::evaluate;
use crate::hand::MAX_OPPONENTS;
use crate::task::{run_batched, CancelToken, Outcome};
use core::cmp::Ordering;
use rand::Rng;

/// One simulated deal.
#[derive(Debug, Clone, Copy)]
pub struct Trial<'a> {
    pub hero: &'a [Card],
    /// Known board plus the simulated completion.
    pub board: &'a [Card],
    /// Random opponent hole cards, for opponent-aware sampling.
    pub opponent: Option<[Card; 2]>,
}

impl Trial<'_> {
    /// Hero hole cards followed by the completed board.
    pub fn hero_hand(&self) -> Vec<Card> {
        self.hand_with(self.hero)
    }

    /// `hole` followed by the completed board.
    pub fn hand_with(&self, hole: &[Card]) -> Vec<Card> {
        let mut cards = Vec::with_capacity(hole.len() + self.board.len());
        cards.extend_from_slice(hole);
        cards.extend_from_slice(self.board);
        cards
    }
}

/// Draws board completions (and optionally an opponent) from the unseen deck.
pub(crate) struct Sampler<'a> {
    hero: &'a [Card],
    known_board: usize,
    board: Vec<Card>,
    deck: Deck,
    board_needed: usize,
    with_opponent: bool,
}

impl<'a> Sampler<'a> {
    /// `dead` are further cards out of play, e.g. known opponent hands.
    pub(crate) fn new(hero: &'a [Card], board: &[Card], dead: &[Card], with_opponent: bool) -> Self {
        let mut dealt = Vec::with_capacity(hero.len() + board.len() + dead.len());
        dealt.extend_from_slice(hero);
        dealt.extend_from_slice(board);
        dealt.extend_from_slice(dead);
        let mut full = Vec::with_capacity(5);
        full.extend_from_slice(board);
        Self {
            hero,
            known_board: board.len(),
            board: full,
            deck: Deck::remaining(&dealt),
            board_needed: 5usize.saturating_sub(board.len()),
            with_opponent,
        }
    }

    pub(crate) fn board_needed(&self) -> usize {
        self.board_needed
    }

    /// Cards each trial takes from the deck.
    pub(crate) fn draws(&self) -> usize {
        self.board_needed + if self.with_opponent { 2 } else { 0 }
    }

    pub(crate) fn can_sample(&self) -> bool {
        self.draws() <= self.deck.len()
    }

    pub(crate) fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Trial<'_>> {
        let draws = self.draws();
        let drawn = self.deck.sample_with(rng, draws)?;
        self.board.truncate(self.known_board);
        self.board.extend_from_slice(&drawn[..self.board_needed]);
        let opponent = if self.with_opponent {
            Some([drawn[self.board_needed], drawn[self.board_needed + 1]])
        } else {
            None
        };
        Some(Trial { hero: self.hero, board: &self.board, opponent })
    }
}

/// Estimate several outcome frequencies in a single pass.
///
/// `tally` sees each trial and bumps the counters of the outcomes that
/// occurred. Returns one probability per counter. With no cards left to
/// come, or too few cards left in the deck, every probability is 0 and no
/// sampling happens.
#[allow(clippy::too_many_arguments)]
pub fn estimate_many<R, F>(
    hero: &[Card],
    board: &[Card],
    dead: &[Card],
    outcomes: usize,
    config: &SimulationConfig,
    rng: &mut R,
    cancel: &CancelToken,
    mut tally: F,
) -> Outcome<Vec<f64>>
where
    R: Rng + ?Sized,
    F: FnMut(&Trial<'_>, &mut [usize]),
{
    let mut sampler = Sampler::new(hero, board, dead, false);
    if sampler.board_needed() == 0 || !sampler.can_sample() {
        return Outcome::Completed(vec![0.0; outcomes]);
    }

    let mut counts = vec![0usize; outcomes];
    let mut realized = 0usize;
    let run = run_batched(config.trials, config.batch_size, cancel, || {
        if let Some(trial) = sampler.sample(&mut *rng) {
            realized += 1;
            tally(&trial, &mut counts);
        }
    });
    run.map(|()| frequencies(&counts, realized))
}

/// Probability that `predicate` holds once the board is complete.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::config::SimulationConfig;
/// use holdem_odds::simulation::estimate;
/// use holdem_odds::task::{CancelToken, Outcome};
///
/// let hero = parse_cards("As Ks").unwrap();
/// let board = parse_cards("Qs Js Ts 2d 3c").unwrap();
/// let config = SimulationConfig::default().with_seed(1);
/// // nothing left to deal: the estimate is 0 without sampling
/// let p = estimate(&hero, &board, &[], &config, &mut config.rng(), &CancelToken::new(), |_| true);
/// assert_eq!(p, Outcome::Completed(0.0));
/// ```
pub fn estimate<R, F>(
    hero: &[Card],
    board: &[Card],
    dead: &[Card],
    config: &SimulationConfig,
    rng: &mut R,
    cancel: &CancelToken,
    mut predicate: F,
) -> Outcome<f64>
where
    R: Rng + ?Sized,
    F: FnMut(&Trial<'_>) -> bool,
{
    estimate_many(hero, board, dead, 1, config, rng, cancel, |trial, counts| {
        if predicate(trial) {
            counts[0] += 1;
        }
    })
    .map(|ps| ps.first().copied().unwrap_or(0.0))
}

fn frequencies(counts: &[usize], trials: usize) -> Vec<f64> {
    if trials == 0 {
        return vec![0.0; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / trials as f64).collect()
}

/// Share of decided trials won by the hero and by each opponent.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct WinProbabilities {
    pub hero: f64,
    /// One entry per opponent; a single sampled opponent when none are known.
    pub opponents: Vec<f64>,
    /// Trials with a single winner.
    pub decided: usize,
    /// Trials that ended in a full tie and were left out.
    pub ties: usize,
}

impl WinProbabilities {
    pub(crate) fn empty(opponents: usize) -> Self {
        Self { hero: 0.0, opponents: vec![0.0; opponents], decided: 0, ties: 0 }
    }
}

/// Index of the single best hand, or `None` on a tie for best.
fn showdown(hands: &[Vec<Card>]) -> Option<usize> {
    let evals: Vec<_> = hands.iter().map(|h| evaluate(h)).collect();
    let mut best: Option<usize> = None;
    let mut tied = false;
    for (i, e) in evals.iter().enumerate() {
        let Some(e) = e else { continue };
        match best.and_then(|b| evals[b].as_ref()) {
            None => {
                best = Some(i);
                tied = false;
            }
            Some(b) => match e.compare(b) {
                Ordering::Greater => {
                    best = Some(i);
                    tied = false;
                }
                Ordering::Equal => tied = true,
                Ordering::Less => {}
            },
        }
    }
    if tied {
        None
    } else {
        best
    }
}

/// Estimate how often the hero and each known opponent win outright.
///
/// With no known opponents one random opponent is dealt per trial. At most
/// six opponents are considered; extra hands are ignored with a warning.
pub fn win_probability<R: Rng + ?Sized>(
    hero: &[Card],
    board: &[Card],
    opponents: &[[Card; 2]],
    config: &SimulationConfig,
    rng: &mut R,
    cancel: &CancelToken,
) -> Outcome<WinProbabilities> {
    let opponents = if opponents.len() > MAX_OPPONENTS {
        log::warn!("{} opponents given, only the first {MAX_OPPONENTS} are simulated", opponents.len());
        &opponents[..MAX_OPPONENTS]
    } else {
        opponents
    };
    let random_opponent = opponents.is_empty();
    let seats = opponents.len().max(1);
    let dead: Vec<Card> = opponents.iter().flatten().copied().collect();

    let mut sampler = Sampler::new(hero, board, &dead, random_opponent);
    if !sampler.can_sample() {
        return Outcome::Completed(WinProbabilities::empty(seats));
    }
    // nothing random left: one showdown decides it
    let trials = if sampler.draws() == 0 { 1 } else { config.trials };

    let mut wins = vec![0usize; seats + 1];
    let mut decided = 0usize;
    let mut ties = 0usize;
    let run = run_batched(trials, config.batch_size, cancel, || {
        let Some(trial) = sampler.sample(&mut *rng) else { return };
        let mut hands = Vec::with_capacity(seats + 1);
        hands.push(trial.hero_hand());
        match trial.opponent {
            Some(hole) => hands.push(trial.hand_with(&hole)),
            None => hands.extend(opponents.iter().map(|hole| trial.hand_with(hole))),
        }
        match showdown(&hands) {
            Some(winner) => {
                wins[winner] += 1;
                decided += 1;
            }
            None => ties += 1,
        }
    });
    if run.is_cancelled() {
        return Outcome::Cancelled;
    }

    let shares = frequencies(&wins, decided);
    log::debug!("win estimate: {decided} decided, {ties} tied, hero {:.3}", shares[0]);
    Outcome::Completed(WinProbabilities {
        hero: shares[0],
        opponents: shares[1..].to_vec(),
        decided,
        ties,
    })
}
