//! High-level entry points tying the engine pieces together.

use crate::cards::Card;
use crate::config::SimulationConfig;
use crate::draws::possible_hands;
use crate::evaluator::{evaluate, Category, Evaluation};
use crate::hand::Scenario;
use crate::opponents::{infer, OpponentHandEstimate};
use crate::simulation::{win_probability, WinProbabilities};
use crate::summary::{combine, CombinedPossibleHand, Fingerprint};
use crate::task::{AnalysisTask, CancelToken, Outcome, TaskError};

/// Everything known about one scenario.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Report {
    pub fingerprint: Fingerprint,
    /// Hero plus board, `None` with fewer than two cards.
    pub evaluation: Option<Evaluation>,
    pub draws: Vec<CombinedPossibleHand>,
    pub win: WinProbabilities,
    pub threats: Vec<OpponentHandEstimate>,
}

/// Runs analyses with one [`SimulationConfig`].
///
/// Every call builds its own RNG from the config, so a seeded analyzer gives
/// the same answer for the same input.
///
/// ```
/// use holdem_odds::analysis::Analyzer;
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::config::SimulationConfig;
/// use holdem_odds::task::CancelToken;
///
/// let analyzer = Analyzer::new(SimulationConfig::default().with_trials(2_000).with_seed(7));
/// let hero = parse_cards("Ah Kh").unwrap();
/// let board = parse_cards("2h 7h 9c").unwrap();
/// let draws = analyzer.possible_draws(&hero, &board, &CancelToken::new()).completed().unwrap();
/// assert!(draws.iter().all(|d| (0.0..=1.0).contains(&d.total)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analyzer {
    config: SimulationConfig,
}

impl Analyzer {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn classify(&self, hero: &[Card], board: &[Card]) -> Option<Evaluation> {
        evaluate(&joined(hero, board))
    }

    /// Draws open to the hero, grouped by target category.
    pub fn possible_draws(
        &self,
        hero: &[Card],
        board: &[Card],
        cancel: &CancelToken,
    ) -> Outcome<Vec<CombinedPossibleHand>> {
        log::debug!("possible draws: hero {} cards, board {} cards", hero.len(), board.len());
        possible_hands(hero, board, &self.config, &mut self.config.rng(), cancel).map(|h| combine(&h))
    }

    pub fn win_probability(
        &self,
        hero: &[Card],
        board: &[Card],
        opponents: &[[Card; 2]],
        cancel: &CancelToken,
    ) -> Outcome<WinProbabilities> {
        log::debug!("win probability against {} known opponents", opponents.len());
        win_probability(hero, board, opponents, &self.config, &mut self.config.rng(), cancel)
    }

    /// Categories a random opponent beats the hero with.
    ///
    /// Both hands are evaluated on each completed board; `current` of `None`
    /// means the hero has no hand yet and every opponent counts.
    pub fn opponent_hands(
        &self,
        hero: &[Card],
        board: &[Card],
        current: Option<Category>,
        cancel: &CancelToken,
    ) -> Outcome<Vec<OpponentHandEstimate>> {
        log::debug!("opponent inference against {current:?}");
        infer(hero, board, current, &self.config, &mut self.config.rng(), cancel)
    }

    /// Run every analysis on a scenario. Incomplete opponent hands are ignored.
    pub fn report(&self, scenario: &Scenario, cancel: &CancelToken) -> Outcome<Report> {
        let hero = scenario.hero_cards();
        let board = scenario.board_cards();
        let evaluation = self.classify(&hero, &board);
        let Outcome::Completed(draws) = self.possible_draws(&hero, &board, cancel) else {
            return Outcome::Cancelled;
        };
        let Outcome::Completed(win) = self.win_probability(&hero, &board, &scenario.opponent_hands(), cancel)
        else {
            return Outcome::Cancelled;
        };
        let current = evaluation.as_ref().map(|e| e.category);
        self.opponent_hands(&hero, &board, current, cancel).map(|threats| Report {
            fingerprint: scenario.fingerprint(),
            evaluation,
            draws,
            win,
            threats,
        })
    }

    pub fn spawn_possible_draws(
        &self,
        hero: Vec<Card>,
        board: Vec<Card>,
    ) -> Result<AnalysisTask<Vec<CombinedPossibleHand>>, TaskError> {
        let analyzer = *self;
        AnalysisTask::spawn("possible-draws", move |cancel| analyzer.possible_draws(&hero, &board, cancel))
    }

    pub fn spawn_win_probability(
        &self,
        hero: Vec<Card>,
        board: Vec<Card>,
        opponents: Vec<[Card; 2]>,
    ) -> Result<AnalysisTask<WinProbabilities>, TaskError> {
        let analyzer = *self;
        AnalysisTask::spawn("win-probability", move |cancel| {
            analyzer.win_probability(&hero, &board, &opponents, cancel)
        })
    }

    pub fn spawn_opponent_hands(
        &self,
        hero: Vec<Card>,
        board: Vec<Card>,
        current: Option<Category>,
    ) -> Result<AnalysisTask<Vec<OpponentHandEstimate>>, TaskError> {
        let analyzer = *self;
        AnalysisTask::spawn("opponent-hands", move |cancel| {
            analyzer.opponent_hands(&hero, &board, current, cancel)
        })
    }

    pub fn spawn_report(&self, scenario: Scenario) -> Result<AnalysisTask<Report>, TaskError> {
        let analyzer = *self;
        AnalysisTask::spawn("report", move |cancel| analyzer.report(&scenario, cancel))
    }
}

fn joined(hero: &[Card], board: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(hero.len() + board.len());
    cards.extend_from_slice(hero);
    cards.extend_from_slice(board);
    cards
}

/// Grouped draws with the default configuration.
pub fn analyze_possible_draws(hero: &[Card], board: &[Card]) -> Vec<CombinedPossibleHand> {
    Analyzer::default().possible_draws(hero, board, &CancelToken::new()).completed().unwrap_or_default()
}

/// Win shares with the default configuration.
pub fn estimate_win_probability(hero: &[Card], board: &[Card], opponents: &[[Card; 2]]) -> WinProbabilities {
    Analyzer::default()
        .win_probability(hero, board, opponents, &CancelToken::new())
        .completed()
        .unwrap_or_else(|| WinProbabilities::empty(opponents.len().max(1)))
}

/// Opponent threats with the default configuration.
pub fn infer_opponent_hands(hero: &[Card], board: &[Card], current: Option<Category>) -> Vec<OpponentHandEstimate> {
    Analyzer::default().opponent_hands(hero, board, current, &CancelToken::new()).completed().unwrap_or_default()
}
