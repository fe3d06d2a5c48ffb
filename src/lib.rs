//! holdem-odds: Texas Hold'em hand analysis
//!
//! - Classify 2-7 card hands into the ten categories with tie-break vectors
//! - Detect draws and estimate how likely each one lands
//! - Monte Carlo win odds against known or random opponents
//! - Infer which hands a random opponent beats the hero with
//!
//! Estimates are statistical. Calls are pure, take a [`task::CancelToken`]
//! and can be moved to a worker thread through [`task::AnalysisTask`].
//!
//! ## Quick start
//! ```
//! use holdem_odds::analysis::Analyzer;
//! use holdem_odds::cards::parse_cards;
//! use holdem_odds::config::SimulationConfig;
//! use holdem_odds::evaluator::{classify, Category};
//! use holdem_odds::task::CancelToken;
//!
//! let hero = parse_cards("As Ah").unwrap();
//! assert_eq!(classify(&hero), Some(Category::OnePair));
//!
//! let analyzer = Analyzer::new(SimulationConfig::default().with_trials(2_000).with_seed(1));
//! let odds = analyzer.win_probability(&hero, &[], &[], &CancelToken::new()).completed().unwrap();
//! assert!(odds.hero > 0.7);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run -- --hero "Ah Kh" --board "2h 7h 9c"
//! ```

pub mod analysis;
pub mod cards;
pub mod config;
pub mod deck;
pub mod draws;
pub mod evaluator;
pub mod hand;
pub mod opponents;
pub mod simulation;
pub mod summary;
pub mod task;

pub use analysis::{analyze_possible_draws, estimate_win_probability, infer_opponent_hands, Analyzer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
