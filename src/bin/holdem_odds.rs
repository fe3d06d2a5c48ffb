use clap::Parser;
use holdem_odds::analysis::{Analyzer, Report};
use holdem_odds::config::{SimulationConfig, DEFAULT_TRIALS};
use holdem_odds::hand::Scenario;
use holdem_odds::task::{CancelToken, Outcome};
use std::error::Error;

#[derive(Parser)]
#[command(name = "holdem-odds", version = holdem_odds::VERSION)]
#[command(about = "Texas Hold'em hand category, draws, win odds and opponent threats")]
struct Cli {
    /// Hero hole cards, e.g. "Ah Kh"
    #[arg(long)]
    hero: String,
    /// Community cards, up to five
    #[arg(long, default_value = "")]
    board: String,
    /// Known opponent hole cards; repeat for more opponents
    #[arg(long)]
    opponent: Vec<String>,
    /// Monte Carlo trials per estimate
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        let config = SimulationConfig::default().with_trials(self.trials);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn print_report(report: &Report) {
    println!("scenario: {}", report.fingerprint);
    match &report.evaluation {
        Some(e) => println!("current hand: {} {:?}", e.category, e.tie_break.values()),
        None => println!("current hand: -"),
    }

    println!("\ndraws:");
    if report.draws.is_empty() {
        println!("  none");
    }
    for d in &report.draws {
        println!("  {:<16} {:>6.2}%", d.category.name(), d.total * 100.0);
        for (outs, p) in &d.outs {
            println!("    {:<24} {:>6.2}%", outs.to_string(), p * 100.0);
        }
    }

    println!("\nwin odds ({} decided, {} tied):", report.win.decided, report.win.ties);
    println!("  hero       {:>6.2}%", report.win.hero * 100.0);
    for (i, p) in report.win.opponents.iter().enumerate() {
        println!("  opponent {} {:>6.2}%", i + 1, p * 100.0);
    }

    println!("\nopponent threats:");
    if report.threats.is_empty() {
        println!("  none");
    }
    for t in &report.threats {
        let example = t
            .example
            .as_ref()
            .map(|ex| format!("{}{}", ex.hole[0], ex.hole[1]))
            .unwrap_or_default();
        println!("  {:<16} {:>6.2}%  {example}", t.category.name(), t.probability * 100.0);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let opponents: Vec<&str> = cli.opponent.iter().map(String::as_str).collect();
    let scenario = Scenario::parse(&cli.hero, &cli.board, &opponents)?;
    scenario.validate()?;
    log::info!("analysing {}", scenario.fingerprint());

    let analyzer = Analyzer::new(cli.config());
    match analyzer.report(&scenario, &CancelToken::new()) {
        Outcome::Completed(report) => print_report(&report),
        Outcome::Cancelled => log::warn!("analysis cancelled"),
    }
    Ok(())
}
