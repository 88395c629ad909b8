use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use reversi_engine::ai::{Agent, MinimaxAgent, RandomAgent};
use reversi_engine::config::EngineConfig;
use reversi_engine::game::{GameOutcome, GameState};

/// Play automated Reversi games and report the outcomes.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run automated Reversi games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the tie-break seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Pit the minimax player (Black) against a random opponent instead of
    /// a second minimax player
    #[arg(long)]
    vs_random: bool,

    /// Print the board after every move
    #[arg(long)]
    show_moves: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate()?;
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut wins = [0usize; 2];
    let mut draws = 0usize;
    for game in 0..cli.games as u64 {
        let mut agents = build_agents(&config, cli.vs_random, game);
        let outcome = play_game(&mut agents, cli.show_moves)?;
        println!("game {}: {}", game + 1, outcome);
        match outcome {
            GameOutcome::Winner(player) => wins[player.index()] += 1,
            GameOutcome::Draw => draws += 1,
        }
    }

    println!(
        "totals: Black {} / White {} / drawn {}",
        wins[0], wins[1], draws
    );
    Ok(())
}

/// One agent per side. Seeded runs stay reproducible across games by
/// offsetting the configured seed with the game number.
fn build_agents(config: &EngineConfig, vs_random: bool, game: u64) -> [Box<dyn Agent>; 2] {
    let depth = config.search.depth;
    let minimax = |offset: u64| -> Box<dyn Agent> {
        match config.search.seed {
            Some(seed) => Box::new(MinimaxAgent::seeded(depth, seed + 2 * game + offset)),
            None => Box::new(MinimaxAgent::new(depth)),
        }
    };
    let white: Box<dyn Agent> = if vs_random {
        match config.search.seed {
            Some(seed) => Box::new(RandomAgent::seeded(seed + 2 * game + 1)),
            None => Box::new(RandomAgent::new()),
        }
    } else {
        minimax(1)
    };
    [minimax(0), white]
}

fn play_game(agents: &mut [Box<dyn Agent>; 2], show_moves: bool) -> Result<GameOutcome> {
    let mut state = GameState::initial();

    while !state.is_terminal() {
        let mover = state.current_player();
        let agent = &mut agents[mover.index()];
        match agent.take_turn(&mut state)? {
            Some((row, col)) => {
                if show_moves {
                    println!("{} plays ({row}, {col})", mover.name());
                    println!("{}", state.board());
                }
            }
            None => {
                if show_moves {
                    println!("{} passes", mover.name());
                }
            }
        }
    }

    let (black, white) = state.scores();
    println!("final score: Black {black}, White {white}");
    if show_moves {
        println!("{}", state.board());
    }
    state
        .outcome()
        .context("terminal game must have an outcome")
}
