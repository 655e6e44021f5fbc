use std::io;

use clap::Parser;
use log::{error, info};

use mailbox_chess::uci::UciSession;
use mailbox_chess::{Difficulty, EngineConfig, Orchestrator};

/// UCI-style chess engine over stdin/stdout
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Default search depth for `go` (overrides --difficulty)
    #[arg(long)]
    depth: Option<u32>,

    /// Named search depth: easy=2, medium=4, hard=6
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,
}

fn main() {
    // Logs go to stderr so they never interleave with protocol output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let config = match args.depth {
        Some(depth) => EngineConfig::new(depth),
        None => EngineConfig::from_difficulty(args.difficulty),
    };
    info!("search depth {}", config.search_depth);

    let mut orchestrator = Orchestrator::new(config);
    if let Some(fen) = &args.fen {
        if let Err(e) = orchestrator.load_position(fen) {
            error!("--fen rejected: {}", e);
            std::process::exit(2);
        }
    }

    let stdin = io::stdin();
    let mut session = UciSession::new(orchestrator, io::stdout());
    if let Err(e) = session.run(stdin.lock()) {
        error!("i/o error: {}", e);
        std::process::exit(1);
    }
}
