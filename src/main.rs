use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use salmon_rules::{game_status, Board, GameStatus, MoveSelector, RandomSelector};

/// Plays random legal moves against itself until the game ends.
#[derive(Parser, Debug)]
#[command(name = "salmon-rules", version, about)]
struct Args {
    /// Seed for the move selector; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies even if the game is not over.
    #[arg(long, default_value_t = 500)]
    max_plies: u32,

    /// Do not keep a move log.
    #[arg(long)]
    no_history: bool,

    /// Print the board after every ply.
    #[arg(long)]
    show_board: bool,

    /// Log filter, overridden by RUST_LOG.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut selector = match args.seed {
        Some(seed) => RandomSelector::with_seed(seed),
        None => RandomSelector::new(),
    };
    let mut board = Board::new(!args.no_history);

    let status = play(&mut board, &mut selector, &args)?;
    info!(?status, plies = board.move_count(), "game finished");

    if !args.no_history {
        for record in board.history() {
            info!(
                number = record.number,
                player = %record.player,
                from = %record.from,
                to = %record.to,
                at = %record.timestamp.to_rfc3339(),
                "move"
            );
        }
    }

    Ok(())
}

fn play(board: &mut Board, selector: &mut impl MoveSelector, args: &Args) -> Result<GameStatus> {
    if args.show_board {
        println!("{}\n", board);
    }

    loop {
        let status = game_status(board).context("board lost a king")?;
        if status.is_over() {
            return Ok(status);
        }
        if board.move_count() >= args.max_plies {
            warn!(max_plies = args.max_plies, "ply limit reached");
            return Ok(status);
        }

        let player = board.side_to_move();
        let Some((from, to)) = selector.select(board, player)? else {
            bail!("{} has no legal move in an ongoing game", player);
        };

        board
            .apply_move(from, to)
            .with_context(|| format!("selector chose an illegal move {}-{}", from, to))?;
        info!(ply = board.move_count(), %player, %from, %to, "played");

        if args.show_board {
            println!("{}\n", board);
        }
    }
}
