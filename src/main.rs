use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tapchess::{session::Session, Board, PieceColor};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play two-player chess by tapping squares", long_about = None)]
struct Args {
    /// Starting layout diagram (8 rows, uppercase White, lowercase Black, '.' empty)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Give Black the first move (only meaningful with --layout)
    #[arg(long)]
    black_first: bool,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the JSON snapshot after every command
    #[arg(long)]
    json: bool,
}

fn load_board(args: &Args) -> Result<Board> {
    let turn = if args.black_first { PieceColor::Black } else { PieceColor::White };
    match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read layout file: {}", path.display()))?;
            Board::from_diagram(&text, turn).with_context(|| format!("parse layout: {}", path.display()))
        }
        None => Ok(Board::new()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = load_board(&args)?;
    let mut session = Session::new(board).with_json(args.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.script {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open script: {}", path.display()))?;
            session.run_loop(BufReader::new(f), &mut out)?;
        }
        None => {
            println!("Tap squares to select and move (e.g. 'e2' then 'e4'). Type 'help' or 'quit'.");
            session.run_loop(io::stdin().lock(), &mut out)?;
        }
    }
    Ok(())
}
