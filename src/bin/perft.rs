use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tapchess::perft::{perft, root_moves};
use tapchess::{Board, PieceColor};

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the tapchess rule engine")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Layout diagram file; standard start when omitted
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Black moves first from the layout
    #[arg(long, default_value_t = false)]
    black_first: bool,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let base = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("read layout: {}", path.display()))?;
            let turn = if args.black_first { PieceColor::Black } else { PieceColor::White };
            Board::from_diagram(&text, turn)?
        }
        None => Board::new(),
    };
    let depth = args.depth;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth == 0 {
            perft(&base, depth)
        } else {
            root_moves(&base).par_iter().map(|&(from, to)| {
                let mut b = base.clone();
                b.move_piece(from, to);
                perft(&b, depth - 1)
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
