use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tapchess::soak::{self, SoakReport};

#[derive(Parser, Debug)]
#[command(name = "tapchess-soak", about = "Hammer independent boards with random taps and check invariants")]
struct Args {
    #[arg(long, default_value_t = 200)]
    games: usize,
    #[arg(long, default_value_t = 2_000)]
    taps: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let mut builder = rayon::ThreadPoolBuilder::new();
    if a.threads > 0 { builder = builder.num_threads(a.threads); }
    let pool = builder.build()?;

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?);
    let reports: Vec<SoakReport> = pool.install(|| {
        (0..a.games as u64).into_par_iter().map(|gi| {
            let r = soak::run(a.seed.wrapping_add(gi), a.taps);
            bar.inc(1);
            r
        }).collect()
    });
    bar.finish();

    let moves: usize = reports.iter().map(|r| r.moves).sum();
    let captures: usize = reports.iter().map(|r| r.captures).sum();
    let decided = reports.iter().filter(|r| r.king_captured).count();
    let dirty: Vec<&SoakReport> = reports.iter().filter(|r| !r.is_clean()).collect();
    eprintln!("games={} moves={} captures={} decided={} violations={}", a.games, moves, captures, decided, dirty.len());
    for r in &dirty {
        for v in &r.violations { eprintln!("seed {}: {}", r.seed, v); }
    }
    if !dirty.is_empty() {
        anyhow::bail!("{} games violated engine invariants", dirty.len());
    }
    Ok(())
}
