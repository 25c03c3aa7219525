//! Shape Flyweight CLI
//!
//! Usage:
//!   shape-flyweight [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>  Intrinsic shape values (TOML format)
//!   -d, --debug          Print cache statistics to stderr
//!   -h, --help           Print help

use std::io;
use std::path::PathBuf;

use clap::Parser;

use shape_flyweight::{draw_demo, Error, ShapeConfig};

#[derive(Parser)]
#[command(name = "shape-flyweight")]
#[command(about = "Draw a scene of shared primitive shapes")]
struct Cli {
    /// Config file with intrinsic shape values (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug mode: print cache statistics after drawing
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            ShapeConfig::from_file(path)?
        }
        None => ShapeConfig::default(),
    };

    let stdout = io::stdout();
    let cache = draw_demo(config, &mut stdout.lock())?;

    if cli.debug {
        let stats = cache.stats();
        eprintln!("=== Cache Debug ===");
        eprintln!(
            "placed={} shared={} hits={} misses={}",
            stats.lookups(),
            cache.len(),
            stats.hits,
            stats.misses
        );
        for kind in cache.kinds() {
            eprintln!("  {}", kind);
        }
        eprintln!("===================");
    }

    Ok(())
}
