//! CLI entry point for treetally

use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use treetally::{SummaryConfig, run};

#[derive(Parser, Debug)]
#[command(name = "treetally")]
#[command(about = "Summarize per-directory file counts and sizes as a markdown outline")]
#[command(version)]
struct Args {
    /// Directory to summarize
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Where to write the listing (default: DIRECTORY_LISTING.md under PATH)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Skip directories matching name or glob pattern, in addition to the
    /// built-in set (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let mut config = SummaryConfig::new(root).with_extra_ignores(args.ignore);
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    match run(&config) {
        Ok(path) => println!("treetally: wrote {}", path.display()),
        Err(e) => {
            eprintln!("treetally: error: {}", e);
            process::exit(1);
        }
    }
}
