//! kjv-vault command line: thin wrapper around `kjv_vault::run`.
//!
//! Exit code is 0 for a completed run (even with per-record errors) and
//! non-zero when the input or output root is unusable.

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use kjv_vault::config::{defaults, env_vars};
use kjv_vault::{Config, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "kjv-vault")]
#[command(about = "Convert a KJV JSON file into an Obsidian vault (one verse per note)")]
#[command(version)]
struct Args {
    /// Path to kjv.json
    #[arg(short, long, env = env_vars::INFILE)]
    infile: PathBuf,

    /// Output folder (e.g. /path/to/Vault/Bible)
    #[arg(short, long, env = env_vars::OUT)]
    out: PathBuf,

    /// Translation label written to every note
    #[arg(long, default_value = defaults::TRANSLATION, env = env_vars::TRANSLATION)]
    translation: String,

    /// Zero-pad width for book folder ordinals (minimum 2)
    #[arg(long, default_value_t = defaults::PAD, env = env_vars::PAD)]
    pad: usize,

    /// Worker threads for writing notes
    #[arg(short, long, default_value_t = defaults::JOBS, env = env_vars::JOBS)]
    jobs: usize,

    /// Log every skipped record, failed write and written file
    #[arg(short, long)]
    verbose: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    dotenv().ok();
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("[warn] {:#}", e);
    }

    let config = Config::new(args.infile, args.out)
        .with_translation(args.translation)
        .with_pad(args.pad)
        .with_jobs(args.jobs);

    match kjv_vault::run(&config) {
        Ok(summary) => match print_summary(&summary, args.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("[error] {:#}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("[error] {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
        .context("Failed to initialize logger")
}

fn print_summary(summary: &RunSummary, json: bool) -> anyhow::Result<()> {
    if json {
        let line = summary.to_json().context("Failed to serialize run summary")?;
        println!("{}", line);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
