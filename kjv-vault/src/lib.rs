//! kjv-vault: convert a KJV JSON dump into an Obsidian vault, one note per verse.
//!
//! The pipeline is a single pass: read the document, extract verse records,
//! then emit one markdown note per record under the output root.

pub mod canon;
pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod notes;

pub use config::Config;
pub use error::{FatalError, ValidationError, WriteError};
pub use kjv_vault_types::{RunStats, RunSummary, VerseRecord};

use emitter::EmitOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the whole conversion.
///
/// Fatal errors are returned before any note is written; per-record failures
/// only show up in the returned counters.
pub fn run(config: &Config) -> Result<RunSummary, FatalError> {
    log::info!("[VAULT] Reading: {}", config.infile.display());
    let bytes = read_input(&config.infile)?;
    let extraction = extractor::extract(&bytes, &config.translation)?;

    let output = prepare_output(&config.out_dir)?;
    log::info!("[VAULT] Output : {}", output.display());

    let mut stats = emitter::emit(
        &extraction.records,
        &output,
        EmitOptions {
            pad: config.pad,
            jobs: config.jobs,
        },
    );
    stats.skipped += extraction.skipped();

    Ok(RunSummary { stats, output })
}

fn read_input(path: &Path) -> Result<Vec<u8>, FatalError> {
    if !path.exists() {
        return Err(FatalError::InputNotFound(path.to_path_buf()));
    }
    fs::read(path).map_err(|source| FatalError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Create the output root and return its absolute path
fn prepare_output(dir: &Path) -> Result<PathBuf, FatalError> {
    fs::create_dir_all(dir)
        .and_then(|_| fs::canonicalize(dir))
        .map_err(|source| FatalError::OutputDir {
            path: dir.to_path_buf(),
            source,
        })
}
