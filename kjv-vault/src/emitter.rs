//! Note emission: one markdown file per accepted verse.
//!
//! Every record owns a unique path, so writes never interfere with each other.
//! With `jobs > 1` the records are spread over a rayon pool; each worker folds
//! its own `RunStats` and the partial counts are summed once at the join.

use crate::notes::{note_path, render_note, write_note};
use kjv_vault_types::{RunStats, VerseRecord};
use rayon::prelude::*;
use std::path::Path;

/// Log a progress line every this many records (sequential mode)
const PROGRESS_EVERY: usize = 2000;

#[derive(Debug, Clone, Copy)]
pub struct EmitOptions {
    /// Zero-pad width of the book folder prefix
    pub pad: usize,
    /// Worker threads; 1 means a plain sequential pass
    pub jobs: usize,
}

/// Write every record under `root`. Only `written` and `errors` are counted here.
pub fn emit(records: &[VerseRecord], root: &Path, options: EmitOptions) -> RunStats {
    if options.jobs > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()
        {
            Ok(pool) => {
                log::info!(
                    "[EMIT] Writing {} notes with {} workers",
                    records.len(),
                    options.jobs
                );
                return pool.install(|| emit_parallel(records, root, options.pad));
            }
            Err(e) => {
                log::warn!("[EMIT] Failed to build worker pool, writing sequentially: {}", e);
            }
        }
    }

    log::info!("[EMIT] Writing {} notes", records.len());
    emit_sequential(records, root, options.pad)
}

fn emit_sequential(records: &[VerseRecord], root: &Path, pad: usize) -> RunStats {
    let mut stats = RunStats::default();
    for (i, record) in records.iter().enumerate() {
        stats += emit_one(record, root, pad);
        if (i + 1) % PROGRESS_EVERY == 0 {
            log::debug!("[EMIT] Progress: {} records processed...", i + 1);
        }
    }
    stats
}

fn emit_parallel(records: &[VerseRecord], root: &Path, pad: usize) -> RunStats {
    records
        .par_iter()
        .fold(RunStats::default, |acc, record| acc + emit_one(record, root, pad))
        .reduce(RunStats::default, |a, b| a + b)
}

fn emit_one(record: &VerseRecord, root: &Path, pad: usize) -> RunStats {
    let path = note_path(root, record, pad);
    match write_note(&path, &render_note(record)) {
        Ok(()) => {
            log::debug!(
                "[EMIT] [write] {}",
                path.strip_prefix(root).unwrap_or(&path).display()
            );
            RunStats::one_written()
        }
        Err(e) => {
            log::warn!("[EMIT] {} not written: {}", record.reference(), e);
            RunStats::one_error()
        }
    }
}
