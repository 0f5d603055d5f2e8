use crate::canon::MIN_PAD;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Path to the source JSON document
    pub const INFILE: &str = "KJV_VAULT_INFILE";
    /// Output root (e.g. "/path/to/Vault/Bible")
    pub const OUT: &str = "KJV_VAULT_OUT";
    pub const TRANSLATION: &str = "KJV_VAULT_TRANSLATION";
    pub const PAD: &str = "KJV_VAULT_PAD";
    pub const JOBS: &str = "KJV_VAULT_JOBS";
}

/// Default values
pub mod defaults {
    pub const TRANSLATION: &str = "KJV";
    pub const PAD: usize = 2;
    pub const JOBS: usize = 1;
}

/// Resolved settings for one conversion run
#[derive(Clone, Debug)]
pub struct Config {
    pub infile: PathBuf,
    pub out_dir: PathBuf,
    /// Edition label written to every note
    pub translation: String,
    /// Zero-pad width of book folder prefixes (never below 2)
    pub pad: usize,
    /// Emitter worker threads (1 = sequential)
    pub jobs: usize,
}

impl Config {
    pub fn new(infile: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            infile: infile.into(),
            out_dir: out_dir.into(),
            translation: defaults::TRANSLATION.to_string(),
            pad: defaults::PAD,
            jobs: defaults::JOBS,
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_pad(mut self, pad: usize) -> Self {
        if pad < MIN_PAD {
            log::warn!(
                "Pad width {} would break canonical folder order, using {}",
                pad,
                MIN_PAD
            );
        }
        self.pad = pad.max(MIN_PAD);
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("kjv.json", "Bible");
        assert_eq!(config.translation, "KJV");
        assert_eq!(config.pad, 2);
        assert_eq!(config.jobs, 1);
    }

    #[test]
    fn test_pad_and_jobs_are_clamped() {
        let config = Config::new("kjv.json", "Bible").with_pad(0).with_jobs(0);
        assert_eq!(config.pad, 2);
        assert_eq!(config.jobs, 1);

        let config = Config::new("kjv.json", "Bible").with_pad(3).with_jobs(8);
        assert_eq!(config.pad, 3);
        assert_eq!(config.jobs, 8);
    }
}
