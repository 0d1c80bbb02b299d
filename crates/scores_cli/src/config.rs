//! Runtime configuration resolved from flags and environment.
//!
//! # Invariants
//! - The database path always resolves; a relative default lands in the
//!   working directory.
//! - Logging is enabled only when a log directory is given.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE_NAME: &str = "students_scores.sqlite3";
pub const DB_PATH_ENV: &str = "STUDENTS_SCORES_DB";
pub const LOG_LEVEL_ENV: &str = "STUDENTS_SCORES_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "STUDENTS_SCORES_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn resolve(
        db_path: PathBuf,
        log_level: Option<String>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let log_dir = log_dir.map(|dir| absolutize(&dir)).transpose()?;
        Ok(Self {
            db_path,
            log_level: log_level.unwrap_or_else(|| scores_core::default_log_level().to_string()),
            log_dir,
        })
    }

    /// Starts file logging when a log directory is configured.
    pub fn init_logging(&self) -> Result<()> {
        let Some(dir) = &self.log_dir else {
            return Ok(());
        };
        scores_core::init_logging(&self.log_level, dir)?;
        Ok(())
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    Ok(cwd.join(path))
}
