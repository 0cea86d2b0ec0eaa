// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tradelog", "Tradelog", "tradelog"));

pub const JOURNAL_FILE: &str = "trading_journal.csv";
pub const IMAGE_DIR: &str = "images";

/// Where the journal and its attachments live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Paths {
            data_dir: data_dir.into(),
        }
    }

    /// Uses `override_dir` when given (from `--data-dir` or
    /// `TRADELOG_DATA_DIR`), else the platform data directory.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        match override_dir {
            Some(dir) => Ok(Paths::new(dir)),
            None => Ok(Paths::new(default_data_dir()?)),
        }
    }

    pub fn journal_file(&self) -> PathBuf {
        self.data_dir.join(JOURNAL_FILE)
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}
