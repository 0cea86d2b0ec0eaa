// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the journal and attachment stores.
///
/// A missing journal file and a missing `ImagePath` column are not errors;
/// both are recovered inside [`crate::journal::JournalStore::load`].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse journal {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("journal {} has no {column} column", path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
    #[error("line {line}: invalid {column} '{value}'")]
    Malformed {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        StorageError::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// An enum label that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}
