// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::IMAGE_DIR;
use crate::error::StorageError;
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const FILE_STAMP: &str = "%Y%m%d_%H%M%S";

/// Flat directory of chart screenshots named after the second they were saved.
///
/// Two saves within the same second with the same extension map to the same
/// file; the later one overwrites the earlier.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    /// Creates `<data_dir>/images` if it is missing.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = data_dir.into();
        let dir = root.join(IMAGE_DIR);
        fs::create_dir_all(&dir).map_err(|e| StorageError::write(&dir, e))?;
        Ok(AttachmentStore { root })
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join(IMAGE_DIR)
    }

    /// Writes `blob` under a timestamped name and returns its path relative
    /// to the data directory.
    pub fn save(&self, blob: &[u8], original_name: &str) -> Result<PathBuf, StorageError> {
        self.save_at(blob, original_name, Local::now().naive_local())
    }

    pub fn save_at(
        &self,
        blob: &[u8],
        original_name: &str,
        now: NaiveDateTime,
    ) -> Result<PathBuf, StorageError> {
        let file_name = format!("{}.{}", now.format(FILE_STAMP), extension_of(original_name));
        let relative = Path::new(IMAGE_DIR).join(&file_name);
        let target = self.root.join(&relative);
        fs::write(&target, blob).map_err(|e| StorageError::write(&target, e))?;
        debug!(path = %target.display(), bytes = blob.len(), "attachment saved");
        Ok(relative)
    }

    /// Absolute location of a path previously returned by [`save`](Self::save).
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// Text after the last `.`, or the whole name when there is none.
pub fn extension_of(original_name: &str) -> &str {
    original_name.rsplit('.').next().unwrap_or(original_name)
}

#[cfg(test)]
mod tests {
    use super::extension_of;

    #[test]
    fn extension_is_last_dot_segment() {
        assert_eq!(extension_of("chart.png"), "png");
        assert_eq!(extension_of("btc.4h.JPEG"), "JPEG");
        assert_eq!(extension_of("screenshot"), "screenshot");
        assert_eq!(extension_of("trailing."), "");
    }
}
