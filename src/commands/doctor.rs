// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::attachments::AttachmentStore;
use crate::journal::JournalStore;
use crate::utils::pretty_table;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub detail: String,
}

pub fn handle(journal: &JournalStore, attachments: &AttachmentStore) -> Result<()> {
    let issues = find_issues(journal, attachments)?;
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

pub fn find_issues(journal: &JournalStore, attachments: &AttachmentStore) -> Result<Vec<Issue>> {
    let records = journal
        .load()
        .with_context(|| format!("Could not load {}", journal.path().display()))?;
    let mut issues = Vec::new();

    // 1) Rows pointing at charts that are gone
    let mut referenced: HashSet<PathBuf> = HashSet::new();
    for (n, r) in records.iter().enumerate() {
        let Some(rel) = &r.image_path else { continue };
        let abs = attachments.resolve(rel);
        if !abs.is_file() {
            issues.push(Issue {
                kind: "missing_attachment",
                detail: format!("entry {} ({} {}): {}", n + 1, r.timestamp_str(), r.symbol, rel),
            });
        }
        referenced.insert(abs);
    }

    // 2) Charts no row refers to, e.g. left behind by a failed append
    let dir = attachments.dir();
    let mut orphans = Vec::new();
    for entry in std::fs::read_dir(&dir).with_context(|| format!("List {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && !referenced.contains(&path) {
            orphans.push(path);
        }
    }
    orphans.sort();
    issues.extend(orphans.into_iter().map(|p| Issue {
        kind: "unreferenced_attachment",
        detail: p.display().to_string(),
    }));
    Ok(issues)
}
