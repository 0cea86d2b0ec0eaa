// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use std::path::Path;
use tempfile::tempdir;
use tradelog::attachments::AttachmentStore;

#[test]
fn open_creates_image_dir() {
    let dir = tempdir().unwrap();
    let store = AttachmentStore::open(dir.path()).unwrap();
    assert!(store.dir().is_dir());
    assert_eq!(store.dir(), dir.path().join("images"));
    // opening again is fine
    AttachmentStore::open(dir.path()).unwrap();
}

#[test]
fn save_keeps_extension_and_bytes() {
    let dir = tempdir().unwrap();
    let store = AttachmentStore::open(dir.path()).unwrap();
    let blob: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

    let rel = store.save(&blob, "chart.png").unwrap();
    assert!(rel.to_string_lossy().ends_with(".png"));
    assert!(rel.starts_with("images"));
    assert_eq!(std::fs::read(dir.path().join(&rel)).unwrap(), blob);
    assert_eq!(std::fs::read(store.resolve(&rel)).unwrap(), blob);
}

#[test]
fn filename_is_second_resolution_timestamp() {
    let dir = tempdir().unwrap();
    let store = AttachmentStore::open(dir.path()).unwrap();
    let at = NaiveDate::from_ymd_opt(2025, 1, 3)
        .unwrap()
        .and_hms_opt(9, 30, 7)
        .unwrap();
    let rel = store.save_at(b"img", "BTC 4h.jpeg", at).unwrap();
    assert_eq!(rel, Path::new("images").join("20250103_093007.jpeg"));
}

#[test]
fn same_second_saves_overwrite() {
    let dir = tempdir().unwrap();
    let store = AttachmentStore::open(dir.path()).unwrap();
    let at = NaiveDate::from_ymd_opt(2025, 1, 3)
        .unwrap()
        .and_hms_opt(9, 30, 7)
        .unwrap();
    let first = store.save_at(b"first", "a.png", at).unwrap();
    let second = store.save_at(b"second", "b.png", at).unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read(store.resolve(&second)).unwrap(), b"second");
    assert_eq!(std::fs::read_dir(store.dir()).unwrap().count(), 1);
}

#[test]
fn name_without_dot_uses_whole_name_as_extension() {
    let dir = tempdir().unwrap();
    let store = AttachmentStore::open(dir.path()).unwrap();
    let at = NaiveDate::from_ymd_opt(2025, 1, 3)
        .unwrap()
        .and_hms_opt(9, 30, 7)
        .unwrap();
    let rel = store.save_at(b"img", "screenshot", at).unwrap();
    assert_eq!(rel, Path::new("images").join("20250103_093007.screenshot"));
}
