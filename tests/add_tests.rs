// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::{TempDir, tempdir};
use tradelog::attachments::AttachmentStore;
use tradelog::commands::add;
use tradelog::config::Paths;
use tradelog::journal::JournalStore;
use tradelog::models::{Direction, Emotion, Outcome, Strategy};

fn stores() -> (TempDir, JournalStore, AttachmentStore) {
    let dir = tempdir().unwrap();
    let paths = Paths::new(dir.path());
    let journal = JournalStore::new(paths.journal_file());
    let attachments = AttachmentStore::open(&paths.data_dir).unwrap();
    (dir, journal, attachments)
}

fn clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 11)
        .unwrap()
        .and_hms_opt(16, 45, 59)
        .unwrap()
}

fn run_add(
    journal: &JournalStore,
    attachments: &AttachmentStore,
    args: &[&str],
) -> anyhow::Result<tradelog::models::TradeRecord> {
    let mut argv = vec!["tradelog", "add"];
    argv.extend_from_slice(args);
    let matches = tradelog::cli::build_cli().get_matches_from(argv);
    if let Some(("add", add_m)) = matches.subcommand() {
        add::record_trade(journal, attachments, add_m, clock())
    } else {
        panic!("no add subcommand");
    }
}

#[test]
fn add_uses_form_defaults() {
    let (_dir, journal, attachments) = stores();
    let rec = run_add(&journal, &attachments, &[]).unwrap();
    assert_eq!(rec.symbol, "BTCUSDT");
    assert_eq!(rec.direction, Direction::Long);
    assert_eq!(rec.strategy, Strategy::TrendBreak);
    assert_eq!(rec.outcome, Outcome::Win);
    assert_eq!(rec.emotion, Emotion::Calm);
    assert!(rec.notes.is_empty());
    assert_eq!(rec.timestamp_str(), "2025-04-11 16:45");
    assert_eq!(journal.load().unwrap(), vec![rec]);
}

#[test]
fn add_with_chart_stores_relative_path() {
    let (dir, journal, attachments) = stores();
    let chart = dir.path().join("setup.PNG");
    std::fs::write(&chart, b"\x89PNG fake").unwrap();
    let chart_arg = chart.to_string_lossy().to_string();

    let rec = run_add(
        &journal,
        &attachments,
        &[
            "--symbol",
            "XAUUSD",
            "--direction",
            "short",
            "--strategy",
            "support-resistance-flip",
            "--entry",
            "2041.25",
            "--exit",
            "2029.10",
            "--outcome",
            "loss",
            "--pnl",
            "-12.15",
            "--emotion",
            "revenge",
            "--notes",
            "should have waited for the close",
            "--image",
            &chart_arg,
        ],
    )
    .unwrap();

    assert_eq!(rec.image_path.as_deref(), Some("images/20250411_164559.PNG"));
    assert_eq!(rec.pnl.to_string(), "-12.15");
    assert_eq!(rec.strategy, Strategy::SupportResistanceFlip);
    let stored = attachments.resolve(rec.image_path.as_ref().unwrap());
    assert_eq!(std::fs::read(stored).unwrap(), b"\x89PNG fake");
    assert_eq!(journal.load().unwrap()[0].image_path, rec.image_path);
}

#[test]
fn add_rejects_unsupported_chart_type() {
    let (dir, journal, attachments) = stores();
    let chart = dir.path().join("setup.gif");
    std::fs::write(&chart, b"GIF89a").unwrap();
    let chart_arg = chart.to_string_lossy().to_string();

    assert!(run_add(&journal, &attachments, &["--image", &chart_arg]).is_err());
    assert!(journal.load().unwrap().is_empty());
    assert_eq!(std::fs::read_dir(attachments.dir()).unwrap().count(), 0);
}

#[test]
fn add_rejects_negative_prices() {
    let (_dir, journal, attachments) = stores();
    assert!(run_add(&journal, &attachments, &["--entry", "-1"]).is_err());
    assert!(run_add(&journal, &attachments, &["--exit", "abc"]).is_err());
    assert!(journal.load().unwrap().is_empty());
}
