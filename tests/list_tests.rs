// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tempfile::{TempDir, tempdir};
use tradelog::commands::list;
use tradelog::journal::JournalStore;
use tradelog::models::{Outcome, TradeRecord};

const SEED: &str = "\
Timestamp,Symbol,Direction,Strategy,EntryPrice,ExitPrice,Outcome,PnL,Emotion,Notes,ImagePath
2025-02-03 09:00,BTCUSDT,Long,TrendBreak,43000,43600,Win,60,Calm,clean break and retest,
2025-02-03 13:20,ETHUSDT,Short,Fakeout,2300,2320,Loss,-20,FOMO,entered before confirmation,
2025-02-04 10:10,btcusdt,Short,SupplyDemand,43800,43500,Win,30,Calm,supply zone held,images/20250204_101000.png
2025-02-05 15:45,XAUUSD,Long,RsiDivergence,2040,2040,BreakEven,0,Hesitant,moved stop too early,
";

fn seeded() -> (TempDir, JournalStore) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trading_journal.csv");
    std::fs::write(&path, SEED).unwrap();
    (dir, JournalStore::new(path))
}

fn rows(journal: &JournalStore, args: &[&str]) -> Vec<TradeRecord> {
    let mut argv = vec!["tradelog", "list"];
    argv.extend_from_slice(args);
    let matches = tradelog::cli::build_cli().get_matches_from(argv);
    if let Some(("list", list_m)) = matches.subcommand() {
        list::query_rows(journal, list_m).unwrap()
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_everything_in_journal_order() {
    let (_dir, journal) = seeded();
    let all = rows(&journal, &[]);
    let symbols: Vec<&str> = all.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["BTCUSDT", "ETHUSDT", "btcusdt", "XAUUSD"]);
}

#[test]
fn symbol_filter_ignores_case() {
    let (_dir, journal) = seeded();
    assert_eq!(rows(&journal, &["--symbol", "BTCUSDT"]).len(), 2);
}

#[test]
fn filters_combine() {
    let (_dir, journal) = seeded();
    let hits = rows(&journal, &["--direction", "Short", "--outcome", "Win"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].image_path.as_deref(),
        Some("images/20250204_101000.png")
    );

    let fomo = rows(&journal, &["--emotion", "FOMO"]);
    assert_eq!(fomo.len(), 1);
    assert_eq!(fomo[0].outcome, Outcome::Loss);

    assert!(rows(&journal, &["--strategy", "Other"]).is_empty());
}

#[test]
fn grep_matches_notes() {
    let (_dir, journal) = seeded();
    let hits = rows(&journal, &["--grep", "(?i)STOP|confirmation"]);
    let symbols: Vec<&str> = hits.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["ETHUSDT", "XAUUSD"]);
}

#[test]
fn limit_keeps_most_recent() {
    let (_dir, journal) = seeded();
    let last = rows(&journal, &["--limit", "2"]);
    let symbols: Vec<&str> = last.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, ["btcusdt", "XAUUSD"]);
    assert_eq!(rows(&journal, &["--limit", "10"]).len(), 4);
}

#[test]
fn invalid_regex_is_an_error() {
    let (_dir, journal) = seeded();
    let matches = tradelog::cli::build_cli().get_matches_from(["tradelog", "list", "--grep", "("]);
    if let Some(("list", list_m)) = matches.subcommand() {
        assert!(list::query_rows(&journal, list_m).is_err());
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn row_rendering_uses_canonical_labels() {
    let (_dir, journal) = seeded();
    let all = rows(&journal, &[]);
    let row = list::TradeRow::from(&all[1]);
    assert_eq!(row.emotion, "FOMO");
    assert_eq!(row.timestamp, "2025-02-03 13:20");
    assert_eq!(row.image_path, "");
    let last = list::TradeRow::from(&all[3]);
    assert_eq!(last.outcome, "BreakEven");
}
