// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::list::TradeFilter;
use crate::journal::JournalStore;
use crate::models::{Outcome, Strategy, TradeRecord};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(journal: &JournalStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = TradeFilter::from_matches(sub)?;
    let all = journal
        .load()
        .with_context(|| format!("Could not load {}", journal.path().display()))?;
    let logged = all.len();
    let records: Vec<TradeRecord> = all.into_iter().filter(|r| filter.matches(r)).collect();
    let data = summarize(&records);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if records.is_empty() {
            println!("{}", empty_notice(logged));
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|s| {
                vec![
                    s.strategy.clone(),
                    s.trades.to_string(),
                    s.wins.to_string(),
                    s.losses.to_string(),
                    s.break_even.to_string(),
                    format!("{}%", s.win_rate),
                    s.total_pnl.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Strategy", "Trades", "Win", "Loss", "BE", "Win rate", "PnL"],
                rows,
            )
        );
    }
    Ok(())
}

/// Shown instead of an empty table; `logged` counts entries before filtering.
pub fn empty_notice(logged: usize) -> &'static str {
    if logged == 0 {
        "No trades logged yet."
    } else {
        "No trades match."
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategySummary {
    pub strategy: String,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub break_even: usize,
    /// Percentage of trades won, one decimal place.
    pub win_rate: Decimal,
    pub total_pnl: Decimal,
}

impl StrategySummary {
    fn tally<'a>(label: &str, records: impl Iterator<Item = &'a TradeRecord>) -> Self {
        let mut s = StrategySummary {
            strategy: label.to_string(),
            trades: 0,
            wins: 0,
            losses: 0,
            break_even: 0,
            win_rate: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
        };
        for r in records {
            s.trades += 1;
            match r.outcome {
                Outcome::Win => s.wins += 1,
                Outcome::Loss => s.losses += 1,
                Outcome::BreakEven => s.break_even += 1,
            }
            s.total_pnl += r.pnl;
        }
        if s.trades > 0 {
            s.win_rate = (Decimal::from(s.wins) * Decimal::ONE_HUNDRED / Decimal::from(s.trades))
                .round_dp(1);
        }
        s
    }
}

/// One line per strategy that has trades, in menu order, then an "All" line.
pub fn summarize(records: &[TradeRecord]) -> Vec<StrategySummary> {
    let mut out: Vec<StrategySummary> = Strategy::ALL
        .iter()
        .filter(|st| records.iter().any(|r| r.strategy == **st))
        .map(|st| StrategySummary::tally(st.as_str(), records.iter().filter(|r| r.strategy == *st)))
        .collect();
    if !records.is_empty() {
        out.push(StrategySummary::tally("All", records.iter()));
    }
    out
}
