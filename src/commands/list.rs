// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::journal::JournalStore;
use crate::models::{Direction, Emotion, Outcome, Strategy, TradeRecord};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

pub fn handle(journal: &JournalStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<TradeRow> = query_rows(journal, sub)?
        .iter()
        .map(TradeRow::from)
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No trades match.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .into_iter()
            .map(|r| {
                vec![
                    r.timestamp,
                    r.symbol,
                    r.direction,
                    r.strategy,
                    r.entry_price,
                    r.exit_price,
                    r.outcome,
                    r.pnl,
                    r.emotion,
                    r.notes,
                    r.image_path,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Time", "Symbol", "Dir", "Strategy", "Entry", "Exit", "Outcome", "PnL",
                    "Emotion", "Notes", "Chart",
                ],
                rows,
            )
        );
    }
    Ok(())
}

/// A journal row rendered as text, for tables and JSON output.
#[derive(Debug, Serialize)]
pub struct TradeRow {
    pub timestamp: String,
    pub symbol: String,
    pub direction: String,
    pub strategy: String,
    pub entry_price: String,
    pub exit_price: String,
    pub outcome: String,
    pub pnl: String,
    pub emotion: String,
    pub notes: String,
    pub image_path: String,
}

impl From<&TradeRecord> for TradeRow {
    fn from(r: &TradeRecord) -> Self {
        TradeRow {
            timestamp: r.timestamp_str(),
            symbol: r.symbol.clone(),
            direction: r.direction.to_string(),
            strategy: r.strategy.to_string(),
            entry_price: r.entry_price.to_string(),
            exit_price: r.exit_price.to_string(),
            outcome: r.outcome.to_string(),
            pnl: r.pnl.to_string(),
            emotion: r.emotion.to_string(),
            notes: r.notes.clone(),
            image_path: r.image_path.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TradeFilter {
    pub symbol: Option<String>,
    pub direction: Option<Direction>,
    pub strategy: Option<Strategy>,
    pub outcome: Option<Outcome>,
    pub emotion: Option<Emotion>,
    pub notes: Option<Regex>,
}

impl TradeFilter {
    pub fn from_matches(sub: &clap::ArgMatches) -> Result<Self> {
        let notes = match sub.get_one::<String>("grep") {
            Some(pat) => Some(
                Regex::new(pat).with_context(|| format!("Invalid regex pattern '{}'", pat))?,
            ),
            None => None,
        };
        Ok(TradeFilter {
            symbol: sub
                .get_one::<String>("symbol")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            direction: sub.get_one::<Direction>("direction").copied(),
            strategy: sub.get_one::<Strategy>("strategy").copied(),
            outcome: sub.get_one::<Outcome>("outcome").copied(),
            emotion: sub.get_one::<Emotion>("emotion").copied(),
            notes,
        })
    }

    pub fn matches(&self, r: &TradeRecord) -> bool {
        self.symbol
            .as_ref()
            .is_none_or(|s| s.eq_ignore_ascii_case(r.symbol.trim()))
            && self.direction.is_none_or(|d| d == r.direction)
            && self.strategy.is_none_or(|s| s == r.strategy)
            && self.outcome.is_none_or(|o| o == r.outcome)
            && self.emotion.is_none_or(|e| e == r.emotion)
            && self.notes.as_ref().is_none_or(|re| re.is_match(&r.notes))
    }
}

/// Matching records in journal order; `--limit N` keeps the last N.
pub fn query_rows(journal: &JournalStore, sub: &clap::ArgMatches) -> Result<Vec<TradeRecord>> {
    let filter = TradeFilter::from_matches(sub)?;
    let mut data: Vec<TradeRecord> = journal
        .load()
        .with_context(|| format!("Could not load {}", journal.path().display()))?
        .into_iter()
        .filter(|r| filter.matches(r))
        .collect();
    if let Some(&limit) = sub.get_one::<usize>("limit") {
        let skip = data.len().saturating_sub(limit);
        data.drain(..skip);
    }
    Ok(data)
}
