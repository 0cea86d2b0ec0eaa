// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::attachments::{AttachmentStore, extension_of};
use crate::journal::JournalStore;
use crate::models::{Direction, Emotion, Outcome, Strategy, TradeRecord, journal_timestamp};
use crate::utils::parse_decimal;
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use std::path::Path;

const IMAGE_TYPES: [&str; 3] = ["png", "jpg", "jpeg"];

pub fn handle(
    journal: &JournalStore,
    attachments: &AttachmentStore,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let rec = record_trade(journal, attachments, sub, Local::now().naive_local())?;
    println!(
        "Logged {} {} ({}) at {}: {} {}",
        rec.direction,
        rec.symbol,
        rec.strategy,
        rec.timestamp_str(),
        rec.outcome,
        rec.pnl
    );
    if let Some(p) = &rec.image_path {
        println!("Chart saved to {}", attachments.resolve(p).display());
    }
    Ok(())
}

/// Saves the optional chart, then appends the trade stamped with `now`.
pub fn record_trade(
    journal: &JournalStore,
    attachments: &AttachmentStore,
    sub: &clap::ArgMatches,
    now: NaiveDateTime,
) -> Result<TradeRecord> {
    let symbol = sub.get_one::<String>("symbol").unwrap().trim().to_string();
    let entry_price = non_negative("entry", sub.get_one::<String>("entry").unwrap())?;
    let exit_price = non_negative("exit", sub.get_one::<String>("exit").unwrap())?;
    let pnl = parse_decimal(sub.get_one::<String>("pnl").unwrap())?;
    let notes = sub.get_one::<String>("notes").cloned().unwrap_or_default();

    let image_path = match sub.get_one::<std::path::PathBuf>("image") {
        Some(path) => Some(save_chart(attachments, path, now)?),
        None => None,
    };

    let rec = TradeRecord {
        timestamp: journal_timestamp(now),
        symbol,
        direction: *sub.get_one::<Direction>("direction").unwrap(),
        strategy: *sub.get_one::<Strategy>("strategy").unwrap(),
        entry_price,
        exit_price,
        outcome: *sub.get_one::<Outcome>("outcome").unwrap(),
        pnl,
        emotion: *sub.get_one::<Emotion>("emotion").unwrap(),
        notes,
        image_path,
    };
    journal
        .append(rec.clone())
        .with_context(|| format!("Could not save trade to {}", journal.path().display()))?;
    Ok(rec)
}

fn non_negative(field: &str, raw: &str) -> Result<Decimal> {
    let d = parse_decimal(raw)?;
    if d.is_sign_negative() && !d.is_zero() {
        bail!("{} price must be zero or positive, got {}", field, d);
    }
    Ok(d)
}

fn save_chart(attachments: &AttachmentStore, path: &Path, now: NaiveDateTime) -> Result<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .with_context(|| format!("'{}' is not a file", path.display()))?;
    let ext = extension_of(&name).to_lowercase();
    if !IMAGE_TYPES.contains(&ext.as_str()) {
        bail!(
            "Unsupported chart type '{}' (use {})",
            name,
            IMAGE_TYPES.join(", ")
        );
    }
    let blob = std::fs::read(path).with_context(|| format!("Read chart {}", path.display()))?;
    let stored = attachments.save_at(&blob, &name, now)?;
    Ok(stored.to_string_lossy().replace('\\', "/"))
}
