// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::list::TradeRow;
use crate::journal::{COLUMNS, JournalStore, row_for};
use anyhow::{Context, Result, bail};

pub fn handle(journal: &JournalStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let records = journal
        .load()
        .with_context(|| format!("Could not load {}", journal.path().display()))?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(COLUMNS)?;
            for r in &records {
                wtr.write_record(row_for(r))?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<TradeRow> = records.iter().map(TradeRow::from).collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    println!("Exported {} trades to {}", records.len(), out);
    Ok(())
}
