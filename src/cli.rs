// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Direction, Emotion, Outcome, Strategy};
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as a pretty JSON array"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("symbol").long("symbol"))
        .arg(
            Arg::new("direction")
                .long("direction")
                .value_parser(|s: &str| s.parse::<Direction>()),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_parser(|s: &str| s.parse::<Strategy>()),
        )
        .arg(
            Arg::new("outcome")
                .long("outcome")
                .value_parser(|s: &str| s.parse::<Outcome>()),
        )
        .arg(
            Arg::new("emotion")
                .long("emotion")
                .value_parser(|s: &str| s.parse::<Emotion>()),
        )
        .arg(
            Arg::new("grep")
                .long("grep")
                .value_name("REGEX")
                .help("Only entries whose notes match this pattern"),
        )
}

pub fn build_cli() -> Command {
    Command::new("tradelog")
        .about("Personal trading journal: log setups, outcomes and psychology")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data_dir")
                .long("data-dir")
                .global(true)
                .env("TRADELOG_DATA_DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding trading_journal.csv and images/"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("init").about("Create the data directory"))
        .subcommand(
            Command::new("add")
                .about("Log a trade")
                .arg(Arg::new("symbol").long("symbol").default_value("BTCUSDT"))
                .arg(
                    Arg::new("direction")
                        .long("direction")
                        .default_value("Long")
                        .value_parser(|s: &str| s.parse::<Direction>()),
                )
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .default_value("TrendBreak")
                        .value_parser(|s: &str| s.parse::<Strategy>()),
                )
                .arg(
                    Arg::new("entry")
                        .long("entry")
                        .default_value("0")
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("exit")
                        .long("exit")
                        .default_value("0")
                        .allow_negative_numbers(true),
                )
                .arg(
                    Arg::new("outcome")
                        .long("outcome")
                        .default_value("Win")
                        .value_parser(|s: &str| s.parse::<Outcome>()),
                )
                .arg(
                    Arg::new("pnl")
                        .long("pnl")
                        .default_value("0")
                        .allow_negative_numbers(true)
                        .help("Profit or loss, as an amount or in R"),
                )
                .arg(
                    Arg::new("emotion")
                        .long("emotion")
                        .default_value("Calm")
                        .value_parser(|s: &str| s.parse::<Emotion>()),
                )
                .arg(Arg::new("notes").long("notes").default_value(""))
                .arg(
                    Arg::new("image")
                        .long("image")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("Chart screenshot (png, jpg or jpeg)"),
                ),
        )
        .subcommand(json_args(filter_args(
            Command::new("list")
                .about("Browse logged trades")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .help("Only the most recent N entries"),
                ),
        )))
        .subcommand(json_args(filter_args(
            Command::new("summary").about("Per-strategy win rate and PnL"),
        )))
        .subcommand(
            Command::new("export")
                .about("Export the journal")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check attachments against the journal"))
}
