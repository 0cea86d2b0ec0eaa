// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use tradelog::attachments::AttachmentStore;
use tradelog::config::Paths;
use tradelog::journal::JournalStore;
use tradelog::{cli, commands, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    utils::init_logging(matches.get_flag("verbose"));

    let paths = Paths::resolve(matches.get_one::<PathBuf>("data_dir").map(PathBuf::as_path))?;
    let journal = JournalStore::new(paths.journal_file());
    let attachments = AttachmentStore::open(&paths.data_dir)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Journal: {}", journal.path().display());
            println!("Charts:  {}", attachments.dir().display());
        }
        Some(("add", sub)) => commands::add::handle(&journal, &attachments, sub)?,
        Some(("list", sub)) => commands::list::handle(&journal, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&journal, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&journal, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&journal, &attachments)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
