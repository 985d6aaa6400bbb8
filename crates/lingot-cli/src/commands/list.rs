//! Implementation of the `lingot list` command.

use std::path::PathBuf;

use clap::Args;
use lingot::MessageStore;
use miette::{IntoDiagnostic, Result};

use super::read_messages;
use crate::output::table::format_messages_table;

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Message file to list (source or .json definitions)
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the list command.
pub fn run_list(args: ListArgs) -> Result<i32> {
    let parsed = read_messages(&args.file, false)?;

    let mut store = MessageStore::new();
    store.add_all(parsed.messages);

    if args.json {
        let messages: Vec<_> = store.messages().collect();
        let json_output = serde_json::to_string_pretty(&messages).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_messages_table(store.messages()));
    }

    Ok(exitcode::OK)
}
