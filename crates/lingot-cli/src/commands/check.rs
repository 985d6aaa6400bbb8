//! Implementation of the `lingot check` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::read_messages;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Message files to check (source or .json definitions)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report problems as warnings instead of failing on the first one
    #[arg(long)]
    pub lenient: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    messages: usize,
    problems: Vec<ProblemJson>,
}

#[derive(Debug, Serialize)]
struct ProblemJson {
    kind: String,
    line: Option<usize>,
    message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let file = path.display().to_string();

        match read_messages(path, !args.lenient) {
            Ok(parsed) => {
                if !args.json {
                    println!(
                        "{} {}: {} messages",
                        "ok".green().bold(),
                        file,
                        parsed.messages.len()
                    );
                    for problem in &parsed.tolerated {
                        eprintln!("{} {}", "warning:".yellow().bold(), problem);
                    }
                }
                reports.push(FileReport {
                    file,
                    messages: parsed.messages.len(),
                    problems: parsed
                        .tolerated
                        .iter()
                        .map(|problem| ProblemJson {
                            kind: problem.kind().to_string(),
                            line: Some(problem.line()),
                            message: problem.to_string(),
                        })
                        .collect(),
                });
            }
            Err(report) => {
                failed = true;
                if !args.json {
                    eprintln!("{report:?}");
                }
                reports.push(FileReport {
                    file,
                    messages: 0,
                    problems: vec![ProblemJson {
                        kind: "error".to_string(),
                        line: None,
                        message: report.to_string(),
                    }],
                });
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{json_output}");
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
