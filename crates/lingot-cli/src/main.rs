//! lingot CLI entry point.
//!
//! Provides command-line tools for working with lingot message files:
//! - `lingot check` - Validate message file syntax
//! - `lingot list` - Show every message variant in a file
//! - `lingot coverage` - Report per-language coverage
//! - `lingot translate` - Resolve and render one message

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, CoverageArgs, ListArgs, TranslateArgs, run_check, run_coverage, run_list,
    run_translate,
};
use tracing_subscriber::EnvFilter;

/// lingot message file tools.
#[derive(Debug, Parser)]
#[command(name = "lingot")]
#[command(about = "lingot message file tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check message file syntax
    Check(CheckArgs),
    /// List the messages defined in a file
    List(ListArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
    /// Resolve and render a message
    Translate(TranslateArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send library events to stderr, filtered by `RUST_LOG`.
fn setup_tracing(verbose: bool) {
    let fallback = if verbose { "lingot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::List(args) => run_list(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Translate(args) => run_translate(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
