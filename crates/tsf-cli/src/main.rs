//! TSF CLI entry point.
//!
//! Provides command-line tools for working with Qt Linguist TS catalogs:
//! - `tsf check` - Parse and lint .ts catalogs
//! - `tsf stats` - Report translation coverage per context
//! - `tsf tr` - Resolve a translation the way the runtime would
//! - `tsf format` - Re-serialize a catalog in canonical layout

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_format, run_stats, run_tr, CheckArgs, FormatArgs, StatsArgs, TrArgs,
};

/// Qt Linguist TS catalog tools.
#[derive(Debug, Parser)]
#[command(name = "tsf")]
#[command(about = "Qt Linguist TS catalog tools", long_about = None)]
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
    /// Parse and lint .ts catalogs
    Check(CheckArgs),
    /// Report translation coverage per context
    Stats(StatsArgs),
    /// Resolve a translation the way the runtime would
    Tr(TrArgs),
    /// Re-serialize a catalog in canonical layout
    Format(FormatArgs),
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

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

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
        Commands::Stats(args) => run_stats(args),
        Commands::Tr(args) => run_tr(args),
        Commands::Format(args) => run_format(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
