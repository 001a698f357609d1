//! Implementation of the `tsf stats` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tsf::{parse_catalog, CatalogStats};

use crate::output::table::format_stats_table;
use crate::output::TsDiagnostic;

/// Arguments for the stats command.
#[derive(Debug, clap::Args)]
pub struct StatsArgs {
    /// Catalog file (.ts)
    #[arg(long)]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any message is unfinished
    #[arg(long)]
    pub strict: bool,

    /// List unfinished source strings per context
    #[arg(long)]
    pub unfinished: bool,
}

/// JSON output for coverage data.
#[derive(Debug, Serialize)]
struct StatsJson {
    language: Option<String>,
    completion: f64,
    #[serde(flatten)]
    stats: CatalogStats,
}

/// Run the stats command.
pub fn run_stats(args: StatsArgs) -> Result<i32> {
    let content = read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read file {:?}: {}", args.file, e))?;

    let catalog = match parse_catalog(&content) {
        Ok(catalog) => catalog,
        Err(e) => {
            let diagnostic = TsDiagnostic::from_parse_error(&args.file, &content, &e);
            return Err(diagnostic.into());
        }
    };

    let stats = CatalogStats::collect(&catalog);

    if args.json {
        let json_data = StatsJson {
            language: catalog.language.clone(),
            completion: stats.completion(),
            stats: stats.clone(),
        };
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_stats_table(&stats);
        println!("{}", table);
        println!(
            "\n{} {:.1}% finished ({}/{} active messages)",
            if stats.is_complete() {
                "complete:".green().to_string()
            } else {
                "incomplete:".yellow().to_string()
            },
            stats.completion() * 100.0,
            stats.finished,
            stats.active()
        );

        if args.unfinished {
            for context in &stats.contexts {
                if !context.unfinished_sources.is_empty() {
                    println!("\nUnfinished in {}:", context.name);
                    for source in &context.unfinished_sources {
                        println!("  - {}", source);
                    }
                }
            }
        }
    }

    if args.strict && !stats.is_complete() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
