//! Implementation of the `tsf format` command.

use std::fs;
use std::path::PathBuf;

use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use tsf::{parse_catalog, write_catalog};

use crate::output::TsDiagnostic;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Catalog file (.ts)
    pub file: PathBuf,

    /// Rewrite the file in place instead of printing to stdout
    #[arg(long)]
    pub write: bool,

    /// Exit with non-zero code if the file is not already canonical
    #[arg(long)]
    pub check: bool,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> Result<i32> {
    let content = fs::read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read file {:?}: {}", args.file, e))?;

    let catalog = match parse_catalog(&content) {
        Ok(catalog) => catalog,
        Err(e) => {
            let diagnostic = TsDiagnostic::from_parse_error(&args.file, &content, &e);
            return Err(diagnostic.into());
        }
    };

    let formatted = write_catalog(&catalog);

    if args.check {
        if content == formatted {
            println!("{} {}", "ok".green(), args.file.display());
            return Ok(exitcode::OK);
        }
        println!("{} {}", "not canonical".yellow(), args.file.display());
        return Ok(exitcode::DATAERR);
    }

    if args.write {
        fs::write(&args.file, &formatted)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to write file {:?}: {}", args.file, e))?;
        println!("{} {}", "wrote".green(), args.file.display());
    } else {
        print!("{}", formatted);
    }

    Ok(exitcode::OK)
}
