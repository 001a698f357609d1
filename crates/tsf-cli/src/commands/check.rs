//! Implementation of the `tsf check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{miette, IntoDiagnostic, Report, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tsf::parse_catalog;
use tsf::runtime::lint_catalog;

use crate::output::TsDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.ts)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    contexts: usize,
    messages: usize,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results: Vec<CheckJson> = Vec::new();

    for file in &args.files {
        let content = read_to_string(file)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read file {:?}: {}", file, e))?;

        let catalog = match parse_catalog(&content) {
            Ok(catalog) => catalog,
            Err(e) => {
                let diagnostic = TsDiagnostic::from_parse_error(file, &content, &e);
                eprintln!("{:?}", Report::new(diagnostic));
                return Ok(exitcode::DATAERR);
            }
        };

        let language = catalog.primary_language();
        let warnings = lint_catalog(&catalog, &language);

        results.push(CheckJson {
            file: file.display().to_string(),
            contexts: catalog.contexts.len(),
            messages: catalog.message_count(),
            warnings: warnings.iter().map(|w| w.to_string()).collect(),
        });
    }

    let any_warnings = results.iter().any(|r| !r.warnings.is_empty());

    if args.json {
        let json_output = serde_json::to_string_pretty(&results).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for result in &results {
            if result.warnings.is_empty() {
                println!(
                    "{} {} ({} contexts, {} messages)",
                    "ok".green(),
                    result.file,
                    result.contexts,
                    result.messages
                );
            } else {
                println!(
                    "{} {} ({} warning(s))",
                    "warn".yellow(),
                    result.file,
                    result.warnings.len()
                );
                for warning in &result.warnings {
                    println!("  {}", warning.yellow());
                }
            }
        }
    }

    if any_warnings {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn check_file(content: &str) -> i32 {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let args = CheckArgs {
            files: vec![file.path().to_path_buf()],
            json: true,
        };
        run_check(args).unwrap()
    }

    #[test]
    fn test_clean_catalog_exits_ok() {
        let code = check_file(
            r#"<TS language="es_ES">
<context>
    <name>About</name>
    <message>
        <source>About</source>
        <translation>Acerca de</translation>
    </message>
</context>
</TS>"#,
        );
        assert_eq!(code, exitcode::OK);
    }

    #[test]
    fn test_lint_warnings_exit_dataerr() {
        let code = check_file(
            r#"<TS language="es_ES">
<context>
    <name>About</name>
    <message>
        <source>About</source>
        <translation>Acerca de</translation>
    </message>
    <message>
        <source>About</source>
        <translation>Sobre</translation>
    </message>
</context>
</TS>"#,
        );
        assert_eq!(code, exitcode::DATAERR);
    }

    #[test]
    fn test_parse_failure_exits_dataerr() {
        let code = check_file("<TS><context><name>About</name>");
        assert_eq!(code, exitcode::DATAERR);
    }
}
