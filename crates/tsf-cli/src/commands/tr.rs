//! Implementation of the `tsf tr` command.
//!
//! Resolves a `(context, source)` pair against a catalog exactly the way the
//! runtime would: finished entries only, plural form selection for `-n`,
//! positional argument substitution, and fallback to the source string.

use std::path::PathBuf;

use miette::{miette, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use tsf::{compute_suggestions, Translator};

/// Arguments for the tr command.
#[derive(Debug, clap::Args)]
pub struct TrArgs {
    /// Catalog file (.ts)
    #[arg(long)]
    pub file: PathBuf,

    /// Context (UI surface) to look up in
    #[arg(long)]
    pub context: String,

    /// Source string to translate
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for numerus messages (substituted for %n)
    #[arg(short = 'n', long = "count")]
    pub count: Option<i64>,

    /// Positional arguments for %1..%9 (repeatable)
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for tr results.
#[derive(Serialize)]
struct TrResult {
    result: String,
    translated: bool,
}

/// Run the tr command.
pub fn run_tr(args: TrArgs) -> Result<i32> {
    let mut translator = Translator::with_language("target");
    translator
        .load("target", &args.file)
        .map_err(|e| miette!("Failed to load catalog: {}", e))?;

    let translated = translator
        .find_message(&args.context, &args.source, args.comment.as_deref())
        .is_some_and(|message| message.is_displayable());

    let result = if let Some(count) = args.count {
        translator.translate_n(&args.context, &args.source, count)
    } else if !args.args.is_empty() {
        let arg_refs: Vec<&str> = args.args.iter().map(String::as_str).collect();
        translator.translate_args(&args.context, &args.source, &arg_refs)
    } else if let Some(comment) = &args.comment {
        translator
            .translate_with_comment(&args.context, &args.source, comment)
            .into_owned()
    } else {
        translator.translate(&args.context, &args.source).into_owned()
    };

    if args.json {
        let output = TrResult { result, translated };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    println!("{}", result);

    if !translated {
        eprintln!("{}", "no finished translation; source returned".dimmed());
        if let Some(context) = translator
            .catalog()
            .and_then(|catalog| catalog.find_context(&args.context))
        {
            let suggestions = compute_suggestions(context, &args.source, 3);
            if !suggestions.is_empty() {
                eprintln!("{}", "similar source strings:".dimmed());
                for suggestion in suggestions {
                    eprintln!("  - {}", suggestion.dimmed());
                }
            }
        } else {
            eprintln!(
                "{}",
                format!("context '{}' not found in catalog", args.context).dimmed()
            );
        }
    }

    Ok(exitcode::OK)
}
