mod benchmarks;
mod input;
mod logging;
mod pipeline;
mod report;
mod table;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::benchmarks::{Catalogue, builtin_catalogue, load_catalogue};
use crate::input::compressed::category_code_from_file_name;
use crate::input::{InputError, find_response_file, load_table};
use crate::pipeline::classify::RangeClassifier;
use crate::pipeline::extract::extract_category;
use crate::pipeline::sync::{SyncStatus, SyncSummary, run_categories};
use crate::report::{render_category_text, render_report_text, render_result_json, write_reports};

#[derive(Debug, Parser)]
#[command(name = "complai-scores", version, about)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "warn").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract one model's scores from a single saved category response.
    Extract {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        model: String,
        /// Category code; defaults to the code named by the input file
        /// (`<code>.json` or `compl_ai_<code>_<timestamp>.json`).
        #[arg(long)]
        category: Option<String>,
        /// JSON catalogue replacing the builtin benchmark list.
        #[arg(long)]
        catalogue: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Extract one model's scores from every catalogue category found in a directory.
    Sync {
        #[arg(long)]
        input_dir: PathBuf,
        #[arg(long)]
        model: String,
        #[arg(long)]
        catalogue: Option<PathBuf>,
        /// Write summary.json and report.txt here instead of printing the report.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_level.as_deref());
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Extract {
            input,
            model,
            category,
            catalogue,
            json,
        } => {
            let catalogue = resolve_catalogue(catalogue.as_deref())?;
            let code = match category {
                Some(code) => code,
                None => category_from_path(&input)?,
            };
            let category = catalogue.category(&code).ok_or_else(|| {
                format!(
                    "unknown category: {} (known: {})",
                    code,
                    catalogue.codes().join(", ")
                )
            })?;

            let table = load_table(&input).map_err(|e| e.to_string())?;
            let result = extract_category(&table, category, &model, &RangeClassifier::default());
            if json {
                print!("{}", render_result_json(&result).map_err(|e| e.to_string())?);
            } else {
                print!("{}", render_category_text(&result));
            }
            Ok(())
        }
        Command::Sync {
            input_dir,
            model,
            catalogue,
            out,
        } => {
            let catalogue = resolve_catalogue(catalogue.as_deref())?;
            let summary = run_sync(&catalogue, &input_dir, &model);
            match out {
                Some(out_dir) => write_reports(&summary, &out_dir).map_err(|e| e.to_string())?,
                None => print!("{}", render_report_text(&summary)),
            }
            if summary.status == SyncStatus::Error {
                return Err(format!(
                    "no category could be processed from {}",
                    input_dir.display()
                ));
            }
            Ok(())
        }
    }
}

fn resolve_catalogue(path: Option<&Path>) -> Result<Catalogue, String> {
    match path {
        Some(path) => load_catalogue(path).map_err(|e| e.to_string()),
        None => Ok(builtin_catalogue()),
    }
}

fn category_from_path(path: &Path) -> Result<String, String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| category_code_from_file_name(n).to_string())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| format!("cannot derive category from {}", path.display()))
}

fn run_sync(catalogue: &Catalogue, input_dir: &Path, model: &str) -> SyncSummary {
    run_categories(
        &catalogue.categories,
        model,
        &RangeClassifier::default(),
        |category| {
            let path = find_response_file(input_dir, &category.code).ok_or_else(|| {
                InputError::MissingInput(format!(
                    "{}/{}.json",
                    input_dir.display(),
                    category.code
                ))
            })?;
            load_table(&path)
        },
    )
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
