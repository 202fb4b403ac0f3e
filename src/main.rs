use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use std::path::PathBuf;

use hebconv::{
    Category, CategoryOutcome, ConvertConfig, ConvertEngine, MissingCellPolicy, RunSummary,
};

/// Hebrew vocabulary spreadsheet converter
#[derive(Parser, Debug)]
#[command(name = "hebconv")]
#[command(about = "Convert Hebrew vocabulary spreadsheets (xlsx) to JSON category files")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Folder containing the data_<category>.xlsx files
    #[arg(long, default_value = "../raw_data")]
    data_folder: PathBuf,

    /// Folder receiving the <category>.json files
    #[arg(long, default_value = "../input_data")]
    output_folder: PathBuf,

    /// Convert only the given categories (repeatable, default: all)
    #[arg(long, value_enum)]
    category: Vec<Category>,

    /// Spaces per indentation level in the JSON output (0-8, default: 4)
    #[arg(long, default_value_t = 4)]
    indent: u8,

    /// Fail on rows shorter than the schema instead of padding with nulls
    #[arg(long)]
    strict_columns: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let engine = ConvertEngine::new(create_convert_config(&args))?;

    let categories: Vec<Category> = if args.category.is_empty() {
        Category::ALL.to_vec()
    } else {
        args.category.clone()
    };

    if args.verbose && !args.quiet {
        eprintln!("Reading spreadsheets from {}", args.data_folder.display());
        eprintln!("Writing JSON files to {}", args.output_folder.display());
    }

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(categories.len() as u64)
    };

    let mut summary = RunSummary::default();
    for &category in &categories {
        let outcome = engine.convert_category(category)?;
        report_outcome(&progress, &outcome, args.quiet);
        summary.outcomes.push((category, outcome));
        progress.inc(1);
    }
    progress.finish_and_clear();

    if !args.quiet {
        println!(
            "Converted {} of {} categories ({} records)",
            summary.converted(),
            summary.outcomes.len(),
            summary.total_records()
        );
    }

    // Missing input files are informational; the run still exits cleanly
    Ok(())
}

fn create_convert_config(args: &CliArgs) -> ConvertConfig {
    let missing_cells = if args.strict_columns {
        MissingCellPolicy::Strict
    } else {
        MissingCellPolicy::PadNull
    };

    ConvertConfig::new()
        .with_data_folder(args.data_folder.clone())
        .with_output_folder(args.output_folder.clone())
        .with_indent_size(args.indent)
        .with_missing_cells(missing_cells)
}

fn report_outcome(progress: &ProgressBar, outcome: &CategoryOutcome, quiet: bool) {
    if quiet {
        return;
    }

    // suspend() so the lines land on stdout even when the bar is not drawn
    match outcome {
        CategoryOutcome::Converted {
            input,
            output,
            records,
        } => progress.suspend(|| {
            println!(
                "{} {} -> {} ({} records)",
                style("✓").green(),
                input.display(),
                output.display(),
                records
            )
        }),
        CategoryOutcome::MissingInput { input } => progress.suspend(|| {
            println!(
                "{} file {} not found, skipping",
                style("!").yellow(),
                input.display()
            )
        }),
    }
}
