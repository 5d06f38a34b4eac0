use clap::Args;
use filing_copilot::classification::{ClassificationEngine, DEFAULT_MAX_SUGGESTIONS};
use filing_copilot::config::AppConfig;
use filing_copilot::conflict::basic_conflict_check;
use filing_copilot::error::AppError;
use filing_copilot::intake::{NiceClass, TrademarkIntake};
use std::path::PathBuf;

use crate::infra::build_assembler;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Free-text description of what the business sells or does
    pub(crate) description: String,
    /// Maximum number of classes to list
    #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub(crate) max_results: usize,
}

#[derive(Args, Debug)]
pub(crate) struct ConflictCheckArgs {
    /// Mark text to check
    pub(crate) mark_text: String,
    /// NICE class number (repeatable)
    #[arg(long = "class", value_parser = parse_class)]
    pub(crate) classes: Vec<NiceClass>,
}

#[derive(Args, Debug)]
pub(crate) struct PackageArgs {
    /// Path to a TrademarkIntake JSON document
    #[arg(long)]
    pub(crate) intake: PathBuf,
    /// Directory for the ZIP (defaults to GENERATED_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

pub(crate) fn parse_class(raw: &str) -> Result<NiceClass, String> {
    let number = raw
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("'{raw}' is not a class number ({err})"))?;
    NiceClass::try_from(number).map_err(|err| err.to_string())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let engine = ClassificationEngine::standard();
    let suggestions = engine.suggest(&args.description, args.max_results);

    if suggestions.is_empty() {
        println!("No matching classes. Try describing the goods or services in more detail.");
        return Ok(());
    }

    println!("Suggested NICE classes");
    for suggestion in suggestions {
        println!(
            "- Class {}: {} (confidence {:.1})",
            suggestion.class_number, suggestion.class_title, suggestion.confidence
        );
    }
    Ok(())
}

pub(crate) fn run_conflict_check(args: ConflictCheckArgs) -> Result<(), AppError> {
    let report = basic_conflict_check(&args.mark_text, &args.classes);

    if report.items.is_empty() {
        println!("No potential conflicts found for \"{}\".", args.mark_text);
    } else {
        println!("Potential conflicts for \"{}\"", args.mark_text);
        for item in &report.items {
            println!(
                "- {} (class {}, similarity {:.2})",
                item.mark_text, item.class_number, item.similarity
            );
        }
    }
    println!("\n{}", report.disclaimer);
    Ok(())
}

pub(crate) fn run_package(args: PackageArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.intake)?;
    let intake: TrademarkIntake = serde_json::from_str(&raw)?;

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.documents.generated_dir,
    };

    let package = build_assembler(output_dir).assemble(&intake)?;
    println!("Filing package written to {}", package.path.display());
    for document in &package.documents {
        println!("- {document}");
    }
    Ok(())
}
