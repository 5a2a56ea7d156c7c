// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{info, warn};
use vocabulator::utils::logging::{format_info, format_notice, format_success, format_warning};
use vocabulator::{
    AnalysisOptions, AnalysisOutcome, Config, Document, ExportManifest, FrequencyTable,
    LanguageProfile, TableExporter, Validator, WordAnalyzer,
};

#[derive(Parser)]
#[command(name = "vocabulator")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract word frequencies from PDF documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a PDF and export its word frequency table
    Analyze {
        /// PDF file to analyze
        file: PathBuf,

        /// Language by name or ISO code (see `languages`)
        #[arg(short, long)]
        language: Option<String>,

        #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
        remove_stopwords: Option<bool>,

        #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
        dictionary_filter: Option<bool>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Rows shown in the console (exports always hold the full table)
        #[arg(long, value_name = "NUM")]
        rows: Option<usize>,

        #[arg(long)]
        no_export: bool,

        /// Also write a JSON manifest next to the exports
        #[arg(long)]
        manifest: bool,
    },

    /// List supported languages and dictionary availability
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(cli.color);
    vocabulator::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Analyze {
            file,
            language,
            remove_stopwords,
            dictionary_filter,
            output,
            rows,
            no_export,
            manifest,
        } => {
            let request = AnalyzeRequest {
                file,
                language: language.unwrap_or_else(|| config.analysis.default_language.clone()),
                options: AnalysisOptions {
                    remove_stopwords: remove_stopwords.unwrap_or(config.analysis.remove_stopwords),
                    dictionary_filter: dictionary_filter
                        .unwrap_or(config.analysis.dictionary_filter),
                },
                output: output.unwrap_or_else(|| config.export.output_dir.clone()),
                rows: rows.unwrap_or(config.analysis.display_rows),
                export: !no_export,
                manifest: manifest || config.export.write_manifest,
            };
            cmd_analyze(&config, request, !cli.verbose)?;
        }
        Commands::Languages => {
            cmd_languages();
        }
    }

    Ok(())
}

struct AnalyzeRequest {
    file: PathBuf,
    language: String,
    options: AnalysisOptions,
    output: PathBuf,
    rows: usize,
    export: bool,
    manifest: bool,
}

fn cmd_analyze(config: &Config, request: AnalyzeRequest, show_progress: bool) -> Result<()> {
    Validator::validate_file_path(&request.file)?;
    Validator::validate_pdf_extension(&request.file)?;

    let profile = LanguageProfile::find(&request.language)?;
    let document = Document::from_path(&request.file)?;
    Validator::validate_file_size(document.size(), config.analysis.max_file_size_mb)?;

    if !Validator::looks_like_pdf(&document.bytes) {
        warn!("{} has no PDF header; parsing anyway", document.filename);
    }

    info!(
        "Analyzing {} as {} (stopwords: {}, dictionary: {})",
        document.filename,
        profile.display_name,
        if request.options.remove_stopwords { "remove" } else { "keep" },
        if request.options.dictionary_filter { "on" } else { "off" }
    );

    let analyzer = WordAnalyzer::from_config(config).with_progress(show_progress);
    let report = analyzer
        .analyze_document(&document, profile, request.options)
        .context("Analysis failed")?;

    for notice in &report.notices {
        println!("{}", format_notice(notice));
    }

    let table = match &report.outcome {
        AnalysisOutcome::Table(table) => table,
        AnalysisOutcome::NoData(stage) => {
            println!("{}", format_warning(stage.message()));
            return Ok(());
        }
    };

    println!("{}", format_success("Word analysis complete!"));
    print_table(table, request.rows);
    println!(
        "{}",
        format_info(&format!(
            "{} words, {} unique, {} pages, {:.1}% of tokens kept, {:.0} words/s",
            table.total(),
            table.len(),
            report.stats.pages,
            report.stats.retention_rate(),
            report.stats.words_per_second()
        ))
    );

    if !request.export {
        return Ok(());
    }

    let mut artifacts = TableExporter::new(&config.export)
        .export(table, document.base_name())
        .context("Failed to serialize results")?;

    if request.manifest {
        let manifest = ExportManifest::new(
            &document.filename,
            profile,
            request.options,
            &report,
            artifacts.names(),
        );
        artifacts.push(
            vocabulator::exporter::export_file_name(document.base_name(), "json"),
            manifest.to_bytes(true)?,
        );
    }

    let written = artifacts
        .write_to(&request.output)
        .context("Failed to write export files")?;

    for path in written {
        println!("{}", format_success(&format!("Saved {}", path.display())));
    }

    Ok(())
}

const MAX_WORD_WIDTH: usize = 40;

fn print_table(table: &FrequencyTable, rows: usize) {
    let shown = table.head(rows);
    let words: Vec<String> = shown
        .iter()
        .map(|r| Validator::truncate_text(&r.word, MAX_WORD_WIDTH))
        .collect();
    let width = words
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    println!();
    println!("{}", format!("{:<width$}  {:>8}", "Word", "Count").bold());
    for (word, row) in words.iter().zip(shown) {
        println!("{:<width$}  {:>8}", word, row.count);
    }

    if table.len() > shown.len() {
        println!(
            "{}",
            format!("... {} more rows in the exported files", table.len() - shown.len()).dimmed()
        );
    }
    println!();
}

fn cmd_languages() {
    println!("{}", "Supported languages".bold());
    println!();

    for profile in LanguageProfile::sorted() {
        let dictionary = if profile.supports_dictionary() {
            format!("dictionary {}", profile.dictionary_id.unwrap_or_default())
                .green()
                .to_string()
        } else {
            "no dictionary".dimmed().to_string()
        };
        println!(
            "  {:<34} {:<4} {:<12} {}",
            profile.display_name, profile.code, profile.model_id, dictionary
        );
    }

    println!();
    println!(
        "{}",
        format_info(
            "Stopwords are very common words like 'and', 'the', 'is'. Removing them focuses \
             the table on more meaningful words."
        )
    );
    println!(
        "{}",
        format_info(
            "Dictionary filtering drops words not found in the language's dictionary, which \
             helps with OCR and typographical noise. Only languages listed with a dictionary \
             support it."
        )
    );
}
