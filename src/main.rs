mod cli;

use clap::Parser;
use coverscout::config;
use coverscout::data::ReferenceData;
use coverscout::error::CoverScoutError;
use coverscout::quiz::{self, QuizOutcome};
use coverscout::report::{self, export, share, AssessmentReport, BusinessTypes, OutputFormat};
use coverscout::scoring;
use coverscout::telemetry;
use coverscout::types::answer::AnswerStore;
use coverscout::types::assessment::AssessmentResult;
use coverscout::types::config::CoverScoutConfig;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: Option<&CoverScoutConfig>,
) -> Result<OutputFormat, CoverScoutError> {
    match requested {
        Some(cli::ReportFormat::Json) => Ok(OutputFormat::Json),
        Some(cli::ReportFormat::Md) => Ok(OutputFormat::Md),
        None => config
            .and_then(CoverScoutConfig::report_format)
            .map(OutputFormat::parse)
            .unwrap_or(Ok(OutputFormat::Md)),
    }
}

fn list_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn reference_data(
    cli: &cli::Cli,
    config: Option<&CoverScoutConfig>,
) -> Result<ReferenceData, CoverScoutError> {
    let path = cli.data.clone().or_else(|| {
        config
            .and_then(CoverScoutConfig::reference_file)
            .map(|file| cli.root.join(file))
    });
    match path {
        Some(path) => ReferenceData::load(&path),
        None => Ok(ReferenceData::shipped()),
    }
}

fn export_dir(
    requested: Option<&Path>,
    root: &Path,
    config: Option<&CoverScoutConfig>,
) -> Option<PathBuf> {
    requested.map(Path::to_path_buf).or_else(|| {
        config
            .and_then(CoverScoutConfig::export_dir)
            .map(|dir| root.join(dir))
    })
}

fn publish(
    result: &AssessmentResult,
    share_code: Option<String>,
    format: OutputFormat,
    export_to: Option<PathBuf>,
) -> Result<(), CoverScoutError> {
    let mut assessment = AssessmentReport::new(result);
    if let Some(code) = share_code {
        assessment = assessment.with_share_code(code);
    }
    let rendered = report::render(&assessment, format)?;
    println!("{rendered}");
    if let Some(dir) = export_to {
        let path = export::write_report(&dir, &rendered, format)?;
        eprintln!("report file: {}", path.display());
    }
    Ok(())
}

fn run() -> Result<i32, CoverScoutError> {
    let cli = cli::Cli::parse();
    // The configured level is unknown until the config is read.
    let loaded = telemetry::scoped(
        &telemetry::resolve_level(cli.verbose, cli.quiet, None),
        || config::load_config(&cli.root),
    )??;
    telemetry::init(&telemetry::resolve_level(
        cli.verbose,
        cli.quiet,
        loaded.as_ref(),
    ))?;
    let data = reference_data(&cli, loaded.as_ref())?;

    match &cli.command {
        cli::Commands::Questions(cmd) => {
            println!(
                "{}",
                report::render_questions(&data.questions, list_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            println!(
                "{}",
                report::render_catalog(&data.catalog, list_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Industries(cmd) => {
            println!(
                "{}",
                report::render_business_types(&BusinessTypes::shipped(), list_format(cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate => {
            data.validate()?;
            let dangling = data.dangling_weights();
            for weight in &dangling {
                eprintln!("warning: {weight}");
            }
            println!(
                "validate: {} products, {} questions",
                data.catalog.len(),
                data.questions.len()
            );
            if dangling.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Assess(cmd) => {
            if !cmd.answers.exists() {
                return Err(CoverScoutError::PathNotFound(
                    cmd.answers.display().to_string(),
                ));
            }
            let format = output_format(cmd.format, loaded.as_ref())?;
            let content = std::fs::read_to_string(&cmd.answers)?;
            let (answers, warnings) = AnswerStore::from_toml_str(&content, &data.questions)?;
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }

            let result = scoring::score(&data.catalog, &data.questions, &answers);
            let code = if cmd.share {
                Some(share::share_code(&answers)?)
            } else {
                None
            };
            let export_to = export_dir(cmd.export.as_deref(), &cli.root, loaded.as_ref());
            publish(&result, code, format, export_to)?;

            if warnings.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Quiz(cmd) => {
            let format = output_format(cmd.format, loaded.as_ref())?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            match quiz::run(&data, stdin.lock(), &mut stdout)? {
                QuizOutcome::Completed(result) => {
                    println!();
                    let export_to = export_dir(cmd.export.as_deref(), &cli.root, loaded.as_ref());
                    publish(&result, None, format, export_to)?;
                    Ok(exit_code::SUCCESS)
                }
                QuizOutcome::Aborted => {
                    eprintln!("quiz aborted before completion");
                    Ok(exit_code::WARNINGS)
                }
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
