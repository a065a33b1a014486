use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "coverscout",
    version,
    about = "Small-business insurance needs assessment CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding coverscout.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Reference data file overriding data.reference_file
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the assessment questions
    Questions(ListCommand),
    /// List the insurance catalog
    Catalog(ListCommand),
    /// List shipped industries and business sizes
    Industries(ListCommand),
    /// Score an answer file
    Assess(AssessCommand),
    /// Answer the questions interactively
    Quiz(QuizCommand),
    /// Check reference data invariants
    Validate,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AssessCommand {
    /// TOML file with an [answers] table
    pub answers: PathBuf,
    /// Defaults to report.format, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Also write the report into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,
    /// Include a share code derived from the answers
    #[arg(long)]
    pub share: bool,
}

#[derive(Args)]
pub struct QuizCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub export: Option<PathBuf>,
}
