use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::valuation::Niche;

#[derive(Parser, Debug)]
#[command(name = "acqsuite")]
#[command(about = "Channel acquisition toolkit", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Extract action items, decisions, and participants from a meeting transcript
    Analyze(AnalyzeCliArgs),
    /// Estimate a channel valuation range for an acquisition
    Valuation(ValuationCliArgs),
    /// Estimate sponsorship revenue potential from channel metrics
    Sponsor(SponsorCliArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeCliArgs {
    /// Path to the transcript text/markdown file
    pub file: PathBuf,
    /// Output format (defaults to the configured format, then json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ValuationCliArgs {
    /// Monthly revenue in USD
    pub monthly_revenue: f64,
    /// Monthly views
    pub monthly_views: f64,
    /// Subscriber count
    pub subscribers: f64,
    /// Channel age in years
    pub age_years: f64,
    /// Channel niche
    #[arg(value_enum)]
    pub niche: Niche,
    /// Output format (defaults to the configured format, then text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(ClapArgs, Debug)]
pub struct SponsorCliArgs {
    /// Subscriber count
    #[arg(long)]
    pub subscribers: u64,
    /// Lifetime view count
    #[arg(long)]
    pub total_views: u64,
    /// Number of uploaded videos
    #[arg(long)]
    pub video_count: u64,
    /// Average views per video
    #[arg(long)]
    pub average_views: u64,
    /// Monthly view count, if known
    #[arg(long)]
    pub monthly_views: Option<u64>,
    /// Output format (defaults to the configured format, then text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}
