use crate::commands::{
    run_credibility, run_moderate, run_rank, CredibilityArgs, ModerateArgs, RankArgs,
};
use clap::{Parser, Subcommand};
use ranksewa::config::AppConfig;
use ranksewa::error::AppError;
use ranksewa::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "ranksewa",
    about = "Rank doctor listings and screen reviews from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Order a doctor listing CSV export by composite ranking score
    Rank(RankArgs),
    /// Run the review moderation checks over a rating label and comment
    Moderate(ModerateArgs),
    /// Score a review's credibility from community signals
    Credibility(CredibilityArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Rank(args) => run_rank(args, &mut out),
        Command::Moderate(args) => run_moderate(args, config.moderation, &mut out),
        Command::Credibility(args) => run_credibility(args, &mut out),
    }
}
