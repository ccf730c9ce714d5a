use crate::infra::{parse_date, read_comments};
use chrono::{NaiveDate, Utc};
use clap::Args;
use ranksewa::credibility::{assess_at, CredibilityAssessment, ReviewContext};
use ranksewa::directory::{rank_listing, DirectoryImporter, RankedDoctor};
use ranksewa::error::AppError;
use ranksewa::moderation::{ContentModerator, ModerationConfig, ModerationResult};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Doctor listing CSV export
    #[arg(long)]
    pub(crate) listing: PathBuf,
    /// Only show the top N doctors
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print full ranking breakdowns as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ModerateArgs {
    /// Short rating label (doctor name or headline)
    #[arg(long)]
    pub(crate) rating_text: Option<String>,
    /// Free-form review comment
    #[arg(long)]
    pub(crate) comment: Option<String>,
    /// Print the moderation result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CredibilityArgs {
    /// Review comment
    #[arg(long)]
    pub(crate) comment: Option<String>,
    /// The review is linked to a booked appointment
    #[arg(long)]
    pub(crate) appointment: bool,
    /// Reviews written by the author, including this one
    #[arg(long)]
    pub(crate) review_count: u32,
    /// Date the author's account was created (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) account_created: NaiveDate,
    /// File of other comments for the same doctor, one per line
    #[arg(long)]
    pub(crate) existing: Option<PathBuf>,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_rank<W: Write>(args: RankArgs, out: &mut W) -> Result<(), AppError> {
    let RankArgs {
        listing,
        limit,
        json,
    } = args;

    let entries = DirectoryImporter::from_path(&listing)?;
    info!(path = %listing.display(), doctors = entries.len(), "imported doctor listing");

    let mut ranked = rank_listing(&entries, Utc::now());
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&ranked)?)?;
    } else {
        render_ranking(&ranked, out)?;
    }

    Ok(())
}

fn render_ranking<W: Write>(ranked: &[RankedDoctor], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Doctor ranking ({} listed)", ranked.len())?;
    writeln!(
        out,
        "{:>4}  {:<32} {:>6} {:>7} {:>8} {:>9} {:>5}",
        "#", "Doctor", "Score", "Rating", "Profile", "Response", "Age"
    )?;

    for doctor in ranked {
        let breakdown = &doctor.breakdown;
        writeln!(
            out,
            "{:>4}  {:<32} {:>5}% {:>7.2} {:>7}% {:>8}% {:>4}d",
            doctor.position,
            doctor.name,
            breakdown.composite_percent,
            breakdown.rating.raw,
            breakdown.profile_completion.percent,
            breakdown.response_rate.percent,
            breakdown.account_age.days,
        )?;
    }
    Ok(())
}

pub(crate) fn run_moderate<W: Write>(
    args: ModerateArgs,
    config: ModerationConfig,
    out: &mut W,
) -> Result<(), AppError> {
    let moderator = ContentModerator::from_config(config)?;
    let result = moderator.moderate(args.rating_text.as_deref(), args.comment.as_deref());

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        render_moderation(&result, out)?;
    }

    Ok(())
}

fn render_moderation<W: Write>(result: &ModerationResult, out: &mut W) -> std::io::Result<()> {
    if result.approved {
        return writeln!(out, "Review approved");
    }

    let issues = result
        .issues
        .iter()
        .map(|issue| issue.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Review rejected: {}", result.message)?;
    writeln!(out, "  Issues: {issues}")
}

pub(crate) fn run_credibility<W: Write>(
    args: CredibilityArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let other_comments = match &args.existing {
        Some(path) => read_comments(path)?,
        None => Vec::new(),
    };
    let author_created_at = args
        .account_created
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(Utc::now);

    let context = ReviewContext {
        has_appointment: args.appointment,
        author_review_count: args.review_count,
        author_created_at,
        comment: args.comment,
        other_comments,
    };
    let assessment = assess_at(&context, Utc::now());

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&assessment)?)?;
    } else {
        render_credibility(&assessment, out)?;
    }

    Ok(())
}

fn render_credibility<W: Write>(
    assessment: &CredibilityAssessment,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Credibility score {} ({})", assessment.score, assessment.tier)?;
    for signal in &assessment.signals {
        writeln!(out, "  {:<24} {:+}", signal.as_str(), signal.points())?;
    }
    if assessment.flagged {
        writeln!(out, "  Flagged for moderator review")?;
    }
    Ok(())
}
