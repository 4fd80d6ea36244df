//! Command-line interface for ranking campus societies.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod recommend;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_INTEREST: &str = "interest";
pub(crate) const ARG_MATCHED_ONLY: &str = "matched-only";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_CATEGORY_WEIGHT: &str = "category-weight";
pub(crate) const ARG_KEYWORD_WEIGHT: &str = "keyword-weight";
pub(crate) const ARG_SKILL_WEIGHT: &str = "skill-weight";
pub(crate) const ARG_ROLE_WEIGHT: &str = "role-weight";
pub(crate) const ARG_MAX_KEYWORD_MATCHES: &str = "max-keyword-matches";
pub(crate) const ENV_CATALOG: &str = "SOCIETY_MATCH_CMDS_RECOMMEND_CATALOG";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// input loading or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "society-match",
    about = "Rank campus societies against a visitor profile",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank a society catalog for a profile.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
