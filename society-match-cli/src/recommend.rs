//! Recommend command implementation for the society-match CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use society_match_core::{MemoryCatalog, Profile, ScoredSociety};
use society_match_scorer::{MatchWeights, RankOptions, Ranker, SocietyScorer};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_CATALOG, ARG_CATEGORY_WEIGHT, ARG_INTEREST, ARG_KEYWORD_WEIGHT, ARG_LIMIT,
    ARG_MATCHED_ONLY, ARG_MAX_KEYWORD_MATCHES, ARG_PROFILE, ARG_ROLE_WEIGHT, ARG_SKILL_WEIGHT,
    CliError, ENV_CATALOG,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every society in a JSON catalog against a visitor \
                 profile and print the ranked list with match reasons. \
                 Interests given on the command line are merged into the \
                 stored profile.",
    about = "Rank societies for a profile"
)]
#[ortho_config(prefix = "SOCIETY_MATCH")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of societies.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a JSON profile with interests, skills and role goals.
    #[arg(long = ARG_PROFILE, value_name = "path")]
    #[serde(default)]
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Extra interest terms; repeat the flag for several.
    #[arg(long = ARG_INTEREST, value_name = "term")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) interest: Vec<String>,
    /// Drop societies that scored zero.
    ///
    /// An absent flag is left out of the CLI layer so a config file or
    /// environment value still applies.
    #[arg(long = ARG_MATCHED_ONLY)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) matched_only: bool,
    /// Keep at most this many societies.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Override the category rule weight.
    #[arg(long = ARG_CATEGORY_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) category_weight: Option<u32>,
    /// Override the keyword rule weight.
    #[arg(long = ARG_KEYWORD_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) keyword_weight: Option<u32>,
    /// Override the skill rule weight.
    #[arg(long = ARG_SKILL_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) skill_weight: Option<u32>,
    /// Override the role rule weight.
    #[arg(long = ARG_ROLE_WEIGHT, value_name = "points")]
    #[serde(default)]
    pub(crate) role_weight: Option<u32>,
    /// Override the number of keyword matches that earn points.
    #[arg(long = ARG_MAX_KEYWORD_MATCHES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_keyword_matches: Option<u32>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the catalog JSON file.
    pub(crate) catalog: Utf8PathBuf,
    /// Optional path to a stored profile.
    pub(crate) profile: Option<Utf8PathBuf>,
    /// Interests supplied with the request.
    pub(crate) interests: Vec<String>,
    /// Filtering and truncation applied after sorting.
    pub(crate) options: RankOptions,
    /// Rule weights for the scorer.
    pub(crate) weights: MatchWeights,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(profile) = &self.profile {
            Self::require_existing(profile, ARG_PROFILE)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;

        let defaults = MatchWeights::default();
        let weights = MatchWeights {
            category: args.category_weight.unwrap_or(defaults.category),
            keyword: args.keyword_weight.unwrap_or(defaults.keyword),
            skill: args.skill_weight.unwrap_or(defaults.skill),
            role: args.role_weight.unwrap_or(defaults.role),
            max_keyword_matches: args
                .max_keyword_matches
                .unwrap_or(defaults.max_keyword_matches),
        };

        Ok(Self {
            catalog,
            profile: args.profile,
            interests: args.interest,
            options: RankOptions {
                matched_only: args.matched_only,
                limit: args.limit,
            },
            weights,
        })
    }
}

/// JSON document printed by `recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RecommendResponse {
    /// Normalised interests the ranking used.
    pub(crate) interests: Vec<String>,
    /// Number of societies in `societies`.
    pub(crate) count: usize,
    /// Ranked societies with their scores and reasons.
    pub(crate) societies: Vec<ScoredSociety>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let response = execute_recommend(&config)?;
    write_recommend_response(writer, &response)
}

pub(super) fn execute_recommend(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let stored = config
        .profile
        .as_deref()
        .map(load_profile)
        .transpose()?
        .unwrap_or_default();
    let profile = stored.merged_with(&Profile::new().with_interests(&config.interests));
    log::debug!(
        "Ranking {} societies for {} interests",
        catalog.len(),
        profile.interests().len()
    );

    let ranker = Ranker::new(SocietyScorer::new(config.weights));
    let societies = ranker.rank_with(&catalog, &profile, config.options);
    Ok(RecommendResponse {
        interests: profile.interests().to_vec(),
        count: societies.len(),
        societies,
    })
}

/// Loads a JSON array of societies from disk.
pub(super) fn load_catalog(path: &Utf8Path) -> Result<MemoryCatalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_CATALOG,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON-encoded [`Profile`] from disk.
pub(super) fn load_profile(path: &Utf8Path) -> Result<Profile, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_PROFILE,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseProfile {
        path: path.to_path_buf(),
        source,
    })
}

fn write_recommend_response(
    writer: &mut dyn Write,
    response: &RecommendResponse,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseRecommendations)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRecommendations)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRecommendations)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
