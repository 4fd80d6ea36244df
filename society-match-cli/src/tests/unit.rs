//! Focused unit tests covering recommend configuration and input loading.

use super::helpers::{demo_catalog, workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use crate::recommend::{
    RecommendConfig, config_from_layers_for_test, execute_recommend, load_catalog, load_profile,
};
use rstest::rstest;
use society_match_scorer::{MatchWeights, RankOptions};

fn config_for(catalog: Utf8PathBuf) -> RecommendConfig {
    RecommendConfig {
        catalog,
        profile: None,
        interests: Vec::new(),
        options: RankOptions::default(),
        weights: MatchWeights::default(),
    }
}

#[rstest]
fn converting_recommend_without_catalog_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recommend_config_applies_weight_overrides() {
    let args = RecommendArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        interest: vec!["Dance".to_owned()],
        matched_only: true,
        limit: Some(3),
        keyword_weight: Some(2),
        max_keyword_matches: Some(5),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.interests, ["Dance"]);
    assert_eq!(
        config.options,
        RankOptions {
            matched_only: true,
            limit: Some(3),
        }
    );
    assert_eq!(
        config.weights,
        MatchWeights {
            keyword: 2,
            max_keyword_matches: 5,
            ..MatchWeights::default()
        }
    );
}

#[rstest]
#[case::catalog(true, ARG_CATALOG)]
#[case::profile(false, ARG_PROFILE)]
fn validate_sources_reports_missing_inputs(
    #[case] catalog_missing: bool,
    #[case] expected_field: &'static str,
) {
    let (_tmp, root) = workspace();
    let catalog = root.join("catalog.json");
    let profile = root.join("profile.json");
    if !catalog_missing {
        write_utf8(&catalog, b"[]");
    }

    let config = RecommendConfig {
        profile: Some(profile),
        ..config_for(catalog)
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = workspace();
    let catalog = root.join("catalog.json");
    std::fs::create_dir(catalog.as_std_path()).expect("catalog directory");

    let err = config_for(catalog.clone())
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(path, catalog);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_reads_demo_catalog() {
    let catalog = load_catalog(&demo_catalog()).expect("demo catalog should decode");
    assert_eq!(catalog.len(), 8);
}

#[rstest]
fn load_catalog_rejects_unknown_categories() {
    let (_tmp, root) = workspace();
    let path = root.join("catalog.json");
    write_utf8(
        &path,
        br#"[{"id": 1, "name": "Chess Club", "category": "board games"}]"#,
    );

    let err = load_catalog(&path).expect_err("unknown category should error");
    match err {
        CliError::ParseCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_profile_skips_non_string_entries() {
    let (_tmp, root) = workspace();
    let path = root.join("profile.json");
    write_utf8(
        &path,
        br#"{"interests": ["Dance", 7, null], "skills": ["Figma"]}"#,
    );

    let profile = load_profile(&path).expect("profile should decode");
    assert_eq!(profile.interests(), ["dance"]);
    assert_eq!(profile.skills(), Some(&["figma".to_owned()][..]));
    assert!(profile.role_goals().is_none());
}

#[rstest]
fn load_profile_reports_open_errors() {
    let (_tmp, root) = workspace();
    let path = root.join("absent.json");

    let err = load_profile(&path).expect_err("missing profile should error");
    match err {
        CliError::OpenInput { field, path: reported, .. } => {
            assert_eq!(field, ARG_PROFILE);
            assert_eq!(reported, path);
        }
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
fn execute_recommend_merges_stored_and_request_interests() {
    let (_tmp, root) = workspace();
    let profile = root.join("profile.json");
    write_utf8(&profile, br#"{"interests": ["dance"]}"#);

    let config = RecommendConfig {
        profile: Some(profile),
        interests: vec!["Art".to_owned(), "DANCE".to_owned()],
        options: RankOptions::default().matched_only(),
        ..config_for(demo_catalog())
    };
    let response = execute_recommend(&config).expect("recommend should succeed");

    assert_eq!(response.interests, ["dance", "art"]);
    assert_eq!(response.count, response.societies.len());
    let names: Vec<_> = response
        .societies
        .iter()
        .map(|entry| entry.society.name.as_str())
        .collect();
    assert_eq!(names, ["Art Society", "Dance X", "Dance Y", "Nebula"]);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "catalog": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file.json",
            "limit": 4,
            "skill_weight": 6,
        }),
        None,
    );
    composer.push_environment(json!({
        "catalog": "from-env.json",
    }));
    composer.push_cli(json!({
        "limit": 2,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.options.limit, Some(2));
    assert_eq!(config.weights.skill, 6);
    assert_eq!(config.weights.role, MatchWeights::default().role);
}

fn parse_recommend(argv: &[&str]) -> RecommendArgs {
    let cli = Cli::try_parse_from(argv.iter().copied()).expect("arguments should parse");
    match cli.command {
        Command::Recommend(args) => args,
    }
}

/// Serialise parsed arguments into a CLI layer, dropping unset options.
fn cli_layer(args: &RecommendArgs) -> serde_json::Value {
    let mut layer = serde_json::to_value(args).expect("serialise cli layer");
    if let Some(fields) = layer.as_object_mut() {
        fields.retain(|_, value| !value.is_null());
    }
    layer
}

#[rstest]
#[case::flag_absent(&["society-match", "recommend"], true)]
#[case::flag_present(&["society-match", "recommend", "--matched-only"], true)]
fn matched_only_from_file_survives_cli_layer(#[case] argv: &[&str], #[case] expected: bool) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let args = parse_recommend(argv);
    let layer = cli_layer(&args);
    assert!(layer.get("interest").is_none());

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file.json",
            "matched_only": true,
        }),
        None,
    );
    composer.push_cli(layer);

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.options.matched_only, expected);
}

#[rstest]
fn matched_only_defaults_to_false_without_any_layer() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let args = parse_recommend(&["society-match", "recommend"]);
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "catalog": "from-env.json" }));
    composer.push_cli(cli_layer(&args));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert!(!config.options.matched_only);
}
