//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{demo_catalog, workspace, write_utf8};
use super::*;
use crate::recommend::{RecommendResponse, run_recommend_with};
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use society_match_core::MatchReason;
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RecommendWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    catalog: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            root,
            catalog: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.into_iter().map(str::to_owned));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["society-match".to_owned(), "recommend".to_owned()];
        if let Some(catalog) = self.catalog.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), catalog.as_str().to_owned()]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn response(&self) -> RecommendResponse {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON recommend response")
    }

    fn error_matches(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("the demo catalog")]
fn the_demo_catalog(#[from(world)] world: &RecommendWorld) {
    world.catalog.replace(Some(demo_catalog()));
}

#[given("I omit the catalog path")]
fn omit_catalog_path(#[from(world)] world: &RecommendWorld) {
    world.catalog.replace(None);
}

#[given("a catalog containing an unknown category")]
fn catalog_with_unknown_category(#[from(world)] world: &RecommendWorld) {
    let path = world.root.join("catalog.json");
    write_utf8(
        &path,
        br#"[{"id": 1, "name": "Chess Club", "category": "Art & Culture"}]"#,
    );
    world.catalog.replace(Some(path));
}

#[given("a stored profile with the skill Figma and the goal Curator")]
fn stored_profile(#[from(world)] world: &RecommendWorld) {
    let path = world.root.join("profile.json");
    write_utf8(&path, br#"{"skills": ["Figma"], "roleGoals": ["Curator"]}"#);
    world.push_args([&format!("--{ARG_PROFILE}"), path.as_str()]);
}

#[given("I pass the interest Dance")]
fn pass_interest_dance(#[from(world)] world: &RecommendWorld) {
    world.push_args([&format!("--{ARG_INTEREST}"), "Dance"]);
}

#[given("I pass the interest Art")]
fn pass_interest_art(#[from(world)] world: &RecommendWorld) {
    world.push_args([&format!("--{ARG_INTEREST}"), "Art"]);
}

#[given("I only want matched societies")]
fn only_matched(#[from(world)] world: &RecommendWorld) {
    world.push_args([&format!("--{ARG_MATCHED_ONLY}")]);
}

#[given("I limit the output to one society")]
fn limit_to_one(#[from(world)] world: &RecommendWorld) {
    world.push_args([&format!("--{ARG_LIMIT}"), "1"]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
}

#[then("the output lists Dance X then Dance Y")]
fn output_lists_dance_societies(#[from(world)] world: &RecommendWorld) {
    let response = world.response();
    let names: Vec<_> = response
        .societies
        .iter()
        .map(|entry| entry.society.name.as_str())
        .collect();
    assert_eq!(names, ["Dance X", "Dance Y"]);
    assert_eq!(response.count, 2);
    assert_eq!(response.interests, ["dance"]);
}

#[then("the only society is Art Society with a score of sixteen")]
fn only_art_society(#[from(world)] world: &RecommendWorld) {
    let response = world.response();
    let [entry] = response.societies.as_slice() else {
        panic!("expected exactly one society, found {}", response.count);
    };
    assert_eq!(entry.society.name, "Art Society");
    assert_eq!(entry.score, 16);
    assert_eq!(
        entry.match_reasons.as_slice(),
        [
            MatchReason::Category("art".to_owned()),
            MatchReason::Interest("art".to_owned()),
            MatchReason::Skill("Figma".to_owned()),
            MatchReason::Role("Curator".to_owned()),
        ]
    );
}

#[then("the command fails because the catalog path is missing")]
fn command_fails_missing_catalog(#[from(world)] world: &RecommendWorld) {
    world.error_matches(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the catalog JSON is invalid")]
fn command_fails_invalid_catalog(#[from(world)] world: &RecommendWorld) {
    world.error_matches(|error| match error {
        CliError::ParseCatalog { .. } => {}
        other => panic!("expected ParseCatalog, found {other:?}"),
    });
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(
    recommend_dance_visitor,
    "ranking the demo catalog for a dance visitor"
);
register_recommend_scenario!(
    recommend_merges_stored_profile,
    "merging a stored profile with request interests"
);
register_recommend_scenario!(
    recommend_missing_catalog,
    "rejecting a missing catalog path"
);
register_recommend_scenario!(
    recommend_unknown_category,
    "rejecting catalogs with unknown categories"
);
