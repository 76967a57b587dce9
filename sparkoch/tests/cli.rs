//! End-to-end tests of the command runners against the sample data

mod common;

use assert_matches::assert_matches;
use catalog::CatalogError;
use common::{TestEnv, FULL_ONBOARDING};
use onboarding::{FlowStatus, LocalStorageSink, LoggingNavigator, Onboarding, Route};
use sparkoch::{parse_script, run_actions};

#[test]
fn test_offer_search_sorted_by_price() {
    let env = TestEnv::new();
    let output = env
        .run(&["offers", "--query", "milch", "--sort", "price-asc"])
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("2 von 6 offers"), "{output}");
    assert!(lines[1].contains("Vollmilch"));
    assert!(lines[2].contains("Joghurt Natur"));
    assert!(output.contains("Vorschläge: Vollmilch 3,5%"));
}

#[test]
fn test_searches_are_remembered() {
    let env = TestEnv::new();
    env.run(&["offers", "--query", "milch"]).unwrap();
    env.run(&["recipes", "--query", "pasta"]).unwrap();
    env.run(&["stores"]).unwrap();

    let output = env.run(&["history"]).unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), vec!["pasta", "milch"]);
}

#[test]
fn test_unknown_sort_key_follows_policy() {
    let env = TestEnv::new();
    let err = env
        .run(&["--strict", "offers", "--sort", "cheapest"])
        .unwrap_err();
    assert_matches!(err.downcast_ref::<CatalogError>(), Some(CatalogError::InvalidSortKey { .. }));

    let output = env
        .run(&["--strict=false", "offers", "--sort", "cheapest"])
        .unwrap();
    assert!(output.lines().next().unwrap().contains("Sortierung: relevance"));
}

#[test]
fn test_malformed_range_is_rejected_under_lenient_policy() {
    let env = TestEnv::new();
    let err = env
        .run(&["--strict=false", "offers", "--filter", "price=cheap"])
        .unwrap_err();
    assert_matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::InvalidFilterValue { .. })
    );
}

#[test]
fn test_cooking_time_sort_is_unsupported_for_stores() {
    let env = TestEnv::new();
    let err = env.run(&["stores", "--sort", "time-asc"]).unwrap_err();
    assert_matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::UnsupportedSortKey { .. })
    );
}

#[test]
fn test_pages_through_results() {
    let env = TestEnv::new();
    let output = env.run(&["--page-size", "4", "offers"]).unwrap();
    assert_eq!(output.lines().filter(|line| line.starts_with('#')).count(), 4);
    assert!(output.contains("--page 2"));

    let output = env.run(&["--page-size", "4", "offers", "--page", "2"]).unwrap();
    assert_eq!(output.lines().filter(|line| line.starts_with('#')).count(), 2);
    assert!(!output.contains("--page 3"));
}

#[test]
fn test_counts_per_price_bucket() {
    let env = TestEnv::new();
    let output = env.run(&["counts", "offers", "--category", "price"]).unwrap();
    let bucket = output
        .lines()
        .find(|line| line.trim_start().starts_with("0-5"))
        .expect("0-5 bucket listed");
    assert!(bucket.trim_end().ends_with('6'), "{bucket}");
}

#[test]
fn test_counts_reject_unknown_category() {
    let env = TestEnv::new();
    let err = env.run(&["counts", "stores", "--category", "price"]).unwrap_err();
    assert_matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::UnknownFilterCategory { .. })
    );
}

#[test]
fn test_groups_start_with_nearest_store() {
    let env = TestEnv::new();
    let output = env.run(&["groups"]).unwrap();
    let headers: Vec<&str> = output.lines().filter(|line| !line.starts_with(' ')).collect();

    assert_eq!(headers.len(), 4);
    assert!(headers[0].starts_with("Aldi (0.5 km)"), "{output}");
}

#[test]
fn test_shopping_list_summary() {
    let env = TestEnv::new();
    let output = env.run(&["list"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Einkaufsliste: 6 Artikel, 2 erledigt");
    assert_eq!(lines[1], "REWE (3)");
    assert!(lines.last().unwrap().starts_with("Summe"));
}

#[test]
fn test_onboarding_script_persists_profile() {
    let env = TestEnv::new();
    let script = env.write_script("onboarding.json", FULL_ONBOARDING);

    let output = env.run(&["onboard", "--script", &script]).unwrap();
    assert!(output.contains("Willkommen, Anna Schmidt!"), "{output}");
    assert!(output.contains("Status: Complete"));
    assert!(output.contains("Navigation: /dashboard-home"));

    let stored = LocalStorageSink::new(env.storage()).load().unwrap().unwrap();
    assert_eq!(stored.data.weekly_budget, 120);
    assert!(stored.is_onboarded);

    let profile = env.run(&["profile"]).unwrap();
    assert!(profile.contains("\"firstName\": \"Anna\""));
    assert!(!profile.contains("sicher123"));
}

#[test]
fn test_script_reports_rejected_actions_and_continues() {
    let env = TestEnv::new();
    let actions = parse_script(r#"["next", {"set": {"field": "searchRadius", "value": 40}}, "skip", "next"]"#).unwrap();
    let mut flow = Onboarding::new(LocalStorageSink::new(env.storage()), LoggingNavigator::new());
    let mut out = Vec::new();

    let report = run_actions(&mut flow, &actions, &mut out).unwrap();

    assert_eq!(report.applied, 1);
    assert_eq!(report.rejected, 3);
    assert_eq!(report.status, FlowStatus::Skipped);
    assert_eq!(flow.navigator().visited(), vec![Route::Dashboard]);
    assert!(LocalStorageSink::new(env.storage()).load().unwrap().is_none());

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().filter(|line| line.starts_with('✗')).count(), 3);
}

#[test]
fn test_profile_without_onboarding() {
    let env = TestEnv::new();
    let output = env.run(&["profile"]).unwrap();
    assert!(output.starts_with("Kein Profil gespeichert"));
}

#[test]
fn test_config_defaults_to_valid_storage() {
    let env = TestEnv::new();
    assert!(env.config().validate().is_ok());
}
