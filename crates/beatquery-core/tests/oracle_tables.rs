//! The shipped oracle tables and the generated key grid, checked end to end

use beatquery_core::oracle::{check_set, CheckReport};
use beatquery_core::{parse_search_query, BpmRange, Key, Tokenizer};
use beatquery_fixtures::{builtin, generate, FixtureSet};
use pretty_assertions::assert_eq;

fn assert_all_pass(report: &CheckReport) {
    assert_eq!(report.failures, vec![], "{:?} fixtures failed", report.kind);
    assert_eq!(report.passed, report.total);
}

#[test]
fn bpm_table_passes() {
    let set = FixtureSet::Bpm(builtin::bpm_cases().unwrap());
    let report = check_set(&Tokenizer::default(), &set);
    assert!(report.total > 50);
    assert_all_pass(&report);
}

#[test]
fn keyword_table_passes() {
    let set = FixtureSet::Keywords(builtin::keyword_cases().unwrap());
    assert_all_pass(&check_set(&Tokenizer::default(), &set));
}

#[test]
fn generated_key_grid_passes() {
    let set = FixtureSet::Keys(generate::key_cases());
    let report = check_set(&Tokenizer::default(), &set);
    assert_eq!(report.total, 609);
    assert_all_pass(&report);
}

fn keys(names: &[&str]) -> Vec<Key> {
    names.iter().map(|name| name.parse().unwrap()).collect()
}

fn range(low: u16, high: u16) -> BpmRange {
    BpmRange::new(low, high).unwrap()
}

#[test]
fn literal_scenarios() {
    assert_eq!(parse_search_query("160").bpm_values, vec![160]);
    assert_eq!(parse_search_query("150-170").bpm_ranges, vec![range(150, 170)]);

    let collapsed = parse_search_query("130-130");
    assert_eq!(collapsed.bpm_values, vec![130]);
    assert!(collapsed.bpm_ranges.is_empty());

    assert!(parse_search_query("170-150").is_empty());

    let one_sided = parse_search_query("150 -170");
    assert_eq!(one_sided.bpm_values, vec![150]);
    assert!(one_sided.bpm_ranges.is_empty());
    assert!(one_sided.keywords.is_empty());

    assert_eq!(parse_search_query("150 - 170").bpm_ranges, vec![range(150, 170)]);

    let mixed = parse_search_query("90-110 120 130bpm");
    assert_eq!(mixed.bpm_values, vec![120, 130]);
    assert_eq!(mixed.bpm_ranges, vec![range(90, 110)]);

    let pierre = parse_search_query("pierre C#m 160");
    assert_eq!(pierre.keywords, vec!["pierre"]);
    assert_eq!(pierre.keys, keys(&["Csmin"]));
    assert_eq!(pierre.bpm_values, vec![160]);

    assert_eq!(parse_search_query("A").keys, keys(&["Amaj", "Amin"]));
    assert_eq!(parse_search_query("C# maj").keys, keys(&["Csmaj"]));
    assert!(parse_search_query("999").is_empty());
}

#[test]
fn mixed_query_keeps_discovery_order() {
    let result = parse_search_query("Dark trap Eb minor 140 bpm g 90-100 dark");
    assert_eq!(result.keywords, vec!["dark", "trap", "dark"]);
    assert_eq!(result.keys, keys(&["Ebmin", "Gmaj", "Gmin"]));
    assert_eq!(result.bpm_values, vec![140]);
    assert_eq!(result.bpm_ranges, vec![range(90, 100)]);
}

#[test]
fn wider_band_from_config() {
    let config = beatquery_core::TokenizerConfig::from_toml(
        r#"
        [tokenizer]
        min_bpm = 1
        max_bpm = 999
        "#,
    )
    .unwrap();
    let result = Tokenizer::new(&config).parse("8 999 1000");
    assert_eq!(result.bpm_values, vec![8, 999]);
    assert!(result.keywords.is_empty());
}
