//! Strict/lenient exception policy exercised through full parses.

use solv::base::ConfigItem;
use solv::error::FailureKind;
use solv::parser::SlnParser;
use solv::policy::{ExceptionPolicy, Recovery};
use solv::project::{ScopeItems, SolutionSource};

use crate::helpers::source_fixtures as fx;

fn source(text: &str) -> SolutionSource {
    SolutionSource::from_text("broken.sln", text)
}

#[test]
fn test_strict_mode_aborts_on_malformed_config_pair() {
    let result = SlnParser::new().parse(source(fx::MALFORMED_CONFIG), ScopeItems::parsed());
    let error = result.unwrap_err();
    assert_eq!(error.kind(), FailureKind::Malformed);
    let rendered = error.to_string();
    assert!(rendered.contains("broken.sln:4"), "got: {rendered}");
    assert!(rendered.contains("Oops"), "got: {rendered}");
}

#[test]
fn test_lenient_substitution_supplies_corrected_pair() {
    let mut policy = ExceptionPolicy::lenient();
    policy.register(
        |error| error.kind() == FailureKind::Malformed,
        |_| Recovery::Substitute("Debug|Any CPU".to_string()),
    );

    let solution = SlnParser::new()
        .with_policy(policy)
        .parse(source(fx::MALFORMED_CONFIG), ScopeItems::parsed())
        .unwrap();

    assert_eq!(
        solution.solution_configs,
        vec![
            ConfigItem::new("Debug", "Any CPU"),
            ConfigItem::new("Release", "Any CPU"),
        ]
    );
    assert_eq!(solution.failures.len(), 1);
    assert_eq!(solution.failures[0].kind(), FailureKind::Malformed);
}

#[test]
fn test_lenient_without_rule_skips_entry_and_logs() {
    let solution = SlnParser::new()
        .with_policy(ExceptionPolicy::lenient())
        .parse(source(fx::MALFORMED_CONFIG), ScopeItems::parsed())
        .unwrap();

    // The malformed entry is consumed but contributes nothing.
    assert_eq!(
        solution.solution_configs,
        vec![ConfigItem::new("Release", "Any CPU")]
    );
    assert!(solution.untracked.is_empty());
    assert_eq!(solution.failures.len(), 1);
}

#[test]
fn test_empty_stream_is_fatal_in_every_mode() {
    let result = SlnParser::new()
        .with_policy(ExceptionPolicy::lenient())
        .parse(source(""), ScopeItems::parsed());
    assert_eq!(result.unwrap_err().kind(), FailureKind::InvalidInvocation);
}

#[test]
fn test_blank_source_name_is_fatal() {
    let result = SlnParser::new().parse(
        SolutionSource::from_text("   ", fx::BASIC_SLN),
        ScopeItems::parsed(),
    );
    assert_eq!(result.unwrap_err().kind(), FailureKind::InvalidInvocation);
}
