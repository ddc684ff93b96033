//! Default configuration/platform selection and the derived global
//! properties.

use indexmap::IndexMap;
use rstest::rstest;

use solv::base::ConfigItem;
use solv::resolve::{default_config_pair, global_properties};

fn pairs(declared: &[(&str, &str)]) -> Vec<ConfigItem> {
    declared
        .iter()
        .map(|(configuration, platform)| ConfigItem::new(*configuration, *platform))
        .collect()
}

#[rstest]
#[case::single_pair(&[("Debug", "x64")], "Debug", "x64")]
#[case::debug_preferred_over_first(&[("Release", "x64"), ("Debug", "x86")], "Debug", "x64")]
#[case::any_cpu_preferred(&[("Release", "x64"), ("Release", "Any CPU")], "Release", "Any CPU")]
#[case::mixed_platforms_wins(&[("Release", "x64"), ("Debug", "Mixed Platforms")], "Debug", "Mixed Platforms")]
#[case::case_insensitive_halves(&[("Release", "x64"), ("debug", "any cpu")], "debug", "any cpu")]
#[case::fallback_to_first(&[("Checked", "ARM64"), ("Retail", "ARM")], "Checked", "ARM64")]
fn test_default_pair_selection(
    #[case] declared: &[(&str, &str)],
    #[case] configuration: &str,
    #[case] platform: &str,
) {
    let selected = default_config_pair(&pairs(declared)).unwrap();
    assert_eq!(selected.configuration, configuration);
    assert_eq!(selected.platform, platform);
}

#[test]
fn test_default_platform_fixed_priority_over_declaration_order() {
    let declared = pairs(&[("Debug", "Any CPU"), ("Debug", "Mixed Platforms")]);
    let selected = default_config_pair(&declared).unwrap();
    assert_eq!(selected.platform, "Mixed Platforms");
}

#[test]
fn test_no_declared_configs_yield_none() {
    assert!(default_config_pair(&[]).is_none());
}

#[test]
fn test_global_properties_override_file_values() {
    let mut file_properties = IndexMap::new();
    file_properties.insert("Configuration".to_string(), "Retail".to_string());
    file_properties.insert("HideSolutionNode".to_string(), "FALSE".to_string());

    let default = ConfigItem::new("Debug", "Any CPU");
    let properties = global_properties(&file_properties, Some(&default));

    assert_eq!(properties["Configuration"], "Debug");
    assert_eq!(properties["Platform"], "Any CPU");
    assert_eq!(properties["HideSolutionNode"], "FALSE");
}

#[test]
fn test_global_properties_without_default_pass_through() {
    let mut file_properties = IndexMap::new();
    file_properties.insert("VisualStudioVersion".to_string(), "17.0".to_string());
    let properties = global_properties(&file_properties, None);
    assert_eq!(properties.len(), 1);
    assert!(!properties.contains_key("Configuration"));
}
