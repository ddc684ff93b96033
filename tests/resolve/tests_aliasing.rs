//! Cross-reference joins: index keying, ordering contracts, and join rows.

use solv::base::{ConfigItem, Guid};
use solv::model::{ProjectConfigEntry, ProjectIdentity};
use solv::resolve::{build_config_index, build_join_rows};

fn entry(project_guid: Guid, configuration: &str) -> ProjectConfigEntry {
    let pair = ConfigItem::new(configuration, "Any CPU");
    ProjectConfigEntry {
        project_guid,
        solution_config: pair.clone(),
        project_config: pair,
        build_enabled: true,
    }
}

fn identity(guid: Guid, name: &str) -> ProjectIdentity {
    ProjectIdentity {
        guid,
        name: name.to_string(),
        path: format!("{name}/{name}.csproj"),
        project_type: Guid::new_unique(),
    }
}

#[test]
fn test_index_keys_follow_declaration_order() {
    let configs = vec![
        ConfigItem::new("Release", "Any CPU"),
        ConfigItem::new("Debug", "Any CPU"),
    ];
    let index = build_config_index(&configs, &[]);
    let keys: Vec<&ConfigItem> = index.keys().collect();
    assert_eq!(keys, vec![&configs[0], &configs[1]]);
}

#[test]
fn test_redeclared_pair_keeps_first_position() {
    let configs = vec![
        ConfigItem::new("Debug", "Any CPU"),
        ConfigItem::new("Release", "Any CPU"),
        ConfigItem::new("Debug", "Any CPU"),
    ];
    let index = build_config_index(&configs, &[]);
    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get_index(0).map(|(k, _)| k),
        Some(&ConfigItem::new("Debug", "Any CPU"))
    );
}

#[test]
fn test_matching_is_structural_and_case_sensitive() {
    let guid = Guid::new_unique();
    let configs = vec![ConfigItem::new("Debug", "Any CPU")];
    let entries = vec![entry(guid, "Debug"), entry(guid, "debug")];
    let index = build_config_index(&configs, &entries);
    assert_eq!(index[&configs[0]].len(), 1);
}

#[test]
fn test_join_rows_iterate_solution_configs_outer() {
    let p1 = Guid::new_unique();
    let p2 = Guid::new_unique();
    let configs = vec![
        ConfigItem::new("Debug", "Any CPU"),
        ConfigItem::new("Release", "Any CPU"),
    ];
    let entries = vec![
        entry(p1, "Debug"),
        entry(p1, "Release"),
        entry(p2, "Debug"),
        entry(p2, "Release"),
    ];
    let projects = vec![identity(p1, "First"), identity(p2, "Second")];

    let index = build_config_index(&configs, &entries);
    let rows = build_join_rows(&index, &projects);

    // Debug rows first, each bucket in project declaration order.
    let order: Vec<(String, Guid)> = rows
        .iter()
        .map(|row| {
            (
                row.solution_config.configuration.clone(),
                row.project_config_entry.project_guid,
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("Debug".to_string(), p1),
            ("Debug".to_string(), p2),
            ("Release".to_string(), p1),
            ("Release".to_string(), p2),
        ]
    );
    assert!(rows.iter().all(|row| row.project_item.is_some()));
}

#[test]
fn test_missing_project_identity_yields_none_row() {
    let declared = Guid::new_unique();
    let ghost = Guid::new_unique();
    let configs = vec![ConfigItem::new("Debug", "Any CPU")];
    let entries = vec![entry(declared, "Debug"), entry(ghost, "Debug")];
    let projects = vec![identity(declared, "App")];

    let index = build_config_index(&configs, &entries);
    let rows = build_join_rows(&index, &projects);

    assert_eq!(rows.len(), 2);
    assert!(rows[0].project_item.is_some());
    assert!(rows[1].project_item.is_none());
    assert_eq!(rows[1].project_config_entry.project_guid, ghost);
}

#[test]
fn test_unmatched_solution_config_has_empty_bucket() {
    let configs = vec![
        ConfigItem::new("Debug", "Any CPU"),
        ConfigItem::new("Release", "x64"),
    ];
    let entries = vec![entry(Guid::new_unique(), "Debug")];
    let index = build_config_index(&configs, &entries);
    assert!(index[&configs[1]].is_empty());
}
