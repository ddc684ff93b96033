//! End-to-end parses over realistic solution text, including the loader and
//! linker collaborators and on-disk sources.

use std::io::Write;

use solv::base::{ConfigItem, EncodingTag, Guid};
use solv::error::SolutionError;
use solv::model::{LoadDetail, LoadedProject, ProjectIdentity};
use solv::parser::SlnParser;
use solv::project::{GuidLinker, ReferencedProjectLoader, ScopeItems, SolutionSource};
use solv::{parse_file, parse_str};

use crate::helpers::source_fixtures as fx;

fn guid(text: &str) -> Guid {
    Guid::parse(text).unwrap()
}

#[test]
fn test_basic_solution_end_to_end() {
    let solution = parse_str("basic.sln", fx::BASIC_SLN, ScopeItems::default()).unwrap();

    assert_eq!(solution.source_name, "basic.sln");
    assert_eq!(solution.encoding, EncodingTag::Utf8);
    assert_eq!(solution.format_version.as_deref(), Some("12.00"));

    let names: Vec<&str> = solution.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["App", "Lib", "Folder"]);
    let app = solution.project_by_guid(&guid(fx::APP_GUID)).unwrap();
    assert_eq!(app.path, r"App\App.csproj");

    assert_eq!(
        solution.solution_configs,
        vec![
            ConfigItem::new("Debug", "Any CPU"),
            ConfigItem::new("Release", "Any CPU"),
        ]
    );

    // One entry per ActiveCfg declaration; Build.0 only flips the flag.
    assert_eq!(solution.project_configs.len(), 4);
    let app_release = solution
        .project_configs
        .iter()
        .find(|e| {
            e.project_guid == guid(fx::APP_GUID) && e.solution_config.configuration == "Release"
        })
        .unwrap();
    assert!(!app_release.build_enabled);
    let app_debug = solution
        .project_configs
        .iter()
        .find(|e| {
            e.project_guid == guid(fx::APP_GUID) && e.solution_config.configuration == "Debug"
        })
        .unwrap();
    assert!(app_debug.build_enabled);

    assert_eq!(solution.dependencies.len(), 1);
    assert_eq!(solution.dependencies[0].project, guid(fx::APP_GUID));
    assert_eq!(solution.dependencies[0].depends_on, vec![guid(fx::LIB_GUID)]);

    assert_eq!(solution.nested_projects.len(), 1);
    assert_eq!(solution.nested_projects[0].child, guid(fx::LIB_GUID));
    assert_eq!(solution.nested_projects[0].parent, guid(fx::FOLDER_GUID));

    assert_eq!(
        solution.default_config,
        Some(ConfigItem::new("Debug", "Any CPU"))
    );
    assert_eq!(solution.config_index.len(), 2);
    assert_eq!(
        solution
            .configs_for(&ConfigItem::new("Debug", "Any CPU"))
            .len(),
        2
    );
    assert_eq!(solution.project_item_configs.len(), 4);

    assert_eq!(solution.properties["VisualStudioVersion"], "17.0.31903.59");
    assert_eq!(
        solution.properties["MinimumVisualStudioVersion"],
        "10.0.40219.1"
    );
    assert_eq!(solution.properties["HideSolutionNode"], "FALSE");
    assert_eq!(
        solution.properties["SolutionGuid"],
        "{99999999-9999-9999-9999-999999999999}"
    );
    assert_eq!(solution.properties["Configuration"], "Debug");
    assert_eq!(solution.properties["Platform"], "Any CPU");

    assert!(solution.untracked.is_empty());
    assert!(solution.failures.is_empty());
}

#[test]
fn test_duplicate_guid_last_declaration_wins() {
    let solution = parse_str("dup.sln", fx::DUPLICATE_GUID, ScopeItems::parsed()).unwrap();
    assert_eq!(solution.projects.len(), 1);
    assert_eq!(solution.projects[0].name, "Second");
    assert_eq!(solution.projects[0].path, r"Second\Second.csproj");
}

#[test]
fn test_config_entry_without_project_joins_as_none() {
    let solution = parse_str("ghost.sln", fx::GHOST_PROJECT_CONFIG, ScopeItems::parsed()).unwrap();

    assert_eq!(solution.project_item_configs.len(), 2);
    let ghost_row = solution
        .project_item_configs
        .iter()
        .find(|row| row.project_config_entry.project_guid == guid(fx::GHOST_GUID))
        .unwrap();
    assert!(ghost_row.project_item.is_none());
    let app_row = solution
        .project_item_configs
        .iter()
        .find(|row| row.project_config_entry.project_guid == guid(fx::APP_GUID))
        .unwrap();
    assert_eq!(app_row.project_item.as_ref().unwrap().name, "App");
}

#[test]
fn test_scope_without_env_skips_cross_reference() {
    let scope = ScopeItems::PROJECTS | ScopeItems::SOLUTION_CONFIGS | ScopeItems::PROJECT_CONFIGS;
    let solution = parse_str("basic.sln", fx::BASIC_SLN, scope).unwrap();

    assert!(solution.config_index.is_empty());
    assert!(solution.project_item_configs.is_empty());
    // Default selection needs no join and still runs.
    assert_eq!(
        solution.default_config,
        Some(ConfigItem::new("Debug", "Any CPU"))
    );
}

struct MinimalLoader;

impl ReferencedProjectLoader for MinimalLoader {
    fn load(
        &mut self,
        projects: &[ProjectIdentity],
        _scope: ScopeItems,
    ) -> Result<Vec<LoadedProject>, SolutionError> {
        Ok(projects
            .iter()
            .map(|identity| LoadedProject {
                identity: identity.clone(),
                detail: LoadDetail::Minimal,
            })
            .collect())
    }
}

#[test]
fn test_loader_and_linker_collaboration() {
    let scope = ScopeItems::default() | ScopeItems::LOAD_MINIMAL;
    let solution = SlnParser::new()
        .with_loader(Box::new(MinimalLoader))
        .with_linker(Box::new(GuidLinker))
        .parse(SolutionSource::from_text("basic.sln", fx::BASIC_SLN), scope)
        .unwrap();

    assert_eq!(solution.loaded_projects.len(), 3);
    assert!(
        solution
            .loaded_projects
            .iter()
            .all(|p| p.detail == LoadDetail::Minimal)
    );

    assert_eq!(solution.linked_dependencies.len(), 1);
    assert_eq!(solution.linked_dependencies[0].project, guid(fx::APP_GUID));
    // Lib is the second loaded project.
    assert_eq!(solution.linked_dependencies[0].resolved, vec![1]);
}

#[test]
fn test_collaborators_are_skipped_outside_load_scope() {
    let solution = SlnParser::new()
        .with_loader(Box::new(MinimalLoader))
        .with_linker(Box::new(GuidLinker))
        .parse(
            SolutionSource::from_text("basic.sln", fx::BASIC_SLN),
            ScopeItems::parsed(),
        )
        .unwrap();

    assert!(solution.loaded_projects.is_empty());
    assert!(solution.linked_dependencies.is_empty());
}

#[test]
fn test_parse_file_detects_utf8_bom() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xEF, 0xBB, 0xBF]).unwrap();
    file.write_all(fx::BASIC_SLN.as_bytes()).unwrap();
    file.flush().unwrap();

    let solution = parse_file(file.path(), ScopeItems::parsed()).unwrap();
    assert_eq!(solution.encoding, EncodingTag::Utf8Bom);
    assert_eq!(solution.format_version.as_deref(), Some("12.00"));
    assert_eq!(solution.projects.len(), 3);
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let result = parse_file("/nonexistent/never.sln", ScopeItems::parsed());
    assert_eq!(
        result.unwrap_err().kind(),
        solv::error::FailureKind::Io
    );
}
