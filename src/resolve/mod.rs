//! Cross-reference resolution ("aliasing").
//!
//! A post-pass over the accumulated entity collections that joins
//! solution-level configuration pairs with project-level configuration
//! entries and project identities into denormalized lookup structures, and
//! selects the default configuration/platform pair.
//!
//! Ordering is an externally observable contract: the index is keyed in
//! solution-config declaration order, and join rows iterate solution configs
//! outer, matched project entries inner, both in declaration order.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::base::{ConfigItem, Guid};
use crate::model::{ProjectConfigEntry, ProjectIdentity, ProjectItemCfg};
use crate::parser::context::ParseContext;
use crate::project::scope::ScopeItems;

/// Output of the resolver pass.
#[derive(Debug, Default)]
pub struct Resolved {
    pub index: IndexMap<ConfigItem, Vec<ProjectConfigEntry>>,
    pub rows: Vec<ProjectItemCfg>,
    pub default_config: Option<ConfigItem>,
}

/// Run both joins and default selection over the parse context. Joins run
/// only when the scope asks for cross-referenced data and both inputs are
/// present; absence of either input leaves the derived fields empty.
pub fn resolve(ctx: &ParseContext, scope: ScopeItems) -> Resolved {
    let mut resolved = Resolved {
        default_config: default_config_pair(&ctx.solution_configs),
        ..Resolved::default()
    };

    if scope.contains(ScopeItems::ENV)
        && !ctx.solution_configs.is_empty()
        && !ctx.project_configs.is_empty()
    {
        resolved.index = build_config_index(&ctx.solution_configs, &ctx.project_configs);
        resolved.rows = build_join_rows(&resolved.index, &ctx.projects);
        debug!(
            configs = resolved.index.len(),
            rows = resolved.rows.len(),
            "cross-reference resolution complete"
        );
    }
    resolved
}

/// Solution config → structurally equal project config entries, keyed in
/// solution declaration order.
pub fn build_config_index(
    solution_configs: &[ConfigItem],
    project_configs: &[ProjectConfigEntry],
) -> IndexMap<ConfigItem, Vec<ProjectConfigEntry>> {
    let mut index = IndexMap::with_capacity(solution_configs.len());
    for solution_config in solution_configs {
        // Re-declared pairs keep their first position.
        if index.contains_key(solution_config) {
            continue;
        }
        let matched: Vec<ProjectConfigEntry> = project_configs
            .iter()
            .filter(|entry| &entry.solution_config == solution_config)
            .cloned()
            .collect();
        index.insert(solution_config.clone(), matched);
    }
    index
}

/// One composite join row per (solution config, matched project entry),
/// with the project identity looked up by GUID. A missing identity yields
/// `project_item: None`, an explicit valid state.
pub fn build_join_rows(
    index: &IndexMap<ConfigItem, Vec<ProjectConfigEntry>>,
    projects: &[ProjectIdentity],
) -> Vec<ProjectItemCfg> {
    let by_guid: FxHashMap<Guid, &ProjectIdentity> = projects
        .iter()
        .map(|project| (project.guid, project))
        .collect();

    let mut rows = Vec::new();
    for (solution_config, entries) in index {
        for entry in entries {
            rows.push(ProjectItemCfg {
                project_item: by_guid.get(&entry.project_guid).map(|p| (*p).clone()),
                solution_config: solution_config.clone(),
                project_config_entry: entry.clone(),
            });
        }
    }
    rows
}

/// Select the default configuration/platform pair. The two halves are chosen
/// independently:
/// - configuration: first declared pair named `Debug` (case-insensitive),
///   else the first declared pair
/// - platform: first declared `Mixed Platforms`, else first `Any CPU`, else
///   the first declared pair
///
/// Returns `None` only when zero solution configurations were declared.
pub fn default_config_pair(solution_configs: &[ConfigItem]) -> Option<ConfigItem> {
    let configuration = solution_configs
        .iter()
        .find(|c| c.configuration.eq_ignore_ascii_case("Debug"))
        .or_else(|| solution_configs.first())?
        .configuration
        .clone();
    let platform = solution_configs
        .iter()
        .find(|c| c.platform.eq_ignore_ascii_case("Mixed Platforms"))
        .or_else(|| {
            solution_configs
                .iter()
                .find(|c| c.platform.eq_ignore_ascii_case("Any CPU"))
        })
        .or_else(|| solution_configs.first())?
        .platform
        .clone();
    Some(ConfigItem {
        configuration,
        platform,
    })
}

/// File-derived properties overridden by the selected defaults under the two
/// well-known property names.
pub fn global_properties(
    file_properties: &IndexMap<String, String>,
    default_config: Option<&ConfigItem>,
) -> IndexMap<String, String> {
    let mut properties = file_properties.clone();
    if let Some(default) = default_config {
        properties.insert("Configuration".to_string(), default.configuration.clone());
        properties.insert("Platform".to_string(), default.platform.clone());
    }
    properties
}
