//! The result aggregate: the sole externally visible artifact of a parse.

use indexmap::IndexMap;

use crate::base::{ConfigItem, EncodingTag, Guid};
use crate::error::SolutionError;
use crate::model::{
    LinkedDependency, LoadedProject, NestedProject, ProjectConfigEntry, ProjectDependency,
    ProjectIdentity, ProjectItemCfg, Section,
};

/// Everything one parse produced: committed sections, typed entity
/// collections, derived cross-reference indices, defaults, and the untracked
/// side channel. Immutable to external readers once returned.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    pub source_name: String,
    pub encoding: EncodingTag,
    pub format_version: Option<String>,

    /// Project entries in declaration order.
    pub projects: Vec<ProjectIdentity>,
    /// Solution-level configuration pairs in declaration order.
    pub solution_configs: Vec<ConfigItem>,
    /// Project-level configuration entries in declaration order.
    pub project_configs: Vec<ProjectConfigEntry>,
    pub nested_projects: Vec<NestedProject>,
    pub dependencies: Vec<ProjectDependency>,

    /// Solution config → matching project config entries, keyed in solution
    /// declaration order.
    pub config_index: IndexMap<ConfigItem, Vec<ProjectConfigEntry>>,
    /// Composite join rows; outer order follows solution configs, inner order
    /// follows project config declaration order.
    pub project_item_configs: Vec<ProjectItemCfg>,
    /// Selected default configuration/platform pair; `None` only when the
    /// source declared zero solution configurations.
    pub default_config: Option<ConfigItem>,

    /// File-derived key/value properties, overridden by the selected defaults
    /// under `Configuration` and `Platform`.
    pub properties: IndexMap<String, String>,

    /// Flat registry of every committed section in commit order.
    pub sections: Vec<Section>,
    /// Comment lines consumed by the ignore-control handler.
    pub comments: Vec<String>,
    /// Lines no handler claimed, verbatim and in original order.
    pub untracked: Vec<String>,

    /// Referenced projects materialized by the loader collaborator, when the
    /// requested scope asked for them.
    pub loaded_projects: Vec<LoadedProject>,
    pub linked_dependencies: Vec<LinkedDependency>,

    /// Failures recovered in lenient mode, in occurrence order.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub failures: Vec<SolutionError>,
}

impl Solution {
    /// Look up a project identity by GUID.
    pub fn project_by_guid(&self, guid: &Guid) -> Option<&ProjectIdentity> {
        self.projects.iter().find(|p| &p.guid == guid)
    }

    /// Project configuration entries matching a solution-level pair, in
    /// declaration order. Empty when the pair is unknown.
    pub fn configs_for(&self, solution_config: &ConfigItem) -> &[ProjectConfigEntry] {
        self.config_index
            .get(solution_config)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Export the aggregate as pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
