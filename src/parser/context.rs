//! The shared parsing context threaded through every handler call.
//!
//! The engine is the sole owner and sequences all access; handlers receive
//! controlled references per call. Staged mutation during a consume attempt
//! goes through the transaction facade (`begin`/`stage`/`commit`/`rollback`);
//! typed collections absorb section payloads only at commit time, which is
//! what makes per-attempt rollback exact.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::base::{ConfigItem, EncodingTag, RawLine};
use crate::error::SolutionError;
use crate::model::{
    NestedProject, ProjectConfigEntry, ProjectDependency, ProjectIdentity, Section, SectionData,
    SectionKind,
};
use crate::parser::handler::HandlerId;
use crate::parser::tracker::{SectionTracker, section_at};
use crate::policy::{ExceptionPolicy, Recovery};

/// Mutable state of one parse in flight.
pub struct ParseContext {
    pub source_name: String,
    pub encoding: EncodingTag,
    /// 1-based number of the line currently being dispatched.
    pub line_number: usize,

    pub tracker: SectionTracker,
    pub policy: ExceptionPolicy,

    pub format_version: Option<String>,
    pub solution_configs: Vec<ConfigItem>,
    pub projects: Vec<ProjectIdentity>,
    pub project_configs: Vec<ProjectConfigEntry>,
    pub nested_projects: Vec<NestedProject>,
    pub dependencies: Vec<ProjectDependency>,
    pub properties: IndexMap<String, String>,
    pub comments: Vec<String>,
    pub untracked: Vec<String>,
}

impl ParseContext {
    pub fn new(source_name: String, encoding: EncodingTag, policy: ExceptionPolicy) -> Self {
        Self {
            source_name,
            encoding,
            line_number: 0,
            tracker: SectionTracker::new(),
            policy,
            format_version: None,
            solution_configs: Vec::new(),
            projects: Vec::new(),
            project_configs: Vec::new(),
            nested_projects: Vec::new(),
            dependencies: Vec::new(),
            properties: IndexMap::new(),
            comments: Vec::new(),
            untracked: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Transaction facade
    // ------------------------------------------------------------------

    pub fn begin(&mut self, owner: Option<HandlerId>) {
        self.tracker.begin(owner);
    }

    /// Stage a single-line candidate section at the current line.
    pub fn stage(&mut self, kind: SectionKind, data: SectionData) {
        self.tracker.stage(section_at(kind, data, self.line_number));
    }

    /// Stage closing the innermost open block section.
    pub fn stage_close(&mut self) {
        self.tracker.stage_close();
    }

    pub fn commit(&mut self) {
        if let Some(data) = self.tracker.commit(self.line_number) {
            self.absorb(data);
        }
    }

    pub fn rollback(&mut self) {
        self.tracker.rollback();
    }

    // ------------------------------------------------------------------
    // Section state queries (for activation tests)
    // ------------------------------------------------------------------

    pub fn open_kind(&self) -> Option<SectionKind> {
        self.tracker.open_kind()
    }

    pub fn open_section(&self) -> Option<&Section> {
        self.tracker.open_section()
    }

    pub fn in_section(&self, kind: SectionKind) -> bool {
        self.tracker.in_section(kind)
    }

    // ------------------------------------------------------------------
    // Failure routing
    // ------------------------------------------------------------------

    /// Route a structural failure through the exception policy.
    pub fn recover(&mut self, error: SolutionError) -> Result<Recovery, SolutionError> {
        self.policy.handle(error)
    }

    /// Build a malformed-construct error for the current line.
    pub fn malformed(&self, construct: &'static str, line: &RawLine) -> SolutionError {
        SolutionError::malformed(
            self.source_name.clone(),
            self.line_number,
            construct,
            line.trimmed(),
        )
    }

    // ------------------------------------------------------------------
    // Commit-time absorption into the typed collections
    // ------------------------------------------------------------------

    fn absorb(&mut self, data: SectionData) {
        match data {
            SectionData::Block => {}
            SectionData::FormatVersion(version) => self.format_version = Some(version),
            SectionData::Property { key, value } => {
                self.properties.insert(key, value);
            }
            SectionData::Project(identity) => self.absorb_project(identity),
            SectionData::Dependency {
                project,
                depends_on,
            } => self.absorb_dependency(project, depends_on),
            SectionData::SolutionConfig(item) => self.solution_configs.push(item),
            SectionData::ProjectConfig(entry) => self.project_configs.push(entry),
            SectionData::ProjectConfigBuild {
                project,
                solution_config,
            } => {
                let found = self
                    .project_configs
                    .iter_mut()
                    .find(|e| e.project_guid == project && e.solution_config == solution_config);
                match found {
                    Some(entry) => entry.build_enabled = true,
                    None => debug!(%project, %solution_config, "Build.0 without ActiveCfg"),
                }
            }
            SectionData::NestedProject(nested) => self.nested_projects.push(nested),
        }
    }

    fn absorb_project(&mut self, identity: ProjectIdentity) {
        match self.projects.iter_mut().find(|p| p.guid == identity.guid) {
            Some(existing) => {
                warn!(guid = %identity.guid, name = %identity.name,
                    "duplicate project GUID, later declaration overwrites");
                *existing = identity;
            }
            None => self.projects.push(identity),
        }
    }

    fn absorb_dependency(&mut self, project: crate::base::Guid, depends_on: crate::base::Guid) {
        match self.dependencies.iter_mut().find(|d| d.project == project) {
            Some(record) => record.depends_on.push(depends_on),
            None => self.dependencies.push(ProjectDependency {
                project,
                depends_on: vec![depends_on],
            }),
        }
    }
}
