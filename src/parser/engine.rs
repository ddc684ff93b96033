//! The parser engine: drives pre-processing, per-line dispatch across the
//! handler pipeline, post-processing, cross-referencing, and collaborator
//! invocation.
//!
//! Single forward pass, O(lines x handlers) dispatch cost; no line is
//! visited twice. Handler registration order is data and defines precedence
//! for the lifetime of one parser instance.

use tracing::debug;

use crate::base::RawLine;
use crate::error::SolutionError;
use crate::model::Solution;
use crate::parser::context::ParseContext;
use crate::parser::coordinator::{CoHandlerCoordinator, DispatchControl};
use crate::parser::handler::{HandlerId, LineControl, LineHandler};
use crate::parser::handlers::default_handlers;
use crate::policy::ExceptionPolicy;
use crate::project::loader::{DependencyLinker, ReferencedProjectLoader};
use crate::project::scope::ScopeItems;
use crate::project::source::SolutionSource;
use crate::resolve;

/// A single-parse engine instance owning its handler pipeline.
///
/// Handlers carry state across lines, so an engine is consumed by
/// [`SlnParser::parse`]; build a fresh one per parse (the construction cost
/// is a handful of allocations).
pub struct SlnParser {
    handlers: Vec<Box<dyn LineHandler>>,
    coordinator: CoHandlerCoordinator,
    policy: ExceptionPolicy,
    loader: Option<Box<dyn ReferencedProjectLoader>>,
    linker: Option<Box<dyn DependencyLinker>>,
}

impl SlnParser {
    /// Engine with the standard handler set and a strict policy.
    pub fn new() -> Self {
        let mut parser = Self::bare();
        for handler in default_handlers() {
            parser.register(handler);
        }
        parser
    }

    /// Engine with no handlers registered; callers compose their own
    /// pipeline via [`SlnParser::register`].
    pub fn bare() -> Self {
        Self {
            handlers: Vec::new(),
            coordinator: CoHandlerCoordinator::new(),
            policy: ExceptionPolicy::strict(),
            loader: None,
            linker: None,
        }
    }

    pub fn with_policy(mut self, policy: ExceptionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_loader(mut self, loader: Box<dyn ReferencedProjectLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn with_linker(mut self, linker: Box<dyn DependencyLinker>) -> Self {
        self.linker = Some(linker);
        self
    }

    /// Append a handler; registration order is a total precedence order.
    pub fn register(&mut self, handler: Box<dyn LineHandler>) {
        self.handlers.push(handler);
    }

    /// Run one full parse over the source.
    pub fn parse(
        self,
        source: SolutionSource,
        scope: ScopeItems,
    ) -> Result<Solution, SolutionError> {
        let SlnParser {
            mut handlers,
            mut coordinator,
            mut policy,
            mut loader,
            mut linker,
        } = self;

        // Invocation errors are reported through the policy before any line
        // is read; they are fatal in every mode.
        if let Err(invocation) = source.validate() {
            policy.handle(invocation)?;
        }

        let mut ctx = ParseContext::new(source.name().to_string(), source.encoding(), policy);

        for handler in handlers.iter_mut() {
            handler.pre_process(&mut ctx);
        }

        for line in source.lines() {
            ctx.line_number = line.number;
            coordinator.reset_line();
            let consumed = dispatch_line(&mut handlers, &mut coordinator, &mut ctx, &line)?;
            if !consumed {
                ctx.untracked.push(line.text);
            }
        }

        for handler in handlers.iter_mut() {
            handler.post_process(&mut ctx);
        }

        let resolved = resolve::resolve(&ctx, scope);
        let properties =
            resolve::global_properties(&ctx.properties, resolved.default_config.as_ref());
        debug!(
            projects = ctx.projects.len(),
            solution_configs = ctx.solution_configs.len(),
            join_rows = resolved.rows.len(),
            untracked = ctx.untracked.len(),
            "parse complete"
        );

        let ParseContext {
            source_name,
            encoding,
            line_number: _,
            tracker,
            mut policy,
            format_version,
            solution_configs,
            projects,
            project_configs,
            nested_projects,
            dependencies,
            properties: _,
            comments,
            untracked,
        } = ctx;

        let mut solution = Solution {
            source_name,
            encoding,
            format_version,
            projects,
            solution_configs,
            project_configs,
            nested_projects,
            dependencies,
            config_index: resolved.index,
            project_item_configs: resolved.rows,
            default_config: resolved.default_config,
            properties,
            sections: tracker.into_committed(),
            comments,
            untracked,
            loaded_projects: Vec::new(),
            linked_dependencies: Vec::new(),
            failures: policy.take_failures(),
        };

        if scope.intersects(ScopeItems::LOAD_MINIMAL | ScopeItems::LOAD_FULL) {
            if let Some(loader) = loader.as_mut() {
                solution.loaded_projects = loader.load(&solution.projects, scope)?;
            }
        }
        if scope.contains(ScopeItems::PROJECT_DEPENDENCIES)
            && !solution.loaded_projects.is_empty()
        {
            if let Some(linker) = linker.as_mut() {
                solution.linked_dependencies =
                    linker.link(&solution.dependencies, &solution.loaded_projects);
            }
        }

        Ok(solution)
    }
}

impl Default for SlnParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Offer one line to the pipeline. Returns whether any handler consumed it.
fn dispatch_line(
    handlers: &mut [Box<dyn LineHandler>],
    coordinator: &mut CoHandlerCoordinator,
    ctx: &mut ParseContext,
    line: &RawLine,
) -> Result<bool, SolutionError> {
    let mut consumed_any = false;

    for index in 0..handlers.len() {
        let id = index as HandlerId;
        let group = handlers[index].co_group();
        if !coordinator.admits(group) {
            continue;
        }
        if !handlers[index].condition(line) {
            continue;
        }

        let activated = handlers[index].is_activated(ctx);
        let transactional = handlers[index].line_control() == LineControl::Process;
        if transactional {
            ctx.begin(activated.then_some(id));
        }
        if !activated {
            if transactional {
                ctx.rollback();
            }
            continue;
        }

        let interpreted = match handlers[index].positioned(ctx, line) {
            Ok(interpreted) => interpreted,
            Err(error) => {
                if transactional {
                    ctx.rollback();
                }
                return Err(error);
            }
        };

        if transactional {
            if interpreted {
                ctx.commit();
            } else {
                ctx.rollback();
            }
        }

        if interpreted {
            consumed_any = true;
            match coordinator.record_consume(id, group) {
                DispatchControl::Stop => return Ok(true),
                DispatchControl::Continue => {}
            }
        }
    }

    Ok(consumed_any)
}
