//! Lifecycle executor
//!
//! The configuration lifecycle is an explicit ordered list of named phases
//! run by a small sequential executor, instead of convention-based method
//! discovery. Phases communicate through a shared [`Context`]:
//!
//! 1. `requirements` — resolve the declared dependency set into a
//!    [`PackageTable`]. Resolution completes fully before staging begins.
//! 2. `generate` — plan and execute the staging copy rules against the
//!    resolved table, then emit declared generator files.
//! 3. `layout` — record the directory mapping. The mapping itself is a pure
//!    function of the manifest and project root, so `generate` may compute
//!    it early for the generators root without a data dependency on this
//!    phase.

use std::path::{Path, PathBuf};

use crate::error::{Result, fs};
use crate::generators;
use crate::layout::LayoutDirs;
use crate::manifest::Manifest;
use crate::registry::{PackageTable, Registry};
use crate::stage::{self, StagePlan, StageReport};

/// A named lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Requirements,
    Generate,
    Layout,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Requirements => "requirements",
            Phase::Generate => "generate",
            Phase::Layout => "layout",
        }
    }
}

/// Fixed phase order for a configuration run
pub const PHASES: [Phase; 3] = [Phase::Requirements, Phase::Generate, Phase::Layout];

/// State threaded through the lifecycle phases of one configuration run
#[derive(Debug)]
pub struct Context<'a> {
    pub manifest: &'a Manifest,
    pub registry: &'a Registry,
    pub project_root: &'a Path,

    /// When set, `generate` plans staging but writes nothing
    pub dry_run: bool,

    /// Output of `requirements`
    pub table: Option<PackageTable>,

    /// Outputs of `generate`
    pub plan: Option<StagePlan>,
    pub report: Option<StageReport>,
    pub generated: Vec<PathBuf>,

    /// Output of `layout`
    pub layout: Option<LayoutDirs>,
}

impl<'a> Context<'a> {
    pub fn new(manifest: &'a Manifest, registry: &'a Registry, project_root: &'a Path) -> Self {
        Self {
            manifest,
            registry,
            project_root,
            dry_run: false,
            table: None,
            plan: None,
            report: None,
            generated: Vec::new(),
            layout: None,
        }
    }

    fn layout_dirs(&self) -> LayoutDirs {
        self.manifest
            .layout
            .dirs(self.project_root, &self.manifest.build_type)
    }
}

/// Run all phases in order
pub fn run_all(ctx: &mut Context) -> Result<()> {
    for phase in PHASES {
        run_phase(phase, ctx)?;
    }
    Ok(())
}

/// Run a single phase, checking its preconditions
pub fn run_phase(phase: Phase, ctx: &mut Context) -> Result<()> {
    match phase {
        Phase::Requirements => {
            let table = ctx.registry.resolve(&ctx.manifest.requires)?;
            ctx.table = Some(table);
            Ok(())
        }
        Phase::Generate => {
            let table = ctx.table.as_ref().ok_or_else(|| {
                fs::io_error("generate phase requires a resolved package table")
            })?;

            let plan = stage::plan(&ctx.manifest.stage, table, ctx.project_root)?;
            if !ctx.dry_run {
                let report = stage::execute(&plan)?;
                let dirs = ctx.layout_dirs();
                ctx.generated = generators::emit(&ctx.manifest.generators, table, &dirs)?;
                ctx.report = Some(report);
            }
            ctx.plan = Some(plan);
            Ok(())
        }
        Phase::Layout => {
            ctx.layout = Some(ctx.layout_dirs());
            Ok(())
        }
    }
}
