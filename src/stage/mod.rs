//! Asset staging
//!
//! Staging copies integration-glue files out of resolved packages into the
//! local source tree. It runs in two passes: every copy rule is first
//! expanded into a concrete plan (source file, target file), and only once
//! the whole plan is valid are any files written. A rule whose source
//! directory is missing therefore aborts the step with zero partial writes.
//!
//! Copies preserve the relative directory structure under the matched
//! source directory and overwrite existing destination files. A destination
//! file whose contents already match the source is skipped, which keeps
//! repeated runs byte-identical and cheap.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::common::fs::copy_file;
use crate::error::{Result, stage};
use crate::hash::files_identical;
use crate::manifest::CopyRule;
use crate::path_utils::to_forward_slashes;
use crate::registry::PackageTable;

/// A single planned file copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAction {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Fully expanded staging plan; no filesystem writes have happened yet
#[derive(Debug, Clone, Default)]
pub struct StagePlan {
    pub actions: Vec<CopyAction>,
}

/// Outcome of executing a staging plan
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    /// Files written (new or overwritten)
    pub copied: Vec<PathBuf>,

    /// Files left untouched because destination contents already matched
    pub skipped: Vec<PathBuf>,
}

impl StageReport {
    pub fn total(&self) -> usize {
        self.copied.len() + self.skipped.len()
    }
}

/// Expand copy rules into a concrete plan against the resolved package table.
///
/// Fails without side effects if any rule's source directory is missing or
/// any pattern matches no files.
pub fn plan(rules: &[CopyRule], table: &PackageTable, source_root: &Path) -> Result<StagePlan> {
    let mut actions = Vec::new();

    for rule in rules {
        let package_dir = table.get(&rule.from).ok_or_else(|| {
            stage::source_missing(&rule.from, "package not present in resolved table")
        })?;

        let source_dir = if rule.subdir.is_empty() {
            package_dir.to_path_buf()
        } else {
            package_dir.join(&rule.subdir)
        };

        if !source_dir.is_dir() {
            return Err(stage::source_missing(
                &rule.from,
                source_dir.display().to_string(),
            ));
        }

        let dest_dir = source_root.join(&rule.into);
        let mut matched_any = false;

        let mut entries: Vec<_> = WalkDir::new(&source_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .collect();
        // Sort for deterministic plan order
        entries.sort_by_key(|e| e.path().to_path_buf());

        for entry in entries {
            let path = entry.path();
            let relative = path.strip_prefix(&source_dir).unwrap_or(path);
            let file_name = entry.file_name().to_string_lossy();

            if matches_pattern(&rule.pattern, relative, &file_name) {
                matched_any = true;
                actions.push(CopyAction {
                    source: path.to_path_buf(),
                    target: dest_dir.join(relative),
                });
            }
        }

        if !matched_any {
            return Err(stage::no_matches(
                &rule.pattern,
                source_dir.display().to_string(),
            ));
        }
    }

    Ok(StagePlan { actions })
}

/// Execute a plan: copy every action's source to its target
pub fn execute(plan: &StagePlan) -> Result<StageReport> {
    let mut report = StageReport::default();

    for action in &plan.actions {
        if action.target.is_file() && files_identical(&action.source, &action.target)? {
            report.skipped.push(action.target.clone());
            continue;
        }
        copy_file(&action.source, &action.target)?;
        report.copied.push(action.target.clone());
    }

    Ok(report)
}

/// Plan and execute in one step
pub fn stage(rules: &[CopyRule], table: &PackageTable, source_root: &Path) -> Result<StageReport> {
    let plan = plan(rules, table, source_root)?;
    execute(&plan)
}

/// Check a copy-rule glob against one file.
///
/// Patterns containing a separator are matched against the forward-slashed
/// path relative to the rule's source directory. Bare patterns such as
/// `*glfw*` apply at any depth: they match when the glob matches any
/// component of the relative path, file name or directory alike, so a
/// pattern naming a directory stages that directory's contents.
fn matches_pattern(pattern: &str, relative: &Path, file_name: &str) -> bool {
    let normalized = to_forward_slashes(relative);

    let Ok(glob) = Glob::new(pattern) else {
        // Fallback to exact match if pattern is invalid
        return pattern == normalized;
    };

    if pattern.contains('/') {
        return glob
            .matched(&CandidatePath::from(normalized.as_str()))
            .is_some();
    }

    if glob.matched(&CandidatePath::from(file_name)).is_some() {
        return true;
    }
    normalized
        .split('/')
        .any(|component| glob.matched(&CandidatePath::from(component)).is_some())
}
