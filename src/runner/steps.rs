//! The scaffold steps and the standard pipeline

use crate::config::{Options, RawOptions, TemplateResolver};
use crate::error::{Result, StepError, StepResult};
use crate::runner::{copy_tree, run_checked, update_project, Context, Invocation, Pipeline, Step};
use std::path::Path;

pub const COPY_STEP: &str = "Copy project files";
pub const UPDATE_STEP: &str = "Update project";
pub const GIT_STEP: &str = "Initialize git";
pub const INSTALL_STEP: &str = "Install dependencies";

/// Reason shown when the install step is skipped
pub const INSTALL_SKIP_REASON: &str = "Pass --install to automatically install dependencies";

/// Copy, update, git, install
pub fn scaffold_pipeline() -> Pipeline<'static> {
    Pipeline::new()
        .step(Step::new(COPY_STEP, copy_step))
        .step(Step::new(UPDATE_STEP, update_step))
        .step(Step::new(GIT_STEP, git_step).enabled_when(|opts| opts.git_enabled))
        .step(Step::new(INSTALL_STEP, install_step).skip_when(|opts| {
            (!opts.install_enabled).then(|| INSTALL_SKIP_REASON.to_string())
        }))
}

/// Resolve the options, run the standard pipeline, and report success
///
/// Target directory and template problems fail before any step runs.
pub fn create_project(
    raw: RawOptions,
    cwd: &Path,
    templates: &TemplateResolver,
    ctx: &Context,
) -> Result<Options> {
    let options = Options::resolve(raw, cwd, templates, ctx)?;
    ctx.print_debug(&format!(
        "Scaffolding '{}' from '{}'",
        options.target_path.display(),
        options.template_root.display()
    ));

    scaffold_pipeline().run(&options, ctx).into_result()?;

    ctx.print_done("Project ready");
    Ok(options)
}

/// Materialize the template into the target directory
pub fn copy_step(options: &Options, ctx: &Context) -> StepResult {
    let summary = copy_tree(&options.template_root, &options.target_path)?;
    ctx.print_debug(&format!(
        "Copied {} files from '{}' ({} already present, kept)",
        summary.copied,
        options.template_root.display(),
        summary.kept
    ));
    Ok(())
}

/// Rewrite placeholders and rename packaged files; per-file failures are only logged
pub fn update_step(options: &Options, ctx: &Context) -> StepResult {
    let report = update_project(&options.target_path, options.resolved_project_name());

    for (path, count) in &report.rewritten {
        ctx.print_debug(&format!("Replaced {} placeholder(s) in '{}'", count, path.display()));
    }
    for (from, to) in &report.renamed {
        ctx.print_debug(&format!("Renamed '{}' to '{}'", from.display(), to.display()));
    }
    for failure in &report.failures {
        ctx.print_error(&failure.to_string());
    }

    Ok(())
}

/// Run `git init` in the target directory
pub fn git_step(options: &Options, ctx: &Context) -> StepResult {
    let invocation = Invocation::new("git", &["init"]);
    run_checked(ctx.runner.as_ref(), &invocation, &options.target_path).map_err(StepError::GitInit)
}

/// Install dependencies with the package manager the project uses
pub fn install_step(options: &Options, ctx: &Context) -> StepResult {
    let manager = PackageManager::detect(&options.target_path);
    ctx.print_debug(&format!("Installing with {}", manager.program()));

    let invocation = Invocation::new(manager.program(), &["install"]).inherit_output();
    run_checked(ctx.runner.as_ref(), &invocation, &options.target_path).map_err(StepError::Install)
}

/// Package managers the install step knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// Pick by lock file, defaulting to npm
    pub fn detect(dir: &Path) -> Self {
        if dir.join("yarn.lock").is_file() {
            PackageManager::Yarn
        } else if dir.join("pnpm-lock.yaml").is_file() {
            PackageManager::Pnpm
        } else {
            PackageManager::Npm
        }
    }

    /// Executable to spawn
    ///
    /// On Windows these tools ship as `.cmd` shims, which `Command` only
    /// finds when the extension is spelled out.
    pub fn program(&self) -> &'static str {
        match (self, cfg!(windows)) {
            (PackageManager::Npm, false) => "npm",
            (PackageManager::Npm, true) => "npm.cmd",
            (PackageManager::Yarn, false) => "yarn",
            (PackageManager::Yarn, true) => "yarn.cmd",
            (PackageManager::Pnpm, false) => "pnpm",
            (PackageManager::Pnpm, true) => "pnpm.cmd",
        }
    }
}
