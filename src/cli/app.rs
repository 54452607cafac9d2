//! Main CLI application

use crate::cli::{prompt_for_missing_options, TerminalPrompter};
use crate::config::{RawOptions, Settings, TemplateResolver, DEFAULT_TEMPLATE};
use crate::error::ScaffoldError;
use crate::runner::{create_project, Context, Verbosity};
use crate::ui::ConsoleReporter;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("scaffold")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create a new project from a template")
        .arg(
            Arg::new("folder")
                .value_name("FOLDER")
                .help("Directory to create; scaffolds into the current directory when omitted"),
        )
        .arg(
            Arg::new("git")
                .short('g')
                .long("git")
                .help("Initialize a git repository")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Skip prompts and use defaults")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("install")
                .short('i')
                .long("install")
                .help("Install dependencies")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .value_name("NAME")
                .help(format!("Template to use [default: {}]", DEFAULT_TEMPLATE)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to a settings file"),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print a shell completion script and exit"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Combine flags with settings; flags win
fn raw_options(matches: &ArgMatches, settings: &Settings) -> RawOptions {
    let template = matches
        .get_one::<String>("template")
        .cloned()
        .or_else(|| settings.template.clone())
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());

    RawOptions {
        skip_prompts: matches.get_flag("yes"),
        git: matches.get_flag("git") || settings.git,
        install: matches.get_flag("install") || settings.install,
        template,
        folder_name: matches.get_one::<String>("folder").cloned(),
        project_name: None,
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<()> {
    let matches = build_command().get_matches();

    if let Some(shell) = matches.get_one::<Shell>("completions") {
        clap_complete::generate(*shell, &mut build_command(), "scaffold", &mut io::stdout());
        return Ok(());
    }

    let verbosity = get_verbosity(&matches);
    let settings = Settings::discover(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .map_err(ScaffoldError::from)?;

    let raw = raw_options(&matches, &settings);
    let raw = prompt_for_missing_options(raw, &mut TerminalPrompter::stdio())?;

    let cwd = env::current_dir().map_err(ScaffoldError::CurrentDir)?;
    let templates = TemplateResolver::locate(settings.templates_dir);

    let ctx = Context::new()
        .with_verbosity(verbosity)
        .with_reporter(Arc::new(ConsoleReporter::new(verbosity)));

    create_project(raw, &cwd, &templates, &ctx)?;
    Ok(())
}
