//! Subprocess execution
//!
//! Git and package-manager invocations go through [`ProcessRunner`] so the
//! steps that use them can be exercised without the real tools.

use std::io;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};

/// A program to run inside a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Whether the child's stdout/stderr reach the terminal
    pub inherit_output: bool,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            inherit_output: false,
        }
    }

    /// Let the child write straight to the terminal
    pub fn inherit_output(mut self) -> Self {
        self.inherit_output = true;
        self
    }

    /// Printable form, e.g. `git init`
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a finished child process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    pub success: bool,
    /// Exit code, None when killed by a signal
    pub code: Option<i32>,
}

impl ExitInfo {
    pub fn ok() -> Self {
        ExitInfo {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: i32) -> Self {
        ExitInfo {
            success: false,
            code: Some(code),
        }
    }
}

/// Spawns a process and waits for it
pub trait ProcessRunner: Send + Sync {
    /// Run to completion in `cwd`; Err only when the process could not be spawned
    fn run(&self, invocation: &Invocation, cwd: &Path) -> io::Result<ExitInfo>;
}

/// Runs real processes with `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> io::Result<ExitInfo> {
        let mut command = StdCommand::new(&invocation.program);
        command.args(&invocation.args);
        command.current_dir(cwd);
        command.stdin(Stdio::null());

        if invocation.inherit_output {
            command.stdout(Stdio::inherit());
            command.stderr(Stdio::inherit());
        } else {
            command.stdout(Stdio::null());
            command.stderr(Stdio::null());
        }

        let status = command.status()?;

        Ok(ExitInfo {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// Run an invocation and turn spawn errors and non-zero exits into a message
pub fn run_checked(
    runner: &dyn ProcessRunner,
    invocation: &Invocation,
    cwd: &Path,
) -> Result<(), String> {
    let exit = runner
        .run(invocation, cwd)
        .map_err(|e| format!("could not run '{}': {}", invocation.display(), e))?;

    if exit.success {
        return Ok(());
    }

    Err(match exit.code {
        Some(code) => format!("'{}' exited with code {}", invocation.display(), code),
        None => format!("'{}' was terminated by a signal", invocation.display()),
    })
}
