//! Interactive prompts for options the command line left open

use crate::config::RawOptions;
use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Asks the user questions
pub trait Prompter {
    /// Free-text answer; empty when the user just pressed enter
    fn input(&mut self, message: &str) -> io::Result<String>;

    /// Yes/no answer
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool>;
}

/// Line-based prompts over any reader/writer pair
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompter { input, output }
    }

    /// Read one line; None at end of input
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, read from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{} {} ", "?".green().bold(), message.bold())?;
        self.output.flush()?;
        Ok(self.read_answer()?.unwrap_or_default())
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            write!(
                self.output,
                "{} {} {} ",
                "?".green().bold(),
                message.bold(),
                hint.dimmed()
            )?;
            self.output.flush()?;

            let Some(answer) = self.read_answer()? else {
                writeln!(self.output)?;
                return Ok(default);
            };

            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n")?,
            }
        }
    }
}

/// Fill in what the flags did not decide
///
/// With `--yes` nothing is asked; otherwise a missing folder name and an
/// unset git flag are asked for. The folder name doubles as project name.
pub fn prompt_for_missing_options(
    raw: RawOptions,
    prompter: &mut dyn Prompter,
) -> Result<RawOptions> {
    if raw.skip_prompts {
        return Ok(raw.with_defaults_for_skipped_prompts());
    }

    let mut raw = raw;

    if raw.folder_name.is_none() {
        let answer = prompter
            .input("What is the name of the project?")
            .map_err(ScaffoldError::Prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            raw.folder_name = Some(answer.to_string());
        }
    }

    if !raw.git {
        raw.git = prompter
            .confirm("Initialize a git repository?", false)
            .map_err(ScaffoldError::Prompt)?;
    }

    raw.project_name = raw.folder_name.clone();
    Ok(raw)
}
