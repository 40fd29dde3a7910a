use crate::error::Error;
use anyhow::{bail, Result};
use colored::*;
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::str::FromStr;

/// Where the report should go, as chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    Print,
    Write,
}

impl FromStr for ReportMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" | "print" => Ok(ReportMode::Print),
            "w" | "write" => Ok(ReportMode::Write),
            _ => Err(Error::InvalidModeSelection(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Print => write!(f, "print"),
            ReportMode::Write => write!(f, "write"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    File(PathBuf),
}

/// Source of the output choices that are not part of the spell check itself.
pub trait ModeSelector {
    fn select_mode(&mut self) -> Result<ReportMode>;
    fn select_output(&mut self) -> Result<PathBuf>;
}

/// Resolve the report destination, asking for a file name only in write mode
pub fn choose_destination<S: ModeSelector + ?Sized>(selector: &mut S) -> Result<Destination> {
    let destination = match selector.select_mode()? {
        ReportMode::Print => Destination::Console,
        ReportMode::Write => Destination::File(selector.select_output()?),
    };
    log::debug!("Report destination: {:?}", destination);
    Ok(destination)
}

const MODE_PROMPT: &str = "Print the results (p) or write them to a file (w)?";
const OUTPUT_PROMPT: &str = "Name the output file";

/// Prompts on the terminal, or reads answers line by line when stdin is piped
pub struct Interactive {
    colored: bool,
}

impl Interactive {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
        } else {
            eprintln!("{}:", prompt);
            read_answer(&mut io::stdin().lock())
        }
    }
}

impl ModeSelector for Interactive {
    fn select_mode(&mut self) -> Result<ReportMode> {
        eprintln!("This spell checker reports the misspelled words in your file.");
        let colored = self.colored;
        read_mode(
            || self.ask(MODE_PROMPT),
            |err| {
                if colored {
                    eprintln!("{} Try again.", err.to_string().yellow());
                } else {
                    eprintln!("{} Try again.", err);
                }
            },
        )
    }

    fn select_output(&mut self) -> Result<PathBuf> {
        let name = self.ask(OUTPUT_PROMPT)?;
        Ok(PathBuf::from(name.trim()))
    }
}

/// Next non-blank line from a piped answer stream
fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("Input ended before an answer was given; pass --mode/--output instead");
        }
        if !line.trim().is_empty() {
            return Ok(line.trim().to_string());
        }
    }
}

/// Ask until the answer names a known mode
fn read_mode<A, W>(mut ask: A, mut warn: W) -> Result<ReportMode>
where
    A: FnMut() -> Result<String>,
    W: FnMut(&Error),
{
    loop {
        match ask()?.parse::<ReportMode>() {
            Ok(mode) => return Ok(mode),
            Err(err) => warn(&err),
        }
    }
}

/// Answers from command-line flags or configuration, prompting only for
/// whatever was left unset.
pub struct Preset {
    mode: Option<ReportMode>,
    output: Option<PathBuf>,
    fallback: Interactive,
}

impl Preset {
    pub fn new(mode: Option<ReportMode>, output: Option<PathBuf>, colored: bool) -> Self {
        Self {
            mode,
            output,
            fallback: Interactive::new(colored),
        }
    }
}

impl ModeSelector for Preset {
    fn select_mode(&mut self) -> Result<ReportMode> {
        match self.mode {
            Some(mode) => Ok(mode),
            None => self.fallback.select_mode(),
        }
    }

    fn select_output(&mut self) -> Result<PathBuf> {
        match &self.output {
            Some(path) => Ok(path.clone()),
            None => self.fallback.select_output(),
        }
    }
}
