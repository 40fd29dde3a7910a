pub mod checker;
pub mod cli;
pub mod config;
pub mod error;

pub use checker::SpellChecker;
pub use config::Config;
pub use error::{Error, Result};

/// A token missing from the dictionary, with the line it was found on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub text: String,
    pub line: usize,
}

/// A misspelling together with its replacement candidates
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub misspelling: Misspelling,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub entries: Vec<ReportEntry>,
}

impl CheckResult {
    pub fn error_count(&self) -> usize {
        self.entries.len()
    }
}
