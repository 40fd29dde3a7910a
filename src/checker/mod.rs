pub mod dictionary;
pub mod scanner;
pub mod suggestions;
pub mod tokenizer;

use crate::error::{Error, Result};
use crate::{CheckResult, Misspelling, ReportEntry};
use dictionary::Dictionary;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    /// Load the dictionary from every source, in order
    pub fn new<P: AsRef<Path>>(sources: &[P]) -> Result<Self> {
        let dictionary = Dictionary::from_sources(sources)?;
        Ok(Self { dictionary })
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Read the target file and list its misspellings
    pub fn scan_file(&self, file_path: &Path) -> Result<Vec<Misspelling>> {
        let bytes =
            fs::read(file_path).map_err(|e| Error::source_unavailable(file_path, "input file", e))?;
        let content = String::from_utf8_lossy(&bytes);

        let misspellings = scanner::scan(&content, &self.dictionary);
        log::info!(
            "Found {} misspelling(s) in {}",
            misspellings.len(),
            file_path.display()
        );
        Ok(misspellings)
    }

    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggestions::generate(word, &self.dictionary)
    }

    /// Attach replacement candidates to each misspelling, keeping their order
    pub fn correct(&self, misspellings: Vec<Misspelling>) -> CheckResult {
        let entries: Vec<ReportEntry> = misspellings
            .into_par_iter()
            .map(|misspelling| {
                let suggestions = self.suggest(&misspelling.text);
                ReportEntry {
                    misspelling,
                    suggestions,
                }
            })
            .collect();

        CheckResult { entries }
    }

    /// Scan a file and generate candidates for everything found
    pub fn check(&self, file_path: &Path) -> Result<CheckResult> {
        let misspellings = self.scan_file(file_path)?;
        Ok(self.correct(misspellings))
    }
}
