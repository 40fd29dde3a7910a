use crate::cli::mode::Destination;
use crate::error::{Error, Result};
use crate::CheckResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

const SEPARATOR: &str = "---------------------------------";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    word: String,
    line: usize,
    suggestions: Vec<String>,
}

/// Send the report to its destination. Both destinations get the same bytes.
pub fn emit(result: &CheckResult, destination: &Destination, format: OutputFormat) -> Result<()> {
    match destination {
        Destination::Console => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_report(&mut out, result, format)
                .and_then(|_| out.flush())
                .map_err(|e| Error::destination_unwritable("<stdout>", e))
        }
        Destination::File(path) => write_report_file(path, result, format),
    }
}

/// Create (or truncate) `path` and write the report into it
pub fn write_report_file(path: &Path, result: &CheckResult, format: OutputFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::destination_unwritable(path, e))?;
    let mut out = BufWriter::new(file);

    write_report(&mut out, result, format)
        .and_then(|_| out.flush())
        .map_err(|e| Error::destination_unwritable(path, e))?;

    log::info!("Report written to {}", path.display());
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    result: &CheckResult,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result),
        OutputFormat::Json => write_json(out, result),
    }
}

fn write_text<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    for entry in &result.entries {
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "Word: {}", entry.misspelling.text)?;
        writeln!(out, "Line: {}", entry.misspelling.line)?;

        if !entry.suggestions.is_empty() {
            writeln!(out, "Possible replacements:")?;
            for suggestion in &entry.suggestions {
                writeln!(out, "{}", suggestion)?;
            }
        }

        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    let entries: Vec<JsonEntry> = result
        .entries
        .iter()
        .map(|e| JsonEntry {
            word: e.misspelling.text.clone(),
            line: e.misspelling.line,
            suggestions: e.suggestions.clone(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)
}

pub fn print_check_summary(
    total_errors: usize,
    file: &Path,
    destination: &Destination,
    colored: bool,
) {
    eprintln!();
    if total_errors == 0 {
        if colored {
            eprintln!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            eprintln!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 {
            "misspelling"
        } else {
            "misspellings"
        };
        if colored {
            eprintln!(
                "{} {} {} found in {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                file.display()
            );
        } else {
            eprintln!("✗ {} {} found in {}", total_errors, error_word, file.display());
        }
    }

    if let Destination::File(path) = destination {
        if colored {
            eprintln!("Report written to {}", path.display().to_string().cyan());
        } else {
            eprintln!("Report written to {}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Misspelling, ReportEntry};
    use tempfile::tempdir;

    fn sample() -> CheckResult {
        CheckResult {
            entries: vec![
                ReportEntry {
                    misspelling: Misspelling {
                        text: "dgo".to_string(),
                        line: 1,
                    },
                    suggestions: vec!["do".to_string(), "dog".to_string()],
                },
                ReportEntry {
                    misspelling: Misspelling {
                        text: "qzx".to_string(),
                        line: 3,
                    },
                    suggestions: Vec::new(),
                },
            ],
        }
    }

    fn render(result: &CheckResult, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, result, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_blocks() {
        let expected = "\
---------------------------------
Word: dgo
Line: 1
Possible replacements:
do
dog
---------------------------------

---------------------------------
Word: qzx
Line: 3
---------------------------------

";
        assert_eq!(render(&sample(), OutputFormat::Text), expected);
    }

    #[test]
    fn test_no_candidates_omits_replacements_header() {
        let text = render(&sample(), OutputFormat::Text);
        assert_eq!(text.matches("Possible replacements:").count(), 1);
    }

    #[test]
    fn test_empty_result_renders_nothing() {
        assert_eq!(render(&CheckResult::default(), OutputFormat::Text), "");
    }

    #[test]
    fn test_json_output() {
        let json = render(&sample(), OutputFormat::Json);
        let parsed: Vec<JsonEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].word, "dgo");
        assert_eq!(parsed[0].suggestions, vec!["do", "dog"]);
        assert_eq!(parsed[1].line, 3);
        assert!(parsed[1].suggestions.is_empty());
    }

    #[test]
    fn test_file_matches_console_rendering() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content that must disappear").unwrap();

        write_report_file(&path, &sample(), OutputFormat::Text).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&sample(), OutputFormat::Text));
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("report.txt");

        let err = write_report_file(&path, &sample(), OutputFormat::Text)
            .err()
            .expect("missing parent directory must fail");
        assert!(matches!(err, Error::DestinationUnwritable { .. }));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
