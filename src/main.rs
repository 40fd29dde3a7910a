use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use env_logger::Builder;
use log::LevelFilter;
use speller::cli::mode::{choose_destination, Preset, ReportMode};
use speller::cli::output::{self, OutputFormat};
use speller::config::{Config, Overrides};
use speller::SpellChecker;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "speller")]
#[command(version, about = "Report misspelled words with one-edit replacements", long_about = None)]
struct Cli {
    /// Main dictionary word list
    #[arg(value_name = "MAIN_DICT", required_unless_present = "completion")]
    main_dict: Option<PathBuf>,

    /// Supplemental dictionary word list
    #[arg(value_name = "SUPP_DICT", required_unless_present = "completion")]
    supp_dict: Option<PathBuf>,

    /// File to check
    #[arg(value_name = "FILE", required_unless_present = "completion")]
    file: Option<PathBuf>,

    /// Additional dictionary word list (repeatable)
    #[arg(short, long = "dict", value_name = "PATH")]
    dictionaries: Vec<PathBuf>,

    /// Print the report (p) or write it to a file (w); prompts when omitted
    #[arg(short, long)]
    mode: Option<ReportMode>,

    /// Report file used in write mode
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Report format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "speller", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);

    let config = Config::load(Overrides {
        dictionaries: cli.dictionaries,
        mode: cli.mode,
        output: cli.output,
        format: cli.format,
        no_color: cli.no_color,
    })?;

    let (Some(main_dict), Some(supp_dict), Some(file)) = (cli.main_dict, cli.supp_dict, cli.file)
    else {
        anyhow::bail!("Expected <MAIN_DICT> <SUPP_DICT> <FILE>. Use --help for usage information.");
    };

    let mut sources = vec![main_dict, supp_dict];
    sources.extend(config.dictionaries.iter().cloned());

    let checker = SpellChecker::new(&sources)?;
    let misspellings = checker.scan_file(&file)?;

    let mut selector = Preset::new(config.mode, config.output.clone(), config.color);
    let destination = choose_destination(&mut selector)?;

    let result = checker.correct(misspellings);
    output::emit(&result, &destination, config.format)?;
    output::print_check_summary(result.error_count(), &file, &destination, config.color);

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
