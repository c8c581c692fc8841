//! Xinoxano CLI - Chains of synonyms between two words

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod output;
mod query;

use config::{FileConfig, Settings};
use output::{OutputFormat, Stream};
use xinoxano_core::DEFAULT_INTERMEDIATE_NODES;

#[derive(Parser, Debug)]
#[command(name = "xinoxano")]
#[command(author, version, about = "Find chains of synonyms between two words")]
#[command(after_help = "Example: xinoxano barat econòmic 3")]
pub struct Cli {
    /// Source word
    pub word1: String,

    /// Target word
    pub word2: String,

    /// Number of intermediate words in each chain
    #[arg(default_value_t = DEFAULT_INTERMEDIATE_NODES)]
    pub n_intermediate: usize,

    /// Synonym lexicon file [default: sinonims.txt]
    #[arg(short, long, env = "XINOXANO_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Maximum number of chains to print [default: 100]
    #[arg(short, long, env = "XINOXANO_MAX_PATHS")]
    pub max_paths: Option<usize>,

    /// Stop searching after visiting this many words
    #[arg(long, env = "XINOXANO_VISIT_BUDGET")]
    pub visit_budget: Option<usize>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, env = "XINOXANO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let file_config = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, file_config);
    tracing::debug!("Resolved settings: {:?}", settings);

    let request = settings.query(&cli.word1, &cli.word2, cli.n_intermediate);
    request.validate()?;

    let report = query::execute(&settings.lexicon, request);
    let (stream, text) = output::render(&report, settings.format);

    match stream {
        Stream::Stdout => writeln!(std::io::stdout(), "{}", text)?,
        Stream::Stderr => writeln!(std::io::stderr(), "{}", text)?,
    }

    Ok(report.exit_code())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(&cli);
    tracing::debug!("Starting xinoxano CLI");

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
