use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};
use wordfreq_core::pipeline::run;
use wordfreq_core::rank::format_lines;
use wordfreq_core::{PipelineConfig, RankedEntry, DEFAULT_STOP_WORDS_FILE, DEFAULT_TOP_N};

#[derive(Parser)]
#[command(name = "wordfreq")]
#[command(about = "Print the most frequent non-stop words of a text file", long_about = None)]
struct Cli {
    /// Document to analyse
    input: PathBuf,
    /// Comma-separated stop-word list
    #[arg(long, default_value = DEFAULT_STOP_WORDS_FILE)]
    stop_words: PathBuf,
    /// Number of ranked words to print
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// "<word> - <count>" lines
    Text,
    /// JSON array of {word, count}
    Json,
}

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures
            let code = if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            let _ = err.print();
            return code;
        }
    };

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = PipelineConfig::new().with_stop_words_path(&cli.stop_words).with_top_n(cli.top);
    let ranked = run(&cli.input, &config)?;
    let out = render(&ranked, cli.format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes()).context("writing to stdout")?;
    stdout.flush()?;
    Ok(())
}

fn render(ranked: &[RankedEntry], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(format_lines(ranked)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(ranked)?;
            json.push('\n');
            Ok(json)
        }
    }
}
