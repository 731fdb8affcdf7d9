//! sparkplot - plot numbers from standard input as a terminal sparkline.
//!
//! Reads whitespace-separated real numbers from stdin and writes the
//! rendered chart to stdout. Sizing, framing and styling are controlled
//! by command-line flags; diagnostics go to stderr via `tracing`.

use std::io::{self, BufRead};

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use sparkplot::{render, Config, Ramp};

/// Plot whitespace-separated numbers from standard input.
#[derive(Debug, Parser)]
#[command(name = "sparkplot", version, about)]
struct Cli {
    /// Lower plot y-limit (derived from the data when omitted)
    #[arg(long)]
    min: Option<f64>,

    /// Upper plot y-limit (derived from the data when omitted)
    #[arg(long)]
    max: Option<f64>,

    /// Plot height in lines
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Plot width in characters (0 = one column per sample)
    #[arg(long, default_value_t = 0)]
    width: usize,

    /// Plot title
    #[arg(long, default_value = "sparkplot")]
    title: String,

    /// Disable the enclosing box
    #[arg(long)]
    no_box: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Use the plain ASCII glyph ramp
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parsed through try_parse so that a help request exits non-zero:
    // a run that plotted nothing is not a success.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            std::process::exit(2);
        }
    };

    let samples = read_samples(io::stdin().lock())?;

    let mut config = Config::new()
        .rows(cli.height)
        .columns(cli.width)
        .framed(!cli.no_box)
        .styled(!cli.no_color)
        .title(cli.title);
    if cli.ascii {
        config = config.ramp(Ramp::Ascii);
    }
    if let Some(min) = cli.min {
        config = config.min(min);
    }
    if let Some(max) = cli.max {
        config = config.max(max);
    }

    println!("{}", render(&samples, &config)?);
    Ok(())
}

/// Read whitespace-separated samples until end of input or the first
/// token that does not parse as a number.
fn read_samples(input: impl BufRead) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for line in input.lines() {
        for token in line?.split_whitespace() {
            match token.parse::<f64>() {
                Ok(value) => samples.push(value),
                Err(_) => {
                    tracing::debug!(token, "stopped reading at a non-numeric token");
                    return Ok(samples);
                }
            }
        }
    }
    Ok(samples)
}
