use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use chudnovsky_pi::{compute_pi, config::DEFAULT_DIGITS, parse_digits, PiConfig};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_chrome::ChromeLayerBuilder;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print pi to a given number of decimal digits.
#[derive(Parser)]
#[command(name = "pi", version, about, long_about = None)]
struct Cli {
    /// Digits after the decimal point, `_` separators allowed (1_000_000).
    #[arg(value_parser = parse_digits, default_value_t = DEFAULT_DIGITS)]
    digits: u64,

    /// Worker threads for the splitting, 0 for every core.
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Show a spinner on stderr while computing.
    #[arg(long)]
    progress: bool,

    /// Write a Chrome trace of the run to this file.
    #[arg(long, value_name = "FILE")]
    trace: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (chrome, _guard) = match &cli.trace {
        Some(path) => {
            let (layer, guard) = ChromeLayerBuilder::new()
                .file(path)
                .include_args(true)
                .build();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(chrome)
        .init();

    let config = PiConfig::new(cli.digits).with_threads(cli.threads);

    let spinner = cli.progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg} [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("computing {} digits", cli.digits));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let start = Instant::now();
    let result = compute_pi(&config);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let pi = result?;
    info!(
        digits = cli.digits,
        threads = config.effective_threads(),
        elapsed = ?start.elapsed(),
        "done"
    );

    println!("{pi}");

    Ok(())
}
