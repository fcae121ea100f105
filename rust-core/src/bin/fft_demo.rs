//! FFT demo: load a CSV time series, plot it and its centered spectrum.
//!
//! Writes `time_domain.png` and `frequency_domain.png` to the output directory.

use anyhow::{Context, Result};
use clap::Parser;
use fft_rust_in_python::{analyze, generate_plot_with, read_csv_with, LoaderConfig, PlotConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fft_demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a CSV file with time and measurement columns
    input: PathBuf,

    /// Directory for the rendered PNG files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    anyhow::ensure!(cli.delimiter.is_ascii(), "delimiter must be an ASCII character");
    let loader = LoaderConfig {
        has_headers: !cli.no_header,
        delimiter: cli.delimiter as u8,
    };
    let plot = PlotConfig {
        width: cli.width,
        height: cli.height,
        ..PlotConfig::default()
    };

    let series = read_csv_with(&cli.input, &loader)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    log::info!("Loaded {} samples from {}", series.len(), cli.input.display());

    let report = analyze(&series).context("computing spectrum")?;
    if let Some((freq, mag)) = report.peak() {
        log::info!("Peak magnitude {:.4} at {:.4} Hz", mag, freq);
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let time_png = generate_plot_with(
        &series.time,
        &series.values,
        "Time",
        "Measured Data",
        "Time Domain",
        &plot,
    )
    .context("rendering time-domain plot")?;
    let time_path = cli.out_dir.join("time_domain.png");
    std::fs::write(&time_path, time_png)
        .with_context(|| format!("writing {}", time_path.display()))?;

    let freq_png = generate_plot_with(
        &report.frequencies,
        &report.magnitude,
        "Frequency",
        "Magnitude",
        "Frequency Domain",
        &plot,
    )
    .context("rendering frequency-domain plot")?;
    let freq_path = cli.out_dir.join("frequency_domain.png");
    std::fs::write(&freq_path, freq_png)
        .with_context(|| format!("writing {}", freq_path.display()))?;

    println!("Wrote {} and {}", time_path.display(), freq_path.display());
    Ok(())
}
