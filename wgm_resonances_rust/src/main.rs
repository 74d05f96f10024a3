//! Whispering-gallery mode resonance scanner.
//!
//! Samples the TE and TM characteristic functions of a dielectric resonator
//! and reports the size parameters where they change sign:
//! ```sh
//! wgm_resonances_rust
//! wgm_resonances_rust --mode-number 12 --index 1.5 --plot wgm_modes.png
//! wgm_resonances_rust --config scan.toml --table
//! ```

mod analysis;
mod bessel;
mod config;
mod error;
mod modes;
mod report;
mod resonance;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use config::AnalysisConfig;
use report::{ConsoleReporter, PlotReporter, Reporter};

#[derive(Parser)]
#[command(name = "wgm_resonances_rust")]
#[command(about = "TE/TM whispering-gallery mode resonances by sign-change bracketing")]
#[command(version)]
struct Cli {
    /// TOML file with analysis parameters. Flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Angular mode number l.
    #[arg(short = 'l', long)]
    mode_number: Option<u32>,
    /// Refractive index m of the resonator.
    #[arg(short = 'm', long)]
    index: Option<f64>,
    /// Free-space wavelength in µm.
    #[arg(short, long)]
    wavelength: Option<f64>,
    /// Lower end of the size-parameter domain.
    #[arg(long)]
    x_min: Option<f64>,
    /// Upper end of the size-parameter domain.
    #[arg(long)]
    x_max: Option<f64>,
    /// Number of grid samples.
    #[arg(short = 'n', long)]
    samples: Option<usize>,
    /// Write a PNG plot of both mode curves to this path.
    #[arg(short, long)]
    plot: Option<PathBuf>,
    /// Also print each resonance with its equivalent radius.
    #[arg(short, long)]
    table: bool,
}

impl Cli {
    fn build_config(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };

        if let Some(l) = self.mode_number {
            config.mode.mode_number = l;
        }
        if let Some(m) = self.index {
            config.mode.refractive_index = m;
        }
        if let Some(wl) = self.wavelength {
            config.wavelength_um = wl;
        }
        if let Some(x) = self.x_min {
            config.sampling.x_min = x;
        }
        if let Some(x) = self.x_max {
            config.sampling.x_max = x;
        }
        if let Some(n) = self.samples {
            config.sampling.samples = n;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.build_config()?;

    let scan = analysis::scan(&config);

    let mut reporters: Vec<Box<dyn Reporter>> = Vec::new();
    if let Some(path) = &cli.plot {
        reporters.push(Box::new(PlotReporter::new(path.clone())));
    }
    reporters.push(Box::new(ConsoleReporter { table: cli.table }));

    for reporter in reporters.iter_mut() {
        reporter.report(&scan).context("Reporting failed")?;
    }
    Ok(())
}
