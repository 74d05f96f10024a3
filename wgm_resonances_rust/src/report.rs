use std::path::PathBuf;

use plotters::prelude::*;

use crate::analysis::ResonanceScan;
use crate::error::{WgmError, WgmResult};

/// Consumer of a finished scan. The numeric core never depends on one.
pub trait Reporter {
    fn report(&mut self, scan: &ResonanceScan) -> WgmResult<()>;
}

/// Prints both resonance lists, and optionally a radius table.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub table: bool,
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, scan: &ResonanceScan) -> WgmResult<()> {
        if self.table {
            println!(
                "\nResonances for l = {}, m = {}, λ = {} µm (k = {:.4} µm^-1):",
                scan.config.mode.mode_number,
                scan.config.mode.refractive_index,
                scan.config.wavelength_um,
                scan.config.wavenumber()
            );
            for mode in scan.modes() {
                println!("{} Mode:", mode.kind.label());
                for b in &mode.brackets {
                    println!(
                        "  {:>5}  x in [{:>10.6}, {:>10.6})  R = {:>9.4} µm",
                        b.index,
                        b.x_left,
                        b.x_right,
                        scan.config.radius_for(b.x_left)
                    );
                }
            }
            println!();
        }

        for mode in scan.modes() {
            println!(
                "{} Mode Resonances: {}",
                mode.kind.label(),
                format_values(&mode.resonances)
            );
        }
        Ok(())
    }
}

pub fn format_values(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{:.8}", v)).collect();
    format!("[{}]", items.join(", "))
}

/// Renders both residual curves and their resonance markers to a PNG.
#[derive(Debug)]
pub struct PlotReporter {
    pub path: PathBuf,
    pub size: (u32, u32),
}

impl PlotReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (800, 500),
        }
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> WgmError {
    WgmError::Plot(e.to_string())
}

/// Padded y-range covering every finite residual of both modes.
pub fn value_range(scan: &ResonanceScan) -> (f64, f64) {
    let (lo, hi) = scan
        .modes()
        .into_iter()
        .flat_map(|m| m.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    // Keep the zero axis visible.
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 1.0 };
    (lo - pad, hi + pad)
}

impl Reporter for PlotReporter {
    fn report(&mut self, scan: &ResonanceScan) -> WgmResult<()> {
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let x_range = scan.grid.x_min..scan.grid.x_max;
        let (y_min, y_max) = value_range(scan);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "TE & TM Mode Resonances in a WGM Resonator",
                ("sans-serif", 24).into_font(),
            )
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_min..y_max)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc("x (size parameter)")
            .y_desc("Mode Function Value")
            .draw()
            .map_err(plot_err)?;

        let curve = |values: &[f64]| -> Vec<(f64, f64)> {
            scan.grid
                .points
                .iter()
                .copied()
                .zip(values.iter().copied())
                .filter(|(_, v)| v.is_finite())
                .collect()
        };

        chart
            .draw_series(LineSeries::new(curve(&scan.te.values), &RED))
            .map_err(plot_err)?
            .label("TE Mode")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

        chart
            .draw_series(LineSeries::new(curve(&scan.tm.values), &BLUE))
            .map_err(plot_err)?
            .label("TM Mode")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .draw_series(LineSeries::new(
                vec![(scan.grid.x_min, 0.0), (scan.grid.x_max, 0.0)],
                &BLACK,
            ))
            .map_err(plot_err)?;

        chart
            .draw_series(
                scan.te
                    .resonances
                    .iter()
                    .map(|&x| Circle::new((x, 0.0), 4, RED.filled())),
            )
            .map_err(plot_err)?
            .label("TE Resonances")
            .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

        chart
            .draw_series(
                scan.tm
                    .resonances
                    .iter()
                    .map(|&x| Cross::new((x, 0.0), 5, BLUE.stroke_width(2))),
            )
            .map_err(plot_err)?
            .label("TM Resonances")
            .legend(|(x, y)| Cross::new((x + 10, y), 5, BLUE.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
        log::info!("Saved plot: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scan;
    use crate::config::AnalysisConfig;

    struct Recorder {
        te_counts: Vec<usize>,
    }

    impl Reporter for Recorder {
        fn report(&mut self, scan: &ResonanceScan) -> WgmResult<()> {
            self.te_counts.push(scan.te.resonances.len());
            Ok(())
        }
    }

    #[test]
    fn test_format_values() {
        assert_eq!(format_values(&[]), "[]");
        assert_eq!(format_values(&[1.5, 14.25]), "[1.50000000, 14.25000000]");
    }

    #[test]
    fn test_reporters_are_injectable() {
        let result = scan(&AnalysisConfig::default());
        let mut recorder = Recorder { te_counts: vec![] };
        let mut console = ConsoleReporter { table: true };
        {
            let reporters: Vec<&mut dyn Reporter> = vec![&mut recorder, &mut console];
            for r in reporters {
                r.report(&result).unwrap();
            }
        }
        assert_eq!(recorder.te_counts, vec![result.te.resonances.len()]);
    }

    #[test]
    fn test_plot_reporter_writes_png() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("wgm_modes.png");
        let result = scan(&AnalysisConfig::default());
        let mut plot = PlotReporter::new(&path);

        match plot.report(&result) {
            Ok(()) => {
                let bytes = std::fs::read(&path).unwrap();
                assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
            }
            // Hosts without a usable system font fail while laying out text.
            Err(e) => assert!(matches!(e, WgmError::Plot(_)), "unexpected error {e}"),
        }
    }

    #[test]
    fn test_value_range_includes_zero_and_all_values() {
        let mut result = scan(&AnalysisConfig::default());
        let (lo, hi) = value_range(&result);
        assert!(lo < 0.0 && hi > 0.0);
        for mode in result.modes() {
            for &v in &mode.values {
                assert!(v >= lo && v <= hi);
            }
        }

        for v in result.te.values.iter_mut().chain(result.tm.values.iter_mut()) {
            *v = f64::NAN;
        }
        assert_eq!(value_range(&result), (-1.0, 1.0));
    }
}
