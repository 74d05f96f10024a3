use log::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::modes::{ModeKind, ModeParams};
use crate::resonance::{self, Bracket, SampleGrid};

/// Sampled residuals and detected resonances for one polarization.
#[derive(Debug, Clone)]
pub struct ModeScan {
    pub kind: ModeKind,
    pub values: Vec<f64>,
    pub brackets: Vec<Bracket>,
    pub resonances: Vec<f64>,
    pub non_finite: usize,
}

impl ModeScan {
    pub fn run(kind: ModeKind, grid: &SampleGrid, params: &ModeParams) -> Self {
        let values = kind.evaluate(&grid.points, params);
        let brackets = resonance::brackets(&grid.points, &values);
        let resonances = resonance::left_endpoints(&brackets);
        let non_finite = values.iter().filter(|v| !v.is_finite()).count();

        if non_finite > 0 {
            warn!(
                "{} residual has {} non-finite sample(s) out of {}",
                kind.label(),
                non_finite,
                values.len()
            );
        }
        debug!("{} brackets: {:?}", kind.label(), brackets);

        Self {
            kind,
            values,
            brackets,
            resonances,
            non_finite,
        }
    }
}

/// Everything a reporter needs: the grid and both mode scans.
#[derive(Debug, Clone)]
pub struct ResonanceScan {
    pub config: AnalysisConfig,
    pub grid: SampleGrid,
    pub te: ModeScan,
    pub tm: ModeScan,
}

impl ResonanceScan {
    pub fn modes(&self) -> [&ModeScan; 2] {
        [&self.te, &self.tm]
    }
}

/// Sample both characteristic functions over the configured grid and
/// bracket their sign changes.
pub fn scan(config: &AnalysisConfig) -> ResonanceScan {
    let sampling = &config.sampling;
    let grid = SampleGrid::linspace(sampling.x_min, sampling.x_max, sampling.samples);

    info!(
        "Scanning l = {}, m = {}, λ = {} µm over [{}, {}] with {} samples (step {:.4e})",
        config.mode.mode_number,
        config.mode.refractive_index,
        config.wavelength_um,
        grid.x_min,
        grid.x_max,
        grid.len(),
        grid.step()
    );

    let te = ModeScan::run(ModeKind::Te, &grid, &config.mode);
    let tm = ModeScan::run(ModeKind::Tm, &grid, &config.mode);

    info!(
        "Found {} TE and {} TM resonance(s)",
        te.resonances.len(),
        tm.resonances.len()
    );

    ResonanceScan {
        config: config.clone(),
        grid,
        te,
        tm,
    }
}
