//! Analysis parameters, loadable from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard run: `l = 10`, `m = 1.45`, `λ = 1.55 µm`, 1000 samples over
//! `[0.1, 20]`.

use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bessel;
use crate::error::{WgmError, WgmResult};
use crate::modes::ModeParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Free-space wavelength in µm.
    #[serde(default = "default_wavelength_um")]
    pub wavelength_um: f64,
    #[serde(default)]
    pub mode: ModeParams,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            x_min: 0.1,
            x_max: 20.0,
            samples: 1000,
        }
    }
}

fn default_wavelength_um() -> f64 {
    1.55
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            wavelength_um: default_wavelength_um(),
            mode: ModeParams::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> WgmResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Free-space wavenumber `2π/λ` in µm⁻¹.
    pub fn wavenumber(&self) -> f64 {
        2.0 * PI / self.wavelength_um
    }

    /// Resonator radius in µm for size parameter `x`.
    pub fn radius_for(&self, x: f64) -> f64 {
        x / self.wavenumber()
    }

    pub fn validate(&self) -> WgmResult<()> {
        let m = self.mode.refractive_index;
        if !m.is_finite() || m <= 0.0 {
            return Err(WgmError::InvalidConfig(format!(
                "refractive index must be positive, got {m}"
            )));
        }
        if !self.wavelength_um.is_finite() || self.wavelength_um <= 0.0 {
            return Err(WgmError::InvalidConfig(format!(
                "wavelength must be positive, got {} µm",
                self.wavelength_um
            )));
        }
        if self.mode.mode_number > bessel::MAX_ORDER {
            return Err(WgmError::InvalidConfig(format!(
                "mode number {} exceeds {}",
                self.mode.mode_number,
                bessel::MAX_ORDER
            )));
        }

        let SamplingConfig {
            x_min,
            x_max,
            samples,
        } = self.sampling;
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(WgmError::InvalidConfig(format!(
                "sampling domain must be finite, got [{x_min}, {x_max}]"
            )));
        }
        if x_min < 0.0 {
            return Err(WgmError::InvalidConfig(format!(
                "sampling domain must start at x >= 0, got {x_min}"
            )));
        }
        if x_min >= x_max {
            return Err(WgmError::InvalidConfig(format!(
                "empty sampling domain [{x_min}, {x_max}]"
            )));
        }
        if x_max > bessel::MAX_ARGUMENT {
            return Err(WgmError::InvalidConfig(format!(
                "sampling domain must end at x <= {}, got {x_max}",
                bessel::MAX_ARGUMENT
            )));
        }
        if samples < 2 {
            return Err(WgmError::InvalidConfig(format!(
                "need at least 2 samples, got {samples}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.mode.mode_number, 10);
        assert_eq!(config.mode.refractive_index, 1.45);
        assert_eq!(config.wavelength_um, 1.55);
        assert_eq!(config.sampling.x_min, 0.1);
        assert_eq!(config.sampling.x_max, 20.0);
        assert_eq!(config.sampling.samples, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wavenumber_and_radius() {
        let config = AnalysisConfig::default();
        assert!((config.wavenumber() - 2.0 * PI / 1.55).abs() < 1e-12);
        assert!((config.radius_for(config.wavenumber()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AnalysisConfig = toml::from_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            wavelength_um = 0.8

            [mode]
            mode_number = 3

            [sampling]
            samples = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.wavelength_um, 0.8);
        assert_eq!(config.mode.mode_number, 3);
        assert_eq!(config.mode.refractive_index, 1.45);
        assert_eq!(config.sampling.samples, 250);
        assert_eq!(config.sampling.x_max, 20.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AnalysisConfig::default();
        config.mode.refractive_index = 0.0;
        assert!(matches!(config.validate(), Err(WgmError::InvalidConfig(_))));

        let mut config = AnalysisConfig::default();
        config.wavelength_um = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.sampling.x_min = 20.0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.sampling.x_min = -1.0;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.sampling.samples = 1;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.sampling.x_max = 2.0 * bessel::MAX_ARGUMENT;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::default();
        config.mode.mode_number = bessel::MAX_ORDER + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_high_order_and_wide_domain() {
        let mut config = AnalysisConfig::default();
        config.mode.mode_number = 21;
        config.sampling.x_max = 60.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AnalysisConfig::load(Path::new("/nonexistent/wgm.toml")).unwrap_err();
        assert!(matches!(err, WgmError::Io(_)));
    }
}
