use serde::{Deserialize, Serialize};

use crate::bessel;

/// Resonator parameters shared by both characteristic functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeParams {
    /// Angular mode number `l`.
    pub mode_number: u32,
    /// Refractive index `m` of the resonator.
    pub refractive_index: f64,
}

impl Default for ModeParams {
    fn default() -> Self {
        Self {
            mode_number: 10,
            refractive_index: 1.45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Te,
    Tm,
}

impl ModeKind {
    pub fn label(self) -> &'static str {
        match self {
            ModeKind::Te => "TE",
            ModeKind::Tm => "TM",
        }
    }

    pub fn residual(self, x: f64, params: &ModeParams) -> f64 {
        match self {
            ModeKind::Te => te_mode(x, params),
            ModeKind::Tm => tm_mode(x, params),
        }
    }

    /// Residual at every point of `x_vals`, in order.
    pub fn evaluate(self, x_vals: &[f64], params: &ModeParams) -> Vec<f64> {
        x_vals.iter().map(|&x| self.residual(x, params)).collect()
    }
}

/// `x J_l(x) - l J_{l-1}(x)`
pub fn te_mode(x: f64, params: &ModeParams) -> f64 {
    let l = params.mode_number as i32;
    x * bessel::j(l, x) - l as f64 * bessel::j(l - 1, x)
}

/// `x J_l(x) - l (J_{l-1}(x) - (m^2 - 1) x J'_{l-1}(x))`
pub fn tm_mode(x: f64, params: &ModeParams) -> f64 {
    let l = params.mode_number as i32;
    let contrast = params.refractive_index.powi(2) - 1.0;
    x * bessel::j(l, x)
        - l as f64 * (bessel::j(l - 1, x) - contrast * x * bessel::jp(l - 1, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_te_mode_formula() {
        let params = ModeParams::default();
        let x = 7.3;
        let expected = x * bessel::j(10, x) - 10.0 * bessel::j(9, x);
        assert!((te_mode(x, &params) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tm_reduces_to_te_for_unit_index() {
        let params = ModeParams {
            mode_number: 4,
            refractive_index: 1.0,
        };
        for &x in &[0.5, 3.0, 9.0, 17.5] {
            assert!((te_mode(x, &params) - tm_mode(x, &params)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mode_zero_is_x_j0() {
        let params = ModeParams {
            mode_number: 0,
            refractive_index: 1.45,
        };
        for &x in &[0.1, 1.0, 2.0] {
            let expected = x * bessel::j(0, x);
            assert!((te_mode(x, &params) - expected).abs() < 1e-12);
            assert!((tm_mode(x, &params) - expected).abs() < 1e-12);
            assert!(te_mode(x, &params) > 0.0);
        }
    }

    #[test]
    fn test_evaluate_preserves_length_and_order() {
        let params = ModeParams::default();
        let xs = [0.1, 5.0, 12.0, 20.0];
        let values = ModeKind::Tm.evaluate(&xs, &params);
        assert_eq!(values.len(), xs.len());
        for (v, &x) in values.iter().zip(xs.iter()) {
            assert_eq!(*v, tm_mode(x, &params));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ModeKind::Te.label(), "TE");
        assert_eq!(ModeKind::Tm.label(), "TM");
    }
}
