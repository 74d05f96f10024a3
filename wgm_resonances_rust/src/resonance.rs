//! Sign-change bracketing of sampled characteristic functions.
//!
//! Roots are located only to the resolution of the sample grid: a bracket
//! `i` means the sampled function changes sign between `x[i]` and `x[i + 1]`,
//! and the reported resonance is the left endpoint `x[i]`. No refinement is
//! attempted.

use num_traits::Float;

/// Evenly spaced sample points over a closed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub x_min: f64,
    pub x_max: f64,
    pub points: Vec<f64>,
}

impl SampleGrid {
    /// `n` points from `x_min` to `x_max` inclusive. The last point is
    /// exactly `x_max`.
    pub fn linspace(x_min: f64, x_max: f64, n: usize) -> Self {
        let points = match n {
            0 => Vec::new(),
            1 => vec![x_min],
            _ => {
                let step = (x_max - x_min) / (n - 1) as f64;
                let mut points: Vec<f64> = (0..n).map(|i| x_min + i as f64 * step).collect();
                points[n - 1] = x_max;
                points
            }
        };
        Self {
            x_min,
            x_max,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid spacing; upper bound on the error of any reported resonance.
    pub fn step(&self) -> f64 {
        if self.points.len() < 2 {
            0.0
        } else {
            (self.x_max - self.x_min) / (self.points.len() - 1) as f64
        }
    }
}

/// An adjacent pair of samples whose signs differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T = f64> {
    pub index: usize,
    pub x_left: f64,
    pub x_right: f64,
    pub v_left: T,
    pub v_right: T,
}

/// `1` for positive, `-1` for negative, `0` for either zero, NaN for NaN.
pub fn sign<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else if v == T::zero() {
        T::zero()
    } else {
        T::nan()
    }
}

/// Indices `i` with `sign(values[i]) != sign(values[i + 1])`, ascending.
///
/// An exact zero has its own sign, so a crossing through a sampled zero is
/// reported as two adjacent brackets. A NaN sign differs from everything.
pub fn sign_changes<T: Float>(values: &[T]) -> Vec<usize> {
    values
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| sign(pair[0]) != sign(pair[1]))
        .map(|(i, _)| i)
        .collect()
}

/// Bracket records for every sign change of `values` over `x_vals`.
///
/// `x_vals` and `values` are aligned; extra trailing entries in either are
/// ignored.
pub fn brackets<T: Float>(x_vals: &[f64], values: &[T]) -> Vec<Bracket<T>> {
    let n = x_vals.len().min(values.len());
    sign_changes(&values[..n])
        .into_iter()
        .map(|i| Bracket {
            index: i,
            x_left: x_vals[i],
            x_right: x_vals[i + 1],
            v_left: values[i],
            v_right: values[i + 1],
        })
        .collect()
}

/// Left endpoints of `brackets`, in order.
pub fn left_endpoints<T>(brackets: &[Bracket<T>]) -> Vec<f64> {
    brackets.iter().map(|b| b.x_left).collect()
}

/// Left-endpoint x-values of every sign change in `values`.
pub fn resonances<T: Float>(x_vals: &[f64], values: &[T]) -> Vec<f64> {
    left_endpoints(&brackets(x_vals, values))
}
