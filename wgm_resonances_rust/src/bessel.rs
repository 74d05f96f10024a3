//! Integer-order Bessel functions of the first kind.
//!
//! `J_n(x)` comes from Miller's backward recurrence
//! `J_{k-1}(x) = (2k/x) J_k(x) - J_{k+1}(x)`, started far above both `n`
//! and `x` and normalised with `J_0 + 2 Σ J_{2k} = 1`. The downward
//! direction is stable for every order, so tiny values such as `J_9(1)`
//! keep their relative accuracy instead of collapsing to zero.

/// Largest argument accepted; beyond it `j` returns NaN.
pub const MAX_ARGUMENT: f64 = 1.0e5;

/// Largest order accepted; beyond it `j` returns NaN.
pub const MAX_ORDER: u32 = 100_000;

const RESCALE_ABOVE: f64 = 1.0e250;
const RESCALE_BY: f64 = 1.0e-250;

fn start_order(n: usize, x: f64) -> usize {
    let m = n.max(x.ceil() as usize);
    m + 20 + (40.0 * m as f64).sqrt() as usize
}

/// Bessel function of the first kind, integer order `n`, real argument.
pub fn j(n: i32, x: f64) -> f64 {
    let order = n.unsigned_abs();
    // J_{-n}(x) = J_n(-x) = (-1)^n J_n(x)
    let odd = order % 2 == 1;
    let flip = odd && ((n < 0) != (x < 0.0));
    let x = x.abs();

    if x.is_nan() || x > MAX_ARGUMENT || order > MAX_ORDER {
        return f64::NAN;
    }
    if x == 0.0 {
        return if order == 0 { 1.0 } else { 0.0 };
    }

    let n = order as usize;
    let mut j_above = 0.0;
    let mut j_k = 1.0e-30;
    let mut norm = 0.0;
    let mut value = 0.0;

    for k in (1..=start_order(n, x)).rev() {
        let j_below = 2.0 * k as f64 / x * j_k - j_above;
        j_above = j_k;
        j_k = j_below;

        let below = k - 1;
        if below > 0 && below % 2 == 0 {
            norm += 2.0 * j_k;
        }
        if below == n {
            value = j_k;
        }
        if j_k.abs() > RESCALE_ABOVE {
            j_k *= RESCALE_BY;
            j_above *= RESCALE_BY;
            norm *= RESCALE_BY;
            value *= RESCALE_BY;
        }
    }
    norm += j_k;

    let result = value / norm;
    if flip {
        -result
    } else {
        result
    }
}

/// First derivative `J'_n(x) = (J_{n-1}(x) - J_{n+1}(x)) / 2`.
pub fn jp(n: i32, x: f64) -> f64 {
    0.5 * (j(n - 1, x) - j(n + 1, x))
}
