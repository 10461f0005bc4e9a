//! Bracketing and log-log interpolation over tabulated attenuation data.
//!
//! Mass-attenuation coefficients span several orders of magnitude across the
//! photon energy range and behave approximately as a power law between
//! tabulated points. Interpolation is therefore linear in
//! $(\ln E, \ln \mu/\rho)$ space:
//!
//! $$\ln m = \ln m_1 + \frac{\ln E - \ln E_1}{\ln E_2 - \ln E_1}(\ln m_2 - \ln m_1)$$
//!
//! No extrapolation is performed outside the tabulated domain.

use crate::material::MaterialError;

/// Locate the interval of `table` that contains `x`.
///
/// Scans consecutive pairs in ascending order and returns the smallest `i`
/// with `table[i] <= x <= table[i + 1]`. Both bounds are inclusive, so a
/// value equal to an interior knot resolves to the lower interval. This is
/// what makes an absorption edge (two equal consecutive energies) read as the
/// below-edge coefficient when queried exactly at the edge energy.
///
/// Returns `None` when `x` lies outside `[table[0], table[last]]`, when `x`
/// is NaN, or when the table has fewer than two entries.
pub fn bracket(x: f64, table: &[f64]) -> Option<usize> {
    table
        .windows(2)
        .position(|pair| pair[0] <= x && x <= pair[1])
}

/// Log-log interpolate `ys` at `x` over the knots `xs`.
///
/// `xs` and `ys` must be index-aligned and strictly positive. A query that
/// lands exactly on a bracketing knot returns the tabulated value unchanged.
///
/// # Errors
/// * [`MaterialError::OutOfRange`] if `x` is outside the tabulated domain.
/// * [`MaterialError::DegenerateInterval`] if the bracketing interval has
///   zero width in log space (malformed table).
/// * [`MaterialError::DataError`] if the tables are mismatched or too short.
pub fn log_log_interpolate(x: f64, xs: &[f64], ys: &[f64]) -> Result<f64, MaterialError> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return Err(MaterialError::DataError(format!(
            "interpolation table needs at least 2 aligned points, got {} energies and {} values",
            xs.len(),
            ys.len()
        )));
    }

    let i = bracket(x, xs).ok_or(MaterialError::OutOfRange {
        energy: x,
        min: xs[0],
        max: xs[xs.len() - 1],
    })?;

    let (x1, x2) = (xs[i], xs[i + 1]);
    let (y1, y2) = (ys[i], ys[i + 1]);

    if x == x1 {
        return Ok(y1);
    }
    if x == x2 {
        return Ok(y2);
    }

    let span = x2.ln() - x1.ln();
    if span == 0.0 || !span.is_finite() {
        return Err(MaterialError::DegenerateInterval { energy: x, index: i });
    }

    let t = (x.ln() - x1.ln()) / span;
    let ln_y = y1.ln() + t * (y2.ln() - y1.ln());
    let y = ln_y.exp();

    if !y.is_finite() {
        return Err(MaterialError::DataError(format!(
            "interpolation produced a non-finite value at {x} in interval {i}"
        )));
    }
    Ok(y)
}
