//! Shielding material definition.
//!
//! A [`Material`] is an immutable table of photon energies (MeV) and the
//! corresponding mass-attenuation coefficients $\mu/\rho$ (cm²/g), plus a
//! density (g/cm³). Materials are validated once at construction and never
//! mutated afterwards, so they can be shared freely across threads.

use serde::Serialize;
use thiserror::Error;

use crate::interp::log_log_interpolate;

/// Errors from material tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    #[error("Energy {energy} MeV is outside the tabulated range [{min}, {max}] MeV")]
    OutOfRange { energy: f64, min: f64, max: f64 },

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Zero-width interpolation interval {index} at {energy} MeV")]
    DegenerateInterval { energy: f64, index: usize },
}

/// A shielding material with tabulated mass-attenuation coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    symbol: String,
    name: String,
    density: f64,
    energies_mev: Vec<f64>,
    mu_over_rho: Vec<f64>,
}

impl Material {
    /// Construct a material from tabulated data.
    ///
    /// # Arguments
    /// * `symbol` - Short identifier used for lookup (e.g. "Pb").
    /// * `name` - Human-readable name (e.g. "Lead").
    /// * `density` - Density in g/cm³.
    /// * `energies_mev` - Photon energies in MeV, ascending.
    /// * `mu_over_rho` - Mass-attenuation coefficients in cm²/g, index-aligned
    ///   with `energies_mev`.
    ///
    /// An absorption edge is written as two consecutive equal energies with
    /// different coefficients. Any other repeated or decreasing energy is
    /// rejected, as is an edge on the first or last interval.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        density: f64,
        energies_mev: Vec<f64>,
        mu_over_rho: Vec<f64>,
    ) -> Result<Self, MaterialError> {
        let name = name.into();

        if !(density.is_finite() && density > 0.0) {
            return Err(MaterialError::DataError(format!(
                "{name}: density must be positive and finite, got {density}"
            )));
        }
        if energies_mev.len() != mu_over_rho.len() {
            return Err(MaterialError::DataError(format!(
                "{name}: {} energies but {} coefficients",
                energies_mev.len(),
                mu_over_rho.len()
            )));
        }
        if energies_mev.len() < 2 {
            return Err(MaterialError::DataError(format!(
                "{name}: need at least 2 tabulated points, got {}",
                energies_mev.len()
            )));
        }
        if let Some(bad) = energies_mev
            .iter()
            .chain(mu_over_rho.iter())
            .find(|v| !(v.is_finite() && **v > 0.0))
        {
            return Err(MaterialError::DataError(format!(
                "{name}: table values must be positive and finite, found {bad}"
            )));
        }
        validate_energy_ordering(&name, &energies_mev)?;

        Ok(Self {
            symbol: symbol.into(),
            name,
            density,
            energies_mev,
            mu_over_rho,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Density in g/cm³.
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn energies_mev(&self) -> &[f64] {
        &self.energies_mev
    }

    pub fn mu_over_rho_table(&self) -> &[f64] {
        &self.mu_over_rho
    }

    /// Tabulated energy domain `(min, max)` in MeV.
    pub fn energy_range(&self) -> (f64, f64) {
        (self.energies_mev[0], self.energies_mev[self.energies_mev.len() - 1])
    }

    /// Number of absorption edges encoded in the table.
    pub fn edge_count(&self) -> usize {
        self.energies_mev
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .count()
    }

    /// Mass-attenuation coefficient $\mu/\rho$ (cm²/g) at `energy_mev`.
    pub fn mass_attenuation(&self, energy_mev: f64) -> Result<f64, MaterialError> {
        log_log_interpolate(energy_mev, &self.energies_mev, &self.mu_over_rho)
    }
}

fn validate_energy_ordering(name: &str, energies: &[f64]) -> Result<(), MaterialError> {
    let last = energies.len() - 2;
    for (i, pair) in energies.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(MaterialError::DataError(format!(
                "{name}: energies decrease at index {} ({} -> {})",
                i + 1,
                pair[0],
                pair[1]
            )));
        }
        if pair[1] == pair[0] {
            if i == 0 || i == last {
                return Err(MaterialError::DataError(format!(
                    "{name}: repeated energy {} at the table boundary",
                    pair[0]
                )));
            }
            if energies[i - 1] == pair[0] {
                return Err(MaterialError::DataError(format!(
                    "{name}: energy {} repeated more than twice",
                    pair[0]
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(energies: Vec<f64>) -> Result<Material, MaterialError> {
        let coeffs = vec![1.0; energies.len()];
        Material::new("X", "Test", 1.0, energies, coeffs)
    }

    #[test]
    fn test_accepts_interior_edge() {
        let m = table(vec![0.01, 0.02, 0.02, 0.05]).unwrap();
        assert_eq!(m.edge_count(), 1);
        assert_eq!(m.energy_range(), (0.01, 0.05));
    }

    #[test]
    fn test_rejects_decreasing_energies() {
        assert!(matches!(
            table(vec![0.1, 0.3, 0.2]),
            Err(MaterialError::DataError(_))
        ));
    }

    #[test]
    fn test_rejects_boundary_and_triple_duplicates() {
        assert!(table(vec![0.1, 0.1, 0.2]).is_err());
        assert!(table(vec![0.1, 0.2, 0.2]).is_err());
        assert!(table(vec![0.1, 0.2, 0.2, 0.2, 0.3]).is_err());
    }

    #[test]
    fn test_rejects_mismatched_or_short_tables() {
        assert!(Material::new("X", "Test", 1.0, vec![0.1, 0.2], vec![1.0]).is_err());
        assert!(Material::new("X", "Test", 1.0, vec![0.1], vec![1.0]).is_err());
        assert!(Material::new("X", "Test", 1.0, vec![], vec![]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(Material::new("X", "Test", 0.0, vec![0.1, 0.2], vec![1.0, 1.0]).is_err());
        assert!(Material::new("X", "Test", 1.0, vec![0.1, 0.2], vec![1.0, -1.0]).is_err());
        assert!(Material::new("X", "Test", 1.0, vec![0.0, 0.2], vec![1.0, 1.0]).is_err());
        assert!(Material::new("X", "Test", 1.0, vec![0.1, f64::NAN], vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn test_edge_energy_reads_below_edge_value() {
        let m = Material::new(
            "X",
            "Edge",
            2.0,
            vec![0.05, 0.088, 0.088, 0.1],
            vec![5.0, 1.9, 7.7, 5.5],
        )
        .unwrap();
        assert_eq!(m.mass_attenuation(0.088).unwrap(), 1.9);
        assert!(m.mass_attenuation(0.09).unwrap() > 5.5);
    }
}
