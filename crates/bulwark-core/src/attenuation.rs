//! Linear attenuation coefficients and single-layer Beer-Lambert attenuation.
//!
//! The linear attenuation coefficient follows from the tabulated mass
//! coefficient and the material density, $\mu = (\mu/\rho)\,\rho$, with
//! $\mu/\rho$ interpolated in log-log space. A slab of thickness $t$
//! transmits $e^{-\mu t}$ of the incident photons.

use bulwark_materials::{Material, MaterialError};
use thiserror::Error;

/// Errors from the attenuation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttenuationError {
    #[error("Energy {energy} MeV is outside the tabulated range of {material}")]
    OutOfRange { material: String, energy: f64 },

    #[error(
        "Detector inside or before the shield: distance {distance} cm does not exceed \
         total thickness {total_thickness} cm"
    )]
    GeometryInvalid { distance: f64, total_thickness: f64 },

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed table for {material}: {source}")]
    Table {
        material: String,
        #[source]
        source: MaterialError,
    },
}

/// Linear attenuation coefficient $\mu$ (cm⁻¹) of `material` at `energy_mev`.
///
/// Energies outside the material's table are an error; nothing is
/// extrapolated and no sentinel value is returned.
pub fn linear_attenuation_coefficient(
    energy_mev: f64,
    material: &Material,
) -> Result<f64, AttenuationError> {
    let mu_over_rho = material
        .mass_attenuation(energy_mev)
        .map_err(|e| match e {
            MaterialError::OutOfRange { .. } => {
                let (min, max) = material.energy_range();
                log::warn!(
                    "{}: {} MeV outside tabulated range [{}, {}] MeV",
                    material.name(),
                    energy_mev,
                    min,
                    max
                );
                AttenuationError::OutOfRange {
                    material: material.name().to_string(),
                    energy: energy_mev,
                }
            }
            other => AttenuationError::Table {
                material: material.name().to_string(),
                source: other,
            },
        })?;

    let mu = mu_over_rho * material.density();
    log::debug!(
        "{} at {} MeV: mu/rho = {:.6e} cm^2/g, mu = {:.6e} cm^-1",
        material.name(),
        energy_mev,
        mu_over_rho,
        mu
    );
    Ok(mu)
}

/// Fraction of photons surviving a slab: $e^{-\mu t}$.
///
/// `mu` must be a physical (non-negative) coefficient; `thickness = 0`
/// returns exactly `1.0`.
pub fn single_layer_transmission(mu: f64, thickness: f64) -> f64 {
    (-mu * thickness).exp()
}

/// Half-value layer $\ln 2 / \mu$: the thickness that halves the beam.
pub fn half_value_layer(mu: f64) -> f64 {
    std::f64::consts::LN_2 / mu
}

/// Tenth-value layer $\ln 10 / \mu$: the thickness that cuts the beam to 10%.
pub fn tenth_value_layer(mu: f64) -> f64 {
    std::f64::consts::LN_10 / mu
}
