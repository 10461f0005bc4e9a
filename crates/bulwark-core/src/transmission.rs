//! Multi-layer transmission with inverse-square spreading.
//!
//! Photons cross each layer in turn, each contributing a Beer-Lambert factor
//! $e^{-\mu_i t_i}$, and the surviving flux then spreads geometrically as
//! $1/d^2$ over the source-to-detector distance $d$:
//!
//! $$T = \frac{1}{d^2} \prod_i e^{-\mu_i(E)\, t_i}$$
//!
//! The $1/d^2$ factor is not normalised to a reference distance, so $T$ is a
//! relative intensity: compare values at a fixed distance.

use bulwark_materials::MaterialCatalog;

use crate::attenuation::{linear_attenuation_coefficient, single_layer_transmission, AttenuationError};
use crate::types::{Layer, LayerSpec, TransmissionResult};

/// Combined transmission of `layers` at `energy_mev` to a detector at `distance`.
///
/// # Errors
/// * [`AttenuationError::InvalidInput`] for a non-positive or non-finite
///   energy, a negative thickness, or a distance so small that $1/d^2$
///   overflows.
/// * [`AttenuationError::GeometryInvalid`] if `distance` does not exceed the
///   total thickness. Checked before any interpolation.
/// * [`AttenuationError::OutOfRange`] for the first layer whose material
///   does not tabulate `energy_mev`. No partial result is returned.
pub fn combined_transmission(
    energy_mev: f64,
    layers: &[Layer<'_>],
    distance: f64,
) -> Result<f64, AttenuationError> {
    evaluate_layers(energy_mev, layers, distance).map(|r| r.transmission_fraction)
}

/// Full evaluation of a resolved layer stack.
///
/// Energy and geometry are validated before any layer is interpolated.
pub fn evaluate_layers(
    energy_mev: f64,
    layers: &[Layer<'_>],
    distance: f64,
) -> Result<TransmissionResult, AttenuationError> {
    check_energy(energy_mev)?;
    let total_thickness = check_geometry(layers.iter().map(|l| l.thickness), distance)?;

    let mut per_layer_mu = Vec::with_capacity(layers.len());
    let mut attenuation = 1.0;
    for layer in layers {
        let mu = linear_attenuation_coefficient(energy_mev, layer.material)?;
        attenuation *= single_layer_transmission(mu, layer.thickness);
        per_layer_mu.push(mu);
    }

    let transmission = attenuation * (1.0 / (distance * distance));
    if !transmission.is_finite() {
        return Err(AttenuationError::InvalidInput(format!(
            "distance {distance} cm is too small for the inverse-square factor"
        )));
    }
    log::debug!(
        "E={} MeV, {} layer(s), {} cm of shield at {} cm: T = {:.6e}",
        energy_mev,
        layers.len(),
        total_thickness,
        distance,
        transmission
    );

    Ok(TransmissionResult {
        photon_energy: energy_mev,
        distance,
        per_layer_mu,
        total_thickness,
        attenuation_fraction: attenuation,
        transmission_fraction: transmission,
    })
}

/// Evaluate a stack given as `(material id, thickness)` pairs against `catalog`.
///
/// Material identifiers are resolved first, then the geometry is checked,
/// then each layer is attenuated in order.
pub fn evaluate(
    catalog: &MaterialCatalog,
    photon_energy: f64,
    layers: &[LayerSpec],
    distance: f64,
) -> Result<TransmissionResult, AttenuationError> {
    let resolved = resolve_layers(catalog, layers)?;
    evaluate_layers(photon_energy, &resolved, distance)
}

/// Resolve material identifiers in `specs` against `catalog`.
pub fn resolve_layers<'a>(
    catalog: &'a MaterialCatalog,
    specs: &[LayerSpec],
) -> Result<Vec<Layer<'a>>, AttenuationError> {
    specs
        .iter()
        .map(|spec| {
            catalog
                .resolve(&spec.material)
                .map(|material| Layer::new(material, spec.thickness))
                .map_err(|_| AttenuationError::UnknownMaterial(spec.material.clone()))
        })
        .collect()
}

/// Reject photon energies that are not positive and finite.
pub fn check_energy(energy_mev: f64) -> Result<(), AttenuationError> {
    if energy_mev.is_finite() && energy_mev > 0.0 {
        Ok(())
    } else {
        Err(AttenuationError::InvalidInput(format!(
            "photon energy must be positive and finite, got {energy_mev} MeV"
        )))
    }
}

/// Validate thicknesses and the detector position; returns the total thickness.
pub fn check_geometry(
    thicknesses: impl IntoIterator<Item = f64>,
    distance: f64,
) -> Result<f64, AttenuationError> {
    let mut total = 0.0;
    for (i, t) in thicknesses.into_iter().enumerate() {
        if !(t.is_finite() && t >= 0.0) {
            return Err(AttenuationError::InvalidInput(format!(
                "layer {} thickness must be finite and non-negative, got {}",
                i + 1,
                t
            )));
        }
        total += t;
    }
    if distance.is_infinite() {
        return Err(AttenuationError::InvalidInput(format!(
            "distance must be finite, got {distance}"
        )));
    }
    // `!(a > b)` also rejects a NaN distance.
    if !(distance > total) {
        return Err(AttenuationError::GeometryInvalid {
            distance,
            total_thickness: total,
        });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_materials::Material;

    fn flat(mu_over_rho: f64, density: f64) -> Material {
        Material::new("F", "Flat", density, vec![0.1, 10.0], vec![mu_over_rho, mu_over_rho]).unwrap()
    }

    #[test]
    fn test_empty_stack_is_pure_inverse_square() {
        for d in [0.5, 1.0, 3.0, 10.0, 250.0] {
            assert_eq!(combined_transmission(1.0, &[], d).unwrap(), 1.0 / (d * d));
        }
    }

    #[test]
    fn test_geometry_rejected_at_boundary() {
        let m = flat(0.1, 1.0);
        let layers = [Layer::new(&m, 2.0), Layer::new(&m, 3.0)];
        for d in [5.0, 4.0, 0.0, -1.0, f64::NAN] {
            assert!(matches!(
                combined_transmission(1.0, &layers, d),
                Err(AttenuationError::GeometryInvalid { .. })
            ));
        }
        assert!(combined_transmission(1.0, &layers, 5.0 + 1e-9).is_ok());
    }

    #[test]
    fn test_geometry_checked_before_interpolation() {
        // Energy is out of range, but geometry fails first.
        let m = flat(0.1, 1.0);
        let err = combined_transmission(100.0, &[Layer::new(&m, 2.0)], 1.0).unwrap_err();
        assert!(matches!(err, AttenuationError::GeometryInvalid { .. }));
    }

    #[test]
    fn test_non_positive_energy_rejected_with_and_without_layers() {
        let m = flat(0.1, 1.0);
        let stacks: [&[Layer<'_>]; 2] = [&[], &[Layer::new(&m, 1.0)]];
        for layers in stacks {
            for energy in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
                let err = combined_transmission(energy, layers, 5.0).unwrap_err();
                assert!(
                    matches!(err, AttenuationError::InvalidInput(_)),
                    "E={} with {} layer(s): {:?}",
                    energy,
                    layers.len(),
                    err
                );
            }
        }
    }

    #[test]
    fn test_energy_checked_before_geometry() {
        let err = combined_transmission(-1.0, &[], 0.0).unwrap_err();
        assert!(matches!(err, AttenuationError::InvalidInput(_)));
    }

    #[test]
    fn test_vanishing_distance_is_rejected_not_infinite() {
        let err = combined_transmission(1.0, &[], 1e-160).unwrap_err();
        assert!(matches!(err, AttenuationError::InvalidInput(_)));
        // Below 1 cm the factor exceeds 1 but stays finite.
        assert_eq!(combined_transmission(1.0, &[], 0.5).unwrap(), 4.0);
    }

    #[test]
    fn test_negative_thickness_rejected() {
        let m = flat(0.1, 1.0);
        let err = combined_transmission(1.0, &[Layer::new(&m, -1.0)], 10.0).unwrap_err();
        assert!(matches!(err, AttenuationError::InvalidInput(_)));
    }

    #[test]
    fn test_one_bad_layer_aborts_the_stack() {
        let wide = flat(0.1, 1.0);
        let narrow = Material::new("N", "Narrow", 1.0, vec![0.1, 0.5], vec![1.0, 0.5]).unwrap();
        let layers = [Layer::new(&wide, 1.0), Layer::new(&narrow, 1.0)];
        let err = combined_transmission(1.0, &layers, 10.0).unwrap_err();
        assert_eq!(
            err,
            AttenuationError::OutOfRange {
                material: "Narrow".into(),
                energy: 1.0
            }
        );
    }
}
