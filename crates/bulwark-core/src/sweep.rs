//! Data-parallel batch evaluation using Rayon.
//!
//! Every evaluation reads shared, immutable catalog data and returns a fresh
//! result, so batches fan out across threads without locking. A failure at
//! one point is reported in its slot and does not stop the others.

use bulwark_materials::MaterialCatalog;
use rayon::prelude::*;

use crate::attenuation::AttenuationError;
use crate::transmission::{evaluate, evaluate_layers, resolve_layers};
use crate::types::{LayerSpec, TransmissionResult};

/// A complete shielding configuration for batch evaluation.
#[derive(Debug, Clone)]
pub struct ShieldConfiguration {
    pub photon_energy: f64,
    pub layers: Vec<LayerSpec>,
    pub distance: f64,
}

/// Evaluate one layer stack at many photon energies.
///
/// Results are returned in the order of `energies`. Unknown materials fail
/// every point with the same error.
pub fn sweep_energies(
    catalog: &MaterialCatalog,
    energies: &[f64],
    layers: &[LayerSpec],
    distance: f64,
) -> Vec<Result<TransmissionResult, AttenuationError>> {
    let resolved = match resolve_layers(catalog, layers) {
        Ok(resolved) => resolved,
        Err(e) => return energies.iter().map(|_| Err(e.clone())).collect(),
    };

    let results: Vec<_> = energies
        .par_iter()
        .map(|&energy| evaluate_layers(energy, &resolved, distance))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        log::warn!("sweep: {failed} of {} energies failed", energies.len());
    }
    results
}

/// Evaluate independent configurations in parallel, in input order.
pub fn evaluate_batch(
    catalog: &MaterialCatalog,
    configurations: &[ShieldConfiguration],
) -> Vec<Result<TransmissionResult, AttenuationError>> {
    configurations
        .par_iter()
        .map(|c| evaluate(catalog, c.photon_energy, &c.layers, c.distance))
        .collect()
}

/// Logarithmically spaced energy grid from `start` to `end` inclusive.
///
/// Attenuation data span decades, so sweeps are sampled evenly in $\ln E$.
pub fn log_spaced_energies(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let (a, b) = (start.ln(), end.ln());
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        (a + (b - a) * i as f64 / (n - 1) as f64).exp()
                    }
                })
                .collect()
        }
    }
}
