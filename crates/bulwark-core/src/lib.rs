//! # Bulwark Core
//!
//! The numerical backbone of the Bulwark framework. This crate estimates the
//! fraction of gamma-ray photons of a given energy that cross a stack of
//! shielding layers and an air gap to a detector.
//!
//! ## Pipeline
//!
//! 1. Each layer's linear attenuation coefficient $\mu(E)$ is obtained by
//!    log-log interpolation of the material's tabulated $\mu/\rho$ and
//!    multiplied by its density ([`attenuation`]).
//! 2. Layers attenuate the beam multiplicatively, $e^{-\mu t}$ per layer,
//!    and the result is spread as $1/d^2$ ([`transmission`]).
//!
//! Every call is a pure function of its inputs, so batches can be fanned out
//! across threads without coordination ([`sweep`]).
//!
//! ## Modules
//!
//! - [`types`] — Layers, requests and result containers.
//! - [`attenuation`] — $\mu(E)$, Beer-Lambert factor, HVL/TVL.
//! - [`transmission`] — Multi-layer composition with geometric spreading.
//! - [`sweep`] — Parallel energy sweeps and batch evaluation.

pub mod attenuation;
pub mod sweep;
pub mod transmission;
pub mod types;

pub use attenuation::{
    half_value_layer, linear_attenuation_coefficient, single_layer_transmission,
    tenth_value_layer, AttenuationError,
};
pub use sweep::{evaluate_batch, log_spaced_energies, sweep_energies, ShieldConfiguration};
pub use transmission::{combined_transmission, evaluate, evaluate_layers};
pub use types::{Layer, LayerSpec, TransmissionRequest, TransmissionResult};
