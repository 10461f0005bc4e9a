//! Core types shared across the Bulwark framework.
//!
//! This module defines the data structures that flow through the
//! transmission pipeline: shielding layers, requests, and result containers.

use bulwark_materials::Material;
use serde::{Deserialize, Serialize};

use crate::attenuation::AttenuationError;
use crate::transmission::evaluate_layers;

/// A single shielding slab.
///
/// The layer borrows its material from the catalog; it never owns it.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub material: &'a Material,
    /// Thickness along the beam (cm). Zero is a legal, non-attenuating layer.
    pub thickness: f64,
}

impl<'a> Layer<'a> {
    pub fn new(material: &'a Material, thickness: f64) -> Self {
        Self { material, thickness }
    }
}

/// A layer described by material identifier rather than by reference.
///
/// This is the form layers take at the configuration boundary, before the
/// identifier has been resolved against a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Material symbol, name, or 1-based catalog index.
    pub material: String,
    /// Thickness (cm).
    pub thickness: f64,
}

impl LayerSpec {
    pub fn new(material: impl Into<String>, thickness: f64) -> Self {
        Self {
            material: material.into(),
            thickness,
        }
    }
}

/// One point evaluation: a photon energy through an ordered layer stack to a
/// detector at `distance` from the source.
#[derive(Debug, Clone)]
pub struct TransmissionRequest<'a> {
    /// Photon energy (MeV).
    pub photon_energy: f64,
    /// Layers in the order the photons cross them.
    pub layers: Vec<Layer<'a>>,
    /// Source-to-detector separation (cm). Must exceed the total thickness.
    pub distance: f64,
}

impl<'a> TransmissionRequest<'a> {
    /// Sum of all layer thicknesses (cm).
    pub fn total_thickness(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }

    /// Run the request through the transmission pipeline.
    pub fn evaluate(&self) -> Result<TransmissionResult, AttenuationError> {
        evaluate_layers(self.photon_energy, &self.layers, self.distance)
    }
}

/// Outcome of a transmission evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionResult {
    /// Photon energy (MeV).
    pub photon_energy: f64,
    /// Source-to-detector separation (cm).
    pub distance: f64,
    /// Linear attenuation coefficient of each layer (cm⁻¹), in layer order.
    pub per_layer_mu: Vec<f64>,
    /// Sum of layer thicknesses (cm).
    pub total_thickness: f64,
    /// Beer-Lambert attenuation of the stack alone, $\prod_i e^{-\mu_i t_i}$.
    pub attenuation_fraction: f64,
    /// Stack attenuation times the inverse-square factor $1/d^2$.
    ///
    /// Not normalised to a reference distance: for `distance < 1` this
    /// exceeds the stack attenuation and may exceed 1.
    pub transmission_fraction: f64,
}
