//! # Bulwark Materials
//!
//! Tabulated photon attenuation data for the Bulwark framework. Every
//! material is a plain immutable [`Material`](material::Material) value held
//! in a [`MaterialCatalog`](catalog::MaterialCatalog) and looked up by
//! symbol, name or 1-based index.
//!
//! ## Available data sources
//!
//! | Source | Module | Materials |
//! |--------|--------|-----------|
//! | NIST X-ray mass attenuation tables | [`reference`] | Pb, Fe, Al, H2O, Concrete |
//! | User tables (job files) | [`material::Material::new`] | any |
//!
//! ## Interpolation
//!
//! Tabulated $\mu/\rho$ values are interpolated linearly in log-energy /
//! log-coefficient space ([`interp::log_log_interpolate`]). Queries outside
//! the tabulated range are reported, never extrapolated.

pub mod catalog;
pub mod interp;
pub mod material;
pub mod reference;

pub use catalog::MaterialCatalog;
pub use interp::{bracket, log_log_interpolate};
pub use material::{Material, MaterialError};
