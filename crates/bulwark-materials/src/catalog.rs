//! Read-only material catalog.
//!
//! The catalog is the single lookup point for materials. Entries are
//! addressed by symbol or name (case-insensitive) or by their 1-based
//! position in the catalog, and are never mutated once inserted.

use crate::material::{Material, MaterialError};
use crate::reference;

/// An ordered, keyed collection of [`Material`]s.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in reference catalog: Pb, Fe, Al, H2O, Concrete (indices 1..=5).
    pub fn reference() -> Result<Self, MaterialError> {
        let mut catalog = Self::new();
        for material in [
            reference::lead()?,
            reference::iron()?,
            reference::aluminium()?,
            reference::water()?,
            reference::concrete()?,
        ] {
            catalog.insert(material)?;
        }
        Ok(catalog)
    }

    /// Add a material. Symbols and names must not collide with an existing entry.
    pub fn insert(&mut self, material: Material) -> Result<usize, MaterialError> {
        if self.get(material.symbol()).is_some() || self.get(material.name()).is_some() {
            return Err(MaterialError::DataError(format!(
                "duplicate material '{}' ({})",
                material.symbol(),
                material.name()
            )));
        }
        log::debug!(
            "catalog: registered {} ({}) as #{}",
            material.symbol(),
            material.name(),
            self.materials.len() + 1
        );
        self.materials.push(material);
        Ok(self.materials.len())
    }

    /// Look up by symbol or name, ignoring ASCII case.
    pub fn get(&self, id: &str) -> Option<&Material> {
        let id = id.trim();
        self.materials.iter().find(|m| {
            m.symbol().eq_ignore_ascii_case(id) || m.name().eq_ignore_ascii_case(id)
        })
    }

    /// Look up by 1-based index.
    pub fn get_by_index(&self, index: usize) -> Option<&Material> {
        index.checked_sub(1).and_then(|i| self.materials.get(i))
    }

    /// Resolve an identifier that is either a symbol/name or a 1-based index.
    pub fn resolve(&self, id: &str) -> Result<&Material, MaterialError> {
        let by_key = self.get(id);
        let by_index = || id.trim().parse::<usize>().ok().and_then(|n| self.get_by_index(n));
        by_key
            .or_else(by_index)
            .ok_or_else(|| MaterialError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate `(index, material)` in catalog order, with 1-based indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Material)> {
        self.materials.iter().enumerate().map(|(i, m)| (i + 1, m))
    }
}
