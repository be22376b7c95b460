//! Cached catalog for one open store handle
//!
//! The condensed catalog is derived from a raw listing of the store. It is built
//! on first use and must be invalidated after every write or delete so the next
//! read rebuilds it.

use crate::catalog::Catalog;
use crate::error::Result;

/// Lazily built, explicitly invalidated catalog
#[derive(Debug, Default)]
pub struct CatalogCache {
    catalog: Option<Catalog>,
    builds: usize,
}

impl CatalogCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog, building it first if needed
    pub fn get_or_build<F>(&mut self, build: F) -> Result<&Catalog>
    where
        F: FnOnce() -> Result<Catalog>,
    {
        let catalog = match self.catalog.take() {
            Some(catalog) => catalog,
            None => {
                let catalog = build()?;
                self.builds += 1;
                log::debug!("Built catalog with {} entries", catalog.len());
                catalog
            }
        };
        Ok(self.catalog.insert(catalog))
    }

    /// Discard the cached catalog
    pub fn invalidate(&mut self) {
        if self.catalog.take().is_some() {
            log::debug!("Catalog invalidated");
        }
    }

    /// Whether a catalog is currently cached
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.catalog.is_some()
    }

    /// Cached catalog, if any
    #[must_use]
    pub const fn get(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Number of times the catalog has been built
    #[must_use]
    pub const fn build_count(&self) -> usize {
        self.builds
    }
}
