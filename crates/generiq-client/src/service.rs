//! High-level drug comparison service.
//!
//! Wires the catalog source, the image source, and the core resolution
//! logic together. The failure policy of the whole system lives here:
//! a catalog that will not load degrades to the built-in sample set
//! (logged, surfaced via [`DataStatus`], never an error to callers), and
//! image lookups stay best-effort.

use chrono::NaiveDate;

use generiq_core::models::{Drug, DrugComparison};
use generiq_core::{comparison, resolver, sample_drugs, search};

use crate::catalog::CatalogSource;
use crate::image::ImageSource;

/// Where the current session's records come from. Lets a presentation
/// layer show a degraded-mode indicator instead of silently serving the
/// sample cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataStatus {
    /// The published dataset is loaded.
    Live {
        last_updated: NaiveDate,
        total_count: u32,
    },
    /// Loading failed; queries run against the built-in sample set.
    SampleOnly,
}

/// Drug search and price comparison over a live-or-fallback catalog.
pub struct DrugService<C, I> {
    catalog: C,
    images: I,
}

impl<C: CatalogSource, I: ImageSource> DrugService<C, I> {
    /// Create a service over the given sources.
    pub fn new(catalog: C, images: I) -> Self {
        Self { catalog, images }
    }

    /// Whether queries currently run against live or sample data.
    pub async fn data_status(&self) -> DataStatus {
        match self.catalog.load().await {
            Ok(catalog) => DataStatus::Live {
                last_updated: catalog.last_updated,
                total_count: catalog.total_count,
            },
            Err(_) => DataStatus::SampleOnly,
        }
    }

    /// Name or ingredient search, bounded to 20 results.
    pub async fn search(&self, query: &str) -> Vec<Drug> {
        match self.catalog.load().await {
            Ok(catalog) => search::search(&catalog.drugs, query),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, searching sample data");
                search::search(&sample_drugs(), query)
            }
        }
    }

    /// All drugs sharing `ingredient_code`, cheapest first. When the
    /// cheapest record has no product photo yet, one best-effort image
    /// lookup runs on its name and the result is attached; lookup
    /// failures leave the list untouched.
    pub async fn alternatives(&self, ingredient_code: &str) -> Vec<Drug> {
        let mut resolved = match self.catalog.load().await {
            Ok(catalog) => resolver::alternatives(&catalog.drugs, ingredient_code),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, resolving against sample data");
                resolver::alternatives(&sample_drugs(), ingredient_code)
            }
        };

        if let Some(cheapest) = resolved.first_mut() {
            if cheapest.image.is_none() {
                cheapest.image = self.images.fetch_image(&cheapest.name).await;
            }
        }

        resolved
    }

    /// Compare `original` against its same-ingredient alternatives.
    /// `None` means the ingredient group is absent from the data
    /// entirely; a comparison with zero savings means the consumer is
    /// already on the cheapest option.
    pub async fn compare(&self, original: &Drug) -> Option<DrugComparison> {
        let resolved = self.alternatives(&original.ingredient_code).await;
        comparison::compare(original, resolved)
    }
}
