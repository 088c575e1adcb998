// src/catalog/mod.rs
use std::collections::HashSet;
use log::{debug, warn};

pub mod error;
pub mod product;
pub mod requirements;

// Re-export commonly used types
pub use error::LoadError;
pub use product::{Product, Recommendation};
pub use requirements::{Choice, Requirements};

/// Read-only product table keyed by product name, sorted by rating (highest
/// first) when built and never reordered afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    key_name: String,
    feature_names: Vec<String>,
    products: Vec<Product>,
}

impl Catalog {
    /// Sorts `products` by descending rating and rejects repeated names.
    /// The sort is stable, so equally rated products keep their input order.
    pub fn new(
        key_name: String,
        feature_names: Vec<String>,
        mut products: Vec<Product>,
    ) -> Result<Self, LoadError> {
        products.sort_by(|a, b| b.rating.total_cmp(&a.rating));

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.name.as_str()) {
                return Err(LoadError::DuplicateName(product.name.clone()));
            }
        }

        Ok(Self {
            key_name,
            feature_names,
            products,
        })
    }

    /// Header of the name column, e.g. "Camera".
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// A fresh, all-unset requirement set over this catalog's features.
    pub fn requirements(&self) -> Requirements {
        Requirements::for_features(self.feature_names.iter().cloned())
    }

    fn feature_position(&self, feature: &str) -> Option<usize> {
        self.feature_names.iter().position(|name| name == feature)
    }

    /// Products having every feature marked `Yes`, best rated first, truncated
    /// to `limit`. `None` and `Some(0)` both mean unlimited.
    pub fn query(&self, requirements: &Requirements, limit: Option<usize>) -> Vec<Recommendation<'_>> {
        let mut required = Vec::new();
        for feature in requirements.required_features() {
            match self.feature_position(feature) {
                Some(position) => required.push(position),
                None => {
                    // No product can carry a column the catalog doesn't have
                    warn!("Required feature \"{}\" is not in the catalog", feature);
                    return Vec::new();
                }
            }
        }

        let limit = limit.filter(|&n| n > 0).unwrap_or(usize::MAX);
        let matches: Vec<Recommendation<'_>> = self.products
            .iter()
            .filter(|product| required.iter().all(|&position| product.flag(position)))
            .take(limit)
            .map(Recommendation::from)
            .collect();

        debug!(
            "Query over {} required feature(s) matched {} product(s)",
            required.len(),
            matches.len()
        );
        matches
    }
}

#[cfg(test)]
impl Catalog {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
