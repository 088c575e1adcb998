// src/catalog/product.rs

/// One catalog row. `flags` is positional: entry `i` belongs to the catalog's
/// `i`th feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub rating: f64,
    pub price: f64,
    flags: Vec<bool>,
}

impl Product {
    pub fn new(name: String, rating: f64, price: f64, flags: Vec<bool>) -> Self {
        Self {
            name,
            rating,
            price,
            flags,
        }
    }

    pub fn flag(&self, feature_index: usize) -> bool {
        self.flags.get(feature_index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}

/// A single query hit, borrowed from the catalog it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl<'a> From<&'a Product> for Recommendation<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            price: product.price,
        }
    }
}
