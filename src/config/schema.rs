// src/config/schema.rs
use serde::{Serialize, Deserialize};
use crate::catalog::LoadError;

/// Which header names hold the key, rating, price and feature columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogSchema {
    /// Defaults to the first column.
    pub name_column: Option<String>,
    pub rating_column: String,
    pub price_column: String,
    /// Defaults to every other column, in file order.
    pub feature_columns: Option<Vec<String>>,
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self {
            name_column: None,
            rating_column: "Rating".to_string(),
            price_column: "Price".to_string(),
            feature_columns: None,
        }
    }
}

/// Column positions of a schema applied to one concrete header row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub key_name: String,
    pub name: usize,
    pub rating: usize,
    pub price: usize,
    pub features: Vec<(usize, String)>,
}

impl CatalogSchema {
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> Result<ColumnLayout, LoadError> {
        if headers.is_empty() {
            return Err(LoadError::EmptyHeader);
        }

        let find = |column: &str| {
            headers.iter()
                .position(|h| h.as_ref() == column)
                .ok_or_else(|| LoadError::MissingColumn(column.to_string()))
        };

        let name = match &self.name_column {
            Some(column) => find(column.as_str())?,
            None => 0,
        };
        let rating = find(self.rating_column.as_str())?;
        let price = find(self.price_column.as_str())?;

        let features = match &self.feature_columns {
            Some(columns) => columns.iter()
                .map(|column| find(column.as_str()).map(|i| (i, column.clone())))
                .collect::<Result<Vec<_>, LoadError>>()?,
            None => headers.iter()
                .enumerate()
                .filter(|(i, _)| ![name, rating, price].contains(i))
                .map(|(i, h)| (i, h.as_ref().to_string()))
                .collect(),
        };

        Ok(ColumnLayout {
            key_name: headers[name].as_ref().to_string(),
            name,
            rating,
            price,
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADERS: [&str; 6] = ["Camera", "Rating", "Price", "Night Vision", "Wifi", "Battery"];

    #[test]
    fn test_default_layout() {
        let layout = CatalogSchema::default().resolve(&HEADERS).unwrap();
        assert_eq!(
            layout,
            ColumnLayout {
                key_name: "Camera".to_string(),
                name: 0,
                rating: 1,
                price: 2,
                features: vec![
                    (3, "Night Vision".to_string()),
                    (4, "Wifi".to_string()),
                    (5, "Battery".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_columns_found_by_name_not_position() {
        let headers = ["Wifi", "Price", "Model", "Rating"];
        let schema = CatalogSchema {
            name_column: Some("Model".to_string()),
            ..CatalogSchema::default()
        };
        let layout = schema.resolve(&headers).unwrap();
        assert_eq!(layout.key_name, "Model");
        assert_eq!((layout.name, layout.rating, layout.price), (2, 3, 1));
        assert_eq!(layout.features, vec![(0, "Wifi".to_string())]);
    }

    #[test]
    fn test_explicit_feature_columns() {
        let schema = CatalogSchema {
            feature_columns: Some(vec!["Battery".to_string(), "Wifi".to_string()]),
            ..CatalogSchema::default()
        };
        let layout = schema.resolve(&HEADERS).unwrap();
        assert_eq!(
            layout.features,
            vec![(5, "Battery".to_string()), (4, "Wifi".to_string())]
        );
    }

    #[test]
    fn test_missing_columns() {
        let result = CatalogSchema::default().resolve(&["Camera", "Rating", "Cost"]);
        assert!(matches!(result, Err(LoadError::MissingColumn(c)) if c == "Price"));

        let schema = CatalogSchema {
            feature_columns: Some(vec!["Solar".to_string()]),
            ..CatalogSchema::default()
        };
        assert!(matches!(schema.resolve(&HEADERS), Err(LoadError::MissingColumn(c)) if c == "Solar"));
    }

    #[test]
    fn test_empty_header() {
        let headers: [&str; 0] = [];
        assert!(matches!(CatalogSchema::default().resolve(&headers), Err(LoadError::EmptyHeader)));
    }
}
