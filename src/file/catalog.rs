// src/file/catalog.rs
use super::FileHandler;
use crate::catalog::{Catalog, LoadError, Product};
use crate::config::{CatalogSchema, ColumnLayout};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use anyhow::{Result, Context};
use calamine::{open_workbook_auto, Reader};
use csv::{ReaderBuilder, Trim};
use log::info;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug)]
pub struct CatalogFileHandler {
    schema: CatalogSchema,
    sheet: String,
}

impl CatalogFileHandler {
    /// `sheet` names the worksheet read from workbook files; CSV ignores it.
    pub fn new(schema: CatalogSchema, sheet: String) -> Self {
        Self { schema, sheet }
    }

    /// Opens and parses a CSV snapshot or workbook, keeping the typed error.
    pub fn read(&self, path: &Path) -> Result<Catalog, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let catalog = if is_workbook(path) {
            read_workbook(path, &self.sheet, &self.schema)?
        } else {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
                _ => LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                },
            })?;
            read_catalog(file, &self.schema)?
        };

        info!(
            "Loaded {} products with {} features from {}",
            catalog.len(),
            catalog.feature_names().len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl FileHandler<Catalog> for CatalogFileHandler {
    fn load(&self, path: &Path) -> Result<Catalog> {
        self.read(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))
    }
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| WORKBOOK_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)))
}

/// Parses CSV with a header row into a rating-sorted catalog.
pub fn read_catalog<R: Read>(reader: R, schema: &CatalogSchema) -> Result<Catalog, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let layout = schema.resolve(headers.as_slice())?;

    let mut products = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let cells: Vec<&str> = record.iter().collect();
        products.push(parse_product(cells.as_slice(), line, &layout, &headers)?);
    }

    let feature_names = layout.features.into_iter().map(|(_, name)| name).collect();
    Catalog::new(layout.key_name, feature_names, products)
}

/// Reads one worksheet of a workbook; its first used row is the header.
pub fn read_workbook(path: &Path, sheet: &str, schema: &CatalogSchema) -> Result<Catalog, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(LoadError::MissingSheet(sheet.to_string()));
    }
    let range = workbook.worksheet_range(sheet)?;

    // Spreadsheet row numbers are 1-based
    let first_line = range.start().map_or(1, |(row, _)| u64::from(row) + 1);
    let mut rows = range.rows().map(|row| {
        row.iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect::<Vec<String>>()
    });

    let headers = rows.next().unwrap_or_default();
    let layout = schema.resolve(headers.as_slice())?;

    let mut products = Vec::new();
    for (offset, cells) in rows.enumerate() {
        let line = first_line + 1 + offset as u64;
        products.push(parse_product(cells.as_slice(), line, &layout, &headers)?);
    }

    let feature_names = layout.features.into_iter().map(|(_, name)| name).collect();
    Catalog::new(layout.key_name, feature_names, products)
}

fn parse_product<S: AsRef<str>>(
    cells: &[S],
    line: u64,
    layout: &ColumnLayout,
    headers: &[String],
) -> Result<Product, LoadError> {
    let cell = |index: usize| cells.get(index).map_or("", |c| c.as_ref());

    let number = |index: usize| {
        let value = cell(index);
        value.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| LoadError::InvalidNumber {
                line,
                column: headers[index].clone(),
                value: value.to_string(),
            })
    };

    let flags = layout.features
        .iter()
        .map(|&(index, ref column)| match cell(index) {
            "Y" | "y" => Ok(true),
            "N" | "n" | "" => Ok(false),
            other => Err(LoadError::InvalidFlag {
                line,
                column: column.clone(),
                value: other.to_string(),
            }),
        })
        .collect::<Result<Vec<bool>, LoadError>>()?;

    Ok(Product::new(
        cell(layout.name).to_string(),
        number(layout.rating)?,
        number(layout.price)?,
        flags,
    ))
}
