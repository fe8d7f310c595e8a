use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;
use thiserror::Error;

use crate::models::place::Place;
use crate::services::catalog_service::PlaceCatalog;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Name",
    "State",
    "City",
    "Type",
    "Best Time to visit",
    "Google review rating",
    "Image URL",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read catalog rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog is missing required column '{0}'")]
    MissingColumn(String),
}

pub fn load_catalog(path: &Path) -> Result<PlaceCatalog, CatalogError> {
    let file = File::open(path)?;
    let catalog = read_catalog(file)?;
    info!(
        "Loaded {} places from catalog {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Reads a CSV export of the places spreadsheet. Extra columns are ignored.
pub fn read_catalog<R: Read>(reader: R) -> Result<PlaceCatalog, CatalogError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn(column.to_string()));
        }
    }

    let places = rdr
        .deserialize::<Place>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PlaceCatalog::from_places(places))
}
