use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::recommendation::domain::Product;

/// Failure to hydrate the catalog from a seed file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to open product catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid product record {record}: {source}")]
    Record { record: u64, source: csv::Error },
    #[error("duplicate product id '{0}'")]
    DuplicateId(String),
}

/// Load products from a CSV export with a header row.
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_products_from_reader(file)
}

pub fn load_products_from_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products: Vec<Product> = Vec::new();
    for (index, row) in csv_reader.deserialize::<Product>().enumerate() {
        let product = row.map_err(|source| CatalogLoadError::Record {
            record: index as u64 + 1,
            source,
        })?;
        if products.iter().any(|existing| existing.id == product.id) {
            return Err(CatalogLoadError::DuplicateId(product.id.0));
        }
        products.push(product);
    }

    Ok(products)
}
