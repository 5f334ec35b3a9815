//! Optional JSON override for the built-in view catalog

use std::fs;
use std::path::Path;

use super::types::ViewCatalog;
use crate::error::ExportError;

/// Load and validate a view catalog from a JSON file.
///
/// Any failure (unreadable file, bad JSON, failed validation) is a fatal
/// configuration error; the caller aborts before the input is read.
pub fn load_catalog(path: &Path) -> Result<ViewCatalog, ExportError> {
    let config_error = |message: String| ExportError::Config {
        path: path.to_path_buf(),
        message,
    };

    let text = fs::read_to_string(path).map_err(|err| config_error(err.to_string()))?;
    let catalog: ViewCatalog =
        serde_json::from_str(&text).map_err(|err| config_error(err.to_string()))?;
    catalog.validate().map_err(config_error)?;

    Ok(catalog)
}
