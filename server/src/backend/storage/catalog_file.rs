use std::fs;
use std::path::Path;
use tracing::info;

use crate::backend::domain::{CatalogError, EventCatalog};

/// Load the event catalog from `path`, or the built-in table when `None`
pub fn load_catalog(path: Option<&Path>) -> Result<EventCatalog, CatalogError> {
    let Some(path) = path else {
        return EventCatalog::builtin();
    };

    info!("Loading event catalog from {:?}", path);
    let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = EventCatalog::from_yaml_str(&source)?;
    info!(
        "Loaded {} events, cycle anchor {}",
        catalog.events().len(),
        catalog.anchor()
    );
    Ok(catalog)
}
