use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

/// Errors from reading event descriptions
#[derive(Debug, thiserror::Error)]
pub enum EventDetailError {
    #[error("Invalid detail id: {0:?}")]
    InvalidId(String),
    #[error("Failed to read event description {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Markdown descriptions stored as `<detail_id>.md` in one directory
#[derive(Debug, Clone, Default)]
pub struct EventDetailStore {
    directory: Option<PathBuf>,
}

impl EventDetailStore {
    /// A store with no directory has no descriptions at all
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    /// Read the description for `detail_id`. `Ok(None)` when none is stored.
    pub async fn load_markdown(&self, detail_id: &str) -> Result<Option<String>, EventDetailError> {
        if !is_valid_detail_id(detail_id) {
            return Err(EventDetailError::InvalidId(detail_id.to_string()));
        }
        let Some(directory) = &self.directory else {
            return Ok(None);
        };

        let path = directory.join(format!("{}.md", detail_id));
        match fs::read_to_string(&path).await {
            Ok(markdown) => {
                debug!("Read event description {:?}", path);
                Ok(Some(markdown))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("No description file for '{}' at {:?}", detail_id, path);
                Ok(None)
            }
            Err(source) => Err(EventDetailError::Io { path, source }),
        }
    }
}

/// Detail ids become file names, so only allow a conservative alphabet
fn is_valid_detail_id(detail_id: &str) -> bool {
    !detail_id.is_empty()
        && detail_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
