// 📦 Static export - writes the rendered document to disk

use crate::content::ContentRegistry;
use crate::error::SiteError;
use crate::page::render_document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const INDEX_FILE: &str = "index.html";

/// Render the page and write `index.html` into `out_dir`, creating it if needed.
/// Returns the path of the written file.
pub fn export_site(
    registry: &ContentRegistry,
    year: i32,
    out_dir: &Path,
) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(out_dir).map_err(|source| SiteError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_document(registry, year)?;
    let target = out_dir.join(INDEX_FILE);
    debug!(bytes = html.len(), path = %target.display(), "writing document");

    fs::write(&target, html).map_err(|source| SiteError::Io {
        path: target.clone(),
        source,
    })?;

    info!(path = %target.display(), year, "site exported");
    Ok(target)
}
