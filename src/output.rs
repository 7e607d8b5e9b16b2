use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::sorter::ResultSet;
use crate::strategy::Strategy;
use crate::validate::Parent;
use crate::SieveError;

/// Where the results of `strategy` for `parent` are written under `root`.
pub fn result_path(root: &Path, parent: &Parent, strategy: Strategy) -> PathBuf {
    root.join(parent.bare())
        .join(format!("{}_planets.txt", strategy.file_stem()))
}

/// Names joined by newlines, without a trailing newline.
pub fn render_results(results: &ResultSet) -> String {
    results.as_slice().join("\n")
}

/// Write one result file, creating directories and replacing any old file.
pub fn write_results(
    root: &Path,
    parent: &Parent,
    strategy: Strategy,
    results: &ResultSet,
) -> Result<PathBuf, SieveError> {
    let path = result_path(root, parent, strategy);
    let wrap = |source: std::io::Error| SieveError::Output {
        path: path.clone(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(wrap)?;
    }
    fs::write(&path, render_results(results)).map_err(wrap)?;
    debug!(path = %path.display(), names = results.len(), "wrote results");
    Ok(path)
}
