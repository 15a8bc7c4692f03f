//! Source discovery and parallel extraction

use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::analysis::{FunctionDescriptor, ParseCause, ParseError, go_source};

/// Extension of the files picked up when walking a directory
pub const SOURCE_EXTENSION: &str = "go";

/// Extract descriptors from a single file.
pub fn extract_file(path: &Path) -> Result<Vec<FunctionDescriptor>, ParseError> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| ParseError::new(path, ParseCause::Io(e)))?;
    extract_source(path, &source)
}

/// Extract descriptors from in-memory source. `path` labels the origin and
/// any error.
pub fn extract_source(path: &Path, source: &str) -> Result<Vec<FunctionDescriptor>, ParseError> {
    let functions =
        go_source::parse_declarations(path, source).map_err(|cause| ParseError::new(path, cause))?;
    debug!(
        path = %path.display(),
        functions = functions.len(),
        "Extracted declarations"
    );
    Ok(functions)
}

/// List the source files under `root` in lexicographic path order.
///
/// A file root is returned as-is whatever its extension; a directory root is
/// walked recursively and only `*.go` files are kept.
pub fn discover_sources(root: &Path) -> Result<Vec<PathBuf>, ParseError> {
    let metadata =
        std::fs::metadata(root).map_err(|e| ParseError::new(root, ParseCause::Io(e)))?;
    if metadata.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ParseError::new(path, ParseCause::Io(e.into()))
        })?;

        let is_source = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|ext| ext == SOURCE_EXTENSION);
        if is_source {
            sources.push(entry.into_path());
        }
    }

    sources.sort();
    Ok(sources)
}

/// Extract every declaration under `root`.
///
/// Files are parsed concurrently on the blocking pool; the result is
/// concatenated in [`discover_sources`] order. The first failing file aborts
/// the extraction.
pub async fn extract_path(root: &Path) -> Result<Vec<FunctionDescriptor>, ParseError> {
    let sources = discover_sources(root)?;
    info!(
        root = %root.display(),
        files = sources.len(),
        "Discovered source files"
    );

    let jobs = sources.into_iter().map(|path| async move {
        let label = path.clone();
        tokio::task::spawn_blocking(move || extract_file(&path))
            .await
            .map_err(|e| ParseError::new(label, ParseCause::Io(std::io::Error::other(e))))?
    });

    let per_file = try_join_all(jobs).await?;
    let functions: Vec<FunctionDescriptor> = per_file.into_iter().flatten().collect();

    info!(functions = functions.len(), "Extraction complete");
    Ok(functions)
}
