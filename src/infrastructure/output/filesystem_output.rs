//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::fs;

use crate::generation::{Artifact, EmitError, OutputService};

/// Mode given to every written artifact
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o644;

/// Output service that writes artifacts to the filesystem.
///
/// Content goes to a temporary file next to the target which is then renamed
/// over it, so a failed write never leaves a truncated artifact behind.
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

fn write_atomically(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifact(&self, artifact: &Artifact) -> Result<(), EmitError> {
        let path = artifact.path.clone();
        let content = artifact.content.clone();
        let target = path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&target, &content))
            .await
            .map_err(|e| EmitError::write(&path, std::io::Error::other(e)))?
            .map_err(|e| EmitError::write(&path, e))
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), EmitError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| EmitError::write(path, e))
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
