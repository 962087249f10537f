//! Writing rendered files to disk.
//!
//! Writes are plain overwrites, not atomic: an interrupted write can leave a
//! truncated file behind.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create `path` if absent, then replace its contents with `content`.
pub fn write_output(path: &Path, content: impl AsRef<[u8]>) -> Result<()> {
    let content = content.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed opening output file: {}", path.display()))?;
    file.write_all(content)
        .with_context(|| format!("Failed writing output file: {}", path.display()))?;

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Write several already-rendered files, in order.
pub fn write_all(outputs: &[(PathBuf, String)]) -> Result<()> {
    for (path, content) in outputs {
        write_output(path, content)?;
    }
    Ok(())
}
