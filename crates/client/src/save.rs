use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Name used when the caller and the server both fail to suggest one.
pub const DEFAULT_FILENAME: &str = "document";

#[derive(Debug, Clone)]
pub struct SavedFile {
    pub path: PathBuf,
    pub size: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not persist downloaded file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Write `bytes` into `dir` under `suggested_name`.
///
/// The bytes go through a scoped temporary file in the destination
/// directory and are renamed into place only once fully written, so the
/// temporary handle is released on every exit path. Name collisions get a
/// numeric suffix (`report.pdf` -> `report (1).pdf`).
pub fn save_binary_as(
    dir: &Path,
    suggested_name: Option<&str>,
    bytes: &[u8],
) -> Result<SavedFile, SaveError> {
    let name = match suggested_name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_FILENAME,
    };
    let target = unique_target(dir, name);

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(&target)?;

    tracing::debug!(path = %target.display(), size = bytes.len(), "saved download");

    Ok(SavedFile {
        path: target,
        size: bytes.len() as u64,
    })
}

fn unique_target(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = split_name(name);
    let mut counter = 1;
    loop {
        let next = match extension {
            Some(extension) => format!("{} ({}).{}", stem, counter, extension),
            None => format!("{} ({})", stem, counter),
        };
        let candidate = dir.join(next);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
        _ => (name, None),
    }
}
