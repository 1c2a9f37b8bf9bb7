use super::BlobStore;
use crate::error::{NoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed blob store: one JSON file holding the whole collection.
pub struct FileBlob {
    path: PathBuf,
}

impl FileBlob {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<&Path> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| NoteError::Blob("blob path has no parent directory".to_string()))?;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(NoteError::Io)?;
        }
        Ok(dir)
    }
}

impl BlobStore for FileBlob {
    fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(NoteError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, value: &str) -> Result<()> {
        let dir = self.ensure_parent()?;

        // Write a sibling temp file, then rename over the target, so a
        // failed write never leaves a truncated blob behind.
        let temp = tempfile::NamedTempFile::new_in(dir).map_err(NoteError::Io)?;
        fs::write(temp.path(), value).map_err(NoteError::Io)?;
        temp.persist(&self.path)
            .map_err(|err| NoteError::Io(err.error))?;
        Ok(())
    }
}
