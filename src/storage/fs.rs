use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AggregatorError, AggregatorResult};
use crate::storage::traits::OutputStore;

/// Writes output files below a root directory, creating directories as needed.
#[derive(Debug, Clone)]
pub struct FsOutputStore {
    root: PathBuf,
}

impl FsOutputStore {
    pub fn new<P: AsRef<Path>>(root: P) -> AggregatorResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| AggregatorError::Write {
            location: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn path_of(&self, location: &str) -> PathBuf {
        location
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl OutputStore for FsOutputStore {
    fn write(&self, location: &str, contents: &[u8]) -> AggregatorResult<()> {
        let path = self.path_of(location);
        let to_error = |source| AggregatorError::Write {
            location: location.to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        fs::write(&path, contents).map_err(to_error)
    }
}
