//! File sink adapter using std::fs.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use stratus_core::{
    application::{ApplicationError, ports::DocumentSink},
    error::{StratusError, StratusResult},
};

/// Writes the document to a file on disk.
///
/// Parent directories are created as needed. An existing file is only
/// replaced when the sink was built with [`FileSink::overwrite`].
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    overwrite: bool,
}

impl FileSink {
    /// Create a sink that refuses to replace an existing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overwrite: false,
        }
    }

    /// Allow (or forbid) replacing an existing file.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileSink {
    fn write(&self, contents: &str) -> StratusResult<()> {
        if self.path.exists() && !self.overwrite {
            return Err(ApplicationError::DestinationExists {
                path: self.path.clone(),
            }
            .into());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| map_io_error(parent, e, "create directory"))?;
            }
        }

        std::fs::write(&self.path, contents)
            .map_err(|e| map_io_error(&self.path, e, "write file"))?;
        debug!(path = %self.path.display(), bytes = contents.len(), "Document written");
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StratusError {
    ApplicationError::SinkFailed {
        destination: path.display().to_string(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/stack.json");

        FileSink::new(&path).write("{}\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn refuses_to_replace_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stack.json");
        std::fs::write(&path, "old").unwrap();

        let err = FileSink::new(&path).write("new").unwrap_err();

        assert!(matches!(
            err,
            StratusError::Application(ApplicationError::DestinationExists { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn overwrite_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stack.json");
        std::fs::write(&path, "old").unwrap();

        FileSink::new(&path).overwrite(true).write("new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn destination_is_the_path() {
        let sink = FileSink::new("out/stack.json");
        assert_eq!(sink.destination(), Path::new("out/stack.json").display().to_string());
    }
}
