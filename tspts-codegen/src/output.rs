//! Rendered source files and the sinks they are written to.

use crate::error::CodegenError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A finalized, rendered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedSourceFile {
    /// Output path relative to the sink root.
    pub path: PathBuf,
    /// Rendered contents.
    pub contents: String,
}

/// Destination for rendered files.
pub trait OutputSink {
    /// Writes `contents` to `path`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the file cannot be written.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), CodegenError>;
}

/// Writes files below a root directory, creating parent directories.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    /// Creates a sink rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), CodegenError> {
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(CodegenError::output(path, "path must stay inside the output root"));
        }

        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, contents)?;
        Ok(())
    }
}

/// Collects files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contents written to `path`.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Returns the number of files written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Consumes the sink and returns the written files.
    #[must_use]
    pub fn into_files(self) -> BTreeMap<PathBuf, String> {
        self.files
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), CodegenError> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_sink_writes_nested_paths() {
        let dir = tempdir().expect("tempdir");
        let mut sink = FsSink::new(dir.path());

        sink.write(Path::new("out/models.ts"), "type A = {};\n")
            .expect("write");

        let written = fs::read_to_string(dir.path().join("out/models.ts")).expect("read");
        assert_eq!(written, "type A = {};\n");
        assert_eq!(sink.root(), dir.path());
    }

    #[test]
    fn test_fs_sink_rejects_escaping_paths() {
        let dir = tempdir().expect("tempdir");
        let mut sink = FsSink::new(dir.path());

        let err = sink
            .write(Path::new("../models.ts"), "")
            .expect_err("escaping path");
        assert!(matches!(err, CodegenError::Output { .. }));
        assert!(sink.write(Path::new("/tmp/models.ts"), "").is_err());
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write(Path::new("models.ts"), "x").expect("write");
        sink.write(Path::new("models.ts"), "y").expect("overwrite");

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get("models.ts"), Some("y"));
        assert_eq!(sink.into_files().len(), 1);
    }
}
