//! Exporting the current story card.

use std::fs;
use std::path::PathBuf;

use log::info;

use crate::{Error, Result};

/// Every export uses this filename, whatever the story.
pub const EXPORT_FILENAME: &str = "ColorStories_output.png";

/// Destination for exported artifacts.
pub trait ArtifactSink: Send + Sync {
    /// Persist `bytes` under `filename` and report where they went.
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Writes artifacts into a directory, replacing any previous file of the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::ExportError(format!("cannot create {}: {}", self.dir.display(), e))
        })?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)
            .map_err(|e| Error::ExportError(format!("cannot write {}: {}", path.display(), e)))?;
        info!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

/// In-memory sink that keeps every artifact it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: std::sync::Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far, oldest first.
    pub fn artifacts(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl ArtifactSink for MemorySink {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| Error::ExportError("memory sink poisoned".into()))?;
        saved.push((filename.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("colorstories-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn directory_sink_creates_dir_and_overwrites() {
        let dir = scratch_dir("sink");
        let sink = DirectorySink::new(&dir);
        let p1 = sink.save(EXPORT_FILENAME, b"first").unwrap();
        let p2 = sink.save(EXPORT_FILENAME, b"second").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.file_name().unwrap(), EXPORT_FILENAME);
        assert_eq!(fs::read(&p1).unwrap(), b"second");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_sink_records_artifacts_in_order() {
        let sink = MemorySink::new();
        sink.save("a.png", b"1").unwrap();
        sink.save("b.png", b"2").unwrap();
        let saved = sink.artifacts();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].0, "a.png");
        assert_eq!(saved[1].1, b"2".to_vec());
    }
}
