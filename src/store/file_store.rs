//! Writes artifacts to files in an output directory, one file per key.
//!
//! The file name is the key followed by the extension of the codec that owns the key, e.g. `out/json.json`.
//! Files are overwritten on each run, and synced to disk before [ArtifactStore::store] returns.

use super::ArtifactStore;
use crate::codec::CodecKind;
use crate::config::inputoutput::InputOutputOpt;
use crate::error::{BenchError, BenchResult};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extension used for keys that don't belong to a known codec
const FALLBACK_EXTENSION: &str = "out";

/// A [ArtifactStore] backed by the file system.
#[derive(Debug, Clone)]
pub struct FileStore {
    out_dir: PathBuf,
}

impl FileStore {
    /// Create a store that keeps its files in `out_dir`. The directory is created on first store.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Create a store in the artifact directory from a config.
    pub fn from_config(config: &impl InputOutputOpt) -> Self {
        Self::new(config.out_dir())
    }

    /// Directory the artifacts are written to
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path of the file that holds the artifact stored under `key`
    pub fn artifact_path(&self, key: &str) -> PathBuf {
        let extension = CodecKind::from_key(key).map_or(FALLBACK_EXTENSION, CodecKind::extension);
        self.out_dir.join(format!("{key}.{extension}"))
    }
}

impl ArtifactStore for FileStore {
    fn store(&mut self, key: &str, bytes: &[u8]) -> BenchResult<()> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| BenchError::store_failed(key, e))?;
        let path = self.artifact_path(key);
        log::trace!("Writing {} bytes to {}", bytes.len(), path.display());
        let mut file = std::fs::File::create(&path).map_err(|e| BenchError::store_failed(key, e))?;
        file.write_all(bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| BenchError::store_failed(key, e))
    }

    fn fetch(&self, key: &str) -> BenchResult<Vec<u8>> {
        std::fs::read(self.artifact_path(key)).map_err(|e| BenchError::fetch_failed(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoFailure;
    use pretty_assertions::assert_eq;
    use temp_dir::TempDir;

    #[test]
    fn store_then_fetch_round_trips() {
        let tmp_d = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp_d.path());
        store.store("native", &[1, 2, 3, 0xFF]).unwrap();
        assert_eq!(store.fetch("native").unwrap(), vec![1, 2, 3, 0xFF]);
        assert!(tmp_d.child("native.bin").is_file());
    }

    #[test]
    fn creates_missing_out_dir() {
        let tmp_d = TempDir::new().unwrap();
        let nested = tmp_d.child("out").join("nested");
        let mut store = FileStore::new(&nested);
        store.store("json", b"{}").unwrap();
        assert!(nested.join("json.json").is_file());
    }

    #[test]
    fn store_overwrites_previous_artifact() {
        let tmp_d = TempDir::new().unwrap();
        let mut store = FileStore::new(tmp_d.path());
        store.store("yaml", b"a: 1\nb: 2\n").unwrap();
        store.store("yaml", b"a: 1\n").unwrap();
        assert_eq!(store.fetch("yaml").unwrap(), b"a: 1\n");
    }

    #[test]
    fn fetch_missing_is_not_found() {
        let tmp_d = TempDir::new().unwrap();
        let store = FileStore::new(tmp_d.path());
        let err = store.fetch("xml").unwrap_err();
        assert_eq!(err.io_failure(), Some(IoFailure::NotFound));
    }

    #[test]
    fn store_into_a_file_path_is_write_failure() {
        let tmp_d = TempDir::new().unwrap();
        let not_a_dir = tmp_d.child("file");
        std::fs::write(&not_a_dir, b"x").unwrap();
        let mut store = FileStore::new(&not_a_dir);
        let err = store.store("proto", b"bytes").unwrap_err();
        assert_eq!(err.io_failure(), Some(IoFailure::WriteFailure));
    }

    #[test]
    fn artifact_path_uses_codec_extension() {
        let store = FileStore::new("out");
        assert_eq!(store.artifact_path("proto"), Path::new("out/proto.pb"));
        assert_eq!(store.artifact_path("msgpack"), Path::new("out/msgpack.msgpack"));
        assert_eq!(store.artifact_path("other"), Path::new("out/other.out"));
    }
}
