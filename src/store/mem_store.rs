//! In-memory [ArtifactStore], mostly useful for tests

use super::ArtifactStore;
use crate::error::{BenchError, BenchResult};
use std::collections::HashMap;
use std::io;

/// Keeps every artifact in a map
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    artifacts: HashMap<String, Vec<u8>>,
}

impl MemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True if nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactStore for MemStore {
    fn store(&mut self, key: &str, bytes: &[u8]) -> BenchResult<()> {
        let _ = self.artifacts.insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn fetch(&self, key: &str) -> BenchResult<Vec<u8>> {
        self.artifacts.get(key).cloned().ok_or_else(|| {
            BenchError::fetch_failed(
                key,
                io::Error::new(io::ErrorKind::NotFound, "no artifact stored under key"),
            )
        })
    }
}
