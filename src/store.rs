//! Contains the [ArtifactStore] trait for persisting encoded artifacts, and its implementations
//!
//! The benchmark only assumes that a [ArtifactStore::fetch] following a [ArtifactStore::store] of the same key
//! returns the stored bytes unchanged.

pub mod file_store;
pub mod mem_store;

pub use file_store::FileStore;
pub use mem_store::MemStore;

use crate::error::BenchResult;

/// Durable byte store keyed by artifact name
pub trait ArtifactStore {
    /// Write `bytes` under `key`, replacing anything stored there before.
    fn store(&mut self, key: &str, bytes: &[u8]) -> BenchResult<()>;
    /// Read back the bytes stored under `key`.
    fn fetch(&self, key: &str) -> BenchResult<Vec<u8>>;
}

impl<T> ArtifactStore for &mut T
where
    T: ArtifactStore + ?Sized,
{
    fn store(&mut self, key: &str, bytes: &[u8]) -> BenchResult<()> {
        (**self).store(key, bytes)
    }
    fn fetch(&self, key: &str) -> BenchResult<Vec<u8>> {
        (**self).fetch(key)
    }
}

impl<T> ArtifactStore for Box<T>
where
    T: ArtifactStore + ?Sized,
{
    fn store(&mut self, key: &str, bytes: &[u8]) -> BenchResult<()> {
        (**self).store(key, bytes)
    }
    fn fetch(&self, key: &str) -> BenchResult<Vec<u8>> {
        (**self).fetch(key)
    }
}
