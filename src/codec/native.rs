//! Native Rust binary format, backed by `bincode`

use super::{CodecAdapter, CodecKind};
use crate::error::{BenchError, BenchResult};
use crate::fixture::Fixture;

/// Serializes the [Fixture] directly with bincode's default configuration
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBinary;

impl CodecAdapter for NativeBinary {
    fn kind(&self) -> CodecKind {
        CodecKind::NativeBinary
    }

    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        bincode::serialize(fixture).map_err(|e| BenchError::encode(self.name(), e))
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        bincode::deserialize::<Fixture>(bytes).map_err(|e| BenchError::decode(self.name(), e))
    }
}
