//! Compact binary map format (MessagePack), backed by `rmp-serde`

use super::{CodecAdapter, CodecKind};
use crate::error::{BenchError, BenchResult};
use crate::fixture::Fixture;

/// MessagePack with structs written as maps keyed by field name
///
/// `rmp_serde::to_vec` would write structs as positional arrays, which is a different (smaller) format.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompactBinaryMap;

impl CodecAdapter for CompactBinaryMap {
    fn kind(&self) -> CodecKind {
        CodecKind::CompactBinaryMap
    }

    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        rmp_serde::to_vec_named(fixture).map_err(|e| BenchError::encode(self.name(), e))
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        rmp_serde::from_slice::<Fixture>(bytes).map_err(|e| BenchError::decode(self.name(), e))
    }
}
