//! JSON, backed by `serde_json`

use super::{CodecAdapter, CodecKind};
use crate::error::{BenchError, BenchResult};
use crate::fixture::Fixture;

/// Compact (not pretty printed) JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct Json;

impl CodecAdapter for Json {
    fn kind(&self) -> CodecKind {
        CodecKind::Json
    }

    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        serde_json::to_vec(fixture).map_err(|e| BenchError::encode(self.name(), e))
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        serde_json::from_slice::<Fixture>(bytes).map_err(|e| BenchError::decode(self.name(), e))
    }
}
