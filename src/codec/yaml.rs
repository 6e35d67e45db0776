//! Human readable structured text (YAML), backed by `serde_yaml`

use super::{CodecAdapter, CodecKind};
use crate::error::{BenchError, BenchResult};
use crate::fixture::Fixture;

/// Block style YAML document
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredText;

impl CodecAdapter for StructuredText {
    fn kind(&self) -> CodecKind {
        CodecKind::StructuredText
    }

    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        serde_yaml::to_string(fixture)
            .map(String::into_bytes)
            .map_err(|e| BenchError::encode(self.name(), e))
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        serde_yaml::from_slice::<Fixture>(bytes).map_err(|e| BenchError::decode(self.name(), e))
    }
}
