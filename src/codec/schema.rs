//! Schema based binary format (protobuf), backed by `prost`
//!
//! The message types below are what `prost-build` would generate from:
//!
//! ```proto
//! syntax = "proto3";
//! message Fixture {
//!   message Additional {
//!     string text = 1;
//!     repeated string items = 2;
//!   }
//!   string name = 1;
//!   int32 id = 2;
//!   repeated uint32 service_ids = 3;
//!   repeated Additional additional_items = 4;
//!   map<string, float> dictionary = 5;
//! }
//! ```

use super::{CodecAdapter, CodecKind};
use crate::error::{BenchError, BenchResult};
use crate::fixture::{Additional, Fixture};
use prost::Message;
use std::collections::HashMap;

/// Encodes the [Fixture] through its protobuf message equivalent
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaBinary;

#[derive(Clone, PartialEq, prost::Message)]
struct SchemaFixture {
    #[prost(string, tag = "1")]
    name: String,
    #[prost(int32, tag = "2")]
    id: i32,
    #[prost(uint32, repeated, tag = "3")]
    service_ids: Vec<u32>,
    #[prost(message, repeated, tag = "4")]
    additional_items: Vec<SchemaAdditional>,
    #[prost(map = "string, float", tag = "5")]
    dictionary: HashMap<String, f32>,
}

#[derive(Clone, PartialEq, prost::Message)]
struct SchemaAdditional {
    #[prost(string, tag = "1")]
    text: String,
    #[prost(string, repeated, tag = "2")]
    items: Vec<String>,
}

impl From<&Fixture> for SchemaFixture {
    fn from(fixture: &Fixture) -> Self {
        Self {
            name: fixture.name.clone(),
            id: fixture.id,
            service_ids: fixture.service_ids.clone(),
            additional_items: fixture
                .additional_items
                .iter()
                .map(|a| SchemaAdditional {
                    text: a.text.clone(),
                    items: a.items.clone(),
                })
                .collect(),
            dictionary: fixture
                .dictionary
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        }
    }
}

impl From<SchemaFixture> for Fixture {
    fn from(msg: SchemaFixture) -> Self {
        Self {
            name: msg.name,
            id: msg.id,
            service_ids: msg.service_ids,
            additional_items: msg
                .additional_items
                .into_iter()
                .map(|a| Additional {
                    text: a.text,
                    items: a.items,
                })
                .collect(),
            dictionary: msg.dictionary.into_iter().collect(),
        }
    }
}

impl CodecAdapter for SchemaBinary {
    fn kind(&self) -> CodecKind {
        CodecKind::SchemaBinary
    }

    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        let msg = SchemaFixture::from(fixture);
        let mut buf = Vec::with_capacity(msg.encoded_len());
        msg.encode(&mut buf)
            .map_err(|e| BenchError::encode(self.name(), e))?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        SchemaFixture::decode(bytes)
            .map(Fixture::from)
            .map_err(|e| BenchError::decode(self.name(), e))
    }
}
