//! Contains the [CodecAdapter] trait and the [CodecKind] enum of every codec that can be benchmarked
//!
//! Each codec lives in its own submodule and implements [CodecAdapter].
//! Adapters that need a codec specific representation of the [Fixture] convert to and from it internally,
//! callers only ever see the [Fixture].

use crate::error::BenchResult;
use crate::fixture::Fixture;

pub mod json;
pub mod msgpack;
pub mod native;
pub mod schema;
pub mod xml;
pub mod yaml;

/// Uniform encode/decode interface implemented once per codec
///
/// Adapters are stateless, every [CodecAdapter::decode] call builds a fresh [Fixture].
/// They never perform I/O.
pub trait CodecAdapter {
    /// Which codec this adapter implements
    fn kind(&self) -> CodecKind;
    /// Serialize the fixture
    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>>;
    /// Deserialize a fixture from bytes produced by [CodecAdapter::encode]
    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture>;

    /// Human readable name of the codec
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl<T> CodecAdapter for &T
where
    T: CodecAdapter + ?Sized,
{
    fn kind(&self) -> CodecKind {
        (**self).kind()
    }
    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        (**self).encode(fixture)
    }
    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        (**self).decode(bytes)
    }
}

impl<T> CodecAdapter for Box<T>
where
    T: CodecAdapter + ?Sized,
{
    fn kind(&self) -> CodecKind {
        (**self).kind()
    }
    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        (**self).encode(fixture)
    }
    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        (**self).decode(bytes)
    }
}

/// All the codecs that can be benchmarked, in the order they are benchmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum CodecKind {
    /// Rust native binary format (bincode)
    #[value(name = "native")]
    NativeBinary,
    /// JSON (serde_json)
    #[value(name = "json")]
    Json,
    /// XML (quick-xml)
    #[value(name = "xml")]
    Xml,
    /// Schema based binary format (protobuf through prost)
    #[value(name = "proto")]
    SchemaBinary,
    /// Human readable structured text (YAML)
    #[value(name = "yaml")]
    StructuredText,
    /// Compact binary map format (MessagePack)
    #[value(name = "msgpack")]
    CompactBinaryMap,
}

impl CodecKind {
    /// Every codec in canonical order
    pub const ALL: [CodecKind; 6] = [
        CodecKind::NativeBinary,
        CodecKind::Json,
        CodecKind::Xml,
        CodecKind::SchemaBinary,
        CodecKind::StructuredText,
        CodecKind::CompactBinaryMap,
    ];

    /// Name shown in the report
    pub fn name(self) -> &'static str {
        match self {
            CodecKind::NativeBinary => "bincode",
            CodecKind::Json => "JSON",
            CodecKind::Xml => "XML",
            CodecKind::SchemaBinary => "protobuf",
            CodecKind::StructuredText => "YAML",
            CodecKind::CompactBinaryMap => "MessagePack",
        }
    }

    /// Short name, used as the artifact key
    pub fn key(self) -> &'static str {
        match self {
            CodecKind::NativeBinary => "native",
            CodecKind::Json => "json",
            CodecKind::Xml => "xml",
            CodecKind::SchemaBinary => "proto",
            CodecKind::StructuredText => "yaml",
            CodecKind::CompactBinaryMap => "msgpack",
        }
    }

    /// File extension of a stored artifact
    pub fn extension(self) -> &'static str {
        match self {
            CodecKind::NativeBinary => "bin",
            CodecKind::Json => "json",
            CodecKind::Xml => "xml",
            CodecKind::SchemaBinary => "pb",
            CodecKind::StructuredText => "yaml",
            CodecKind::CompactBinaryMap => "msgpack",
        }
    }

    /// Look up a codec from its artifact key
    pub fn from_key(key: &str) -> Option<CodecKind> {
        CodecKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Instantiate the adapter for this codec
    pub fn adapter(self) -> Box<dyn CodecAdapter> {
        match self {
            CodecKind::NativeBinary => Box::new(native::NativeBinary),
            CodecKind::Json => Box::new(json::Json),
            CodecKind::Xml => Box::new(xml::Xml),
            CodecKind::SchemaBinary => Box::new(schema::SchemaBinary),
            CodecKind::StructuredText => Box::new(yaml::StructuredText),
            CodecKind::CompactBinaryMap => Box::new(msgpack::CompactBinaryMap),
        }
    }
}

impl std::fmt::Display for CodecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
