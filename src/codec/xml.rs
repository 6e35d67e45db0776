//! XML, backed by `quick-xml`'s serde support
//!
//! XML has no native map construct, so the dictionary is flattened into two parallel sequences
//! of keys and values. The element at index `i` of one belongs to the element at index `i` of the other.

use super::{CodecAdapter, CodecKind};
use crate::error::{BenchError, BenchResult};
use crate::fixture::{Additional, Fixture};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Encodes the [Fixture] through a flattened XML view of it
#[derive(Debug, Default, Clone, Copy)]
pub struct Xml;

/// Borrowing view used when encoding, avoids cloning the fixture on every trial
#[derive(Serialize)]
#[serde(rename = "fixture")]
struct XmlFixtureRef<'a> {
    name: &'a str,
    id: i32,
    #[serde(rename = "service_id")]
    service_ids: &'a [u32],
    #[serde(rename = "additional")]
    additional_items: Vec<XmlAdditionalRef<'a>>,
    #[serde(rename = "dictionary_key")]
    dictionary_keys: Vec<&'a str>,
    #[serde(rename = "dictionary_value")]
    dictionary_values: Vec<f32>,
}

#[derive(Serialize)]
struct XmlAdditionalRef<'a> {
    text: &'a str,
    #[serde(rename = "item")]
    items: &'a [String],
}

/// Owned view used when decoding
///
/// Empty sequences produce no elements at all, hence the defaults.
#[derive(Deserialize)]
#[serde(rename = "fixture")]
struct XmlFixture {
    name: String,
    id: i32,
    #[serde(default, rename = "service_id")]
    service_ids: Vec<u32>,
    #[serde(default, rename = "additional")]
    additional_items: Vec<XmlAdditional>,
    #[serde(default, rename = "dictionary_key")]
    dictionary_keys: Vec<String>,
    #[serde(default, rename = "dictionary_value")]
    dictionary_values: Vec<f32>,
}

#[derive(Deserialize)]
struct XmlAdditional {
    text: String,
    #[serde(default, rename = "item")]
    items: Vec<String>,
}

impl<'a> From<&'a Fixture> for XmlFixtureRef<'a> {
    fn from(fixture: &'a Fixture) -> Self {
        let (dictionary_keys, dictionary_values) = fixture
            .dictionary
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .unzip();
        Self {
            name: &fixture.name,
            id: fixture.id,
            service_ids: &fixture.service_ids,
            additional_items: fixture
                .additional_items
                .iter()
                .map(|a| XmlAdditionalRef {
                    text: &a.text,
                    items: &a.items,
                })
                .collect(),
            dictionary_keys,
            dictionary_values,
        }
    }
}

impl TryFrom<XmlFixture> for Fixture {
    type Error = String;

    fn try_from(view: XmlFixture) -> Result<Self, Self::Error> {
        if view.dictionary_keys.len() != view.dictionary_values.len() {
            return Err(format!(
                "dictionary has {} keys but {} values",
                view.dictionary_keys.len(),
                view.dictionary_values.len()
            ));
        }
        let key_count = view.dictionary_keys.len();
        let dictionary: IndexMap<String, f32> = view
            .dictionary_keys
            .into_iter()
            .zip(view.dictionary_values)
            .collect();
        if dictionary.len() != key_count {
            return Err(format!(
                "dictionary has {} duplicate keys",
                key_count - dictionary.len()
            ));
        }
        Ok(Fixture {
            name: view.name,
            id: view.id,
            service_ids: view.service_ids,
            additional_items: view
                .additional_items
                .into_iter()
                .map(|a| Additional {
                    text: a.text,
                    items: a.items,
                })
                .collect(),
            dictionary,
        })
    }
}

impl CodecAdapter for Xml {
    fn kind(&self) -> CodecKind {
        CodecKind::Xml
    }

    fn encode(&self, fixture: &Fixture) -> BenchResult<Vec<u8>> {
        quick_xml::se::to_string(&XmlFixtureRef::from(fixture))
            .map(String::into_bytes)
            .map_err(|e| BenchError::encode(self.name(), e))
    }

    fn decode(&self, bytes: &[u8]) -> BenchResult<Fixture> {
        let view: XmlFixture =
            quick_xml::de::from_reader(bytes).map_err(|e| BenchError::decode(self.name(), e))?;
        Fixture::try_from(view).map_err(|e| BenchError::decode(self.name(), e))
    }
}
