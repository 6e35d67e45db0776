//! Contains the [Fixture] that every codec is benchmarked against, and the [generate] function that builds it
//!
//! The fixture mixes the shapes codecs tend to treat differently:
//! a large homogeneous integer array, nested variable-length records, and a string keyed map of floats.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fixed label stored in [Fixture::name]
pub const FIXTURE_NAME: &str = "some_name";
/// Fixed identifier stored in [Fixture::id]
pub const FIXTURE_ID: i32 = 12345;

/// The object under test.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Fixture {
    /// Fixed text label.
    pub name: String,
    /// Fixed identifier.
    pub id: i32,
    /// `0..n` in ascending order.
    pub service_ids: Vec<u32>,
    /// Record `i` holds `i` strings.
    pub additional_items: Vec<Additional>,
    /// `"float{k}" -> k + k/100`, kept in insertion order.
    pub dictionary: IndexMap<String, f32>,
}

/// Nested record owned by a [Fixture].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Additional {
    /// `"some_string{i}"`
    pub text: String,
    /// `"str0" .. "str{i-1}"`
    pub items: Vec<String>,
}

// Dictionary equality ignores key order, codecs are free to reorder map entries.
impl PartialEq for Fixture {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.id == other.id
            && self.service_ids == other.service_ids
            && self.additional_items == other.additional_items
            && self.dictionary.len() == other.dictionary.len()
            && self
                .dictionary
                .iter()
                .all(|(k, v)| other.dictionary.get(k) == Some(v))
    }
}

/// Number of elements in each of the variable-length fields of a [Fixture].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSize {
    /// Length of [Fixture::service_ids]
    pub service_ids: u32,
    /// Length of [Fixture::additional_items]
    pub additional_items: u32,
    /// Entries in [Fixture::dictionary]
    pub dictionary_entries: u32,
}

impl FixtureSize {
    /// Canonical service ID count
    pub const SERVICE_IDS: u32 = 1000;
    /// Canonical additional item count
    pub const ADDITIONAL_ITEMS: u32 = 100;
    /// Canonical dictionary size
    pub const DICTIONARY_ENTRIES: u32 = 1000;
}

impl Default for FixtureSize {
    fn default() -> Self {
        Self {
            service_ids: Self::SERVICE_IDS,
            additional_items: Self::ADDITIONAL_ITEMS,
            dictionary_entries: Self::DICTIONARY_ENTRIES,
        }
    }
}

/// Builds the fixture for the given size. Pure and deterministic.
pub fn generate(size: FixtureSize) -> Fixture {
    let service_ids: Vec<u32> = (0..size.service_ids).collect();

    let additional_items = (0..size.additional_items)
        .map(|i| Additional {
            text: format!("some_string{i}"),
            items: (0..i).map(|j| format!("str{j}")).collect(),
        })
        .collect();

    let dictionary = (0..size.dictionary_entries)
        .map(|k| (format!("float{k}"), dictionary_value(k)))
        .collect();

    Fixture {
        name: FIXTURE_NAME.to_string(),
        id: FIXTURE_ID,
        service_ids,
        additional_items,
        dictionary,
    }
}

#[inline]
fn dictionary_value(k: u32) -> f32 {
    k as f32 + k as f32 / 100.0
}
