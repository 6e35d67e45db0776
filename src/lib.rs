#![warn(unused_extern_crates)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
// Readability lints
#![warn(
    clippy::option_filter_map,
    clippy::manual_filter_map,
    clippy::if_not_else,
    clippy::nonminimal_bool,
    clippy::single_match_else,
    clippy::range_plus_one,
    clippy::int_plus_one,
    clippy::needless_range_loop,
    clippy::needless_continue,
    clippy::shadow_same,
    clippy::shadow_unrelated
)]
// Performance lints
#![warn(variant_size_differences)]
#![warn(
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,
    clippy::mutex_integer,
    clippy::mem_forget,
    clippy::maybe_infinite_iter
)]
// Safety lints
#![warn(unused_results)]
#![warn(unused_import_braces)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(clippy::map_unwrap_or)]

//! serbench compares the encoded size and the encode/decode speed of serialization codecs on one fixed fixture
//!
//! Supported codecs: bincode, JSON, XML, protobuf, YAML and MessagePack.
//!
//! # Usage
//!
//! ## Benchmark every codec with the default fixture and 1000 trials
//! ```shell
//! $ serbench
//! ```
//!
//! ## Only the binary codecs, 100 trials each
//! ```shell
//! $ serbench -c native,proto,msgpack -n 100
//! ```
//!
//! ## Smaller fixture, artifacts written to `/tmp/artifacts`
//! ```shell
//! $ serbench --service-ids 10 --additional-items 5 --dictionary-entries 10 -o /tmp/artifacts
//! ```
//!
//! ## Also print the results as JSON
//! ```shell
//! $ serbench -S stdout -D json
//! ```
//!
//! # Library use
//!
//! ```
//! use serbench::codec::{CodecAdapter, CodecKind};
//! use serbench::fixture::{generate, FixtureSize};
//! use serbench::store::{ArtifactStore, MemStore};
//! use serbench::trial::{run_decode_trials, run_encode_trials};
//!
//! let fixture = generate(FixtureSize::default());
//! let adapter = CodecKind::Json.adapter();
//! let mut store = MemStore::new();
//!
//! let encoded = run_encode_trials(&*adapter, &fixture, 10).unwrap();
//! store.store(adapter.kind().key(), &encoded.artifact).unwrap();
//! let decode_latency = run_decode_trials(&*adapter, &store, "json", 10).unwrap();
//! println!("{} bytes, {:?} / {:?}", encoded.encoded_size(), encoded.mean_latency, decode_latency);
//! ```

/// Write an error message to stderr.
/// All error messages should be written through this function to ensure consistency.
#[inline]
pub fn display_error(err_msg: &str) {
    log::error!("{}", owo_colors::OwoColorize::red(&err_msg));
}

pub mod bench;
pub mod codec;
pub mod config;
pub mod error;
pub mod fixture;
pub mod init;
pub mod report;
pub mod store;
pub mod trial;
pub mod util;
