//! The [Report] collects one result row per codec and renders them as a table at the end of the run
//!
//! Rows keep the order they were recorded in. The rows can also be written out as JSON or TOML with [Report::write_stats].
mod table_formatter_utils;

use crate::config::inputoutput::{DataOutputFormat, DataOutputMode};
use crate::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use table_formatter_utils::{format_codec_sub_table, format_super_table};
use tabled::{Table, Tabled};

/// Result of benchmarking one codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecSummary {
    /// Display name of the codec
    pub codec: String,
    /// Length of the encoded artifact in bytes
    pub encoded_size_bytes: usize,
    /// Mean latency of one encode in nanoseconds
    pub encode_latency_ns: u64,
    /// Mean latency of one fetch+decode cycle in nanoseconds
    pub decode_latency_ns: u64,
}

impl CodecSummary {
    /// Mean encode latency
    pub fn encode_latency(&self) -> Duration {
        Duration::from_nanos(self.encode_latency_ns)
    }

    /// Mean fetch+decode latency
    pub fn decode_latency(&self) -> Duration {
        Duration::from_nanos(self.decode_latency_ns)
    }
}

/// Describes the columns of the report table
#[derive(Tabled)]
struct CodecRow {
    codec: String,
    #[tabled(rename = "size (bytes)")]
    size: usize,
    #[tabled(rename = "encode")]
    encode_latency: String,
    #[tabled(rename = "decode")]
    decode_latency: String,
}

impl From<&CodecSummary> for CodecRow {
    fn from(summary: &CodecSummary) -> Self {
        Self {
            codec: summary.codec.clone(),
            size: summary.encoded_size_bytes,
            encode_latency: format!("{:.02?}", summary.encode_latency()),
            decode_latency: format!("{:.02?}", summary.decode_latency()),
        }
    }
}

/// Layout of the stats written by [Report::write_stats]
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct StatsOutput {
    total_time_ns: u64,
    codecs: Vec<CodecSummary>,
}

/// Saturating conversion, a mean latency never comes close to 584 years
fn as_nanos_u64(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Collects the per-codec results and renders them as the report table
///
/// The footer shows the wall time from [Report::new] until [Report::finish] (or until rendering, if never finished).
#[derive(Debug)]
pub struct Report {
    rows: Vec<CodecSummary>,
    started: Instant,
    processing_time: Option<Duration>,
    styled: bool,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    /// Create an empty report, the benchmark wall clock starts now
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            started: Instant::now(),
            processing_time: None,
            styled: true,
        }
    }

    /// Enable or disable colours in the rendered table
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Append the result of one codec
    pub fn record(
        &mut self,
        codec_name: &str,
        encoded_size_bytes: usize,
        encode_latency: Duration,
        decode_latency: Duration,
    ) {
        self.rows.push(CodecSummary {
            codec: codec_name.to_string(),
            encoded_size_bytes,
            encode_latency_ns: as_nanos_u64(encode_latency),
            decode_latency_ns: as_nanos_u64(decode_latency),
        });
    }

    /// Stop the benchmark wall clock
    pub fn finish(&mut self) {
        self.processing_time = Some(self.started.elapsed());
    }

    /// Rows in the order they were recorded
    pub fn rows(&self) -> &[CodecSummary] {
        &self.rows
    }

    /// Total benchmark wall time
    pub fn processing_time(&self) -> Duration {
        self.processing_time
            .unwrap_or_else(|| self.started.elapsed())
    }

    /// Render the report table
    pub fn render(&self) -> String {
        let mut codec_table = Table::new(self.rows.iter().map(CodecRow::from));
        format_codec_sub_table(&mut codec_table, self.styled);
        let mut multi_table = tabled::col![codec_table];
        let multi_table = multi_table.with(tabled::settings::Style::rounded());
        format_super_table(multi_table, self.processing_time(), self.styled).to_string()
    }

    /// Write the report table to `out`, followed by a newline
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    /// Print the report table to stdout
    pub fn print(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()
    }

    /// Serialize the rows to JSON or TOML and write them to the destination of `mode`
    pub fn write_stats(&self, mode: &DataOutputMode, format: DataOutputFormat) -> BenchResult<()> {
        if *mode == DataOutputMode::None {
            return Ok(());
        }
        let stats_str = self.stats_string(format)?;
        write_stats_str(mode, &stats_str)
    }

    fn stats_string(&self, format: DataOutputFormat) -> BenchResult<String> {
        let stats = StatsOutput {
            total_time_ns: as_nanos_u64(self.processing_time()),
            codecs: self.rows.clone(),
        };
        match format {
            DataOutputFormat::JSON => serde_json::to_string_pretty(&stats)
                .map_err(|e| BenchError::encode("JSON stats", e)),
            DataOutputFormat::TOML => {
                toml::to_string_pretty(&stats).map_err(|e| BenchError::encode("TOML stats", e))
            }
        }
    }
}

fn write_stats_str(mode: &DataOutputMode, stats_str: &str) -> BenchResult<()> {
    match mode {
        DataOutputMode::File(path) => std::fs::write(path, stats_str)
            .map_err(|e| BenchError::store_failed(&path.to_string_lossy(), e)),
        DataOutputMode::Stdout => {
            println!("{stats_str}");
            Ok(())
        }
        DataOutputMode::None => Ok(()),
    }
}
