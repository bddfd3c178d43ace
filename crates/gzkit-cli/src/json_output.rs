//! JSON output structures for the gzkit CLI

use gzkit_codec::TranscodeStats;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of one file operation, printed as a single JSON line
#[derive(Debug, Serialize, Deserialize)]
pub struct FileResultJson {
    /// gzkit version
    pub version: String,
    /// Operation type ("compress" or "decompress")
    pub operation: String,
    /// Input path
    pub input: String,
    /// Output path
    pub output: String,
    /// Transfer counters
    #[serde(flatten)]
    pub stats: TranscodeStats,
    /// Output size relative to input size
    pub ratio: f64,
}

impl FileResultJson {
    /// Build the record for a finished file operation
    pub fn new(operation: &str, input: &Path, output: &Path, stats: &TranscodeStats) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            operation: operation.to_string(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            stats: *stats,
            ratio: stats.ratio(),
        }
    }

    /// Serialize as one line of JSON
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
