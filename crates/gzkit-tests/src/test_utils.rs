//! Unified test utilities for gzkit tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test data generation patterns
#[derive(Debug, Clone, Copy)]
pub enum TestDataPattern {
    /// All zeros - highly compressible
    Zeros,
    /// Deterministic pseudo-random bytes - incompressible
    Random,
    /// Mixed compressible/incompressible data
    Mixed,
    /// Repeated lines of ASCII text
    Text,
}

impl TestDataPattern {
    /// Every pattern, for parameterized tests
    pub const ALL: [Self; 4] = [Self::Zeros, Self::Random, Self::Mixed, Self::Text];
}

/// Generate test data with specified pattern
///
/// The output depends only on `size` and `pattern`, so failures reproduce.
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Zeros => vec![0u8; size],
        TestDataPattern::Random => {
            // xorshift64, fixed seed
            let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
            (0..size)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    (state >> 24) as u8
                })
                .collect()
        }
        TestDataPattern::Mixed => (0..size)
            .map(|i| match i % 1000 {
                0..=99 => 0,
                100..=199 => 255,
                _ => (i % 256) as u8,
            })
            .collect(),
        TestDataPattern::Text => {
            const LINE: &[u8] = b"The quick brown fox jumps over the lazy dog.\n";
            LINE.iter().copied().cycle().take(size).collect()
        }
    }
}

/// Create a file in `temp_dir` filled with `pattern` data
pub fn create_test_file(
    temp_dir: &TempDir,
    name: &str,
    size: usize,
    pattern: TestDataPattern,
) -> PathBuf {
    let file_path = temp_dir.path().join(name);
    let data = generate_test_data(size, pattern);
    fs::write(&file_path, data).expect("Failed to write test file");
    file_path
}

/// Path of a bundled gzip fixture
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Common payload sizes for round-trip tests
pub struct CommonSizes;

impl CommonSizes {
    /// Empty payload
    pub const EMPTY: usize = 0;
    /// A single byte
    pub const BYTE: usize = 1;
    /// 4KB
    pub const SMALL: usize = 4 * 1024;
    /// 1MB
    pub const LARGE: usize = 1024 * 1024;

    /// All sizes above
    pub fn all() -> Vec<(&'static str, usize)> {
        vec![
            ("empty", Self::EMPTY),
            ("1B", Self::BYTE),
            ("4KB", Self::SMALL),
            ("1MB", Self::LARGE),
        ]
    }
}
