//! In-memory buffer transcoding

use crate::GzipCodec;
use gzkit_types::Result;

impl GzipCodec {
    /// Compress a byte slice into a new gzip buffer
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.compress_stream(data, &mut output)?;
        Ok(output)
    }

    /// Decompress a gzip buffer into a new byte buffer
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decompress_stream(data, &mut output)?;
        Ok(output)
    }
}

/// Compress a byte slice with the default codec
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    GzipCodec::default().compress(data)
}

/// Decompress a gzip buffer with the default codec
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    GzipCodec::default().decompress(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gzkit_types::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn test_empty_buffer_roundtrip() {
        let compressed = compress(&[]).unwrap();
        assert!(!compressed.is_empty()); // Header and trailer are always written
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_repetitive_data_shrinks() {
        let data = b"Hello, world! This is a test string for compression.".repeat(100);
        let compressed = compress(&data).unwrap();

        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_broken_magic_is_corrupt() {
        let mut compressed = compress(b"Hello, world!").unwrap();
        compressed[0] = 0x00;
        compressed[1] = 0x00;

        let error = decompress(&compressed).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CorruptData);
    }

    #[test]
    fn test_checksum_mismatch_is_corrupt() {
        let mut compressed = compress(b"Hello, world!").unwrap();
        let crc_offset = compressed.len() - 8;
        compressed[crc_offset] ^= 0xFF;

        let error = decompress(&compressed).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CorruptData);
    }

    #[test]
    fn test_length_mismatch_is_corrupt() {
        let mut compressed = compress(b"Hello, world!").unwrap();
        let isize_offset = compressed.len() - 4;
        compressed[isize_offset] ^= 0x01;

        let error = decompress(&compressed).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CorruptData);
    }

    #[test]
    fn test_truncated_buffer_is_corrupt() {
        let data = b"Hello, world! This is test data for compression.".repeat(10);
        let compressed = compress(&data).unwrap();

        for len in [1, 10, compressed.len() / 2, compressed.len() - 1] {
            let error = decompress(&compressed[..len]).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::CorruptData, "truncated to {len}");
        }
    }

    proptest! {
        #[test]
        fn prop_buffer_roundtrip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
            let compressed = compress(&data).unwrap();
            prop_assert_eq!(decompress(&compressed).unwrap(), data);
        }
    }
}
