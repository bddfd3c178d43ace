//! UTF-8 text transcoding
//!
//! Decompression runs first and decoding second, so an
//! [`Error::InvalidText`](gzkit_types::Error::InvalidText) always means the
//! gzip data itself was fine.

use crate::GzipCodec;
use gzkit_types::Result;

impl GzipCodec {
    /// Compress the UTF-8 bytes of `text`
    pub fn compress_str(&self, text: &str) -> Result<Vec<u8>> {
        self.compress(text.as_bytes())
    }

    /// Decompress a gzip buffer and decode it as UTF-8
    ///
    /// Invalid UTF-8 is rejected, not replaced.
    pub fn decompress_to_string(&self, data: &[u8]) -> Result<String> {
        let bytes = self.decompress(data)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Compress the UTF-8 bytes of `text` with the default codec
pub fn compress_str(text: &str) -> Result<Vec<u8>> {
    GzipCodec::default().compress_str(text)
}

/// Decompress a gzip buffer to a string with the default codec
pub fn decompress_to_string(data: &[u8]) -> Result<String> {
    GzipCodec::default().decompress_to_string(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress;
    use gzkit_types::ErrorKind;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("")]
    #[case::ascii("Hello, world!")]
    #[case::multi_byte("Grüße, 世界! 🦀")]
    #[case::newlines("line one\nline two\r\n")]
    fn test_text_roundtrip(#[case] text: &str) {
        let compressed = compress_str(text).unwrap();
        assert_eq!(decompress_to_string(&compressed).unwrap(), text);
    }

    #[test]
    fn test_invalid_utf8_is_invalid_text() {
        let compressed = compress(&[b'o', b'k', 0xC3, 0x28]).unwrap();

        let error = decompress_to_string(&compressed).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidText);
    }

    #[test]
    fn test_corrupt_data_reported_before_text() {
        let error = decompress_to_string(&[0xC3, 0x28, 0x00, 0x00]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::CorruptData);
    }

    proptest! {
        #[test]
        fn prop_text_roundtrip(text in "\\PC*") {
            let compressed = compress_str(&text).unwrap();
            prop_assert_eq!(decompress_to_string(&compressed).unwrap(), text);
        }
    }
}
