//! Error handling tests across the gzkit-codec layers

use crate::{compress, compress_str, decompress, decompress_to_string, GzipCodec};
use gzkit_types::{BufferSize, ErrorKind};

/// Test error handling with bytes that are not gzip at all
#[test]
fn test_invalid_compression_data() {
    let invalid_data = vec![0xFF; 100];
    let error = decompress(&invalid_data).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CorruptData);
}

/// Test that a valid header followed by garbage is rejected
#[test]
fn test_corrupted_deflate_body() {
    let mut compressed = compress(&b"Hello, world! This is test data.".repeat(20)).unwrap();

    // Keep the 10-byte header, scramble everything after it
    for byte in &mut compressed[10..] {
        *byte = 0xFF;
    }

    let error = decompress(&compressed).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CorruptData);
}

/// Test that bytes after the last member are rejected
#[test]
fn test_trailing_garbage_rejected() {
    let mut compressed = compress(b"Hello, world!").unwrap();
    compressed.extend_from_slice(b"garbage");

    let error = decompress(&compressed).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CorruptData);
}

/// Test an unsupported compression method byte
#[test]
fn test_unknown_compression_method() {
    let mut compressed = compress(b"Hello, world!").unwrap();
    compressed[2] = 0x07; // Only method 8 (deflate) is defined

    let error = decompress(&compressed).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::CorruptData);
}

/// Test the error kinds of each layer stay apart
#[test]
fn test_layer_error_kinds_are_distinct() {
    let corrupt = decompress_to_string(b"definitely not gzip").unwrap_err();
    assert_eq!(corrupt.kind(), ErrorKind::CorruptData);

    let bad_text = decompress_to_string(&compress(&[0xFF, 0xFE, 0xFD]).unwrap()).unwrap_err();
    assert_eq!(bad_text.kind(), ErrorKind::InvalidText);

    let good_text = decompress_to_string(&compress_str("fine").unwrap()).unwrap();
    assert_eq!(good_text, "fine");
}

/// Test larger inputs through a one-byte block buffer
#[test]
fn test_one_byte_buffer() {
    let codec = GzipCodec::with_buffer_size(BufferSize::new(1).unwrap());
    let data = b"Hello, world! This is test data for compression.".repeat(10);

    let compressed = codec.compress(&data).unwrap();
    assert_eq!(codec.decompress(&compressed).unwrap(), data);
}

/// Test large, highly compressible data
#[test]
fn test_large_data_handling() {
    let large_data = vec![0u8; 8 * 1024 * 1024]; // 8MB of zeros

    let compressed = compress(&large_data).unwrap();
    assert!(compressed.len() < large_data.len() / 100);

    let decompressed = decompress(&compressed).unwrap();
    assert_eq!(large_data.len(), decompressed.len());
}
