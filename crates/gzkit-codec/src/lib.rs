//! gzip transcoding for gzkit
//!
//! This crate is a thin adapter over the gzip encoder and decoder provided by
//! `flate2`. It exposes four layers, each built on the one before:
//!
//! - **Streams**: [`compress_stream`] / [`decompress_stream`] copy a reader
//!   through the codec into a writer using a fixed-size block buffer
//! - **Buffers**: [`compress`] / [`decompress`] work on byte slices
//! - **Text**: [`compress_str`] / [`decompress_to_string`] add UTF-8 encoding
//! - **Files**: [`compress_file`] / [`decompress_file`] derive the companion
//!   `.gz` path, refuse to overwrite, and stream file to file
//!
//! The free functions use [`GzipCodec::default`]. Build a [`GzipCodec`] with a
//! different [`BufferSize`](gzkit_types::BufferSize) to change the block size;
//! the bytes produced never depend on it.
//!
//! # Features
//!
//! - `serde` (default): Enable serialization support for [`TranscodeStats`]
//!
//! # Examples
//!
//! ```rust
//! let compressed = gzkit_codec::compress_str("Hello, world!")?;
//! assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
//!
//! let text = gzkit_codec::decompress_to_string(&compressed)?;
//! assert_eq!(text, "Hello, world!");
//! # Ok::<(), gzkit_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod engine;
pub mod file;
pub mod streaming;
pub mod text;

#[cfg(test)]
mod error_tests;

// Re-export main types
pub use buffer::{compress, decompress};
pub use engine::GzipCodec;
pub use file::{compress_file, compressed_path, decompress_file, decompressed_path, GZ_SUFFIX};
pub use streaming::{compress_stream, decompress_stream, TranscodeStats};
pub use text::{compress_str, decompress_to_string};
