//! Stream-to-stream gzip transcoding
//!
//! This is the leaf layer: everything else in the crate ends up here. Bytes
//! are moved in blocks of [`GzipCodec::buffer_size`] through a `flate2`
//! encoder or decoder.
//!
//! Decoder failures are split in two. If the source reader itself failed, the
//! caller gets [`Error::Io`] with the original error. Anything else the
//! decoder rejects (bad magic, corrupt DEFLATE data, truncation, trailer
//! mismatch) is [`Error::CorruptData`].

use crate::GzipCodec;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use gzkit_types::{Error, Result};
use std::io::{self, Read, Write};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte counts for one transcoding call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TranscodeStats {
    /// Bytes consumed from the source
    pub bytes_read: u64,
    /// Bytes handed to the destination
    pub bytes_written: u64,
}

impl TranscodeStats {
    /// Output size relative to input size
    ///
    /// Below 1.0 when compressing shrank the data. Returns 1.0 for an empty
    /// source.
    pub fn ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            1.0
        } else {
            self.bytes_written as f64 / self.bytes_read as f64
        }
    }
}

/// Source wrapper that retries interrupted reads and remembers failures
struct SourceReader<R> {
    inner: R,
    bytes_read: u64,
    failed: bool,
}

impl<R> SourceReader<R> {
    const fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
            failed: false,
        }
    }
}

impl<R: Read> Read for SourceReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.inner.read(buf) {
                Ok(count) => {
                    self.bytes_read += count as u64;
                    return Ok(count);
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    self.failed = true;
                    return Err(error);
                }
            }
        }
    }
}

struct CountingWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let count = self.inner.write(buf)?;
        self.bytes_written += count as u64;
        Ok(count)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl GzipCodec {
    /// Compress everything `source` yields into `destination`
    ///
    /// The gzip trailer is written before this returns `Ok`. On an error the
    /// encoder is dropped, which still attempts to finish the member, but the
    /// destination contents are then unspecified. `destination` is flushed,
    /// not closed.
    pub fn compress_stream<R, W>(&self, mut source: R, destination: W) -> Result<TranscodeStats>
    where
        R: Read,
        W: Write,
    {
        let mut buffer = vec![0u8; self.buffer_size().get()];
        let mut encoder = GzEncoder::new(
            CountingWriter {
                inner: destination,
                bytes_written: 0,
            },
            Compression::default(),
        );
        let mut bytes_read = 0u64;

        loop {
            let count = match source.read(&mut buffer) {
                Ok(0) => break, // End of input
                Ok(count) => count,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };

            encoder.write_all(&buffer[..count])?;
            bytes_read += count as u64;
        }

        let mut destination = encoder.finish()?;
        destination.flush()?;

        let stats = TranscodeStats {
            bytes_read,
            bytes_written: destination.bytes_written,
        };
        debug!(
            "Stream compression completed, {} bytes in, {} bytes out",
            stats.bytes_read, stats.bytes_written
        );
        Ok(stats)
    }

    /// Decompress the gzip data in `source` into `destination`
    ///
    /// Concatenated gzip members are decoded back to back. An empty source is
    /// not a gzip stream and fails with [`Error::CorruptData`].
    pub fn decompress_stream<R, W>(&self, source: R, mut destination: W) -> Result<TranscodeStats>
    where
        R: Read,
        W: Write,
    {
        let mut buffer = vec![0u8; self.buffer_size().get()];
        let mut decoder = MultiGzDecoder::new(SourceReader::new(source));
        let mut bytes_written = 0u64;

        loop {
            let count = match decoder.read(&mut buffer) {
                Ok(0) => break, // End of data
                Ok(count) => count,
                Err(error) if decoder.get_ref().failed => return Err(error.into()),
                Err(error) => return Err(Error::corrupt_data(error.to_string())),
            };

            destination.write_all(&buffer[..count])?;
            bytes_written += count as u64;
        }

        let bytes_read = decoder.get_ref().bytes_read;
        if bytes_read == 0 {
            return Err(Error::corrupt_data("empty input is not a gzip stream"));
        }

        destination.flush()?;

        let stats = TranscodeStats {
            bytes_read,
            bytes_written,
        };
        debug!(
            "Stream decompression completed, {} bytes in, {} bytes out",
            stats.bytes_read, stats.bytes_written
        );
        Ok(stats)
    }
}

/// Compress `source` into `destination` with the default codec
///
/// See [`GzipCodec::compress_stream`].
pub fn compress_stream<R: Read, W: Write>(source: R, destination: W) -> Result<TranscodeStats> {
    GzipCodec::default().compress_stream(source, destination)
}

/// Decompress `source` into `destination` with the default codec
///
/// See [`GzipCodec::decompress_stream`].
pub fn decompress_stream<R: Read, W: Write>(source: R, destination: W) -> Result<TranscodeStats> {
    GzipCodec::default().decompress_stream(source, destination)
}
