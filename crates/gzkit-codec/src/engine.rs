//! The codec value shared by every transcoding layer
//!
//! [`GzipCodec`] carries the only tunable the adapter has, the block size.
//! Its stream, buffer, text and file methods live next to the layer they
//! implement.

use gzkit_types::BufferSize;

/// gzip codec adapter
///
/// Cheap to copy; every call owns its own buffer and stream handles, so one
/// value can be shared freely between threads working on disjoint data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GzipCodec {
    buffer_size: BufferSize,
}

impl GzipCodec {
    /// Create a codec with the default 16KB block size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom block size
    pub const fn with_buffer_size(buffer_size: BufferSize) -> Self {
        Self { buffer_size }
    }

    /// Block size used for every read and write
    pub const fn buffer_size(&self) -> BufferSize {
        self.buffer_size
    }
}
