//! Configuration value types for gzkit
//!
//! This module provides validated value types shared by the codec and the
//! configuration layer.

use crate::{Error, Result};

/// Block size used when shuttling bytes through the codec
///
/// The size only affects throughput and memory use, never the bytes produced
/// by a decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BufferSize(usize);

impl BufferSize {
    /// Minimum buffer size (1 byte)
    pub const MIN: usize = 1;
    /// Maximum buffer size (64MB)
    pub const MAX: usize = 64 * 1024 * 1024;
    /// Default buffer size (16KB)
    pub const DEFAULT: usize = 16 * 1024;

    /// Create a new buffer size with validation
    pub fn new(size: usize) -> Result<Self> {
        if size < Self::MIN {
            Err(Error::config(format!(
                "Buffer size {} is below minimum {}",
                size,
                Self::MIN
            )))
        } else if size > Self::MAX {
            Err(Error::config(format!(
                "Buffer size {} exceeds maximum {}",
                size,
                Self::MAX
            )))
        } else {
            Ok(Self(size))
        }
    }

    /// Get the buffer size value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for BufferSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
