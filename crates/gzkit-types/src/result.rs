//! Result type alias for gzkit operations

use crate::Error;

/// Result type alias for gzkit operations
pub type Result<T> = std::result::Result<T, Error>;
