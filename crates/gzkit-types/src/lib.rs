//! Core error types and shared values for gzkit
//!
//! This crate provides the error taxonomy and the small validated value types
//! shared by every gzkit crate:
//!
//! - **Error handling**: one [`Error`] enum whose variants keep I/O failures,
//!   corrupt gzip data, invalid UTF-8 text and precondition failures apart
//! - **Configuration values**: [`BufferSize`], the block size used to shuttle
//!   bytes through the codec
//!
//! # Features
//!
//! - `serde`: Enable serialization support for [`BufferSize`]
//!
//! # Examples
//!
//! ```rust
//! use gzkit_types::{BufferSize, Error, ErrorKind, Result};
//!
//! fn block_size(requested: usize) -> Result<usize> {
//!     Ok(BufferSize::new(requested)?.get())
//! }
//!
//! assert_eq!(block_size(4096).unwrap(), 4096);
//! assert_eq!(block_size(0).unwrap_err().kind(), ErrorKind::Config);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;

pub use config::BufferSize;
pub use error::{Error, ErrorKind};
pub use result::Result;
