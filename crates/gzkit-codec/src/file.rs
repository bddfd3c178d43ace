//! File-to-file transcoding
//!
//! Output paths are derived from the input path: compressing `a.txt` writes
//! `a.txt.gz`, decompressing `a.txt.gz` writes `a.txt`. An existing output is
//! never overwritten.
//!
//! Inputs must be regular files; anything else fails with [`Error::Io`]
//! before an output is created.
//!
//! The existence check and the exclusive create that follows are two separate
//! file system calls. Another process creating the output in between makes the
//! create fail with [`Error::Io`] rather than [`Error::AlreadyExists`].
//!
//! If transcoding fails after the output was created, the partially written
//! file is left on disk. The input file is never modified or removed.

use crate::{GzipCodec, TranscodeStats};
use gzkit_types::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Suffix appended on compression and required for decompression
pub const GZ_SUFFIX: &str = ".gz";

/// Output path for compressing `path`: the input path plus `.gz`
///
/// The suffix is always appended, whatever extension the input already has.
pub fn compressed_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut output = path.as_ref().as_os_str().to_os_string();
    output.push(GZ_SUFFIX);
    PathBuf::from(output)
}

/// Output path for decompressing `path`: the input path minus its `.gz`
///
/// The suffix match ignores ASCII case, so `A.TXT.GZ` yields `A.TXT`.
pub fn decompressed_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let bytes = path.as_os_str().as_encoded_bytes();
    let suffix_len = GZ_SUFFIX.len();

    let has_suffix = bytes.len() >= suffix_len
        && bytes[bytes.len() - suffix_len..].eq_ignore_ascii_case(GZ_SUFFIX.as_bytes());
    if !has_suffix {
        return Err(Error::invalid_argument(
            "path",
            format!("File must have {} extension: {}", GZ_SUFFIX, path.display()),
        ));
    }

    // `.gz` alone leaves a directory path, not a file name
    let is_bare_suffix = path
        .file_name()
        .map_or(true, |name| name.len() == suffix_len);
    if is_bare_suffix {
        return Err(Error::invalid_argument(
            "path",
            format!("File name is empty before {}: {}", GZ_SUFFIX, path.display()),
        ));
    }

    Ok(path.with_extension(""))
}

// `symlink_metadata` so a dangling link still counts as taken
fn ensure_absent(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(Error::already_exists(path)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(error.into()),
    }
}

fn open_input(path: &Path) -> Result<File> {
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        )
        .into());
    }
    Ok(file)
}

fn create_output(path: &Path) -> Result<File> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    Ok(file)
}

fn report_partial_output(output_path: &Path, error: Error) -> Error {
    warn!(
        "Transcoding into {} failed, partial output left on disk: {}",
        output_path.display(),
        error
    );
    error
}

impl GzipCodec {
    /// Compress `path` into `path.gz`
    ///
    /// Returns the output path and the byte counts.
    pub fn compress_file<P: AsRef<Path>>(&self, path: P) -> Result<(PathBuf, TranscodeStats)> {
        let input_path = path.as_ref();
        let output_path = compressed_path(input_path);
        ensure_absent(&output_path)?;

        let input = open_input(input_path)?;
        let mut output = create_output(&output_path)?;
        let stats = self
            .compress_stream(input, &mut output)
            .map_err(|error| report_partial_output(&output_path, error))?;

        info!(
            "Compressed {} -> {} ({} -> {} bytes)",
            input_path.display(),
            output_path.display(),
            stats.bytes_read,
            stats.bytes_written
        );
        Ok((output_path, stats))
    }

    /// Decompress `path`, which must end in `.gz`, into the path without it
    ///
    /// Returns the output path and the byte counts.
    pub fn decompress_file<P: AsRef<Path>>(&self, path: P) -> Result<(PathBuf, TranscodeStats)> {
        let input_path = path.as_ref();
        let output_path = decompressed_path(input_path)?;
        ensure_absent(&output_path)?;

        let input = open_input(input_path)?;
        let mut output = create_output(&output_path)?;
        let stats = self
            .decompress_stream(input, &mut output)
            .map_err(|error| report_partial_output(&output_path, error))?;

        info!(
            "Decompressed {} -> {} ({} -> {} bytes)",
            input_path.display(),
            output_path.display(),
            stats.bytes_read,
            stats.bytes_written
        );
        Ok((output_path, stats))
    }
}

/// Compress `path` into `path.gz` with the default codec
pub fn compress_file<P: AsRef<Path>>(path: P) -> Result<(PathBuf, TranscodeStats)> {
    GzipCodec::default().compress_file(path)
}

/// Decompress `path.gz` into `path` with the default codec
pub fn decompress_file<P: AsRef<Path>>(path: P) -> Result<(PathBuf, TranscodeStats)> {
    GzipCodec::default().decompress_file(path)
}
