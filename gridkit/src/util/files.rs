//! File helpers: Base64 round-trips with a size guard, size formatting.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::base64::{self, CodecError};

/// Errors from the file helpers.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("file too big: {size} > {max} bytes")]
    TooLarge { size: u64, max: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Read a file and return its content as a Base64 string.
///
/// The size is checked against `max_size` before anything is read, so an
/// oversized file never enters memory.
pub fn read_to_base64(path: impl AsRef<Path>, max_size: u64) -> Result<String, FileError> {
    let path = path.as_ref();
    let size = fs::metadata(path)?.len();
    if size > max_size {
        return Err(FileError::TooLarge {
            size,
            max: max_size,
        });
    }
    Ok(base64::encode_bytes(&fs::read(path)?))
}

/// Decode a Base64 string and write the bytes to a file.
pub fn write_from_base64(path: impl AsRef<Path>, content: &str) -> Result<(), FileError> {
    let bytes = base64::decode_bytes(content)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Format a byte count into a human-readable size.
///
/// The largest unit whose value reaches 0.01 wins, with two decimals;
/// below that the raw byte count is shown.
pub fn format_file_size(size: u64) -> String {
    let kb = size as f64 / 1024.0;
    let mb = kb / 1024.0;
    let gb = mb / 1024.0;

    if gb >= 0.01 {
        format!("{gb:.2} GB")
    } else if mb >= 0.01 {
        format!("{mb:.2} MB")
    } else if kb >= 0.01 {
        format!("{kb:.2} KB")
    } else {
        format!("{size} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(5), "5 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn test_format_file_size_thresholds() {
        // 0.01 KB is ~10.24 bytes; 11 bytes tips into KB formatting.
        assert_eq!(format_file_size(11), "0.01 KB");
        assert_eq!(format_file_size(10), "10 bytes");
    }
}
