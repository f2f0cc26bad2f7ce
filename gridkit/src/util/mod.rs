//! Small utilities: Base64 codecs and file helpers.

pub mod base64;
pub mod files;
