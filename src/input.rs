//! Input extraction for encode and decode runs.
//!
//! Reads whole files or single interactive lines into growable buffers and
//! splits them into the items the codec consumes: letters for encoding,
//! whitespace-delimited tokens for decoding.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::error::KaniResult;

/// Reads a whole input file.
pub fn read_file(path: &Path) -> KaniResult<String> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "Read input file");
    Ok(text)
}

/// Reads one line, without its line terminator. End of input yields an empty line.
pub fn read_line<R: BufRead>(reader: &mut R) -> KaniResult<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Splits decode input into Morse tokens.
pub fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Extracts the characters to encode.
///
/// Whitespace is always skipped. Other non-letters are kept when `strict` is
/// set, so the codec can report them, and dropped otherwise.
pub fn letters(text: &str, strict: bool) -> Vec<char> {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .filter(|ch| strict || ch.is_ascii_alphabetic())
        .collect()
}
