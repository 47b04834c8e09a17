// Copyright (c) 2025 Kani Morse Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Morse codec.
//!
//! Every failing lookup returns one of these values. None of them is fatal:
//! callers translating a batch of letters or tokens record the error for the
//! offending item and move on.

/// Errors that can occur in code table lookups, trie construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorseError {
    /// Encode input is not an ASCII letter.
    #[error("'{0}' is not a letter")]
    NotALetter(char),

    /// A token or pattern contains something other than a dot or a dash.
    #[error("Malformed token '{token}': unexpected symbol '{symbol}'")]
    MalformedToken {
        /// The offending token.
        token: String,
        /// The first character that is neither a dot nor a dash.
        symbol: char,
    },

    /// The decode walk fell off the trie: no code starts with this token.
    #[error("Unknown code: {0}")]
    UnknownCode(String),

    /// The token is a prefix of some code but not a complete code itself.
    #[error("Incomplete code: {0}")]
    IncompleteCode(String),

    /// An empty token was given to decode, or an empty pattern to the trie builder.
    #[error("Empty token not allowed")]
    EmptyToken,

    /// Index outside 0-25 given to the index-to-letter conversion.
    #[error("Index {0} is not a letter index (expected 0-25)")]
    InvalidIndex(usize),

    /// Index outside 0-25 given to the code table lookup.
    #[error("No pattern for letter index {0} (expected 0-25)")]
    InvalidLetter(usize),

    /// Two letters of a code table share the same pattern.
    #[error("Pattern '{pattern}' is assigned to both '{existing}' and '{letter}'")]
    DuplicateCode {
        /// The shared pattern.
        pattern: String,
        /// The letter already stored for the pattern.
        existing: char,
        /// The letter that tried to claim it again.
        letter: char,
    },
}

/// Result type for Morse codec operations.
pub type MorseResult<T> = Result<T, MorseError>;
