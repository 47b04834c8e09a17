// Copyright (c) 2025 Kani Morse Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bidirectional codec between Latin letters and International Morse code.
//!
//! Encoding is a direct lookup in the [`table::CODE_TABLE`]. Decoding walks a
//! [`trie::MorseTrie`] built once from the same table.
//!
//! # Example
//!
//! ```
//! use kani_morse_lib::codec::{MorseCodec, MorseError};
//!
//! let codec = MorseCodec::new().unwrap();
//!
//! assert_eq!(codec.encode('A').unwrap(), ".-");
//! assert_eq!(codec.decode("--.").unwrap(), 'g');
//! assert_eq!(codec.encode('1'), Err(MorseError::NotALetter('1')));
//! ```

mod error;
pub mod table;
pub mod trie;

#[cfg(test)]
mod tests;

pub use error::{MorseError, MorseResult};
pub use table::Symbol;
pub use trie::{build_trie, MorseTrie};

use table::{letter_to_index, pattern_of, CODE_TABLE};

/// Encoder/decoder for the 26-letter International Morse alphabet.
///
/// The codec holds no mutable state; share it by reference or through an
/// `Arc` across threads.
#[derive(Debug)]
pub struct MorseCodec {
    trie: MorseTrie,
}

impl MorseCodec {
    /// Creates a codec, building the decode trie from the standard table.
    ///
    /// # Errors
    ///
    /// Propagates any [`MorseError`] from trie construction.
    pub fn new() -> MorseResult<Self> {
        Ok(Self {
            trie: build_trie(&CODE_TABLE)?,
        })
    }

    /// Returns the Morse pattern for a letter, ignoring case.
    ///
    /// # Errors
    ///
    /// [`MorseError::NotALetter`] if `letter` is not in `a-z` / `A-Z`.
    pub fn encode(&self, letter: char) -> MorseResult<&'static str> {
        pattern_of(letter_to_index(letter)?)
    }

    /// Returns the lowercase letter for a Morse token.
    ///
    /// # Errors
    ///
    /// See [`MorseTrie::decode`].
    pub fn decode(&self, token: &str) -> MorseResult<char> {
        self.trie.decode(token)
    }

    /// The decode trie backing this codec.
    pub fn trie(&self) -> &MorseTrie {
        &self.trie
    }
}
