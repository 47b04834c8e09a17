// Copyright (c) 2025 Kani Morse Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The International Morse code table for the Latin letters a-z.
//!
//! The table is indexed by letter index (`'a'` = 0 ... `'z'` = 25). Index 0 is
//! an ordinary letter; lookups signal absence through [`MorseError`], never
//! through a reserved index.

use super::error::{MorseError, MorseResult};

/// Number of letters in the alphabet covered by the table.
pub const ALPHABET_SIZE: usize = 26;

/// Character used for a dot in patterns and tokens.
pub const DOT: char = '.';

/// Character used for a dash in patterns and tokens.
pub const DASH: char = '-';

/// Morse patterns for `a` through `z`, in letter order.
pub const CODE_TABLE: [&str; ALPHABET_SIZE] = [
    ".-",   // a
    "-...", // b
    "-.-.", // c
    "-..",  // d
    ".",    // e
    "..-.", // f
    "--.",  // g
    "....", // h
    "..",   // i
    ".---", // j
    "-.-",  // k
    ".-..", // l
    "--",   // m
    "-.",   // n
    "---",  // o
    ".--.", // p
    "--.-", // q
    ".-.",  // r
    "...",  // s
    "-",    // t
    "..-",  // u
    "...-", // v
    ".--",  // w
    "-..-", // x
    "-.--", // y
    "--..", // z
];

/// One Morse symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A short mark, written `.`; walks left in the trie.
    Dot,
    /// A long mark, written `-`; walks right in the trie.
    Dash,
}

impl Symbol {
    /// Parses a single character, returning `None` for anything but `.` or `-`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            DOT => Some(Self::Dot),
            DASH => Some(Self::Dash),
            _ => None,
        }
    }

    /// The character this symbol is written as.
    pub fn as_char(self) -> char {
        match self {
            Self::Dot => DOT,
            Self::Dash => DASH,
        }
    }
}

/// Parses a whole table pattern into symbols.
///
/// # Errors
///
/// * [`MorseError::EmptyToken`] if the token is empty.
/// * [`MorseError::MalformedToken`] naming the first character that is not a dot or dash.
pub fn symbols(token: &str) -> MorseResult<Vec<Symbol>> {
    if token.is_empty() {
        return Err(MorseError::EmptyToken);
    }

    token
        .chars()
        .map(|ch| {
            Symbol::from_char(ch).ok_or_else(|| MorseError::MalformedToken {
                token: token.to_string(),
                symbol: ch,
            })
        })
        .collect()
}

/// Returns the pattern for a letter index.
///
/// # Errors
///
/// [`MorseError::InvalidLetter`] if `index` is outside 0-25.
pub fn pattern_of(index: usize) -> MorseResult<&'static str> {
    CODE_TABLE
        .get(index)
        .copied()
        .ok_or(MorseError::InvalidLetter(index))
}

/// Case-folds an ASCII letter to its index 0-25.
///
/// # Errors
///
/// [`MorseError::NotALetter`] for any character outside `a-z` / `A-Z`.
pub fn letter_to_index(ch: char) -> MorseResult<usize> {
    if ch.is_ascii_alphabetic() {
        Ok(usize::from(ch.to_ascii_lowercase() as u8 - b'a'))
    } else {
        Err(MorseError::NotALetter(ch))
    }
}

/// Converts an index 0-25 back to its lowercase letter.
///
/// # Errors
///
/// [`MorseError::InvalidIndex`] if `index` is outside 0-25.
pub fn index_to_letter(index: usize) -> MorseResult<char> {
    u8::try_from(index)
        .ok()
        .filter(|&i| usize::from(i) < ALPHABET_SIZE)
        .map(|i| char::from(b'a' + i))
        .ok_or(MorseError::InvalidIndex(index))
}
