//! Letter and symbol frequency statistics.
//!
//! A [`Statistics`] value is created for each encode or decode run and handed
//! back with its transcript, so counts never leak between runs.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::codec::table::{index_to_letter, letter_to_index, Symbol, ALPHABET_SIZE};

/// Per-letter and per-symbol counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Occurrences of each letter, indexed `a` = 0 ... `z` = 25
    letters: [usize; ALPHABET_SIZE],

    /// Number of dots seen
    dots: usize,

    /// Number of dashes seen
    dashes: usize,
}

impl Statistics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one letter, ignoring case. Non-letters are not counted.
    pub fn record_letter(&mut self, letter: char) {
        if let Ok(index) = letter_to_index(letter) {
            self.letters[index] += 1;
        }
    }

    /// Counts the dots and dashes of a pattern. Other characters are not counted.
    pub fn record_pattern(&mut self, pattern: &str) {
        for symbol in pattern.chars().filter_map(Symbol::from_char) {
            match symbol {
                Symbol::Dot => self.dots += 1,
                Symbol::Dash => self.dashes += 1,
            }
        }
    }

    /// Occurrences of `letter`, ignoring case; zero for non-letters.
    pub fn letter_count(&self, letter: char) -> usize {
        letter_to_index(letter).map_or(0, |index| self.letters[index])
    }

    /// Total number of letters counted.
    pub fn total_letters(&self) -> usize {
        self.letters.iter().sum()
    }

    /// Number of dots counted.
    pub fn dots(&self) -> usize {
        self.dots
    }

    /// Number of dashes counted.
    pub fn dashes(&self) -> usize {
        self.dashes
    }
}

impl Display for Statistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "alpha statistics:")?;
        for (index, count) in self.letters.iter().enumerate() {
            let letter = index_to_letter(index).map_err(|_| fmt::Error)?;
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{letter}={count}")?;
        }
        writeln!(f)?;
        writeln!(f, "morse statistics:")?;
        write!(f, "[.]={}, [-]={}", self.dots, self.dashes)
    }
}
