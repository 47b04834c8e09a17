// Copyright (c) 2025 Kani Morse Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Morse Decode Trie Implementation
//!
//! A binary prefix tree keyed by Morse symbols: a dot walks to the left child,
//! a dash to the right child. The trie is built once from a code table and is
//! read-only afterwards, so a shared reference can serve any number of
//! concurrent decodes without locking.
//!
//! # Example
//!
//! ```
//! use kani_morse_lib::codec::table::CODE_TABLE;
//! use kani_morse_lib::codec::trie::build_trie;
//!
//! let trie = build_trie(&CODE_TABLE).unwrap();
//! assert_eq!(trie.decode("...").unwrap(), 's');
//! assert!(trie.decode("---.").is_err());
//! ```

mod node;

use tracing::debug;

use super::error::{MorseError, MorseResult};
use super::table::{index_to_letter, symbols, Symbol};
use node::TrieNode;

/// Builds the decode trie for `table`, where entry `i` is the pattern of letter `i`.
///
/// # Errors
///
/// See [`MorseTrie::from_table`].
pub fn build_trie(table: &[&str]) -> MorseResult<MorseTrie> {
    MorseTrie::from_table(table)
}

/// Binary decode trie for Morse patterns.
///
/// Nodes reached by a complete code carry that code's letter. Nodes that only
/// lie on the way to longer codes carry none.
#[derive(Debug)]
pub struct MorseTrie {
    /// Root node, standing for the empty prefix
    root: TrieNode,

    /// Number of nodes including the root
    node_count: usize,

    /// Number of nodes carrying a letter
    letter_count: usize,
}

impl MorseTrie {
    /// Builds a trie from a code table, inserting entries in table order.
    ///
    /// # Errors
    ///
    /// * [`MorseError::InvalidIndex`] if the table has more than 26 entries.
    /// * [`MorseError::EmptyToken`] or [`MorseError::MalformedToken`] for a bad pattern.
    /// * [`MorseError::DuplicateCode`] if two letters share a pattern.
    pub fn from_table(table: &[&str]) -> MorseResult<Self> {
        let mut trie = Self {
            root: TrieNode::new(),
            node_count: 1,
            letter_count: 0,
        };

        for (index, pattern) in table.iter().enumerate() {
            let letter = index_to_letter(index)?;
            trie.insert(pattern, letter)?;
        }

        debug!(
            letters = table.len(),
            nodes = trie.node_count,
            "Built Morse decode trie"
        );
        Ok(trie)
    }

    /// Walks `pattern` from the root, creating missing nodes, and stores `letter` at the end.
    fn insert(&mut self, pattern: &str, letter: char) -> MorseResult<()> {
        let mut node = &mut self.root;
        for symbol in symbols(pattern)? {
            let (next, created) = node.child_or_insert(symbol);
            if created {
                self.node_count += 1;
            }
            node = next;
        }

        match node.letter {
            Some(existing) if existing != letter => Err(MorseError::DuplicateCode {
                pattern: pattern.to_string(),
                existing,
                letter,
            }),
            Some(_) => Ok(()),
            None => {
                node.letter = Some(letter);
                self.letter_count += 1;
                Ok(())
            }
        }
    }

    /// Decodes one token into its letter.
    ///
    /// The walk starts at the root and consumes one character per step. It
    /// stops at the first character that is not a symbol or has no child;
    /// otherwise it ends on a node that either carries a letter (accepted) or
    /// does not (incomplete code). Characters past the stopping point are
    /// never looked at.
    ///
    /// # Errors
    ///
    /// * [`MorseError::EmptyToken`] for an empty token.
    /// * [`MorseError::MalformedToken`] if the walk reaches a character that is not a dot or dash.
    /// * [`MorseError::UnknownCode`] if the walk falls off the trie.
    /// * [`MorseError::IncompleteCode`] if the walk ends on a node without a letter.
    pub fn decode(&self, token: &str) -> MorseResult<char> {
        if token.is_empty() {
            return Err(MorseError::EmptyToken);
        }

        let node = token.chars().try_fold(&self.root, |node, ch| {
            let symbol = Symbol::from_char(ch).ok_or_else(|| MorseError::MalformedToken {
                token: token.to_string(),
                symbol: ch,
            })?;
            node.child(symbol)
                .ok_or_else(|| MorseError::UnknownCode(token.to_string()))
        })?;

        node.letter
            .ok_or_else(|| MorseError::IncompleteCode(token.to_string()))
    }

    /// Lists every complete code starting with `prefix`, as `(pattern, letter)` pairs.
    ///
    /// An empty prefix lists the whole trie. A prefix that is not on the trie,
    /// or contains characters other than dots and dashes, yields nothing.
    pub fn completions(&self, prefix: &str) -> Vec<(String, char)> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match Symbol::from_char(ch).and_then(|symbol| node.child(symbol)) {
                Some(next) => node = next,
                None => return Vec::new(),
            }
        }

        let mut result = Vec::new();
        Self::collect_codes(node, &mut prefix.to_string(), &mut result);
        result
    }

    /// Every complete code in the trie, dot branches before dash branches.
    pub fn codes(&self) -> Vec<(String, char)> {
        self.completions("")
    }

    fn collect_codes(node: &TrieNode, path: &mut String, result: &mut Vec<(String, char)>) {
        if let Some(letter) = node.letter {
            result.push((path.clone(), letter));
        }

        for (symbol, child) in node.children() {
            path.push(symbol.as_char());
            Self::collect_codes(child, path, result);
            path.pop();
        }
    }

    /// Number of letters stored in the trie.
    pub fn len(&self) -> usize {
        self.letter_count
    }

    /// Returns `true` if no letter is stored.
    pub fn is_empty(&self) -> bool {
        self.letter_count == 0
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}
