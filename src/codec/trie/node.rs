// Copyright (c) 2025 Kani Morse Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Morse decode trie.
//!
//! Each node stands for the prefix of symbols consumed from the root. A node
//! owns its two children outright, so dropping the root releases the whole
//! tree.

use crate::codec::table::Symbol;

/// A node in the Morse trie.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Letter whose complete code ends here, if any
    pub letter: Option<char>,

    /// Child reached by a dot
    pub dot: Option<Box<TrieNode>>,

    /// Child reached by a dash
    pub dash: Option<Box<TrieNode>>,
}

impl TrieNode {
    /// Creates a node with no letter and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `symbol`, if it exists.
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        match symbol {
            Symbol::Dot => self.dot.as_deref(),
            Symbol::Dash => self.dash.as_deref(),
        }
    }

    /// Returns the child reached by `symbol`, creating an empty one if needed.
    ///
    /// The flag is `true` when the child was created by this call.
    pub fn child_or_insert(&mut self, symbol: Symbol) -> (&mut TrieNode, bool) {
        let slot = match symbol {
            Symbol::Dot => &mut self.dot,
            Symbol::Dash => &mut self.dash,
        };
        let created = slot.is_none();
        (slot.get_or_insert_with(Box::default), created)
    }

    /// Iterates over existing children, dot first.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, &TrieNode)> {
        [(Symbol::Dot, &self.dot), (Symbol::Dash, &self.dash)]
            .into_iter()
            .filter_map(|(symbol, child)| child.as_deref().map(|node| (symbol, node)))
    }
}
