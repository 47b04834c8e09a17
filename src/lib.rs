//! Kani Morse Library
//!
//! A codec between the Latin letters a-z and International Morse code, plus
//! the thin layer that runs it over files and interactive input.
//!
//! # Architecture
//!
//! - [`codec`]: the code table, the binary decode trie and the [`codec::MorseCodec`]
//!   facade. This is the only part with real design content.
//! - [`session`], [`input`], [`stats`]: extract letters or tokens, call the
//!   codec per item, and gather a transcript with frequency statistics.
//! - [`config`], [`error`]: layered configuration and application errors.

pub mod codec;
pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod stats;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kani Morse.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
