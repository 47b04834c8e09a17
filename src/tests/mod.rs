//! Test modules for Kani Morse.
//!
//! This module contains crate-level test suites that span more than one
//! component:
//! - Configuration loading and validation
//! - Application error conversions
//! - Encode/decode sessions over files and interactive input
//! - Shared fixtures and proptest strategies

pub mod session_tests;

pub use test_utils::{letter_strategy, token_strategy, TestFixture};
