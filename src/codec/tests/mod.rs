// Copyright (c) 2025 Kani Morse Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the Morse codec.


use super::*;
use test_case::test_case;

#[test_case('a', ".-" ; "a is encodable")]
#[test_case('A', ".-" ; "uppercase a")]
#[test_case('s', "..." ; "s")]
#[test_case('O', "---" ; "uppercase o")]
#[test_case('z', "--.." ; "z")]
fn test_encode(letter: char, pattern: &str) {
    let codec = MorseCodec::new().unwrap();
    assert_eq!(codec.encode(letter), Ok(pattern));
}

#[test]
fn test_encode_rejects_non_letters() {
    let codec = MorseCodec::new().unwrap();
    for ch in ['1', ' ', '.', '-', '\n', 'ß'] {
        assert_eq!(codec.encode(ch), Err(MorseError::NotALetter(ch)));
    }
}

#[test]
fn test_round_trip_all_letters() {
    let codec = MorseCodec::new().unwrap();
    for letter in ('a'..='z').chain('A'..='Z') {
        let pattern = codec.encode(letter).unwrap();
        assert_eq!(codec.decode(pattern), Ok(letter.to_ascii_lowercase()));
    }
}

#[test]
fn test_decode_sos() {
    let codec = MorseCodec::new().unwrap();
    let decoded: String = "... --- ..."
        .split_whitespace()
        .map(|token| codec.decode(token).unwrap())
        .collect();
    assert_eq!(decoded, "sos");
}

#[test]
fn test_codec_trie_holds_whole_alphabet() {
    let codec = MorseCodec::new().unwrap();
    assert_eq!(codec.trie().len(), table::ALPHABET_SIZE);
}
