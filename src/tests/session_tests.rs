//! Tests for encode/decode sessions.
//!
//! These drive whole runs through in-memory readers and writers, the same way
//! the binary drives them through stdin and stdout.

use std::io::Cursor;

use crate::codec::{MorseCodec, MorseError};
use crate::config::{KaniConfig, OutputFormat};
use crate::session::{self, decode_text, encode_text, Direction, Mode, Source};
use crate::tests::TestFixture;

fn codec() -> MorseCodec {
    MorseCodec::new().unwrap()
}

/// Runs a session against an in-memory stdin and returns the transcript and stdout.
fn run_session(
    direction: Direction,
    source: Source,
    config: &KaniConfig,
    stdin: &str,
) -> (session::Transcript, String) {
    let mut reader = Cursor::new(stdin.to_string());
    let mut writer = Vec::new();
    let transcript =
        session::run(direction, &source, &codec(), config, &mut reader, &mut writer).unwrap();
    (transcript, String::from_utf8(writer).unwrap())
}

#[test]
fn test_encode_text_collects_patterns_and_statistics() {
    let transcript = encode_text(&codec(), "SOS", false);

    let outputs: Vec<&str> = transcript.outputs("?").collect();
    assert_eq!(outputs, vec!["...", "---", "..."]);
    assert_eq!(transcript.failures(), 0);
    assert_eq!(transcript.statistics.letter_count('s'), 2);
    assert_eq!(transcript.statistics.letter_count('o'), 1);
    assert_eq!(transcript.statistics.dots(), 6);
    assert_eq!(transcript.statistics.dashes(), 3);
}

#[test]
fn test_encode_text_includes_letter_a() {
    let transcript = encode_text(&codec(), "a", false);
    assert_eq!(transcript.items[0].outcome, Ok(".-".to_string()));
}

#[test]
fn test_encode_text_drops_non_letters_by_default() {
    let transcript = encode_text(&codec(), "Hi, 2 you!", false);
    let inputs: String = transcript.items.iter().map(|item| item.input.as_str()).collect();
    assert_eq!(inputs, "Hiyou");
    assert_eq!(transcript.failures(), 0);
}

#[test]
fn test_encode_text_strict_reports_each_non_letter() {
    let transcript = encode_text(&codec(), "a1b!", true);

    assert_eq!(transcript.items.len(), 4);
    assert_eq!(transcript.failures(), 2);
    assert_eq!(transcript.items[1].outcome, Err(MorseError::NotALetter('1')));
    assert_eq!(transcript.items[3].outcome, Err(MorseError::NotALetter('!')));
    // Failed items contribute nothing to the counts
    assert_eq!(transcript.statistics.total_letters(), 2);
    assert_eq!(transcript.statistics.dots(), 4);
    assert_eq!(transcript.statistics.dashes(), 2);
}

#[test]
fn test_decode_text_continues_past_failures() {
    let transcript = decode_text(&codec(), "... ---. x .- .....-----");

    let outputs: String = transcript.outputs("?").collect();
    assert_eq!(outputs, "s??a?");
    assert_eq!(transcript.failures(), 3);
    assert_eq!(transcript.items[3].outcome, Ok("a".to_string()));

    assert!(matches!(
        transcript.items[1].outcome,
        Err(MorseError::UnknownCode(_))
    ));
    assert!(matches!(
        transcript.items[2].outcome,
        Err(MorseError::MalformedToken { .. })
    ));
    assert!(matches!(
        transcript.items[4].outcome,
        Err(MorseError::UnknownCode(_))
    ));
}

#[test]
fn test_decode_text_statistics() {
    let transcript = decode_text(&codec(), "... --- ... x.-");

    assert_eq!(transcript.statistics.letter_count('s'), 2);
    assert_eq!(transcript.statistics.letter_count('o'), 1);
    // The malformed token's symbols are not counted
    assert_eq!(transcript.statistics.dots(), 6);
    assert_eq!(transcript.statistics.dashes(), 3);
}

#[test]
fn test_decode_text_skips_symbols_of_unknown_malformed_token() {
    // The walk falls off before the 'x', but the token is still not well formed
    let transcript = decode_text(&codec(), "......x -");

    assert_eq!(
        transcript.items[0].outcome,
        Err(MorseError::UnknownCode("......x".to_string()))
    );
    assert_eq!(transcript.statistics.dots(), 0);
    assert_eq!(transcript.statistics.dashes(), 1);
    assert_eq!(transcript.statistics.letter_count('t'), 1);
}

#[test]
fn test_statistics_are_per_run() {
    let codec = codec();
    let first = encode_text(&codec, "eee", false);
    let second = encode_text(&codec, "t", false);

    assert_eq!(first.statistics.letter_count('e'), 3);
    assert_eq!(second.statistics.letter_count('e'), 0);
    assert_eq!(second.statistics.dashes(), 1);
}

#[test]
fn test_render_encode_text_layout() {
    let config = KaniConfig::default();
    let (_, stdout) = run_session(
        Direction::Encode,
        Source::Text("sos".to_string()),
        &config,
        "",
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "sentence: [sos]");
    assert_eq!(lines[1], "morse codes:");
    assert_eq!(lines[2], "... --- ...");
    assert_eq!(lines[3], "alpha statistics:");
    assert!(lines[4].contains("o=1, p=0"));
    assert!(lines[4].contains("s=2"));
    assert_eq!(lines[5], "morse statistics:");
    assert_eq!(lines[6], "[.]=6, [-]=3");
}

#[test]
fn test_render_decode_with_placeholder_and_no_statistics() {
    let mut config = KaniConfig::default();
    config.output.placeholder = "_".to_string();
    config.output.statistics = false;

    let (_, stdout) = run_session(
        Direction::Decode,
        Source::Text(".... .. ..--".to_string()),
        &config,
        "",
    );

    assert_eq!(stdout, "morse codes:\n.... .. ..--\nsentence: [hi_]\n");
}

#[test]
fn test_render_json() {
    let mut config = KaniConfig::default();
    config.output.format = OutputFormat::Json;

    let (_, stdout) = run_session(
        Direction::Decode,
        Source::Text(".- x".to_string()),
        &config,
        "",
    );

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["direction"], "decode");
    assert_eq!(json["items"][0]["input"], ".-");
    assert_eq!(json["items"][0]["outcome"]["output"], "a");
    assert!(json["items"][1]["outcome"]["error"]
        .as_str()
        .unwrap()
        .contains("Malformed token"));
    assert_eq!(json["statistics"]["dots"], 1);
}

#[test]
fn test_interactive_session_prompts_and_reads_one_line() {
    let config = KaniConfig::default();
    let (transcript, stdout) = run_session(
        Direction::Decode,
        Source::Interactive,
        &config,
        "-- --- .-. ... .\n.- .-\n",
    );

    assert!(stdout.starts_with("input morse codes: "));
    let decoded: String = transcript.outputs("?").collect();
    assert_eq!(decoded, "morse");
}

#[test]
fn test_file_session() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("encode_input.txt", "Hello,\nWorld!\n")
        .unwrap();

    let config = KaniConfig::default();
    let (transcript, stdout) = run_session(Direction::Encode, Source::File(path), &config, "");

    assert_eq!(transcript.items.len(), 10);
    assert!(stdout.starts_with("sentence: [HelloWorld]\n"));
}

#[test]
fn test_missing_file_is_an_error() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("decode_input.txt");

    let mut reader = Cursor::new(String::new());
    let mut writer = Vec::new();
    let result = session::run(
        Direction::Decode,
        &Source::File(missing),
        &codec(),
        &KaniConfig::default(),
        &mut reader,
        &mut writer,
    );
    assert!(matches!(result, Err(crate::error::KaniError::Io(_))));
}

#[test]
fn test_mode_choices() {
    assert_eq!(Mode::from_choice("0"), Some(Mode::EncodeFile));
    assert_eq!(Mode::from_choice(" 1 "), Some(Mode::DecodeFile));
    assert_eq!(Mode::from_choice("2"), Some(Mode::EncodeInteractive));
    assert_eq!(Mode::from_choice("3"), Some(Mode::DecodeInteractive));
    assert_eq!(Mode::from_choice("4"), None);
    assert_eq!(Mode::from_choice(""), None);

    assert_eq!(Mode::DecodeFile.direction(), Direction::Decode);
    assert_eq!(Mode::EncodeInteractive.direction(), Direction::Encode);
}

#[test]
fn test_mode_sources_follow_config() {
    let mut config = KaniConfig::default();
    config.input.decode_file = "tokens.txt".into();

    assert_eq!(
        Mode::DecodeFile.source(&config.input),
        Source::File("tokens.txt".into())
    );
    assert_eq!(
        Mode::EncodeInteractive.source(&config.input),
        Source::Interactive
    );
}

#[test]
fn test_menu_runs_selected_mode() {
    let mut reader = Cursor::new("2\nab\n".to_string());
    let mut writer = Vec::new();

    let transcript = session::run_menu(&codec(), &KaniConfig::default(), &mut reader, &mut writer)
        .unwrap()
        .unwrap();

    let stdout = String::from_utf8(writer).unwrap();
    assert!(stdout.starts_with("0: encode by file\n"));
    assert!(stdout.contains("input your choice:\ninput sentence: "));
    assert_eq!(transcript.direction, Direction::Encode);
    assert_eq!(transcript.outputs("?").collect::<Vec<_>>(), vec![".-", "-..."]);
}

#[test]
fn test_menu_rejects_unknown_choice() {
    let mut reader = Cursor::new("9\n".to_string());
    let mut writer = Vec::new();

    let result =
        session::run_menu(&codec(), &KaniConfig::default(), &mut reader, &mut writer).unwrap();

    assert!(result.is_none());
    assert!(String::from_utf8(writer).unwrap().ends_with("Error choice!\n"));
}
