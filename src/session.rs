//! Encode and decode runs over whole inputs.
//!
//! A run pulls text from a [`Source`], feeds each letter or token through the
//! [`MorseCodec`], and collects a [`Transcript`]: every item with its outcome
//! plus the run's [`Statistics`]. Items without a mapping are logged and kept
//! in the transcript; they never stop the run.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::codec::table::Symbol;
use crate::codec::{MorseCodec, MorseError};
use crate::config::{InputConfig, KaniConfig, OutputConfig, OutputFormat};
use crate::error::KaniResult;
use crate::input;
use crate::stats::Statistics;

/// The choices offered by the interactive menu, one per line.
pub const MENU: &str = "0: encode by file\n1: decode by file\n2: encode by user\n3: decode by user";

/// Translation direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Letters to Morse patterns
    Encode,
    /// Morse tokens to letters
    Decode,
}

/// Where a run reads its text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A whole file
    File(PathBuf),
    /// Text supplied directly, e.g. on the command line
    Text(String),
    /// One line read after a prompt
    Interactive,
}

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Encode the configured encode file
    EncodeFile,
    /// Decode the configured decode file
    DecodeFile,
    /// Encode one line typed by the user
    EncodeInteractive,
    /// Decode one line typed by the user
    DecodeInteractive,
}

impl Mode {
    /// Parses a menu choice `0`-`3`; anything else is `None`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "0" => Some(Self::EncodeFile),
            "1" => Some(Self::DecodeFile),
            "2" => Some(Self::EncodeInteractive),
            "3" => Some(Self::DecodeInteractive),
            _ => None,
        }
    }

    /// Direction of the run this mode selects.
    pub fn direction(self) -> Direction {
        match self {
            Self::EncodeFile | Self::EncodeInteractive => Direction::Encode,
            Self::DecodeFile | Self::DecodeInteractive => Direction::Decode,
        }
    }

    /// Source of the run this mode selects.
    pub fn source(self, input: &InputConfig) -> Source {
        match self {
            Self::EncodeFile => Source::File(input.encode_file.clone()),
            Self::DecodeFile => Source::File(input.decode_file.clone()),
            Self::EncodeInteractive | Self::DecodeInteractive => Source::Interactive,
        }
    }
}

/// One letter or token and what the codec made of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptItem {
    /// The letter or token as read
    pub input: String,

    /// Pattern or letter on success, the codec error otherwise
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<String, MorseError>,
}

fn serialize_outcome<S: Serializer>(
    outcome: &Result<String, MorseError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    match outcome {
        Ok(output) => map.serialize_entry("output", output)?,
        Err(error) => map.serialize_entry("error", &error.to_string())?,
    }
    map.end()
}

/// Result of one encode or decode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Direction of the run
    pub direction: Direction,

    /// Items in input order
    pub items: Vec<TranscriptItem>,

    /// Counts gathered during the run
    pub statistics: Statistics,
}

impl Transcript {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            items: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Number of items that had no mapping.
    pub fn failures(&self) -> usize {
        self.items.iter().filter(|item| item.outcome.is_err()).count()
    }

    /// Outputs in order, with `placeholder` standing in for failed items.
    pub fn outputs<'a>(&'a self, placeholder: &'a str) -> impl Iterator<Item = &'a str> {
        self.items
            .iter()
            .map(move |item| item.outcome.as_deref().unwrap_or(placeholder))
    }

    /// Renders the transcript as plain text.
    pub fn render_text(&self, config: &OutputConfig) -> String {
        let inputs: Vec<&str> = self.items.iter().map(|item| item.input.as_str()).collect();
        let outputs: Vec<&str> = self.outputs(&config.placeholder).collect();

        let mut text = match self.direction {
            Direction::Encode => format!(
                "sentence: [{}]\nmorse codes:\n{}\n",
                inputs.concat(),
                outputs.join(" ")
            ),
            Direction::Decode => format!(
                "morse codes:\n{}\nsentence: [{}]\n",
                inputs.join(" "),
                outputs.concat()
            ),
        };

        if config.statistics {
            text.push_str(&self.statistics.to_string());
            text.push('\n');
        }
        text
    }
}

/// Encodes every letter of `text`.
///
/// With `strict` unset, characters that are not letters are dropped before
/// encoding; with it set they are kept and fail with [`MorseError::NotALetter`].
pub fn encode_text(codec: &MorseCodec, text: &str, strict: bool) -> Transcript {
    let mut transcript = Transcript::new(Direction::Encode);

    for letter in input::letters(text, strict) {
        let outcome = codec.encode(letter).map(|pattern| {
            transcript.statistics.record_letter(letter);
            transcript.statistics.record_pattern(pattern);
            pattern.to_string()
        });

        if let Err(error) = &outcome {
            warn!(input = %letter, %error, "No Morse code for input");
        }

        transcript.items.push(TranscriptItem {
            input: letter.to_string(),
            outcome,
        });
    }

    transcript
}

/// Decodes every whitespace-delimited token of `text`.
///
/// Symbols are counted for every well-formed token, letters for every
/// successfully decoded one.
pub fn decode_text(codec: &MorseCodec, text: &str) -> Transcript {
    let mut transcript = Transcript::new(Direction::Decode);

    for token in input::tokens(text) {
        let outcome = codec.decode(token);

        if let Ok(letter) = outcome {
            transcript.statistics.record_letter(letter);
        }
        if token.chars().all(|ch| Symbol::from_char(ch).is_some()) {
            transcript.statistics.record_pattern(token);
        }

        match &outcome {
            Err(error @ MorseError::IncompleteCode(_)) => {
                let candidates: String = codec
                    .trie()
                    .completions(token)
                    .into_iter()
                    .map(|(_, letter)| letter)
                    .collect();
                warn!(%token, %error, %candidates, "Token is only a prefix of longer codes");
            }
            Err(error) => warn!(%token, %error, "No letter for token"),
            Ok(_) => {}
        }

        transcript.items.push(TranscriptItem {
            input: token.to_string(),
            outcome: outcome.map(String::from),
        });
    }

    transcript
}

/// Runs one encode or decode pass and writes the rendered transcript to `writer`.
///
/// Interactive sources print a prompt to `writer` and read one line from `reader`.
pub fn run<R: BufRead, W: Write>(
    direction: Direction,
    source: &Source,
    codec: &MorseCodec,
    config: &KaniConfig,
    reader: &mut R,
    writer: &mut W,
) -> KaniResult<Transcript> {
    let text = match source {
        Source::File(path) => input::read_file(path)?,
        Source::Text(text) => text.clone(),
        Source::Interactive => {
            let prompt = match direction {
                Direction::Encode => "input sentence: ",
                Direction::Decode => "input morse codes: ",
            };
            write!(writer, "{prompt}")?;
            writer.flush()?;
            input::read_line(reader)?
        }
    };

    let transcript = match direction {
        Direction::Encode => encode_text(codec, &text, config.input.strict_letters),
        Direction::Decode => decode_text(codec, &text),
    };

    info!(
        ?direction,
        items = transcript.items.len(),
        failures = transcript.failures(),
        "Run complete"
    );

    render(&transcript, &config.output, writer)?;
    Ok(transcript)
}

/// Prints the menu, reads one choice from `reader` and runs the chosen mode.
///
/// An unrecognized choice prints `Error choice!` and runs nothing.
pub fn run_menu<R: BufRead, W: Write>(
    codec: &MorseCodec,
    config: &KaniConfig,
    reader: &mut R,
    writer: &mut W,
) -> KaniResult<Option<Transcript>> {
    writeln!(writer, "{MENU}")?;
    writeln!(writer, "input your choice:")?;
    writer.flush()?;

    let choice = input::read_line(reader)?;
    match Mode::from_choice(&choice) {
        Some(mode) => {
            let source = mode.source(&config.input);
            run(mode.direction(), &source, codec, config, reader, writer).map(Some)
        }
        None => {
            warn!(%choice, "Unknown menu choice");
            writeln!(writer, "Error choice!")?;
            Ok(None)
        }
    }
}

/// Writes a transcript in the configured format.
pub fn render<W: Write>(
    transcript: &Transcript,
    config: &OutputConfig,
    output: &mut W,
) -> KaniResult<()> {
    match config.format {
        OutputFormat::Text => write!(output, "{}", transcript.render_text(config))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, transcript)?;
            writeln!(output)?;
        }
    }
    output.flush()?;
    Ok(())
}
