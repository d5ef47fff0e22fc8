use log::debug;
use thiserror::Error;

use crate::outcome::Outcome;
use crate::position::Position;
use crate::stream::Stream;

/// Extract the text between the last successful checkpoint and the
/// stream's current offset: the raw input a failed parse choked on.
///
/// Meaningful for a failure outcome, though nothing enforces that; the
/// stream's offset is restored afterwards.
pub fn illformed<T, S: Stream>(outcome: &Outcome<T>, stream: &mut S) -> String {
    let end = stream.offset();
    stream.read_span(outcome.checkpoint.min(end), end)
}

/// A failed parse, as a boundary error for callers that propagate with
/// `?` after the parse completes. Parsing control flow itself never uses
/// this type — inside the combinators, failure is an [`Outcome`] without
/// a value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse failed at {position}: unexpected input {fragment:?}")]
pub struct ParseError {
    /// Where the parse stopped, relative to where it began — absolute
    /// when the parse began at the start of the stream.
    pub position: Position,
    /// The text between the last successful checkpoint and the offset
    /// where parsing stopped.
    pub fragment: String,
}

/// Convert a finished parse into a `Result`, extracting the offending
/// fragment from the stream on failure.
pub fn finish<T, S: Stream>(outcome: Outcome<T>, stream: &mut S) -> Result<T, ParseError> {
    let position = outcome.pos;
    let checkpoint = outcome.checkpoint;
    match outcome.value {
        Some(value) => Ok(value),
        None => {
            let end = stream.offset();
            let fragment = stream.read_span(checkpoint.min(end), end);
            debug!("parse failed at {position}: fragment {fragment:?}");
            Err(ParseError { position, fragment })
        }
    }
}
