use std::marker::PhantomData;

use log::trace;

use crate::attempt::attempt;
use crate::consumption::consumption;
use crate::or::OrExt;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::reserved::skip_ireserved;
use crate::stream::Stream;
use crate::streams::TextStream;

/// The floating-point types, as targets for literal parsing. Conversion of
/// the captured text is delegated to the standard library's parser.
pub trait Float: Sized {
    fn from_text(text: &str) -> Option<Self>;
}

impl Float for f32 {
    fn from_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl Float for f64 {
    fn from_text(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// Recognize the lexical shape of a floating-point literal without
/// interpreting it: an optional sign, then either digits with an optional
/// `.` fraction and an optional exponent, or the spellings of infinity
/// and NaN, case insensitive.
///
/// The exponent is probed under backtracking so `"1e"` is recognized as
/// `"1"` with the `e` unconsumed — the captured text must be exactly what
/// the numeric converter accepts.
pub struct SkipFloating;

impl SkipFloating {
    fn skip_digits(stream: &mut TextStream<'_>, pos: &mut Position) -> bool {
        let mut any = false;
        while let Some(c) = stream.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            stream.read();
            *pos += Position::after(c);
            any = true;
        }
        any
    }
}

impl<'s> Parser<'s> for SkipFloating {
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        let mut pos = Position::default();
        let mut checkpoint = 0;
        if let Some(c @ ('+' | '-')) = stream.peek() {
            stream.read();
            pos += Position::after(c);
            checkpoint = stream.offset();
        }

        if matches!(stream.peek(), Some(c) if c.is_ascii_digit()) {
            Self::skip_digits(stream, &mut pos);
            checkpoint = stream.offset();

            if stream.peek() == Some('.') {
                stream.read();
                pos += Position::after('.');
                Self::skip_digits(stream, &mut pos);
                checkpoint = stream.offset();
            }

            if matches!(stream.peek(), Some('e' | 'E')) {
                let before_exponent = stream.offset();
                let mut exponent_pos = Position::default();
                let c = match stream.read() {
                    Some(c) => c,
                    None => return Outcome::success((), pos, checkpoint),
                };
                exponent_pos += Position::after(c);
                if let Some(c @ ('+' | '-')) = stream.peek() {
                    stream.read();
                    exponent_pos += Position::after(c);
                }
                if Self::skip_digits(stream, &mut exponent_pos) {
                    pos += exponent_pos;
                    checkpoint = stream.offset();
                } else {
                    // "1e" or "1e+" with no digits: not an exponent after
                    // all, give it back.
                    stream.seek(before_exponent);
                }
            }

            Outcome::success((), pos, checkpoint)
        } else {
            attempt(skip_ireserved("infinity"))
                .or(skip_ireserved("inf"))
                .or(skip_ireserved("nan"))
                .parse(stream)
                .from(pos, checkpoint)
        }
    }
}

/// Convenience function to create a SkipFloating parser.
pub fn skip_floating() -> SkipFloating {
    SkipFloating
}

/// Parse a floating-point literal: recognize its lexical shape, capture
/// the consumed text, and hand it to the trusted standard conversion.
/// Fails if the conversion rejects the text.
pub struct FloatingParser<N> {
    _numeric: PhantomData<N>,
}

impl<N> FloatingParser<N> {
    pub fn new() -> Self {
        FloatingParser {
            _numeric: PhantomData,
        }
    }
}

impl<N> Default for FloatingParser<N> {
    fn default() -> Self {
        FloatingParser::new()
    }
}

impl<'s, N> Parser<'s> for FloatingParser<N>
where
    N: Float,
{
    type Output = N;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<N> {
        let r = consumption(skip_floating()).parse(stream);
        let Some(text) = r.value else {
            return Outcome::failure_at(r.pos, r.checkpoint);
        };
        match N::from_text(&text) {
            Some(value) => Outcome::success(value, r.pos, r.checkpoint),
            None => {
                trace!("floating: converter rejected {text:?}");
                Outcome::failure_at(r.pos, r.checkpoint)
            }
        }
    }
}

/// Convenience function to create a FloatingParser.
pub fn floating<N: Float>() -> FloatingParser<N> {
    FloatingParser::new()
}
