use crate::between::{BetweenDelim, between_delim};
use crate::character::{IsChar, double_quote};
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::stream::Stream;
use crate::streams::TextStream;

fn read_raw<'s, P>(
    stream: &mut TextStream<'s>,
    escapable: Option<&P>,
) -> Outcome<String>
where
    P: Parser<'s, Output = char>,
{
    let mut out = String::new();
    let mut pos = Position::default();
    loop {
        match stream.peek() {
            None | Some('"') => break,
            Some('\\') => {
                stream.read();
                pos += Position::after('\\');
                match stream.peek() {
                    Some(c @ ('\\' | '"')) => {
                        stream.read();
                        pos += Position::after(c);
                        out.push(c);
                    }
                    _ => {
                        let escaped = escapable.map(|p| p.parse(stream));
                        match escaped {
                            Some(r) if r.is_success() => {
                                pos += r.pos;
                                if let Some(c) = r.value {
                                    out.push(c);
                                }
                            }
                            // Not a recognized escape: the backslash is
                            // kept literally and the next character is
                            // handled by the ordinary loop.
                            _ => out.push('\\'),
                        }
                    }
                }
            }
            Some(c) => {
                stream.read();
                pos += Position::after(c);
                out.push(c);
            }
        }
    }
    Outcome::success(out, pos, stream.offset())
}

/// Parse a run of string characters up to an unescaped double quote or the
/// end of the stream — the inside of a string literal, delimiter excluded.
///
/// A backslash before a backslash or a double quote escapes it: the pair
/// collapses to the single escaped character in the output. A backslash
/// before anything else is not an escape; both characters are kept
/// literally. Always succeeds, possibly with an empty string.
pub struct RawString;

impl<'s> Parser<'s> for RawString {
    type Output = String;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<String> {
        read_raw::<IsChar>(stream, None)
    }
}

/// Convenience function to create a RawString parser.
pub fn raw_string() -> RawString {
    RawString
}

/// [`RawString`] with an additional escaping rule: a backslash also
/// escapes any character the supplied parser accepts, which replaces the
/// pair in the output.
pub struct RawStringEscaping<P> {
    escapable: P,
}

impl<P> RawStringEscaping<P> {
    pub fn new(escapable: P) -> Self {
        RawStringEscaping { escapable }
    }
}

impl<'s, P> Parser<'s> for RawStringEscaping<P>
where
    P: Parser<'s, Output = char>,
{
    type Output = String;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<String> {
        read_raw(stream, Some(&self.escapable))
    }
}

pub fn raw_string_escaping<P>(escapable: P) -> RawStringEscaping<P> {
    RawStringEscaping::new(escapable)
}

/// Parse a string literal between double quotes, with the [`RawString`]
/// escape rules.
pub fn string() -> BetweenDelim<IsChar, RawString> {
    between_delim(double_quote(), raw_string())
}

/// [`string`] with an additional escaping rule for the inner characters.
pub fn string_escaping<P>(escapable: P) -> BetweenDelim<IsChar, RawStringEscaping<P>> {
    between_delim(double_quote(), raw_string_escaping(escapable))
}
