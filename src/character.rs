use crate::not::{Not, not};
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::stream::Stream;
use crate::streams::TextStream;

// Character classification. Whitespace deliberately excludes the newline
// characters, which are handled by `newline`.

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alpha_num(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Space, horizontal tab, vertical tab or form feed.
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0B' || c == '\x0C'
}

/// Parser for a single character satisfying a predicate.
///
/// Atomic: on failure the stream has not advanced. This is the baseline
/// every primitive in the crate is built on.
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'s, F> Parser<'s> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<char> {
        match stream.peek() {
            Some(c) if (self.predicate)(c) => {
                stream.read();
                Outcome::success(c, Position::after(c), stream.offset())
            }
            _ => Outcome::failure(),
        }
    }
}

/// Convenience function to create a Satisfy parser.
pub fn satisfy<F: Fn(char) -> bool>(predicate: F) -> Satisfy<F> {
    Satisfy::new(predicate)
}

/// Parser for one specific character.
pub struct IsChar {
    expected: char,
}

impl IsChar {
    pub fn new(expected: char) -> Self {
        IsChar { expected }
    }
}

impl<'s> Parser<'s> for IsChar {
    type Output = char;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<char> {
        match stream.peek() {
            Some(c) if c == self.expected => {
                stream.read();
                Outcome::success(c, Position::after(c), stream.offset())
            }
            _ => Outcome::failure(),
        }
    }
}

/// Convenience function to create an IsChar parser.
pub fn is_char(expected: char) -> IsChar {
    IsChar::new(expected)
}

/// Parser for one specific character, ASCII case insensitive.
pub struct Insensitive {
    expected: char,
}

impl Insensitive {
    pub fn new(expected: char) -> Self {
        Insensitive { expected }
    }
}

impl<'s> Parser<'s> for Insensitive {
    type Output = char;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<char> {
        match stream.peek() {
            Some(c) if c.eq_ignore_ascii_case(&self.expected) => {
                stream.read();
                Outcome::success(c, Position::after(c), stream.offset())
            }
            _ => Outcome::failure(),
        }
    }
}

pub fn insensitive(expected: char) -> Insensitive {
    Insensitive::new(expected)
}

/// Parser for any character. Fails only at end of stream.
pub struct Any;

impl<'s> Parser<'s> for Any {
    type Output = char;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<char> {
        match stream.read() {
            Some(c) => Outcome::success(c, Position::after(c), stream.offset()),
            None => Outcome::failure(),
        }
    }
}

pub fn any() -> Any {
    Any
}

/// Any character except those accepted by the supplied parser.
pub fn except<P>(parser: P) -> Not<P, Any> {
    not(parser, any())
}

/// Parser for the end of the stream. Succeeds with no payload, consuming
/// nothing, exactly when no character remains.
pub struct Eos;

impl<'s> Parser<'s> for Eos {
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        if stream.at_end() {
            Outcome::success((), Position::default(), stream.offset())
        } else {
            Outcome::failure()
        }
    }
}

pub fn eos() -> Eos {
    Eos
}

// The named single-character parsers.

pub fn carriage() -> IsChar {
    is_char('\r')
}

pub fn linefeed() -> IsChar {
    is_char('\n')
}

pub fn open_paren() -> IsChar {
    is_char('(')
}

pub fn close_paren() -> IsChar {
    is_char(')')
}

pub fn quote() -> IsChar {
    is_char('\'')
}

pub fn double_quote() -> IsChar {
    is_char('"')
}

pub fn comma() -> IsChar {
    is_char(',')
}

pub fn colon() -> IsChar {
    is_char(':')
}

pub fn semicolon() -> IsChar {
    is_char(';')
}

pub fn minus() -> IsChar {
    is_char('-')
}

pub fn plus() -> IsChar {
    is_char('+')
}

pub fn slash() -> IsChar {
    is_char('/')
}

pub fn backslash() -> IsChar {
    is_char('\\')
}

pub fn digit_char() -> Satisfy<fn(char) -> bool> {
    Satisfy::new(is_digit)
}

pub fn alpha() -> Satisfy<fn(char) -> bool> {
    Satisfy::new(is_alpha)
}

pub fn alpha_num() -> Satisfy<fn(char) -> bool> {
    Satisfy::new(is_alpha_num)
}

/// Consume any run of whitespace characters, returning the position delta
/// and whether anything was consumed. Shared by `whitespace` and the
/// lexeme-style helpers.
pub(crate) fn skip_spaces(stream: &mut TextStream<'_>) -> (Position, bool) {
    let mut pos = Position::default();
    let mut consumed = false;
    while let Some(c) = stream.peek() {
        if !is_space(c) {
            break;
        }
        stream.read();
        pos += Position::after(c);
        consumed = true;
    }
    (pos, consumed)
}

/// Parser for one or more whitespace characters (space, horizontal tab,
/// vertical tab, form feed — not newlines). Fails if none is present.
pub struct Whitespace;

impl<'s> Parser<'s> for Whitespace {
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        let (pos, consumed) = skip_spaces(stream);
        if consumed {
            Outcome::success((), pos, stream.offset())
        } else {
            Outcome::failure()
        }
    }
}

pub fn whitespace() -> Whitespace {
    Whitespace
}

/// Parser for a line break: a linefeed, optionally preceded by a carriage
/// return. Not atomic: a carriage return not followed by a linefeed stays
/// consumed.
pub struct Newline;

impl<'s> Parser<'s> for Newline {
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        match stream.peek() {
            Some('\n') => {
                stream.read();
                Outcome::success((), Position::after('\n'), stream.offset())
            }
            Some('\r') => {
                stream.read();
                let checkpoint = stream.offset();
                match stream.peek() {
                    Some('\n') => {
                        stream.read();
                        Outcome::success((), Position::after('\n'), stream.offset())
                    }
                    _ => Outcome::failure_at(Position::after('\r'), checkpoint),
                }
            }
            _ => Outcome::failure(),
        }
    }
}

pub fn newline() -> Newline {
    Newline
}

/// Escape-sequence parser: a backslash, then either another backslash or a
/// character accepted by the supplied parser. Succeeds with the escaped
/// character alone. Not atomic: the backslash stays consumed when the
/// escapable parser rejects what follows.
pub struct Escaped<P> {
    escapable: P,
}

impl<P> Escaped<P> {
    pub fn new(escapable: P) -> Self {
        Escaped { escapable }
    }
}

impl<'s, P> Parser<'s> for Escaped<P>
where
    P: Parser<'s, Output = char>,
{
    type Output = char;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<char> {
        match stream.peek() {
            Some('\\') => {
                stream.read();
                let pos = Position::after('\\');
                let checkpoint = stream.offset();
                match stream.peek() {
                    Some('\\') => {
                        stream.read();
                        Outcome::success('\\', pos + Position::after('\\'), stream.offset())
                    }
                    _ => self.escapable.parse(stream).from(pos, checkpoint),
                }
            }
            _ => Outcome::failure(),
        }
    }
}

pub fn escaped<P>(escapable: P) -> Escaped<P> {
    Escaped::new(escapable)
}
