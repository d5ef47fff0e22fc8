use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Exact character comparison.
pub fn equals(expected: char, actual: char) -> bool {
    expected == actual
}

/// ASCII case-insensitive character comparison.
pub fn equals_insensitive(expected: char, actual: char) -> bool {
    expected.eq_ignore_ascii_case(&actual)
}

/// Keyword matcher: consume characters one at a time while they match the
/// keyword under the supplied comparator, succeeding with the keyword's
/// own text once it is exhausted.
///
/// **Not atomic**: the match fails the instant a character mismatches or
/// the stream ends, and everything matched up to that point stays
/// consumed. Wrap in [`attempt`](crate::attempt::attempt) when keyword
/// alternatives share prefixes.
pub struct Reserved<F> {
    keyword: String,
    compare: F,
}

impl<F> Reserved<F> {
    pub fn new(keyword: impl Into<String>, compare: F) -> Self {
        Reserved {
            keyword: keyword.into(),
            compare,
        }
    }
}

impl<'s, F> Parser<'s> for Reserved<F>
where
    F: Fn(char, char) -> bool,
{
    type Output = String;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<String> {
        let mut pos = Position::default();
        for expected in self.keyword.chars() {
            match stream.peek() {
                Some(c) if (self.compare)(expected, c) => {
                    stream.read();
                    pos += Position::after(c);
                }
                _ => return Outcome::failure_at(pos, 0),
            }
        }
        Outcome::success(self.keyword.clone(), pos, stream.offset())
    }
}

/// Keyword matcher with exact comparison.
pub fn reserved(keyword: impl Into<String>) -> Reserved<fn(char, char) -> bool> {
    Reserved::new(keyword, equals)
}

/// Keyword matcher with a caller-supplied comparator.
pub fn reserved_with<F>(keyword: impl Into<String>, compare: F) -> Reserved<F>
where
    F: Fn(char, char) -> bool,
{
    Reserved::new(keyword, compare)
}

/// Keyword matcher, ASCII case insensitive.
pub fn ireserved(keyword: impl Into<String>) -> Reserved<fn(char, char) -> bool> {
    Reserved::new(keyword, equals_insensitive)
}

/// Like [`Reserved`], succeeding with no payload: the match is pure
/// consumption and no keyword string is allocated on success.
pub struct SkipReserved<F> {
    keyword: String,
    compare: F,
}

impl<F> SkipReserved<F> {
    pub fn new(keyword: impl Into<String>, compare: F) -> Self {
        SkipReserved {
            keyword: keyword.into(),
            compare,
        }
    }
}

impl<'s, F> Parser<'s> for SkipReserved<F>
where
    F: Fn(char, char) -> bool,
{
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        let mut pos = Position::default();
        for expected in self.keyword.chars() {
            match stream.peek() {
                Some(c) if (self.compare)(expected, c) => {
                    stream.read();
                    pos += Position::after(c);
                }
                _ => return Outcome::failure_at(pos, 0),
            }
        }
        Outcome::success((), pos, stream.offset())
    }
}

/// Skip-variant keyword matcher with exact comparison.
pub fn skip_reserved(keyword: impl Into<String>) -> SkipReserved<fn(char, char) -> bool> {
    SkipReserved::new(keyword, equals)
}

/// Skip-variant keyword matcher with a caller-supplied comparator.
pub fn skip_reserved_with<F>(keyword: impl Into<String>, compare: F) -> SkipReserved<F>
where
    F: Fn(char, char) -> bool,
{
    SkipReserved::new(keyword, compare)
}

/// Skip-variant keyword matcher, ASCII case insensitive.
pub fn skip_ireserved(keyword: impl Into<String>) -> SkipReserved<fn(char, char) -> bool> {
    SkipReserved::new(keyword, equals_insensitive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match() {
        let mut stream = TextStream::new("while x");
        let r = reserved("while").parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("while"));
        assert_eq!(r.pos, Position::new(1, 6));
        assert_eq!(r.checkpoint, 5);
        assert_eq!(stream.peek(), Some(' '));
    }

    #[test]
    fn test_mismatch_keeps_partial_consumption() {
        let mut stream = TextStream::new("whale");
        let r = reserved("while").parse(&mut stream);
        assert!(r.is_failure());
        // "wh" matched before the mismatch and stays consumed.
        assert_eq!(stream.peek(), Some('a'));
        assert_eq!(r.pos, Position::new(1, 3));
    }

    #[test]
    fn test_mismatch_on_first_char_is_atomic() {
        let mut stream = TextStream::new("for");
        let r = reserved("while").parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(stream.peek(), Some('f'));
        assert_eq!(r.pos, Position::default());
    }

    #[test]
    fn test_end_of_stream_mid_keyword() {
        let mut stream = TextStream::new("whi");
        let r = reserved("while").parse(&mut stream);
        assert!(r.is_failure());
        assert!(stream.at_end());
    }

    #[test]
    fn test_insensitive_yields_canonical_spelling() {
        let mut stream = TextStream::new("WhIlE");
        let r = ireserved("while").parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("while"));
    }

    #[test]
    fn test_skip_variant() {
        let mut stream = TextStream::new("while");
        let r = skip_reserved("while").parse(&mut stream);
        assert_eq!(r.value, Some(()));
        assert_eq!(r.pos, Position::new(1, 6));
        assert!(stream.at_end());
    }

    #[test]
    fn test_custom_comparator() {
        // Treat underscore and hyphen as equivalent.
        let loose = |expected: char, actual: char| {
            expected == actual || (expected == '_' && actual == '-')
        };
        let mut stream = TextStream::new("no-break");
        let r = reserved_with("no_break", loose).parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("no_break"));
    }
}
