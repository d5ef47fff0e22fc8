use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Parse something between two delimiters.
///
/// The parsers run in the order open, inner, close; failure of any stage
/// fails the whole, with everything consumed so far composed into the
/// failure. Only the inner result is kept.
pub struct Between<O, C, P> {
    open: O,
    close: C,
    parser: P,
}

impl<O, C, P> Between<O, C, P> {
    pub fn new(open: O, close: C, parser: P) -> Self {
        Between {
            open,
            close,
            parser,
        }
    }
}

impl<'s, O, C, P> Parser<'s> for Between<O, C, P>
where
    O: Parser<'s>,
    C: Parser<'s>,
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let ro = self.open.parse(stream);
        if ro.is_failure() {
            return Outcome::failure_from(&ro);
        }
        let rv = self.parser.parse(stream).from(ro.pos, ro.checkpoint);
        let Some(value) = rv.value else {
            return Outcome::failure_at(rv.pos, rv.checkpoint);
        };
        let rc = self.close.parse(stream).from(rv.pos, rv.checkpoint);
        if rc.is_failure() {
            return Outcome::failure_from(&rc);
        }
        Outcome::success(value, rc.pos, rc.checkpoint)
    }
}

/// Convenience function to create a Between parser.
pub fn between<O, C, P>(open: O, close: C, parser: P) -> Between<O, C, P> {
    Between::new(open, close, parser)
}

/// Between with the same delimiter on both sides, run twice.
pub struct BetweenDelim<D, P> {
    delimiter: D,
    parser: P,
}

impl<D, P> BetweenDelim<D, P> {
    pub fn new(delimiter: D, parser: P) -> Self {
        BetweenDelim { delimiter, parser }
    }
}

impl<'s, D, P> Parser<'s> for BetweenDelim<D, P>
where
    D: Parser<'s>,
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let ro = self.delimiter.parse(stream);
        if ro.is_failure() {
            return Outcome::failure_from(&ro);
        }
        let rv = self.parser.parse(stream).from(ro.pos, ro.checkpoint);
        let Some(value) = rv.value else {
            return Outcome::failure_at(rv.pos, rv.checkpoint);
        };
        let rc = self.delimiter.parse(stream).from(rv.pos, rv.checkpoint);
        if rc.is_failure() {
            return Outcome::failure_from(&rc);
        }
        Outcome::success(value, rc.pos, rc.checkpoint)
    }
}

/// Convenience function to create a BetweenDelim parser.
pub fn between_delim<D, P>(delimiter: D, parser: P) -> BetweenDelim<D, P> {
    BetweenDelim::new(delimiter, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{close_paren, digit_char, double_quote, open_paren};
    use crate::position::Position;
    use crate::stream::Stream;

    #[test]
    fn test_between_keeps_inner_value() {
        let mut stream = TextStream::new("(7)x");
        let r = between(open_paren(), close_paren(), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some('7'));
        assert_eq!(r.pos, Position::new(1, 4));
        assert_eq!(r.checkpoint, 3);
        assert_eq!(stream.peek(), Some('x'));
    }

    #[test]
    fn test_between_open_fails_atomically() {
        let mut stream = TextStream::new("7)");
        let r = between(open_paren(), close_paren(), digit_char()).parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(stream.offset(), 0);
    }

    #[test]
    fn test_between_missing_close() {
        let mut stream = TextStream::new("(7x");
        let r = between(open_paren(), close_paren(), digit_char()).parse(&mut stream);
        assert!(r.is_failure());
        // Open and inner consumed; their position composes into the failure.
        assert_eq!(r.pos, Position::new(1, 3));
        assert_eq!(r.checkpoint, 2);
    }

    #[test]
    fn test_between_inner_failure() {
        let mut stream = TextStream::new("(x)");
        let r = between(open_paren(), close_paren(), digit_char()).parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(r.pos, Position::new(1, 2));
    }

    #[test]
    fn test_between_delim() {
        let mut stream = TextStream::new("\"7\"");
        let r = between_delim(double_quote(), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some('7'));
        assert!(stream.at_end());
    }
}
