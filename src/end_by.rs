use std::marker::PhantomData;

use crate::container::Container;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::streams::TextStream;

/// Zero or more values, each followed by its separator: (value sep)*.
///
/// No separator means no more values: a value whose trailing separator
/// fails is discarded, ending the repetition, though its consumption stays
/// behind as with any non-atomic failure.
pub struct EndBy<C, S, P> {
    sep: S,
    parser: P,
    _container: PhantomData<C>,
}

impl<C, S, P> EndBy<C, S, P> {
    pub fn new(sep: S, parser: P) -> Self {
        EndBy {
            sep,
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, S, P> Parser<'s> for EndBy<C, S, P>
where
    S: Parser<'s>,
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let mut items = C::empty();
        let mut pos = Position::default();
        let mut checkpoint = 0;
        loop {
            let rv = self.parser.parse(stream);
            let Some(value) = rv.value else {
                break;
            };
            let rs = self.sep.parse(stream);
            if rs.is_failure() {
                break;
            }
            items.append(value);
            pos = pos + rv.pos + rs.pos;
            checkpoint = checkpoint.max(rs.checkpoint);
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create an EndBy parser.
pub fn end_by<C, S, P>(sep: S, parser: P) -> EndBy<C, S, P> {
    EndBy::new(sep, parser)
}

/// One or more values, each followed by its separator: (value sep)+.
pub struct EndBy1<C, S, P> {
    sep: S,
    parser: P,
    _container: PhantomData<C>,
}

impl<C, S, P> EndBy1<C, S, P> {
    pub fn new(sep: S, parser: P) -> Self {
        EndBy1 {
            sep,
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, S, P> Parser<'s> for EndBy1<C, S, P>
where
    S: Parser<'s>,
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let rv = self.parser.parse(stream);
        let Some(value) = rv.value else {
            return Outcome::failure_at(rv.pos, rv.checkpoint);
        };
        let rs = self.sep.parse(stream).from(rv.pos, rv.checkpoint);
        if rs.is_failure() {
            return Outcome::failure_from(&rs);
        }
        let mut items = C::empty();
        items.append(value);
        let mut pos = rs.pos;
        let mut checkpoint = rs.checkpoint;
        loop {
            let rv = self.parser.parse(stream);
            let Some(value) = rv.value else {
                break;
            };
            let rs = self.sep.parse(stream);
            if rs.is_failure() {
                break;
            }
            items.append(value);
            pos = pos + rv.pos + rs.pos;
            checkpoint = checkpoint.max(rs.checkpoint);
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create an EndBy1 parser.
pub fn end_by1<C, S, P>(sep: S, parser: P) -> EndBy1<C, S, P> {
    EndBy1::new(sep, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{digit_char, semicolon};
    use crate::stream::Stream;

    #[test]
    fn test_end_by_statement_style() {
        let mut stream = TextStream::new("1;2;3;x");
        let r = end_by::<Vec<char>, _, _>(semicolon(), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some(vec!['1', '2', '3']));
        assert_eq!(stream.peek(), Some('x'));
    }

    #[test]
    fn test_end_by_zero_values() {
        let mut stream = TextStream::new("x");
        let r = end_by::<Vec<char>, _, _>(semicolon(), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some(vec![]));
        assert_eq!(stream.offset(), 0);
    }

    #[test]
    fn test_end_by_missing_final_separator() {
        // "3" has no trailing separator, so it is not part of the list;
        // its consumption stays behind.
        let mut stream = TextStream::new("1;2;3");
        let r = end_by::<Vec<char>, _, _>(semicolon(), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some(vec!['1', '2']));
        assert!(stream.at_end());
        assert_eq!(r.pos, Position::new(1, 5));
    }

    #[test]
    fn test_end_by1_requires_one_pair() {
        let mut stream = TextStream::new("x");
        assert!(
            end_by1::<Vec<char>, _, _>(semicolon(), digit_char())
                .parse(&mut stream)
                .is_failure()
        );

        let mut stream = TextStream::new("1x");
        let r = end_by1::<Vec<char>, _, _>(semicolon(), digit_char()).parse(&mut stream);
        assert!(r.is_failure());
        // The value parsed but the separator did not.
        assert_eq!(r.pos, Position::new(1, 2));
        assert_eq!(r.checkpoint, 1);
    }

    #[test]
    fn test_end_by1_list() {
        let mut stream = TextStream::new("1;2;");
        let r = end_by1::<Vec<char>, _, _>(semicolon(), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some(vec!['1', '2']));
        assert!(stream.at_end());
    }
}
