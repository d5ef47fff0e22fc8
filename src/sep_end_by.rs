use std::marker::PhantomData;

use crate::container::Container;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::streams::TextStream;

/// Zero or more separated values with an optional trailing separator:
/// accepts both `a,b,c` and `a,b,c,` and produces the same list.
///
/// A separator that succeeds right before the value parser fails is taken
/// to be the trailing separator and is counted; everything else behaves
/// like [`sep_by`](crate::sep_by::sep_by).
pub struct SepEndBy<C, S, P> {
    sep: S,
    parser: P,
    _container: PhantomData<C>,
}

impl<C, S, P> SepEndBy<C, S, P> {
    pub fn new(sep: S, parser: P) -> Self {
        SepEndBy {
            sep,
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, S, P> Parser<'s> for SepEndBy<C, S, P>
where
    S: Parser<'s>,
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let head = self.parser.parse(stream);
        let Some(value) = head.value else {
            // No values at all; a lone separator still counts as the
            // optional trailing one.
            let rs = self.sep.parse(stream);
            return if rs.is_success() {
                Outcome::success(C::empty(), rs.pos, rs.checkpoint)
            } else {
                Outcome::success(C::empty(), Position::default(), 0)
            };
        };
        let mut items = C::empty();
        items.append(value);
        let mut pos = head.pos;
        let mut checkpoint = head.checkpoint;
        loop {
            let rs = self.sep.parse(stream);
            if rs.is_failure() {
                break;
            }
            let rv = self.parser.parse(stream);
            match rv.value {
                Some(value) => {
                    items.append(value);
                    pos = pos + rs.pos + rv.pos;
                    checkpoint = checkpoint.max(rv.checkpoint);
                }
                None => {
                    // The separator was the trailing one.
                    pos = pos + rs.pos;
                    checkpoint = checkpoint.max(rs.checkpoint);
                    break;
                }
            }
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create a SepEndBy parser.
pub fn sep_end_by<C, S, P>(sep: S, parser: P) -> SepEndBy<C, S, P> {
    SepEndBy::new(sep, parser)
}

/// One or more separated values with an optional trailing separator.
pub struct SepEndBy1<C, S, P> {
    sep: S,
    parser: P,
    _container: PhantomData<C>,
}

impl<C, S, P> SepEndBy1<C, S, P> {
    pub fn new(sep: S, parser: P) -> Self {
        SepEndBy1 {
            sep,
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, S, P> Parser<'s> for SepEndBy1<C, S, P>
where
    S: Parser<'s>,
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let head = self.parser.parse(stream);
        let Some(value) = head.value else {
            return Outcome::failure_at(head.pos, head.checkpoint);
        };
        let mut items = C::empty();
        items.append(value);
        let mut pos = head.pos;
        let mut checkpoint = head.checkpoint;
        loop {
            let rs = self.sep.parse(stream);
            if rs.is_failure() {
                break;
            }
            let rv = self.parser.parse(stream);
            match rv.value {
                Some(value) => {
                    items.append(value);
                    pos = pos + rs.pos + rv.pos;
                    checkpoint = checkpoint.max(rv.checkpoint);
                }
                None => {
                    pos = pos + rs.pos;
                    checkpoint = checkpoint.max(rs.checkpoint);
                    break;
                }
            }
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create a SepEndBy1 parser.
pub fn sep_end_by1<C, S, P>(sep: S, parser: P) -> SepEndBy1<C, S, P> {
    SepEndBy1::new(sep, parser)
}
