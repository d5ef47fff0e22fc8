use std::marker::PhantomData;

use crate::container::Container;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::streams::TextStream;

/// One or more values separated by a separator: value (sep value)*.
///
/// After each value, a separator is tried; if it succeeds, another value
/// is required. A separator whose following value fails is discarded along
/// with that value — its consumption stays behind, like every non-atomic
/// failure in the repetition family.
pub struct SepBy1<C, S, P> {
    sep: S,
    parser: P,
    _container: PhantomData<C>,
}

impl<C, S, P> SepBy1<C, S, P> {
    pub fn new(sep: S, parser: P) -> Self {
        SepBy1 {
            sep,
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, S, P> Parser<'s> for SepBy1<C, S, P>
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
                None => break,
            }
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create a SepBy1 parser.
pub fn sep_by1<C, S, P>(sep: S, parser: P) -> SepBy1<C, S, P> {
    SepBy1::new(sep, parser)
}

/// Zero or more values separated by a separator. An input with no leading
/// value succeeds with an empty container.
pub struct SepBy<C, S, P> {
    inner: SepBy1<C, S, P>,
}

impl<C, S, P> SepBy<C, S, P> {
    pub fn new(sep: S, parser: P) -> Self {
        SepBy {
            inner: SepBy1::new(sep, parser),
        }
    }
}

impl<'s, C, S, P> Parser<'s> for SepBy<C, S, P>
where
    S: Parser<'s>,
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let r = self.inner.parse(stream);
        if r.is_success() {
            return r;
        }
        Outcome::success(C::empty(), Position::default(), 0)
    }
}

/// Convenience function to create a SepBy parser.
pub fn sep_by<C, S, P>(sep: S, parser: P) -> SepBy<C, S, P> {
    SepBy::new(sep, parser)
}
