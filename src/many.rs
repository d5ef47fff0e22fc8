use std::marker::PhantomData;

use crate::container::Container;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::streams::TextStream;

/// Apply a parser repeatedly until it fails, storing every value into a
/// container. Zero occurrences succeed with an empty container.
///
/// The failing application is discarded entirely: its position and
/// checkpoint are not counted. With an atomic inner parser the failing
/// application also consumed nothing, which is the usual arrangement;
/// a non-atomic inner parser should be wrapped in
/// [`attempt`](crate::attempt::attempt) by the caller.
pub struct Many<C, P> {
    parser: P,
    _container: PhantomData<C>,
}

impl<C, P> Many<C, P> {
    pub fn new(parser: P) -> Self {
        Many {
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, P> Parser<'s> for Many<C, P>
where
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let mut items = C::empty();
        let mut pos = Position::default();
        let mut checkpoint = 0;
        loop {
            let r = self.parser.parse(stream);
            match r.value {
                Some(value) => {
                    items.append(value);
                    pos = pos + r.pos;
                    checkpoint = checkpoint.max(r.checkpoint);
                }
                None => break,
            }
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create a Many parser.
pub fn many<C, P>(parser: P) -> Many<C, P> {
    Many::new(parser)
}

/// Like [`many`], but appending into a caller-supplied container instead
/// of a fresh empty one. The seed is cloned per parse.
pub struct ManyFrom<C, P> {
    seed: C,
    parser: P,
}

impl<C, P> ManyFrom<C, P> {
    pub fn new(seed: C, parser: P) -> Self {
        ManyFrom { seed, parser }
    }
}

impl<'s, C, P> Parser<'s> for ManyFrom<C, P>
where
    P: Parser<'s>,
    C: Container<Item = P::Output> + Clone,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let mut items = self.seed.clone();
        let mut pos = Position::default();
        let mut checkpoint = 0;
        loop {
            let r = self.parser.parse(stream);
            match r.value {
                Some(value) => {
                    items.append(value);
                    pos = pos + r.pos;
                    checkpoint = checkpoint.max(r.checkpoint);
                }
                None => break,
            }
        }
        Outcome::success(items, pos, checkpoint)
    }
}

pub fn many_from<C, P>(seed: C, parser: P) -> ManyFrom<C, P> {
    ManyFrom::new(seed, parser)
}

/// One-or-more variant of [`many`]: the first application must succeed,
/// and its failure is the whole parser's failure.
pub struct Many1<C, P> {
    parser: P,
    _container: PhantomData<C>,
}

impl<C, P> Many1<C, P> {
    pub fn new(parser: P) -> Self {
        Many1 {
            parser,
            _container: PhantomData,
        }
    }
}

impl<'s, C, P> Parser<'s> for Many1<C, P>
where
    P: Parser<'s>,
    C: Container<Item = P::Output>,
{
    type Output = C;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<C> {
        let first = self.parser.parse(stream);
        let Some(value) = first.value else {
            return Outcome::failure_at(first.pos, first.checkpoint);
        };
        let mut items = C::empty();
        items.append(value);
        let mut pos = first.pos;
        let mut checkpoint = first.checkpoint;
        loop {
            let r = self.parser.parse(stream);
            match r.value {
                Some(value) => {
                    items.append(value);
                    pos = pos + r.pos;
                    checkpoint = checkpoint.max(r.checkpoint);
                }
                None => break,
            }
        }
        Outcome::success(items, pos, checkpoint)
    }
}

/// Convenience function to create a Many1 parser.
pub fn many1<C, P>(parser: P) -> Many1<C, P> {
    Many1::new(parser)
}

/// Zero-or-more repetition that keeps nothing. Equivalent to [`many`] with
/// the values thrown away, without the container.
pub struct IgnoreMany<P> {
    parser: P,
}

impl<P> IgnoreMany<P> {
    pub fn new(parser: P) -> Self {
        IgnoreMany { parser }
    }
}

impl<'s, P> Parser<'s> for IgnoreMany<P>
where
    P: Parser<'s>,
{
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        let mut pos = Position::default();
        let mut checkpoint = 0;
        loop {
            let r = self.parser.parse(stream);
            if r.is_failure() {
                break;
            }
            pos = pos + r.pos;
            checkpoint = checkpoint.max(r.checkpoint);
        }
        Outcome::success((), pos, checkpoint)
    }
}

pub fn ignore_many<P>(parser: P) -> IgnoreMany<P> {
    IgnoreMany::new(parser)
}

/// One-or-more repetition that keeps nothing.
pub struct IgnoreMany1<P> {
    parser: P,
}

impl<P> IgnoreMany1<P> {
    pub fn new(parser: P) -> Self {
        IgnoreMany1 { parser }
    }
}

impl<'s, P> Parser<'s> for IgnoreMany1<P>
where
    P: Parser<'s>,
{
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        let first = self.parser.parse(stream);
        if first.is_failure() {
            return Outcome::failure_from(&first);
        }
        let mut pos = first.pos;
        let mut checkpoint = first.checkpoint;
        loop {
            let r = self.parser.parse(stream);
            if r.is_failure() {
                break;
            }
            pos = pos + r.pos;
            checkpoint = checkpoint.max(r.checkpoint);
        }
        Outcome::success((), pos, checkpoint)
    }
}

pub fn ignore_many1<P>(parser: P) -> IgnoreMany1<P> {
    IgnoreMany1::new(parser)
}
