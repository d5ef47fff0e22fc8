use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::streams::TextStream;

/// Repeated application combined into a running accumulator.
///
/// The parser is applied until it fails; each value is folded into the
/// accumulator with the combining function, left to right. If the parser
/// never succeeds, fold succeeds with the seed alone.
///
/// The seed is a generator so it is built fresh on every parse; a literal
/// or runtime value is supplied as `move || value.clone()` or simply
/// `|| 0`. The combining function has the one shape `(accumulator,
/// value) -> accumulator`.
pub struct Fold<P, G, F> {
    parser: P,
    seed: G,
    combine: F,
}

impl<P, G, F> Fold<P, G, F> {
    pub fn new(seed: G, parser: P, combine: F) -> Self {
        Fold {
            parser,
            seed,
            combine,
        }
    }
}

impl<'s, P, G, F, U> Parser<'s> for Fold<P, G, F>
where
    P: Parser<'s>,
    G: Fn() -> U,
    F: Fn(U, P::Output) -> U,
{
    type Output = U;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<U> {
        let mut accumulator = (self.seed)();
        let mut pos = Position::default();
        let mut checkpoint = 0;
        loop {
            let r = self.parser.parse(stream);
            match r.value {
                Some(value) => {
                    accumulator = (self.combine)(accumulator, value);
                    pos = pos + r.pos;
                    checkpoint = checkpoint.max(r.checkpoint);
                }
                None => break,
            }
        }
        Outcome::success(accumulator, pos, checkpoint)
    }
}

/// Convenience function to create a Fold parser.
pub fn fold<'s, P, G, F, U>(seed: G, parser: P, combine: F) -> Fold<P, G, F>
where
    P: Parser<'s>,
    G: Fn() -> U,
    F: Fn(U, P::Output) -> U,
{
    Fold::new(seed, parser, combine)
}

/// Fold without a seed: the parser must succeed at least once, and its
/// first value becomes the accumulator.
pub struct Fold1<P, F> {
    parser: P,
    combine: F,
}

impl<P, F> Fold1<P, F> {
    pub fn new(parser: P, combine: F) -> Self {
        Fold1 { parser, combine }
    }
}

impl<'s, P, F> Parser<'s> for Fold1<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let first = self.parser.parse(stream);
        let Some(mut accumulator) = first.value else {
            return Outcome::failure_at(first.pos, first.checkpoint);
        };
        let mut pos = first.pos;
        let mut checkpoint = first.checkpoint;
        loop {
            let r = self.parser.parse(stream);
            match r.value {
                Some(value) => {
                    accumulator = (self.combine)(accumulator, value);
                    pos = pos + r.pos;
                    checkpoint = checkpoint.max(r.checkpoint);
                }
                None => break,
            }
        }
        Outcome::success(accumulator, pos, checkpoint)
    }
}

/// Convenience function to create a Fold1 parser.
pub fn fold1<'s, P, F>(parser: P, combine: F) -> Fold1<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    Fold1::new(parser, combine)
}
