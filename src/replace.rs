use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Discard the value of a successful parse and substitute a constant.
pub struct Replace<P, T> {
    parser: P,
    value: T,
}

impl<P, T> Replace<P, T> {
    pub fn new(parser: P, value: T) -> Self {
        Replace { parser, value }
    }
}

impl<'s, P, T> Parser<'s> for Replace<P, T>
where
    P: Parser<'s>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<T> {
        self.parser.parse(stream).map(|_| self.value.clone())
    }
}

/// Convenience function to create a Replace parser.
pub fn replace<P, T: Clone>(parser: P, value: T) -> Replace<P, T> {
    Replace::new(parser, value)
}

/// Replace with a freshly generated value instead of a cloned constant.
pub struct ReplaceWith<P, F> {
    parser: P,
    generator: F,
}

impl<P, F> ReplaceWith<P, F> {
    pub fn new(parser: P, generator: F) -> Self {
        ReplaceWith { parser, generator }
    }
}

impl<'s, P, F, T> Parser<'s> for ReplaceWith<P, F>
where
    P: Parser<'s>,
    F: Fn() -> T,
{
    type Output = T;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<T> {
        self.parser.parse(stream).map(|_| (self.generator)())
    }
}

pub fn replace_with<P, F>(parser: P, generator: F) -> ReplaceWith<P, F> {
    ReplaceWith::new(parser, generator)
}
