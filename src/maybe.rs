use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::streams::TextStream;

/// Optional parsing: run the supplied parser, and on failure succeed with
/// a default instead. Maybe always succeeds.
///
/// Input is consumed only when the inner parser succeeds — provided the
/// inner parser is atomic. A non-atomic inner parser that partially
/// consumes before failing leaves that consumption behind, exactly as
/// [`or`](crate::or::or) would; wrap it in
/// [`attempt`](crate::attempt::attempt) if that matters.
pub struct Maybe<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Maybe<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        Maybe { parser, default }
    }
}

impl<'s, P, T> Parser<'s> for Maybe<P, T>
where
    P: Parser<'s, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<T> {
        let r = self.parser.parse(stream);
        if r.is_success() {
            return r;
        }
        Outcome::success(self.default.clone(), Position::default(), r.checkpoint)
    }
}

/// Convenience function to create a Maybe parser with a default value.
pub fn maybe<'s, P, T>(parser: P, default: T) -> Maybe<P, T>
where
    P: Parser<'s, Output = T>,
    T: Clone,
{
    Maybe::new(parser, default)
}

/// Maybe with a generated default, for defaults that are not `Clone` or
/// must be built fresh on every parse.
pub struct MaybeWith<P, F> {
    parser: P,
    generator: F,
}

impl<P, F> MaybeWith<P, F> {
    pub fn new(parser: P, generator: F) -> Self {
        MaybeWith { parser, generator }
    }
}

impl<'s, P, F, T> Parser<'s> for MaybeWith<P, F>
where
    P: Parser<'s, Output = T>,
    F: Fn() -> T,
{
    type Output = T;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<T> {
        let r = self.parser.parse(stream);
        if r.is_success() {
            return r;
        }
        Outcome::success((self.generator)(), Position::default(), r.checkpoint)
    }
}

pub fn maybe_with<'s, P, F, T>(parser: P, generator: F) -> MaybeWith<P, F>
where
    P: Parser<'s, Output = T>,
    F: Fn() -> T,
{
    MaybeWith::new(parser, generator)
}

/// Maybe that keeps no value at all: run the parser for its consumption
/// and succeed with `()` either way.
pub struct MaybeSkip<P> {
    parser: P,
}

impl<P> MaybeSkip<P> {
    pub fn new(parser: P) -> Self {
        MaybeSkip { parser }
    }
}

impl<'s, P> Parser<'s> for MaybeSkip<P>
where
    P: Parser<'s>,
{
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        let r = self.parser.parse(stream);
        if r.is_success() {
            return r.map(|_| ());
        }
        Outcome::success((), Position::default(), r.checkpoint)
    }
}

pub fn maybe_skip<P>(parser: P) -> MaybeSkip<P> {
    MaybeSkip::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::digit_char;
    use crate::map::MapExt;
    use crate::standard::number::number;
    use crate::stream::Stream;

    #[test]
    fn test_present() {
        let mut stream = TextStream::new("7");
        let r = maybe(digit_char(), '0').parse(&mut stream);
        assert_eq!(r.value, Some('7'));
        assert_eq!(r.pos, Position::new(1, 2));
    }

    #[test]
    fn test_absent_uses_default_without_consuming() {
        let mut stream = TextStream::new("x");
        let r = maybe(digit_char(), '0').parse(&mut stream);
        assert_eq!(r.value, Some('0'));
        assert_eq!(r.pos, Position::default());
        assert_eq!(stream.peek(), Some('x'));
    }

    #[test]
    fn test_default_count_of_one() {
        // The chemical-formula idiom: an element without a count means one.
        let mut stream = TextStream::new("O");
        let r = maybe(number::<u32>(), 1).parse(&mut stream);
        assert_eq!(r.value, Some(1));
    }

    #[test]
    fn test_maybe_with_generator() {
        let mut stream = TextStream::new("x");
        let r = maybe_with(digit_char().map(|c| c.to_string()), || String::from("none"))
            .parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("none"));
    }

    #[test]
    fn test_maybe_skip() {
        let mut stream = TextStream::new("7x");
        let r = maybe_skip(digit_char()).parse(&mut stream);
        assert!(r.is_success());
        assert_eq!(stream.peek(), Some('x'));

        let r = maybe_skip(digit_char()).parse(&mut stream);
        assert!(r.is_success());
        assert_eq!(stream.peek(), Some('x'));
    }
}
