use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Require a specific value from a parser.
///
/// Succeeds with the parsed value only if it compares equal to the
/// expected one; a mismatch fails with the parse's position and
/// checkpoint, consumption included.
pub struct Expect<P, T> {
    parser: P,
    expected: T,
}

impl<P, T> Expect<P, T> {
    pub fn new(parser: P, expected: T) -> Self {
        Expect { parser, expected }
    }
}

impl<'s, P, T> Parser<'s> for Expect<P, T>
where
    P: Parser<'s, Output = T>,
    T: PartialEq,
{
    type Output = T;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<T> {
        let r = self.parser.parse(stream);
        match r.value {
            Some(value) if value == self.expected => Outcome::success(value, r.pos, r.checkpoint),
            _ => Outcome::failure_at(r.pos, r.checkpoint),
        }
    }
}

/// Convenience function to create an Expect parser.
pub fn expect<'s, P, T>(parser: P, expected: T) -> Expect<P, T>
where
    P: Parser<'s, Output = T>,
    T: PartialEq,
{
    Expect::new(parser, expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::number::number;
    use crate::stream::Stream;

    #[test]
    fn test_matching_value() {
        let mut stream = TextStream::new("42");
        let r = expect(number::<u32>(), 42).parse(&mut stream);
        assert_eq!(r.value, Some(42));
    }

    #[test]
    fn test_mismatch_fails_with_consumption() {
        let mut stream = TextStream::new("41");
        let r = expect(number::<u32>(), 42).parse(&mut stream);
        assert!(r.is_failure());
        assert!(stream.at_end());
        assert_eq!(r.checkpoint, 2);
    }

    #[test]
    fn test_inner_failure_propagates() {
        let mut stream = TextStream::new("x");
        assert!(expect(number::<u32>(), 42).parse(&mut stream).is_failure());
    }
}
