use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Run a parser for its consumption only, discarding the produced value.
pub struct Discard<P> {
    parser: P,
}

impl<P> Discard<P> {
    pub fn new(parser: P) -> Self {
        Discard { parser }
    }
}

impl<'s, P> Parser<'s> for Discard<P>
where
    P: Parser<'s>,
{
    type Output = ();

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<()> {
        self.parser.parse(stream).map(|_| ())
    }
}

/// Convenience function to create a Discard parser.
pub fn discard<P>(parser: P) -> Discard<P> {
    Discard::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::digit_char;
    use crate::position::Position;

    #[test]
    fn test_discard_keeps_consumption() {
        let mut stream = TextStream::new("7x");
        let r = discard(digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some(()));
        assert_eq!(r.pos, Position::new(1, 2));
        assert_eq!(r.checkpoint, 1);
    }

    #[test]
    fn test_discard_propagates_failure() {
        let mut stream = TextStream::new("x");
        assert!(discard(digit_char()).parse(&mut stream).is_failure());
    }
}
