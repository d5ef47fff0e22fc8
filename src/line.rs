use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Run a parser, then require a terminating linefeed. The linefeed is
/// consumed and discarded; use [`newline`](crate::character::newline) as a
/// separator instead when carriage returns must be tolerated.
pub struct Line<P> {
    parser: P,
}

impl<P> Line<P> {
    pub fn new(parser: P) -> Self {
        Line { parser }
    }
}

impl<'s, P> Parser<'s> for Line<P>
where
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let r = self.parser.parse(stream);
        let Some(value) = r.value else {
            return Outcome::failure_at(r.pos, r.checkpoint);
        };
        match stream.peek() {
            Some('\n') => {
                stream.read();
                Outcome::success(value, r.pos + Position::after('\n'), stream.offset())
            }
            _ => Outcome::failure_at(r.pos, r.checkpoint),
        }
    }
}

/// Convenience function to create a Line parser.
pub fn line<P>(parser: P) -> Line<P> {
    Line::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::digit_char;

    #[test]
    fn test_line_terminated() {
        let mut stream = TextStream::new("7\nx");
        let r = line(digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some('7'));
        assert_eq!(r.pos, Position::new(2, 1));
        assert_eq!(stream.peek(), Some('x'));
    }

    #[test]
    fn test_missing_linefeed() {
        let mut stream = TextStream::new("7x");
        let r = line(digit_char()).parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(r.pos, Position::new(1, 2));
        assert_eq!(stream.peek(), Some('x'));
    }
}
