use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Sequence a dependent step off a parser's result.
///
/// If the parser succeeds, its value is handed to the function, which may
/// itself succeed or fail; the function's outcome is composed onto the
/// parser's position and checkpoint. This is the primary mechanism for
/// context-sensitive parsing: the decision can depend on the value just
/// parsed.
///
/// The function does not see the stream; a dependent step that must
/// consume more input is expressed with [`bind2`] or by returning a parser
/// application from an ordinary function parser.
pub struct Bind<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Bind { parser, f }
    }
}

impl<'s, P, F, U> Parser<'s> for Bind<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output) -> Outcome<U>,
{
    type Output = U;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<U> {
        let r = self.parser.parse(stream);
        let Some(value) = r.value else {
            return Outcome::failure_at(r.pos, r.checkpoint);
        };
        (self.f)(value).from(r.pos, r.checkpoint)
    }
}

/// Convenience function to create a Bind parser.
pub fn bind<'s, P, F, U>(parser: P, f: F) -> Bind<P, F>
where
    P: Parser<'s>,
    F: Fn(P::Output) -> Outcome<U>,
{
    Bind::new(parser, f)
}

/// Two-parser bind: run both in order and hand both values to the
/// function. The second parser does not run if the first fails.
pub struct Bind2<P1, P2, F> {
    p1: P1,
    p2: P2,
    f: F,
}

impl<P1, P2, F> Bind2<P1, P2, F> {
    pub fn new(p1: P1, p2: P2, f: F) -> Self {
        Bind2 { p1, p2, f }
    }
}

impl<'s, P1, P2, F, U> Parser<'s> for Bind2<P1, P2, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    F: Fn(P1::Output, P2::Output) -> Outcome<U>,
{
    type Output = U;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<U> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        (self.f)(a, b).from(r2.pos, r2.checkpoint)
    }
}

pub fn bind2<'s, P1, P2, F, U>(p1: P1, p2: P2, f: F) -> Bind2<P1, P2, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    F: Fn(P1::Output, P2::Output) -> Outcome<U>,
{
    Bind2::new(p1, p2, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::digit_char;
    use crate::position::Position;
    use crate::stream::Stream;

    #[test]
    fn test_bind_dependent_decision() {
        // Accept a digit only if it is even.
        let even = bind(digit_char(), |c| {
            let d = c as u8 - b'0';
            if d % 2 == 0 {
                Outcome::success(d, Position::default(), 0)
            } else {
                Outcome::failure()
            }
        });

        let mut stream = TextStream::new("4");
        let r = even.parse(&mut stream);
        assert_eq!(r.value, Some(4));
        // The parser's consumption is accounted even though the function
        // itself consumed nothing.
        assert_eq!(r.pos, Position::new(1, 2));
        assert_eq!(r.checkpoint, 1);

        let mut stream = TextStream::new("3");
        let r = even.parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(r.checkpoint, 1);
    }

    #[test]
    fn test_bind_skips_function_on_failure() {
        let p = bind(digit_char(), |_| -> Outcome<u8> {
            panic!("must not be called");
        });
        let mut stream = TextStream::new("x");
        assert!(p.parse(&mut stream).is_failure());
    }

    #[test]
    fn test_bind2_combines_both_values() {
        let p = bind2(digit_char(), digit_char(), |a, b| {
            if a == b {
                Outcome::success((a, b), Position::default(), 0)
            } else {
                Outcome::failure()
            }
        });

        let mut stream = TextStream::new("77");
        assert_eq!(p.parse(&mut stream).value, Some(('7', '7')));

        let mut stream = TextStream::new("78");
        let r = p.parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(r.pos, Position::new(1, 3));
    }

    #[test]
    fn test_bind2_first_failure_stops() {
        let mut stream = TextStream::new("x7");
        let p = bind2(digit_char(), digit_char(), |a, b| {
            Outcome::success((a, b), Position::default(), 0)
        });
        assert!(p.parse(&mut stream).is_failure());
        assert_eq!(stream.peek(), Some('x'));
    }
}
