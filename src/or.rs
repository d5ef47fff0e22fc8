use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Ordered choice: try the first parser, and if it fails, try the second.
///
/// There is **no implicit rewind** between alternatives. An atomic
/// alternative that fails leaves the cursor untouched, so the next
/// alternative starts from the right place for free. An alternative that
/// partially consumed before failing leaves the cursor where it stopped,
/// and the next alternative runs from there — wrap such alternatives in
/// [`attempt`](crate::attempt::attempt) when full backtracking across the
/// choice point is required. Implicit backtracking on every choice would
/// charge every grammar for lookahead most alternatives never need.
///
/// Fails only if every alternative fails; the failure carries the last
/// alternative's position and checkpoint.
pub struct Or<P1, P2> {
    p1: P1,
    p2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(p1: P1, p2: P2) -> Self {
        Or { p1, p2 }
    }
}

impl<'s, P1, P2, T> Parser<'s> for Or<P1, P2>
where
    P1: Parser<'s, Output = T>,
    P2: Parser<'s, Output = T>,
{
    type Output = T;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<T> {
        let r1 = self.p1.parse(stream);
        if r1.is_success() {
            return r1;
        }
        self.p2.parse(stream)
    }
}

/// Convenience function to create an Or parser.
pub fn or<'s, P1, P2, T>(p1: P1, p2: P2) -> Or<P1, P2>
where
    P1: Parser<'s, Output = T>,
    P2: Parser<'s, Output = T>,
{
    Or::new(p1, p2)
}

/// Extension trait to add .or() method support for parsers, for chaining
/// choices of three or more alternatives.
pub trait OrExt<'s>: Parser<'s> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'s, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<'s, P> OrExt<'s> for P where P: Parser<'s> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attempt::attempt;
    use crate::character::is_char;
    use crate::reserved::skip_reserved;
    use crate::stream::Stream;

    #[test]
    fn test_first_alternative_wins() {
        let mut stream = TextStream::new("ab");
        let r = or(is_char('a'), is_char('b')).parse(&mut stream);
        assert_eq!(r.value, Some('a'));
    }

    #[test]
    fn test_second_alternative_after_atomic_failure() {
        let mut stream = TextStream::new("ba");
        let r = or(is_char('a'), is_char('b')).parse(&mut stream);
        assert_eq!(r.value, Some('b'));
    }

    #[test]
    fn test_all_alternatives_fail() {
        let mut stream = TextStream::new("c");
        let r = or(is_char('a'), is_char('b')).parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(stream.peek(), Some('c'));
    }

    #[test]
    fn test_chaining() {
        let mut stream = TextStream::new("c");
        let p = is_char('a').or(is_char('b')).or(is_char('c'));
        assert_eq!(p.parse(&mut stream).value, Some('c'));
    }

    #[test]
    fn test_no_rewind_after_partial_consumption() {
        // "ax" fails midway through the first alternative, so the second
        // alternative starts after the consumed 'a' and also fails.
        let mut stream = TextStream::new("ab");
        let p = or(skip_reserved("ax"), skip_reserved("ab"));
        assert!(p.parse(&mut stream).is_failure());
        assert_eq!(stream.peek(), Some('b'));
    }

    #[test]
    fn test_attempt_restores_the_choice_point() {
        let mut stream = TextStream::new("ab");
        let p = or(attempt(skip_reserved("ax")), skip_reserved("ab"));
        assert!(p.parse(&mut stream).is_success());
        assert!(stream.at_end());
    }
}
