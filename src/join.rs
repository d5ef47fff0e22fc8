//! The sequencing family: run two to seven parsers strictly in order and
//! combine every sub-result with one supplied function.
//!
//! Each step's position delta is accumulated onto the running result. If a
//! step fails, the sequence fails immediately with that step's failure
//! composed with everything consumed before it, and later steps never run.
//! A sequence of two or more steps can therefore consume input before
//! failing; wrap it in [`attempt`](crate::attempt::attempt) when
//! all-or-nothing behavior is needed.
//!
//! `first`, `second`, `first3`, `second3` and `third` are the thin
//! specializations that keep exactly one sub-result.

use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::streams::TextStream;

/// Sequence two parsers, combining their results.
pub struct Join<P1, P2, F> {
    p1: P1,
    p2: P2,
    combine: F,
}

impl<P1, P2, F> Join<P1, P2, F> {
    pub fn new(p1: P1, p2: P2, combine: F) -> Self {
        Join { p1, p2, combine }
    }
}

impl<'s, P1, P2, F, R> Parser<'s> for Join<P1, P2, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    F: Fn(P1::Output, P2::Output) -> R,
{
    type Output = R;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<R> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        Outcome::success((self.combine)(a, b), r2.pos, r2.checkpoint)
    }
}

/// Convenience function to create a two-parser Join.
pub fn join<P1, P2, F>(p1: P1, p2: P2, combine: F) -> Join<P1, P2, F> {
    Join::new(p1, p2, combine)
}

/// Sequence three parsers, combining their results.
pub struct Join3<P1, P2, P3, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    combine: F,
}

impl<P1, P2, P3, F> Join3<P1, P2, P3, F> {
    pub fn new(p1: P1, p2: P2, p3: P3, combine: F) -> Self {
        Join3 { p1, p2, p3, combine }
    }
}

impl<'s, P1, P2, P3, F, R> Parser<'s> for Join3<P1, P2, P3, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
    F: Fn(P1::Output, P2::Output, P3::Output) -> R,
{
    type Output = R;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<R> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        let Some(c) = r3.value else {
            return Outcome::failure_at(r3.pos, r3.checkpoint);
        };
        Outcome::success((self.combine)(a, b, c), r3.pos, r3.checkpoint)
    }
}

pub fn join3<P1, P2, P3, F>(p1: P1, p2: P2, p3: P3, combine: F) -> Join3<P1, P2, P3, F> {
    Join3::new(p1, p2, p3, combine)
}

/// Sequence four parsers, combining their results.
pub struct Join4<P1, P2, P3, P4, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    combine: F,
}

impl<P1, P2, P3, P4, F> Join4<P1, P2, P3, P4, F> {
    pub fn new(p1: P1, p2: P2, p3: P3, p4: P4, combine: F) -> Self {
        Join4 { p1, p2, p3, p4, combine }
    }
}

impl<'s, P1, P2, P3, P4, F, R> Parser<'s> for Join4<P1, P2, P3, P4, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
    P4: Parser<'s>,
    F: Fn(P1::Output, P2::Output, P3::Output, P4::Output) -> R,
{
    type Output = R;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<R> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        let Some(c) = r3.value else {
            return Outcome::failure_at(r3.pos, r3.checkpoint);
        };
        let r4 = self.p4.parse(stream).from(r3.pos, r3.checkpoint);
        let Some(d) = r4.value else {
            return Outcome::failure_at(r4.pos, r4.checkpoint);
        };
        Outcome::success((self.combine)(a, b, c, d), r4.pos, r4.checkpoint)
    }
}

pub fn join4<P1, P2, P3, P4, F>(
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    combine: F,
) -> Join4<P1, P2, P3, P4, F> {
    Join4::new(p1, p2, p3, p4, combine)
}

/// Sequence five parsers, combining their results.
pub struct Join5<P1, P2, P3, P4, P5, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    combine: F,
}

impl<P1, P2, P3, P4, P5, F> Join5<P1, P2, P3, P4, P5, F> {
    pub fn new(p1: P1, p2: P2, p3: P3, p4: P4, p5: P5, combine: F) -> Self {
        Join5 { p1, p2, p3, p4, p5, combine }
    }
}

impl<'s, P1, P2, P3, P4, P5, F, R> Parser<'s> for Join5<P1, P2, P3, P4, P5, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
    P4: Parser<'s>,
    P5: Parser<'s>,
    F: Fn(P1::Output, P2::Output, P3::Output, P4::Output, P5::Output) -> R,
{
    type Output = R;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<R> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        let Some(c) = r3.value else {
            return Outcome::failure_at(r3.pos, r3.checkpoint);
        };
        let r4 = self.p4.parse(stream).from(r3.pos, r3.checkpoint);
        let Some(d) = r4.value else {
            return Outcome::failure_at(r4.pos, r4.checkpoint);
        };
        let r5 = self.p5.parse(stream).from(r4.pos, r4.checkpoint);
        let Some(e) = r5.value else {
            return Outcome::failure_at(r5.pos, r5.checkpoint);
        };
        Outcome::success((self.combine)(a, b, c, d, e), r5.pos, r5.checkpoint)
    }
}

pub fn join5<P1, P2, P3, P4, P5, F>(
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    combine: F,
) -> Join5<P1, P2, P3, P4, P5, F> {
    Join5::new(p1, p2, p3, p4, p5, combine)
}

/// Sequence six parsers, combining their results.
pub struct Join6<P1, P2, P3, P4, P5, P6, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    p6: P6,
    combine: F,
}

impl<P1, P2, P3, P4, P5, P6, F> Join6<P1, P2, P3, P4, P5, P6, F> {
    pub fn new(p1: P1, p2: P2, p3: P3, p4: P4, p5: P5, p6: P6, combine: F) -> Self {
        Join6 { p1, p2, p3, p4, p5, p6, combine }
    }
}

impl<'s, P1, P2, P3, P4, P5, P6, F, R> Parser<'s> for Join6<P1, P2, P3, P4, P5, P6, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
    P4: Parser<'s>,
    P5: Parser<'s>,
    P6: Parser<'s>,
    F: Fn(P1::Output, P2::Output, P3::Output, P4::Output, P5::Output, P6::Output) -> R,
{
    type Output = R;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<R> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        let Some(c) = r3.value else {
            return Outcome::failure_at(r3.pos, r3.checkpoint);
        };
        let r4 = self.p4.parse(stream).from(r3.pos, r3.checkpoint);
        let Some(d) = r4.value else {
            return Outcome::failure_at(r4.pos, r4.checkpoint);
        };
        let r5 = self.p5.parse(stream).from(r4.pos, r4.checkpoint);
        let Some(e) = r5.value else {
            return Outcome::failure_at(r5.pos, r5.checkpoint);
        };
        let r6 = self.p6.parse(stream).from(r5.pos, r5.checkpoint);
        let Some(g) = r6.value else {
            return Outcome::failure_at(r6.pos, r6.checkpoint);
        };
        Outcome::success((self.combine)(a, b, c, d, e, g), r6.pos, r6.checkpoint)
    }
}

pub fn join6<P1, P2, P3, P4, P5, P6, F>(
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    p6: P6,
    combine: F,
) -> Join6<P1, P2, P3, P4, P5, P6, F> {
    Join6::new(p1, p2, p3, p4, p5, p6, combine)
}

/// Sequence seven parsers, combining their results.
pub struct Join7<P1, P2, P3, P4, P5, P6, P7, F> {
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    p6: P6,
    p7: P7,
    combine: F,
}

impl<P1, P2, P3, P4, P5, P6, P7, F> Join7<P1, P2, P3, P4, P5, P6, P7, F> {
    pub fn new(p1: P1, p2: P2, p3: P3, p4: P4, p5: P5, p6: P6, p7: P7, combine: F) -> Self {
        Join7 { p1, p2, p3, p4, p5, p6, p7, combine }
    }
}

impl<'s, P1, P2, P3, P4, P5, P6, P7, F, R> Parser<'s> for Join7<P1, P2, P3, P4, P5, P6, P7, F>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
    P4: Parser<'s>,
    P5: Parser<'s>,
    P6: Parser<'s>,
    P7: Parser<'s>,
    F: Fn(
        P1::Output,
        P2::Output,
        P3::Output,
        P4::Output,
        P5::Output,
        P6::Output,
        P7::Output,
    ) -> R,
{
    type Output = R;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<R> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        let Some(c) = r3.value else {
            return Outcome::failure_at(r3.pos, r3.checkpoint);
        };
        let r4 = self.p4.parse(stream).from(r3.pos, r3.checkpoint);
        let Some(d) = r4.value else {
            return Outcome::failure_at(r4.pos, r4.checkpoint);
        };
        let r5 = self.p5.parse(stream).from(r4.pos, r4.checkpoint);
        let Some(e) = r5.value else {
            return Outcome::failure_at(r5.pos, r5.checkpoint);
        };
        let r6 = self.p6.parse(stream).from(r5.pos, r5.checkpoint);
        let Some(g) = r6.value else {
            return Outcome::failure_at(r6.pos, r6.checkpoint);
        };
        let r7 = self.p7.parse(stream).from(r6.pos, r6.checkpoint);
        let Some(h) = r7.value else {
            return Outcome::failure_at(r7.pos, r7.checkpoint);
        };
        Outcome::success((self.combine)(a, b, c, d, e, g, h), r7.pos, r7.checkpoint)
    }
}

pub fn join7<P1, P2, P3, P4, P5, P6, P7, F>(
    p1: P1,
    p2: P2,
    p3: P3,
    p4: P4,
    p5: P5,
    p6: P6,
    p7: P7,
    combine: F,
) -> Join7<P1, P2, P3, P4, P5, P6, P7, F> {
    Join7::new(p1, p2, p3, p4, p5, p6, p7, combine)
}

/// Run two parsers in order, keeping the first result.
pub struct First<P1, P2> {
    p1: P1,
    p2: P2,
}

impl<P1, P2> First<P1, P2> {
    pub fn new(p1: P1, p2: P2) -> Self {
        First { p1, p2 }
    }
}

impl<'s, P1, P2> Parser<'s> for First<P1, P2>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
{
    type Output = P1::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P1::Output> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        if r2.is_failure() {
            return Outcome::failure_from(&r2);
        }
        Outcome::success(a, r2.pos, r2.checkpoint)
    }
}

pub fn first<P1, P2>(p1: P1, p2: P2) -> First<P1, P2> {
    First::new(p1, p2)
}

/// Run two parsers in order, keeping the second result.
pub struct Second<P1, P2> {
    p1: P1,
    p2: P2,
}

impl<P1, P2> Second<P1, P2> {
    pub fn new(p1: P1, p2: P2) -> Self {
        Second { p1, p2 }
    }
}

impl<'s, P1, P2> Parser<'s> for Second<P1, P2>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
{
    type Output = P2::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P2::Output> {
        let r1 = self.p1.parse(stream);
        if r1.is_failure() {
            return Outcome::failure_from(&r1);
        }
        self.p2.parse(stream).from(r1.pos, r1.checkpoint)
    }
}

pub fn second<P1, P2>(p1: P1, p2: P2) -> Second<P1, P2> {
    Second::new(p1, p2)
}

/// Run three parsers in order, keeping the first result.
pub struct First3<P1, P2, P3> {
    p1: P1,
    p2: P2,
    p3: P3,
}

impl<P1, P2, P3> First3<P1, P2, P3> {
    pub fn new(p1: P1, p2: P2, p3: P3) -> Self {
        First3 { p1, p2, p3 }
    }
}

impl<'s, P1, P2, P3> Parser<'s> for First3<P1, P2, P3>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
{
    type Output = P1::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P1::Output> {
        let r1 = self.p1.parse(stream);
        let Some(a) = r1.value else {
            return Outcome::failure_at(r1.pos, r1.checkpoint);
        };
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        if r2.is_failure() {
            return Outcome::failure_from(&r2);
        }
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        if r3.is_failure() {
            return Outcome::failure_from(&r3);
        }
        Outcome::success(a, r3.pos, r3.checkpoint)
    }
}

pub fn first3<P1, P2, P3>(p1: P1, p2: P2, p3: P3) -> First3<P1, P2, P3> {
    First3::new(p1, p2, p3)
}

/// Run three parsers in order, keeping the second result.
pub struct Second3<P1, P2, P3> {
    p1: P1,
    p2: P2,
    p3: P3,
}

impl<P1, P2, P3> Second3<P1, P2, P3> {
    pub fn new(p1: P1, p2: P2, p3: P3) -> Self {
        Second3 { p1, p2, p3 }
    }
}

impl<'s, P1, P2, P3> Parser<'s> for Second3<P1, P2, P3>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
{
    type Output = P2::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P2::Output> {
        let r1 = self.p1.parse(stream);
        if r1.is_failure() {
            return Outcome::failure_from(&r1);
        }
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        let Some(b) = r2.value else {
            return Outcome::failure_at(r2.pos, r2.checkpoint);
        };
        let r3 = self.p3.parse(stream).from(r2.pos, r2.checkpoint);
        if r3.is_failure() {
            return Outcome::failure_from(&r3);
        }
        Outcome::success(b, r3.pos, r3.checkpoint)
    }
}

pub fn second3<P1, P2, P3>(p1: P1, p2: P2, p3: P3) -> Second3<P1, P2, P3> {
    Second3::new(p1, p2, p3)
}

/// Run three parsers in order, keeping the third result.
pub struct Third<P1, P2, P3> {
    p1: P1,
    p2: P2,
    p3: P3,
}

impl<P1, P2, P3> Third<P1, P2, P3> {
    pub fn new(p1: P1, p2: P2, p3: P3) -> Self {
        Third { p1, p2, p3 }
    }
}

impl<'s, P1, P2, P3> Parser<'s> for Third<P1, P2, P3>
where
    P1: Parser<'s>,
    P2: Parser<'s>,
    P3: Parser<'s>,
{
    type Output = P3::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P3::Output> {
        let r1 = self.p1.parse(stream);
        if r1.is_failure() {
            return Outcome::failure_from(&r1);
        }
        let r2 = self.p2.parse(stream).from(r1.pos, r1.checkpoint);
        if r2.is_failure() {
            return Outcome::failure_from(&r2);
        }
        self.p3.parse(stream).from(r2.pos, r2.checkpoint)
    }
}

pub fn third<P1, P2, P3>(p1: P1, p2: P2, p3: P3) -> Third<P1, P2, P3> {
    Third::new(p1, p2, p3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{digit_char, is_char};
    use crate::position::Position;
    use crate::stream::Stream;

    #[test]
    fn test_join_combines_in_order() {
        let mut stream = TextStream::new("12rest");
        let p = join(digit_char(), digit_char(), |a, b| format!("{a}{b}"));
        let r = p.parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("12"));
        assert_eq!(r.pos, Position::new(1, 3));
        assert_eq!(r.checkpoint, 2);
        assert_eq!(stream.peek(), Some('r'));
    }

    #[test]
    fn test_join_first_step_fails() {
        let mut stream = TextStream::new("ab");
        let p = join(digit_char(), digit_char(), |a, b| (a, b));
        let r = p.parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(stream.offset(), 0);
    }

    #[test]
    fn test_join_later_step_fails_with_partial_consumption() {
        let mut stream = TextStream::new("1x");
        let p = join(digit_char(), digit_char(), |a, b| (a, b));
        let r = p.parse(&mut stream);
        assert!(r.is_failure());
        // The failing step's position composes with the consumed prefix.
        assert_eq!(r.pos, Position::new(1, 2));
        assert_eq!(r.checkpoint, 1);
        assert_eq!(stream.peek(), Some('x'));
    }

    #[test]
    fn test_join_does_not_run_later_steps_after_failure() {
        use std::cell::Cell;
        let ran = Cell::new(false);
        let observer = |stream: &mut TextStream<'_>| {
            ran.set(true);
            crate::character::any().parse(stream)
        };
        let mut stream = TextStream::new("x1");
        let p = join(digit_char(), observer, |a, b| (a, b));
        assert!(p.parse(&mut stream).is_failure());
        assert!(!ran.get());
    }

    #[test]
    fn test_join3_through_join7() {
        let mut stream = TextStream::new("abcdefg");
        let r = join3(is_char('a'), is_char('b'), is_char('c'), |a, b, c| {
            format!("{a}{b}{c}")
        })
        .parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abc"));

        let mut stream = TextStream::new("abcdefg");
        let r = join4(is_char('a'), is_char('b'), is_char('c'), is_char('d'), |a, b, c, d| {
            format!("{a}{b}{c}{d}")
        })
        .parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abcd"));

        let mut stream = TextStream::new("abcdefg");
        let r = join5(
            is_char('a'),
            is_char('b'),
            is_char('c'),
            is_char('d'),
            is_char('e'),
            |a, b, c, d, e| format!("{a}{b}{c}{d}{e}"),
        )
        .parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abcde"));

        let mut stream = TextStream::new("abcdefg");
        let r = join6(
            is_char('a'),
            is_char('b'),
            is_char('c'),
            is_char('d'),
            is_char('e'),
            is_char('f'),
            |a, b, c, d, e, f| format!("{a}{b}{c}{d}{e}{f}"),
        )
        .parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abcdef"));

        let mut stream = TextStream::new("abcdefg");
        let r = join7(
            is_char('a'),
            is_char('b'),
            is_char('c'),
            is_char('d'),
            is_char('e'),
            is_char('f'),
            is_char('g'),
            |a, b, c, d, e, f, g| format!("{a}{b}{c}{d}{e}{f}{g}"),
        )
        .parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abcdefg"));
    }

    #[test]
    fn test_position_across_line_boundary() {
        let mut stream = TextStream::new("a\nb");
        let p = join3(is_char('a'), is_char('\n'), is_char('b'), |_, _, _| ());
        let r = p.parse(&mut stream);
        assert!(r.is_success());
        assert_eq!(r.pos, Position::new(2, 2));
    }

    #[test]
    fn test_first_and_second() {
        let mut stream = TextStream::new("a1");
        let r = first(is_char('a'), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some('a'));
        assert_eq!(r.pos, Position::new(1, 3));

        let mut stream = TextStream::new("a1");
        let r = second(is_char('a'), digit_char()).parse(&mut stream);
        assert_eq!(r.value, Some('1'));
    }

    #[test]
    fn test_three_parser_selections() {
        let mut stream = TextStream::new("a1b");
        let r = first3(is_char('a'), digit_char(), is_char('b')).parse(&mut stream);
        assert_eq!(r.value, Some('a'));

        let mut stream = TextStream::new("a1b");
        let r = second3(is_char('a'), digit_char(), is_char('b')).parse(&mut stream);
        assert_eq!(r.value, Some('1'));

        let mut stream = TextStream::new("a1b");
        let r = third(is_char('a'), digit_char(), is_char('b')).parse(&mut stream);
        assert_eq!(r.value, Some('b'));
    }

    #[test]
    fn test_second_propagates_failure_position() {
        let mut stream = TextStream::new("ax");
        let r = second(is_char('a'), digit_char()).parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(r.pos, Position::new(1, 2));
        assert_eq!(r.checkpoint, 1);
    }
}
