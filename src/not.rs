use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Negative lookahead: succeed with the fallback parser only where the
/// probe parser does not match.
///
/// The probe runs under save/restore, so whether it matches, partially
/// consumes, or fails, the fallback always starts from the original
/// offset. If the probe matches, the whole parser fails without consuming.
pub struct Not<P, Q> {
    probe: P,
    fallback: Q,
}

impl<P, Q> Not<P, Q> {
    pub fn new(probe: P, fallback: Q) -> Self {
        Not { probe, fallback }
    }
}

impl<'s, P, Q> Parser<'s> for Not<P, Q>
where
    P: Parser<'s>,
    Q: Parser<'s>,
{
    type Output = Q::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<Q::Output> {
        let start = stream.offset();
        let probed = self.probe.parse(stream);
        stream.seek(start);
        if probed.is_success() {
            return Outcome::failure();
        }
        self.fallback.parse(stream)
    }
}

/// Convenience function to create a Not parser.
pub fn not<P, Q>(probe: P, fallback: Q) -> Not<P, Q> {
    Not::new(probe, fallback)
}
