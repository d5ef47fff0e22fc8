use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Capture the exact text a parser consumed.
///
/// Succeeds with the substring between the offsets before and after the
/// inner parse — empty if the parser succeeded without consuming. The
/// inner value is discarded; this is how the floating-point parser hands
/// a recognized-but-uninterpreted literal to the numeric converter.
pub struct Consumption<P> {
    parser: P,
}

impl<P> Consumption<P> {
    pub fn new(parser: P) -> Self {
        Consumption { parser }
    }
}

impl<'s, P> Parser<'s> for Consumption<P>
where
    P: Parser<'s>,
{
    type Output = String;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<String> {
        let start = stream.offset();
        let r = self.parser.parse(stream);
        if r.is_failure() {
            return Outcome::failure_from(&r);
        }
        let text = stream.read_span(start, stream.offset());
        Outcome::success(text, r.pos, r.checkpoint)
    }
}

/// Convenience function to create a Consumption parser.
pub fn consumption<P>(parser: P) -> Consumption<P> {
    Consumption::new(parser)
}
