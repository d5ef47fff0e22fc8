use log::trace;

use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Explicit backtracking: run the supplied parser, and if it fails, seek
/// the stream back to where it was before the attempt.
///
/// This is the one place partial consumption is undone. The returned
/// failure keeps the inner parser's position and checkpoint so diagnostics
/// can still point into the abandoned attempt, but the stream itself is
/// restored to the pre-call offset.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'s, P> Parser<'s> for Attempt<P>
where
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let start = stream.offset();
        let result = self.parser.parse(stream);
        if result.is_failure() && stream.offset() != start {
            trace!(
                "attempt: backtracking from offset {} to {}",
                stream.offset(),
                start
            );
            stream.seek(start);
        }
        result
    }
}

/// Convenience function to create an Attempt parser.
pub fn attempt<P>(parser: P) -> Attempt<P> {
    Attempt::new(parser)
}
