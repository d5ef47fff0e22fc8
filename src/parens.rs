use crate::character::{close_paren, open_paren, skip_spaces};
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Parse something between parentheses: an opening parenthesis, optional
/// whitespace, the supplied parser, optional whitespace, a closing
/// parenthesis. Only the inner result is kept.
pub struct Parens<P> {
    parser: P,
}

impl<P> Parens<P> {
    pub fn new(parser: P) -> Self {
        Parens { parser }
    }
}

impl<'s, P> Parser<'s> for Parens<P>
where
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let ro = open_paren().parse(stream);
        if ro.is_failure() {
            return Outcome::failure_from(&ro);
        }
        let (ws, consumed) = skip_spaces(stream);
        let mut pos = ro.pos + ws;
        let mut checkpoint = if consumed {
            stream.offset()
        } else {
            ro.checkpoint
        };

        let rv = self.parser.parse(stream).from(pos, checkpoint);
        let Some(value) = rv.value else {
            return Outcome::failure_at(rv.pos, rv.checkpoint);
        };
        let (ws, consumed) = skip_spaces(stream);
        pos = rv.pos + ws;
        checkpoint = if consumed {
            stream.offset()
        } else {
            rv.checkpoint
        };

        let rc = close_paren().parse(stream).from(pos, checkpoint);
        if rc.is_failure() {
            return Outcome::failure_from(&rc);
        }
        Outcome::success(value, rc.pos, rc.checkpoint)
    }
}

/// Convenience function to create a Parens parser.
pub fn parens<P>(parser: P) -> Parens<P> {
    Parens::new(parser)
}
