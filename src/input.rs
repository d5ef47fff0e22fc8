use crate::character::skip_spaces;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Discard any leading whitespace, then run the supplied parser. Used once
/// at the top of a grammar, where the input may begin with indentation the
/// lexeme discipline has not yet had a chance to skip.
pub struct Input<P> {
    parser: P,
}

impl<P> Input<P> {
    pub fn new(parser: P) -> Self {
        Input { parser }
    }
}

impl<'s, P> Parser<'s> for Input<P>
where
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let (pos, consumed) = skip_spaces(stream);
        let checkpoint = if consumed { stream.offset() } else { 0 };
        self.parser.parse(stream).from(pos, checkpoint)
    }
}

/// Convenience function to create an Input parser.
pub fn input<P>(parser: P) -> Input<P> {
    Input::new(parser)
}
