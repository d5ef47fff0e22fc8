use crate::character::skip_spaces;
use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Run a parser, then discard any trailing whitespace (space, horizontal
/// tab, vertical tab, form feed). The skipped whitespace counts toward the
/// position delta; newlines are not skipped.
pub struct Lexeme<P> {
    parser: P,
}

impl<P> Lexeme<P> {
    pub fn new(parser: P) -> Self {
        Lexeme { parser }
    }
}

impl<'s, P> Parser<'s> for Lexeme<P>
where
    P: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let r = self.parser.parse(stream);
        if r.is_failure() {
            return r;
        }
        let (pos, consumed) = skip_spaces(stream);
        if consumed {
            let checkpoint = stream.offset();
            let mut r = r.advance(pos);
            r.checkpoint = checkpoint;
            r
        } else {
            r
        }
    }
}

/// Convenience function to create a Lexeme parser.
pub fn lexeme<P>(parser: P) -> Lexeme<P> {
    Lexeme::new(parser)
}

/// [`Lexeme`] with a caller-supplied trivia parser instead of the builtin
/// whitespace rule: after the main parser succeeds, the trivia parser is
/// applied repeatedly until it fails. This is where a grammar plugs in
/// comment skipping.
pub struct LexemeWith<P, T> {
    parser: P,
    trivia: T,
}

impl<P, T> LexemeWith<P, T> {
    pub fn new(parser: P, trivia: T) -> Self {
        LexemeWith { parser, trivia }
    }
}

impl<'s, P, T> Parser<'s> for LexemeWith<P, T>
where
    P: Parser<'s>,
    T: Parser<'s>,
{
    type Output = P::Output;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<P::Output> {
        let mut r = self.parser.parse(stream);
        if r.is_failure() {
            return r;
        }
        loop {
            let rt = self.trivia.parse(stream);
            if rt.is_failure() {
                break;
            }
            r = r.advance(rt.pos);
            r.checkpoint = r.checkpoint.max(rt.checkpoint);
        }
        r
    }
}

/// Convenience function to create a LexemeWith parser.
pub fn lexeme_with<P, T>(parser: P, trivia: T) -> LexemeWith<P, T> {
    LexemeWith::new(parser, trivia)
}
