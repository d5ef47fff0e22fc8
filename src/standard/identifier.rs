use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::position::Position;
use crate::stream::Stream;
use crate::streams::TextStream;

/// Parse an identifier: one character satisfying the start predicate,
/// then zero or more characters satisfying the continuation predicate.
/// Atomic on the first character; the rest cannot fail.
pub struct Identifier<F, G> {
    start: F,
    rest: G,
}

impl<F, G> Identifier<F, G> {
    pub fn new(start: F, rest: G) -> Self {
        Identifier { start, rest }
    }
}

impl<'s, F, G> Parser<'s> for Identifier<F, G>
where
    F: Fn(char) -> bool,
    G: Fn(char) -> bool,
{
    type Output = String;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<String> {
        let mut out = String::new();
        let mut pos = Position::default();
        match stream.peek() {
            Some(c) if (self.start)(c) => {
                stream.read();
                pos += Position::after(c);
                out.push(c);
            }
            _ => return Outcome::failure(),
        }
        while let Some(c) = stream.peek() {
            if !(self.rest)(c) {
                break;
            }
            stream.read();
            pos += Position::after(c);
            out.push(c);
        }
        Outcome::success(out, pos, stream.offset())
    }
}

/// Convenience function to create an Identifier parser with distinct
/// start and continuation predicates.
pub fn identifier<F, G>(start: F, rest: G) -> Identifier<F, G>
where
    F: Fn(char) -> bool,
    G: Fn(char) -> bool,
{
    Identifier::new(start, rest)
}

/// Identifier with one predicate for every character.
pub fn identifier_all<F>(predicate: F) -> Identifier<F, F>
where
    F: Fn(char) -> bool + Clone,
{
    Identifier::new(predicate.clone(), predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{is_alpha, is_alpha_num};

    #[test]
    fn test_typical_identifier() {
        let mut stream = TextStream::new("abc123 rest");
        let r = identifier(is_alpha, is_alpha_num).parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abc123"));
        assert_eq!(r.pos, Position::new(1, 7));
        assert_eq!(stream.peek(), Some(' '));
    }

    #[test]
    fn test_start_predicate_gates() {
        let mut stream = TextStream::new("1abc");
        let r = identifier(is_alpha, is_alpha_num).parse(&mut stream);
        assert!(r.is_failure());
        assert_eq!(stream.peek(), Some('1'));
    }

    #[test]
    fn test_single_character() {
        let mut stream = TextStream::new("x 1");
        let r = identifier(is_alpha, is_alpha_num).parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("x"));
    }

    #[test]
    fn test_chemical_element_shape() {
        // Uppercase start, lowercase continuation: Na, Cl, H.
        let upper = |c: char| c.is_ascii_uppercase();
        let lower = |c: char| c.is_ascii_lowercase();
        let mut stream = TextStream::new("Na2");
        let r = identifier(upper, lower).parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("Na"));
        assert_eq!(stream.peek(), Some('2'));
    }

    #[test]
    fn test_identifier_all() {
        let mut stream = TextStream::new("abc,def");
        let r = identifier_all(is_alpha).parse(&mut stream);
        assert_eq!(r.value.as_deref(), Some("abc"));
        assert_eq!(stream.peek(), Some(','));
    }
}
