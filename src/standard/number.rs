use std::marker::PhantomData;

use crate::outcome::Outcome;
use crate::parser::Parser;
use crate::standard::floating::floating;
use crate::standard::integral::integral;
use crate::streams::TextStream;

/// Numeric types parseable by [`number`]: integer targets go through the
/// overflow-checked integral parser, floating targets through the
/// shape-and-convert floating parser.
pub trait Number: Sized {
    fn parse_number(stream: &mut TextStream<'_>) -> Outcome<Self>;
}

macro_rules! impl_number_integral {
    ($($t:ty),*) => {$(
        impl Number for $t {
            fn parse_number(stream: &mut TextStream<'_>) -> Outcome<Self> {
                integral::<$t>().parse(stream)
            }
        }
    )*};
}

macro_rules! impl_number_floating {
    ($($t:ty),*) => {$(
        impl Number for $t {
            fn parse_number(stream: &mut TextStream<'_>) -> Outcome<Self> {
                floating::<$t>().parse(stream)
            }
        }
    )*};
}

impl_number_integral!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_number_floating!(f32, f64);

/// Parse a base-10 number of any primitive numeric type, dispatching on
/// the target type.
pub struct NumberParser<N> {
    _numeric: PhantomData<N>,
}

impl<N> NumberParser<N> {
    pub fn new() -> Self {
        NumberParser {
            _numeric: PhantomData,
        }
    }
}

impl<N> Default for NumberParser<N> {
    fn default() -> Self {
        NumberParser::new()
    }
}

impl<'s, N> Parser<'s> for NumberParser<N>
where
    N: Number,
{
    type Output = N;

    fn parse(&self, stream: &mut TextStream<'s>) -> Outcome<N> {
        N::parse_number(stream)
    }
}

/// Convenience function to create a NumberParser.
pub fn number<N: Number>() -> NumberParser<N> {
    NumberParser::new()
}
