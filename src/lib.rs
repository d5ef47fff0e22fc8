//! # Streamcomb - parser combinators over a seekable character stream
//!
//! A library of small composable parsing functions that assemble into
//! recursive-descent parsers for arbitrary grammars. The library
//! emphasizes:
//!
//! - **Failure as data**: every parser returns an [`Outcome`] — no
//!   exceptions, no error enums in the parsing path; the absence of a
//!   value *is* the failure signal, alongside a position delta and the
//!   checkpoint of the last successful sub-parse.
//! - **Explicit backtracking**: primitives never consume on failure;
//!   composite parsers may, and callers opt into all-or-nothing behavior
//!   with [`attempt`](attempt::attempt). Backtracking is a seek to a
//!   recorded offset, never a copy of the input.
//! - **Composability**: sequencing, ordered choice, repetition,
//!   separated lists, folding and lexical helpers combine into larger
//!   parsers; any function from the stream to an outcome is itself a
//!   parser.
//! - **Generic accumulation**: repetition combinators store into anything
//!   satisfying the small [`Container`] contract — `Vec`, `String`,
//!   `VecDeque`, `LinkedList`.

pub mod attempt;
pub mod between;
pub mod bind;
pub mod character;
pub mod consumption;
pub mod container;
pub mod discard;
pub mod end_by;
pub mod expect;
pub mod fold;
pub mod input;
pub mod join;
pub mod lexeme;
pub mod line;
pub mod many;
pub mod map;
pub mod maybe;
pub mod not;
pub mod or;
pub mod outcome;
pub mod parens;
pub mod parser;
pub mod position;
pub mod replace;
pub mod report;
pub mod reserved;
pub mod sep_by;
pub mod sep_end_by;
pub mod standard;
pub mod stream;
pub mod streams;

pub use container::Container;
pub use map::MapExt;
pub use or::OrExt;
pub use outcome::Outcome;
pub use parser::Parser;
pub use position::Position;
pub use report::{ParseError, finish, illformed};
pub use stream::Stream;
pub use streams::TextStream;
