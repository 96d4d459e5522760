//! Chemical triple notation (CT-LD) reading and writing.
//!
//! The notation describes molecules as RDF-style statements over blank
//! nodes: a compound node owns atom and bond nodes through `hasAtom` and
//! `hasBond`, atoms carry a symbol, coordinates and an optional stereo
//! parity, bonds carry their two endpoints and an order term. Two lexical
//! profiles exist, selected through [`Profile`](crate::io::Profile): the
//! compact Turtle spelling and the fully qualified N-Triples spelling.
//! A reader accepts either profile without being told which one it got.

pub mod enrich;
pub mod reader;
pub mod writer;

mod vocab;

pub use enrich::{Descriptor, Enrichment, LineNotation};
pub use reader::{read, Reader};
pub use writer::{write, Writer};
