//! Bidirectional codec between in-memory molecular graphs and the CT-LD
//! chemical triple notation.
//!
//! A molecule is a [`System`] of atoms and bonds. The [`io`] layer turns
//! systems into RDF-style triple documents and back, in either the compact
//! Turtle spelling or the fully qualified N-Triples spelling of the same
//! vocabulary.
//!
//! ```
//! use ctld::{write, Atom, Element, Profile, System, WriteOptions};
//!
//! let mut system = System::new();
//! system.atoms.push(Atom::new(Element::C, [0.0, 0.0, 0.0]));
//!
//! let mut out = Vec::new();
//! write(&mut out, &[system], Profile::Turtle, WriteOptions::default()).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("a :Compound"));
//! ```

pub mod io;
pub mod model;

pub use io::ctld::{read, write, Descriptor, Enrichment, LineNotation, Reader, Writer};
pub use io::error::Error;
pub use io::{Profile, ReadOptions, WriteOptions};
pub use model::atom::Atom;
pub use model::system::{Bond, System};
pub use model::types::{AtomParity, BondOrder, BondStereo, Element};
