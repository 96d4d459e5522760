use std::fmt;

pub mod ctld;
pub mod error;

/// Lexical profile of the triple notation.
///
/// Both profiles carry the same abstract statements; they differ only in
/// spelling. [`Profile::Turtle`] uses prefixed compact terms and a one-time
/// `@prefix` line, [`Profile::NTriples`] spells every term as a full
/// bracketed IRI and types its literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Turtle,
    NTriples,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Turtle => write!(f, "Turtle"),
            Profile::NTriples => write!(f, "N-Triples"),
        }
    }
}

/// Options for reading a triple stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Assume compounds appear in strictly sequential blocks, in the order
    /// they will be materialized. Attribute lookups are then restricted to
    /// the compound at the read cursor instead of searching globally.
    /// Faster, but only correct for sorted files.
    pub sorted: bool,
}

/// Options for writing a triple stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Emit computed descriptor and line-notation triples on the compound.
    pub enrich: bool,
    /// Honor 2-D wedge/hash bond flags when emitting bond stereo literals.
    pub stereo_drawing: bool,
}
