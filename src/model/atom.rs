use super::types::{AtomParity, Element};

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: [f64; 3],
    /// Tetrahedral parity supplied by an external stereo perception step;
    /// `AtomParity::None` for atoms that are not stereocenters.
    pub parity: AtomParity,
}

impl Atom {
    pub fn new(element: Element, position: [f64; 3]) -> Self {
        Self {
            element,
            position,
            parity: AtomParity::None,
        }
    }

    pub fn with_parity(element: Element, position: [f64; 3], parity: AtomParity) -> Self {
        Self {
            element,
            position,
            parity,
        }
    }
}
