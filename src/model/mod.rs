//! Core data structures representing molecular graphs.
//!
//! - [`atom`] – Atom with element, Cartesian coordinates, and tetrahedral parity.
//! - [`types`] – Periodic table elements, bond orders, and stereo annotations.
//! - [`system`] – Complete molecular graphs with atoms, bonds, and dimensionality.
//!
//! The model deliberately carries stereo information only as already-computed
//! results ([`types::AtomParity`], [`types::BondStereo`]): perception of
//! parity and winding is the host's job, the codec merely serializes it.

pub mod atom;
pub mod system;
pub mod types;
