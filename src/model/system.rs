use super::atom::Atom;
use super::types::{BondOrder, BondStereo};
use std::collections::BTreeMap;

/// A bond between two atoms of a [`System`], addressed by 0-based indices.
///
/// Unlike plain connectivity, the endpoint order is meaningful: `begin` is
/// the structural start of the bond, and `from_atom` may record an
/// externally computed directional-stereo origin that overrides it when the
/// bond is serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub order: BondOrder,
    pub stereo: BondStereo,
    pub from_atom: Option<usize>,
}

impl Bond {
    pub fn new(begin: usize, end: usize, order: BondOrder) -> Self {
        Self {
            begin,
            end,
            order,
            stereo: BondStereo::None,
            from_atom: None,
        }
    }

    /// Endpoints as an order-independent pair (smaller index first).
    pub fn endpoints(&self) -> (usize, usize) {
        if self.begin <= self.end {
            (self.begin, self.end)
        } else {
            (self.end, self.begin)
        }
    }
}

/// A molecular graph: atoms with coordinates, bonds, and the coordinate
/// dimensionality of the depiction (0, 2 or 3).
#[derive(Debug, Clone, Default)]
pub struct System {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub dimension: u8,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Neighbors of `atom` as `(neighbor_index, bond_index)` pairs, in bond
    /// declaration order.
    pub fn neighbors(&self, atom: usize) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (bi, bond) in self.bonds.iter().enumerate() {
            if bond.begin == atom {
                out.push((bond.end, bi));
            } else if bond.end == atom {
                out.push((bond.begin, bi));
            }
        }
        out
    }

    /// Molecular formula in Hill order (C first, then H, then the rest
    /// alphabetically).
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.element.symbol()).or_insert(0) += 1;
        }

        let mut parts = Vec::with_capacity(counts.len());
        for key in ["C", "H"] {
            if let Some(n) = counts.remove(key) {
                parts.push(format_count(key, n));
            }
        }
        for (symbol, n) in counts {
            parts.push(format_count(symbol, n));
        }
        parts.concat()
    }

    /// Sum of standard atomic weights over all atoms.
    pub fn molecular_weight(&self) -> f64 {
        self.atoms.iter().map(|a| a.element.atomic_mass()).sum()
    }

    /// Sum of principal-isotope masses over all atoms.
    pub fn exact_mass(&self) -> f64 {
        self.atoms
            .iter()
            .map(|a| a.element.monoisotopic_mass())
            .sum()
    }
}

fn format_count(symbol: &str, n: usize) -> String {
    if n == 1 {
        symbol.to_string()
    } else {
        format!("{symbol}{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn ethanol() -> System {
        let mut system = System::new();
        system.atoms.push(Atom::new(Element::C, [0.0, 0.0, 0.0]));
        system.atoms.push(Atom::new(Element::C, [1.5, 0.0, 0.0]));
        system.atoms.push(Atom::new(Element::O, [2.2, 1.1, 0.0]));
        for _ in 0..6 {
            system.atoms.push(Atom::new(Element::H, [0.0, 0.0, 0.0]));
        }
        system.bonds.push(Bond::new(0, 1, BondOrder::Single));
        system.bonds.push(Bond::new(1, 2, BondOrder::Single));
        system
    }

    #[test]
    fn formula_uses_hill_order() {
        assert_eq!(ethanol().formula(), "C2H6O");

        let mut water = System::new();
        water.atoms.push(Atom::new(Element::O, [0.0, 0.0, 0.0]));
        water.atoms.push(Atom::new(Element::H, [0.0, 0.0, 0.0]));
        water.atoms.push(Atom::new(Element::H, [0.0, 0.0, 0.0]));
        assert_eq!(water.formula(), "H2O");
    }

    #[test]
    fn weight_and_exact_mass() {
        let system = ethanol();
        assert!(approx_eq(system.molecular_weight(), 46.069, 1e-3));
        assert!(approx_eq(system.exact_mass(), 46.0418, 1e-3));
    }

    #[test]
    fn neighbors_follow_bond_order() {
        let system = ethanol();
        assert_eq!(system.neighbors(1), vec![(0, 0), (2, 1)]);
        assert_eq!(system.neighbors(2), vec![(1, 1)]);
        assert!(system.neighbors(5).is_empty());
    }

    #[test]
    fn endpoints_are_order_independent() {
        let bond = Bond::new(4, 1, BondOrder::Double);
        assert_eq!(bond.endpoints(), (1, 4));
    }
}
