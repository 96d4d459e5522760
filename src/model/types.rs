use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Element {
    H = 1, He, Li, Be, B, C, N, O, F, Ne,
    Na, Mg, Al, Si, P, S, Cl, Ar, K, Ca,
    Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn,
    Ga, Ge, As, Se, Br, Kr, Rb, Sr, Y, Zr,
    Nb, Mo, Tc, Ru, Rh, Pd, Ag, Cd, In, Sn,
    Sb, Te, I, Xe, Cs, Ba, La, Ce, Pr, Nd,
    Pm, Sm, Eu, Gd, Tb, Dy, Ho, Er, Tm, Yb,
    Lu, Hf, Ta, W, Re, Os, Ir, Pt, Au, Hg,
    Tl, Pb, Bi, Po, At, Rn, Fr, Ra, Ac, Th,
    Pa, U, Np, Pu, Am, Cm, Bk, Cf, Es, Fm,
    Md, No, Lr, Rf, Db, Sg, Bh, Hs, Mt, Ds,
    Rg, Cn, Nh, Fl, Mc, Lv, Ts, Og = 118,
}

#[rustfmt::skip]
const ELEMENTS: [Element; 118] = {
    use Element::*;
    [
        H, He, Li, Be, B, C, N, O, F, Ne,
        Na, Mg, Al, Si, P, S, Cl, Ar, K, Ca,
        Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn,
        Ga, Ge, As, Se, Br, Kr, Rb, Sr, Y, Zr,
        Nb, Mo, Tc, Ru, Rh, Pd, Ag, Cd, In, Sn,
        Sb, Te, I, Xe, Cs, Ba, La, Ce, Pr, Nd,
        Pm, Sm, Eu, Gd, Tb, Dy, Ho, Er, Tm, Yb,
        Lu, Hf, Ta, W, Re, Os, Ir, Pt, Au, Hg,
        Tl, Pb, Bi, Po, At, Rn, Fr, Ra, Ac, Th,
        Pa, U, Np, Pu, Am, Cm, Bk, Cf, Es, Fm,
        Md, No, Lr, Rf, Db, Sg, Bh, Hs, Mt, Ds,
        Rg, Cn, Nh, Fl, Mc, Lv, Ts, Og,
    ]
};

#[rustfmt::skip]
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Standard atomic weights (conventional values, u).
#[rustfmt::skip]
const ATOMIC_MASSES: [f64; 118] = [
    1.008, 4.0026, 6.94, 9.0122, 10.81, 12.011, 14.007, 15.999, 18.998, 20.18,
    22.99, 24.305, 26.982, 28.085, 30.974, 32.06, 35.45, 39.948, 39.098, 40.078,
    44.956, 47.867, 50.942, 51.996, 54.938, 55.845, 58.933, 58.693, 63.546, 65.38,
    69.723, 72.63, 74.922, 78.971, 79.904, 83.798, 85.468, 87.62, 88.906, 91.224,
    92.906, 95.96, 98.0, 101.07, 102.91, 106.42, 107.87, 112.41, 114.82, 118.71,
    121.76, 127.6, 126.9, 131.29, 132.91, 137.33, 138.91, 140.12, 140.91, 144.24,
    145.0, 150.36, 151.96, 157.25, 158.93, 162.5, 164.93, 167.26, 168.93, 173.05,
    174.97, 178.49, 180.95, 183.84, 186.21, 190.23, 192.22, 195.08, 196.97, 200.59,
    204.38, 207.2, 208.98, 209.0, 210.0, 222.0, 223.0, 226.0, 227.0, 232.04,
    231.04, 238.03, 237.0, 244.0, 243.0, 247.0, 247.0, 251.0, 252.0, 257.0,
    258.0, 259.0, 262.0, 267.0, 270.0, 271.0, 270.0, 277.0, 276.0, 281.0,
    280.0, 285.0, 284.0, 289.0, 288.0, 293.0, 294.0, 294.0,
];

/// Masses of the principal (most abundant or longest-lived) isotope, u.
#[rustfmt::skip]
const MONOISOTOPIC_MASSES: [f64; 118] = [
    1.00783, 4.00260, 7.01600, 9.01218, 11.00931, 12.0, 14.00307, 15.99491, 18.99840, 19.99244,
    22.98977, 23.98504, 26.98154, 27.97693, 30.97376, 31.97207, 34.96885, 39.96238, 38.96371, 39.96259,
    44.95591, 47.94794, 50.94396, 51.94051, 54.93804, 55.93494, 58.93319, 57.93534, 62.92960, 63.92914,
    68.92557, 73.92118, 74.92159, 79.91652, 78.91834, 83.91150, 84.91179, 87.90561, 88.90584, 89.90470,
    92.90637, 97.90540, 96.90636, 101.90434, 102.90550, 105.90348, 106.90509, 113.90337, 114.90388, 119.90220,
    120.90381, 129.90622, 126.90447, 131.90416, 132.90545, 137.90525, 138.90636, 139.90544, 140.90766, 141.90773,
    144.91276, 151.91974, 152.92124, 157.92411, 158.92535, 163.92918, 164.93033, 165.93030, 168.93422, 173.93887,
    174.94078, 179.94656, 180.94800, 183.95093, 186.95575, 191.96148, 192.96292, 194.96479, 196.96657, 201.97064,
    204.97443, 207.97665, 208.98040, 208.98243, 209.98715, 222.01758, 223.01974, 226.02541, 227.02775, 232.03806,
    231.03588, 238.05079, 237.04817, 244.06420, 243.06138, 247.07035, 247.07031, 251.07959, 252.08298, 257.09511,
    258.09844, 259.10103, 262.10961, 267.12179, 268.12567, 271.13393, 272.13826, 270.13429, 276.15159, 281.16451,
    280.16514, 285.17712, 284.17873, 289.19042, 288.19274, 293.20449, 292.20746, 294.21392,
];

impl Element {
    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        SYMBOLS[*self as usize - 1]
    }

    pub fn atomic_mass(&self) -> f64 {
        ATOMIC_MASSES[*self as usize - 1]
    }

    pub fn monoisotopic_mass(&self) -> f64 {
        MONOISOTOPIC_MASSES[*self as usize - 1]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .iter()
            .position(|sym| *sym == s)
            .map(|i| ELEMENTS[i])
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    pub fn value(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondOrder::Single => write!(f, "Single"),
            BondOrder::Double => write!(f, "Double"),
            BondOrder::Triple => write!(f, "Triple"),
            BondOrder::Aromatic => write!(f, "Aromatic"),
        }
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "1" => Ok(BondOrder::Single),
            "double" | "2" => Ok(BondOrder::Double),
            "triple" | "3" => Ok(BondOrder::Triple),
            "aromatic" | "ar" => Ok(BondOrder::Aromatic),
            _ => Err(ParseBondOrderError(s.to_string())),
        }
    }
}

/// Tetrahedral parity of an atom, as computed by an external stereo
/// perception step. The codec only serializes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomParity {
    #[default]
    None,
    Clockwise,
    AntiClockwise,
    Unknown,
}

impl AtomParity {
    /// Wire code used in the stereo literal of an atom block.
    pub fn code(&self) -> u8 {
        match self {
            AtomParity::None => 0,
            AtomParity::Clockwise => 1,
            AtomParity::AntiClockwise => 2,
            AtomParity::Unknown => 3,
        }
    }
}

/// Drawing-level stereo annotation of a bond: wedge/hash flags from a 2-D
/// depiction, or a double bond with unspecified cis/trans configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondStereo {
    #[default]
    None,
    Wedge,
    Hash,
    WedgeOrHash,
    CisTransUnspecified,
}

impl BondStereo {
    /// Wire code used in the stereo literal of a bond block.
    pub fn code(&self) -> u8 {
        match self {
            BondStereo::None => 0,
            BondStereo::Wedge => 1,
            BondStereo::Hash => 6,
            BondStereo::WedgeOrHash => 4,
            BondStereo::CisTransUnspecified => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("Fe").unwrap(), Element::Fe);
        assert_eq!(Element::from_str("Og").unwrap(), Element::Og);
    }

    #[test]
    fn element_from_str_is_case_sensitive() {
        let err = Element::from_str("h").unwrap_err();
        assert_eq!(
            format!("{}", err),
            "invalid or unsupported element symbol: 'h'"
        );
    }

    #[test]
    fn element_symbol_display_and_atomic_number() {
        assert_eq!(Element::Na.symbol(), "Na");
        assert_eq!(Element::Na.to_string(), "Na");
        assert_eq!(Element::Na.atomic_number(), 11u8);
        assert_eq!(Element::Og.atomic_number(), 118u8);
    }

    #[test]
    fn mass_tables_line_up() {
        assert!(approx_eq(Element::H.atomic_mass(), 1.008, 1e-6));
        assert!(approx_eq(Element::C.atomic_mass(), 12.011, 1e-6));
        assert!(approx_eq(Element::C.monoisotopic_mass(), 12.0, 1e-6));
        assert!(approx_eq(Element::O.monoisotopic_mass(), 15.99491, 1e-6));
        assert!(approx_eq(Element::Og.atomic_mass(), 294.0, 1e-6));
    }

    #[test]
    fn bondorder_from_str_variants() {
        assert_eq!(BondOrder::from_str("single").unwrap(), BondOrder::Single);
        assert_eq!(BondOrder::from_str("2").unwrap(), BondOrder::Double);
        assert_eq!(BondOrder::from_str("AR").unwrap(), BondOrder::Aromatic);
        assert!(BondOrder::from_str("quad").is_err());
    }

    #[test]
    fn stereo_wire_codes() {
        assert_eq!(AtomParity::None.code(), 0);
        assert_eq!(AtomParity::Clockwise.code(), 1);
        assert_eq!(AtomParity::AntiClockwise.code(), 2);
        assert_eq!(AtomParity::Unknown.code(), 3);

        assert_eq!(BondStereo::None.code(), 0);
        assert_eq!(BondStereo::Wedge.code(), 1);
        assert_eq!(BondStereo::Hash.code(), 6);
        assert_eq!(BondStereo::WedgeOrHash.code(), 4);
        assert_eq!(BondStereo::CisTransUnspecified.code(), 3);
    }
}
