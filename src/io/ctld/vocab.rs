//! Predicate vocabulary of the notation and line-level lexical matching.
//!
//! Every semantic role has exactly two spellings: a compact prefixed one
//! (`:xCoordinate`) and a fully qualified bracketed one ending in
//! `#xCoordinate>`. The qualified spelling is a distinguishing superstring
//! of the compact one, so it is always tried first. Matching is stateless:
//! a [`Spelling`] plus a line is all that is needed.

use crate::io::Profile;

/// First character of every local name and subject token.
pub(crate) const SENTINEL: char = '_';

/// The two lexical spellings of one predicate role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Spelling {
    pub compact: &'static str,
    pub qualified: &'static str,
}

impl Spelling {
    const fn new(compact: &'static str, qualified: &'static str) -> Self {
        Self { compact, qualified }
    }

    /// Locate this role on a line; returns `(byte_offset, match_len)`.
    /// Qualified first, since a qualified term also contains substrings
    /// that could be mistaken for compact terms of other roles.
    pub fn find(&self, line: &str) -> Option<(usize, usize)> {
        if let Some(at) = line.find(self.qualified) {
            return Some((at, self.qualified.len()));
        }
        line.find(self.compact)
            .map(|at| (at, self.compact.len()))
    }

    pub fn matches(&self, line: &str) -> bool {
        self.find(line).is_some()
    }
}

pub(crate) const COMPOUND_TYPE: Spelling = Spelling::new(":Compound", "#Compound>");
pub(crate) const HAS_ATOM: Spelling = Spelling::new(":hasAtom", "#hasAtom>");
pub(crate) const ATOM_TYPE: Spelling = Spelling::new(":Atom", "#Atom>");
// Leading space keeps the compact spelling from firing inside local names.
pub(crate) const SYMBOL: Spelling = Spelling::new(" :atom", "#atom>");
pub(crate) const X_COORDINATE: Spelling = Spelling::new(":xCoordinate", "#xCoordinate>");
pub(crate) const Y_COORDINATE: Spelling = Spelling::new(":yCoordinate", "#yCoordinate>");
pub(crate) const Z_COORDINATE: Spelling = Spelling::new(":zCoordinate", "#zCoordinate>");
pub(crate) const STEREO: Spelling = Spelling::new(":stereo", "#stereo>");
pub(crate) const HAS_BOND: Spelling = Spelling::new(":hasBond", "#hasBond>");
pub(crate) const BOND_TYPE: Spelling = Spelling::new(":Bond", "#Bond>");
pub(crate) const FIRST_ATOM: Spelling = Spelling::new(":firstAtom", "#firstAtom>");
pub(crate) const SECOND_ATOM: Spelling = Spelling::new(":secondAtom", "#secondAtom>");
pub(crate) const BOND_ORDER: Spelling = Spelling::new(":type", "#type>");

/// Bond-order object terms, in both spellings.
pub(crate) const TERM_SINGLE: Spelling =
    Spelling::new(":single", "<https://ii.uwb.edu.pl/ctld#single>");
pub(crate) const TERM_DOUBLE: Spelling =
    Spelling::new(":double", "<https://ii.uwb.edu.pl/ctld#double>");
pub(crate) const TERM_AROMATIC: Spelling =
    Spelling::new(":aromatic", "<https://ii.uwb.edu.pl/ctld#aromatic>");

/// The qualified rdf-type predicate ends in `#type>` just like the
/// bond-order predicate. Lines carrying this marker declare a class, not
/// an order.
pub(crate) const RDF_NS_TYPE: &str = "ns#type>";

/// How a statement line ends: `.` closes the current subject block, `;`
/// continues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Terminator {
    Dot,
    Semicolon,
    Other,
}

pub(crate) fn terminator(line: &str) -> Terminator {
    match line.trim_end().chars().last() {
        Some('.') => Terminator::Dot,
        Some(';') => Terminator::Semicolon,
        _ => Terminator::Other,
    }
}

/// Subject token of a line that starts a new statement, i.e. the text before
/// the first whitespace when the line begins with the local-name sentinel.
pub(crate) fn subject_token(line: &str) -> Option<&str> {
    if !line.starts_with(SENTINEL) {
        return None;
    }
    line.split_whitespace().next()
}

/// Local names (sentinel-prefixed tokens) appearing after byte offset
/// `from`, with statement punctuation stripped.
pub(crate) fn local_names_after(line: &str, from: usize) -> Vec<&str> {
    line[from..]
        .split_whitespace()
        .filter(|tok| tok.starts_with(SENTINEL))
        .map(|tok| tok.trim_end_matches([',', ';', '.']))
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Extract the value following a predicate match at `(pred_start, pred_len)`.
///
/// A double-quoted segment after the predicate wins; otherwise the next
/// whitespace-delimited token is taken and any `^^<...>` datatype suffix is
/// dropped. Malformed boundaries (an unterminated quote, nothing after the
/// predicate) yield `None` — the statement then contributes no value.
pub(crate) fn extract_value(line: &str, pred_start: usize, pred_len: usize) -> Option<String> {
    let rest = &line[pred_start + pred_len..];

    if let Some(open) = rest.find('"') {
        let after = &rest[open + 1..];
        let close = after.find('"')?;
        return Some(after[..close].to_string());
    }

    let token = rest
        .trim_start_matches([' ', '\t'])
        .split([' ', '\t'])
        .next()
        .filter(|tok| !tok.is_empty())?;
    let token = token.split("^^").next().unwrap_or(token);
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Writer-side term table for one lexical profile.
#[derive(Debug)]
pub(crate) struct WriteVocab {
    pub rdf_type: &'static str,
    pub compound: &'static str,
    pub has_atom: &'static str,
    pub atom: &'static str,
    pub symbol: &'static str,
    pub x_coordinate: &'static str,
    pub y_coordinate: &'static str,
    pub z_coordinate: &'static str,
    pub stereo: &'static str,
    pub has_bond: &'static str,
    pub bond: &'static str,
    pub first_atom: &'static str,
    pub second_atom: &'static str,
    pub order: &'static str,
    pub single: &'static str,
    pub double: &'static str,
    pub aromatic: &'static str,
    pub formula: &'static str,
    pub molecular_weight: &'static str,
    pub exact_mass: &'static str,
    pub log_p: &'static str,
    pub tpsa: &'static str,
    pub molar_refractivity: &'static str,
    pub smiles: &'static str,
    pub inchi: &'static str,
    pub inchikey: &'static str,
    /// `^^<...decimal>` in the qualified profile, empty in the compact one.
    pub decimal_suffix: &'static str,
    pub string_suffix: &'static str,
    /// Quote placed around numeric literals (qualified profile only).
    pub numeric_quote: &'static str,
    /// Blank line between statement groups (compact profile only).
    pub group_separator: &'static str,
    /// One-time session prefix line; empty when the profile has none.
    pub prefix_line: &'static str,
}

pub(crate) static TURTLE: WriteVocab = WriteVocab {
    rdf_type: "a",
    compound: ":Compound",
    has_atom: ":hasAtom",
    atom: ":Atom",
    symbol: ":atom",
    x_coordinate: ":xCoordinate",
    y_coordinate: ":yCoordinate",
    z_coordinate: ":zCoordinate",
    stereo: ":stereo",
    has_bond: ":hasBond",
    bond: ":Bond",
    first_atom: ":firstAtom",
    second_atom: ":secondAtom",
    order: ":type",
    single: ":single",
    double: ":double",
    aromatic: ":aromatic",
    formula: ":formula",
    molecular_weight: ":molecularWeight",
    exact_mass: ":exactMass",
    log_p: ":logP",
    tpsa: ":tpsa",
    molar_refractivity: ":molecularRefractivity",
    smiles: ":smiles",
    inchi: ":inchi",
    inchikey: ":inchikey",
    decimal_suffix: "",
    string_suffix: "",
    numeric_quote: "",
    group_separator: "\n",
    prefix_line: "@prefix : <https://ii.uwb.edu.pl/ctld#> .",
};

pub(crate) static NTRIPLES: WriteVocab = WriteVocab {
    rdf_type: "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>",
    compound: "<https://ii.uwb.edu.pl/ctld#Compound>",
    has_atom: "<https://ii.uwb.edu.pl/ctld#hasAtom>",
    atom: "<https://ii.uwb.edu.pl/ctld#Atom>",
    symbol: "<https://ii.uwb.edu.pl/ctld#atom>",
    x_coordinate: "<https://ii.uwb.edu.pl/ctld#xCoordinate>",
    y_coordinate: "<https://ii.uwb.edu.pl/ctld#yCoordinate>",
    z_coordinate: "<https://ii.uwb.edu.pl/ctld#zCoordinate>",
    stereo: "<https://ii.uwb.edu.pl/ctld#stereo>",
    has_bond: "<https://ii.uwb.edu.pl/ctld#hasBond>",
    bond: "<https://ii.uwb.edu.pl/ctld#Bond>",
    first_atom: "<https://ii.uwb.edu.pl/ctld#firstAtom>",
    second_atom: "<https://ii.uwb.edu.pl/ctld#secondAtom>",
    order: "<https://ii.uwb.edu.pl/ctld#type>",
    single: "<https://ii.uwb.edu.pl/ctld#single>",
    double: "<https://ii.uwb.edu.pl/ctld#double>",
    aromatic: "<https://ii.uwb.edu.pl/ctld#aromatic>",
    formula: "<https://ii.uwb.edu.pl/ctld#formula>",
    molecular_weight: "<https://ii.uwb.edu.pl/ctld#molecularWeight>",
    exact_mass: "<https://ii.uwb.edu.pl/ctld#exactMass>",
    log_p: "<https://ii.uwb.edu.pl/ctld#logP>",
    tpsa: "<https://ii.uwb.edu.pl/ctld#tpsa>",
    molar_refractivity: "<https://ii.uwb.edu.pl/ctld#molecularRefractivity>",
    smiles: "<https://ii.uwb.edu.pl/ctld#smiles>",
    inchi: "<https://ii.uwb.edu.pl/ctld#inchi>",
    inchikey: "<https://ii.uwb.edu.pl/ctld#inchikey>",
    decimal_suffix: "^^<https://www.w3.org/2001/XMLSchema#decimal>",
    string_suffix: "^^<https://www.w3.org/2001/XMLSchema#string>",
    numeric_quote: "\"",
    group_separator: "",
    prefix_line: "",
};

pub(crate) fn write_vocab(profile: Profile) -> &'static WriteVocab {
    match profile {
        Profile::Turtle => &TURTLE,
        Profile::NTriples => &NTRIPLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_spelling_wins_over_compact() {
        let line = "_:a1 <https://ii.uwb.edu.pl/ctld#xCoordinate> \"1.2\" .";
        let (at, len) = X_COORDINATE.find(line).unwrap();
        assert_eq!(&line[at..at + len], "#xCoordinate>");

        let compact = "_:a1 :xCoordinate 1.2 .";
        let (at, len) = X_COORDINATE.find(compact).unwrap();
        assert_eq!(&compact[at..at + len], ":xCoordinate");
    }

    #[test]
    fn subject_token_requires_sentinel() {
        assert_eq!(subject_token("_:c1 a :Compound ;"), Some("_:c1"));
        assert_eq!(subject_token("  _:c1 a :Compound ;"), None);
        assert_eq!(subject_token(":hasAtom _:a1 ."), None);
    }

    #[test]
    fn terminator_classification() {
        assert_eq!(terminator("_:c1 a :Compound ."), Terminator::Dot);
        assert_eq!(terminator("_:c1 a :Compound ;"), Terminator::Semicolon);
        assert_eq!(terminator("_:c1 a :Compound"), Terminator::Other);
    }

    #[test]
    fn local_names_are_collected_after_the_predicate() {
        let line = "_:c1 :hasAtom _:a1 ;";
        let (at, len) = HAS_ATOM.find(line).unwrap();
        assert_eq!(local_names_after(line, at + len), vec!["_:a1"]);

        let list = "_:c1 :hasAtom _:a1, _:a2 .";
        let (at, len) = HAS_ATOM.find(list).unwrap();
        assert_eq!(local_names_after(list, at + len), vec!["_:a1", "_:a2"]);
    }

    #[test]
    fn extract_prefers_quoted_segment() {
        let line = "_:a1 <https://ii.uwb.edu.pl/ctld#atom> \"C\"^^<https://www.w3.org/2001/XMLSchema#string> .";
        let (at, len) = SYMBOL.find(line).unwrap();
        assert_eq!(extract_value(line, at, len).as_deref(), Some("C"));
    }

    #[test]
    fn extract_unquoted_token_drops_datatype_suffix() {
        let line = "_:a1 :xCoordinate 1.2 ;";
        let (at, len) = X_COORDINATE.find(line).unwrap();
        assert_eq!(extract_value(line, at, len).as_deref(), Some("1.2"));

        let typed = "_:a1 :xCoordinate 1.2^^<https://www.w3.org/2001/XMLSchema#decimal> .";
        let (at, len) = X_COORDINATE.find(typed).unwrap();
        assert_eq!(extract_value(typed, at, len).as_deref(), Some("1.2"));
    }

    #[test]
    fn unterminated_quote_yields_no_value() {
        let line = "_:a1 :xCoordinate \"1.2 .";
        let (at, len) = X_COORDINATE.find(line).unwrap();
        assert_eq!(extract_value(line, at, len), None);
    }

    #[test]
    fn rdf_type_lines_carry_the_namespace_marker() {
        // The qualified rdf-type predicate ends in `#type>` just like the
        // bond-order predicate; the namespace marker disambiguates.
        let line = "_:b5 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://ii.uwb.edu.pl/ctld#Bond> .";
        assert!(BOND_ORDER.matches(line));
        assert!(line.contains(RDF_NS_TYPE));

        let order = "_:b5 <https://ii.uwb.edu.pl/ctld#type> <https://ii.uwb.edu.pl/ctld#double> .";
        assert!(BOND_ORDER.matches(order));
        assert!(!order.contains(RDF_NS_TYPE));
    }
}
