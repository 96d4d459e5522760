//! Writer for the chemical triple notation.
//!
//! Blank-node identifiers (`_:b1`, `_:b2`, ...) are allocated from one
//! session-wide counter that is never reset, so several molecules written
//! through the same [`Writer`] share a collision-free identifier space.
//! The compound identifier is allocated first and the atoms immediately
//! after it, which makes an atom's identifier equal to the compound
//! identifier plus the atom's 1-based position; bond endpoint references
//! are reconstructed from that arithmetic.
//!
//! Each bond is emitted exactly once. Traversal walks every atom's
//! neighborhood and keeps a bond only when seen from its designated start
//! atom (the `from_atom` override when set, otherwise the begin atom).

use std::io::Write;

use tracing::debug;

use super::enrich::Enrichment;
use super::vocab::{self, WriteVocab};
use crate::io::error::Error;
use crate::io::{Profile, WriteOptions};
use crate::model::system::System;
use crate::model::types::{BondOrder, BondStereo};

/// Writes every molecule in `systems` to `output` in one session.
pub fn write<W: Write>(
    output: W,
    systems: &[System],
    profile: Profile,
    options: WriteOptions,
) -> Result<(), Error> {
    let mut writer = Writer::new(output, profile, options);
    for system in systems {
        writer.write_molecule(system)?;
    }
    Ok(())
}

/// Streaming writer session for one output.
pub struct Writer<W> {
    output: W,
    vocab: &'static WriteVocab,
    options: WriteOptions,
    enrichment: Enrichment,
    next_id: usize,
    prefix_written: bool,
}

impl<W: Write> Writer<W> {
    pub fn new(output: W, profile: Profile, options: WriteOptions) -> Self {
        Self {
            output,
            vocab: vocab::write_vocab(profile),
            options,
            enrichment: Enrichment::default(),
            next_id: 0,
            prefix_written: false,
        }
    }

    /// Installs enrichment collaborators consulted when the enrich option
    /// is set.
    pub fn with_enrichment(mut self, enrichment: Enrichment) -> Self {
        self.enrichment = enrichment;
        self
    }

    fn allocate(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    pub fn write_molecule(&mut self, system: &System) -> Result<(), Error> {
        if system.atom_count() > 999 || system.bond_count() > 999 {
            return Err(Error::TooLarge {
                atoms: system.atom_count(),
                bonds: system.bond_count(),
            });
        }

        let v = self.vocab;
        if !self.prefix_written {
            self.prefix_written = true;
            if !v.prefix_line.is_empty() {
                writeln!(self.output, "{}", v.prefix_line)?;
                self.separator()?;
            }
        }

        let compound = self.allocate();
        self.statement(compound, v.rdf_type, v.compound)?;
        if self.options.enrich {
            let extras = self.enrichment_statements(system);
            for (predicate, object) in extras {
                self.statement(compound, predicate, &object)?;
            }
        }
        self.separator()?;

        for atom in &system.atoms {
            let id = self.allocate();
            let atom_ref = reference(id);
            self.statement(compound, v.has_atom, &atom_ref)?;
            self.separator()?;

            self.statement(id, v.rdf_type, v.atom)?;
            let symbol = self.string_object(atom.element.symbol());
            self.statement(id, v.symbol, &symbol)?;
            let coordinates = [
                (v.x_coordinate, atom.position[0]),
                (v.y_coordinate, atom.position[1]),
                (v.z_coordinate, atom.position[2]),
            ];
            for (predicate, value) in coordinates {
                let object = self.decimal_object(&format!("{value:.4}"));
                self.statement(id, predicate, &object)?;
            }
            let parity = atom.parity.code();
            if parity != 0 {
                let object = self.decimal_object(&parity.to_string());
                self.statement(id, v.stereo, &object)?;
            }
            self.separator()?;
        }

        for a in 0..system.atom_count() {
            for (nbr, bi) in system.neighbors(a) {
                let bond = &system.bonds[bi];
                // A from_atom that is not an endpoint cannot pick a
                // direction, so the first endpoint emits.
                let emission = bond
                    .from_atom
                    .filter(|from| *from == bond.begin || *from == bond.end);
                let starts_here = match emission {
                    Some(from) => from == a,
                    None => bond.begin == a,
                };
                if !starts_here {
                    continue;
                }

                let mut stereo = 0;
                if system.dimension == 2 && self.options.stereo_drawing {
                    stereo = match bond.stereo {
                        BondStereo::Wedge | BondStereo::Hash | BondStereo::WedgeOrHash => {
                            bond.stereo.code()
                        }
                        _ => 0,
                    };
                }
                if bond.stereo == BondStereo::CisTransUnspecified {
                    stereo = bond.stereo.code();
                }

                let order = match bond.order {
                    BondOrder::Single => v.single,
                    BondOrder::Double => v.double,
                    BondOrder::Aromatic => v.aromatic,
                    BondOrder::Triple => {
                        debug!("the vocabulary has no triple-bond term, writing single");
                        v.single
                    }
                };

                let id = self.allocate();
                let bond_ref = reference(id);
                self.statement(compound, v.has_bond, &bond_ref)?;
                self.separator()?;

                self.statement(id, v.rdf_type, v.bond)?;
                let first = reference(compound + a + 1);
                let second = reference(compound + nbr + 1);
                self.statement(id, v.first_atom, &first)?;
                self.statement(id, v.second_atom, &second)?;
                self.statement(id, v.order, order)?;
                if stereo != 0 {
                    // No datatype suffix on bond stereo literals.
                    let q = v.numeric_quote;
                    let object = format!("{q}{stereo}{q}");
                    self.statement(id, v.stereo, &object)?;
                }
                self.separator()?;
            }
        }

        Ok(())
    }

    fn enrichment_statements(&self, system: &System) -> Vec<(&'static str, String)> {
        let v = self.vocab;
        let mut extras = vec![
            (v.formula, self.string_object(&system.formula())),
            (
                v.molecular_weight,
                self.decimal_object(&format_quantity(system.molecular_weight())),
            ),
            (
                v.exact_mass,
                self.decimal_object(&format_quantity(system.exact_mass())),
            ),
        ];

        let descriptors = [
            (v.log_p, self.enrichment.log_p.as_deref()),
            (v.tpsa, self.enrichment.tpsa.as_deref()),
            (
                v.molar_refractivity,
                self.enrichment.molar_refractivity.as_deref(),
            ),
        ];
        for (predicate, model) in descriptors {
            if let Some(value) = model.and_then(|m| m.evaluate(system)) {
                extras.push((predicate, self.decimal_object(&format_quantity(value))));
            }
        }

        let notations = [
            (v.smiles, self.enrichment.smiles.as_deref()),
            (v.inchi, self.enrichment.inchi.as_deref()),
            (v.inchikey, self.enrichment.inchikey.as_deref()),
        ];
        for (predicate, generator) in notations {
            if let Some(text) = generator.and_then(|g| g.generate(system)) {
                extras.push((predicate, self.string_object(&escape_literal(&text))));
            }
        }

        extras
    }

    fn statement(&mut self, subject: usize, predicate: &str, object: &str) -> Result<(), Error> {
        writeln!(self.output, "_:b{subject} {predicate} {object} .")?;
        Ok(())
    }

    /// Blank line between statement groups in the compact profile; nothing
    /// in the qualified one.
    fn separator(&mut self) -> Result<(), Error> {
        self.output.write_all(self.vocab.group_separator.as_bytes())?;
        Ok(())
    }

    fn string_object(&self, text: &str) -> String {
        format!("\"{}\"{}", text, self.vocab.string_suffix)
    }

    fn decimal_object(&self, text: &str) -> String {
        let q = self.vocab.numeric_quote;
        format!("{q}{text}{q}{}", self.vocab.decimal_suffix)
    }
}

fn reference(id: usize) -> String {
    format!("_:b{id}")
}

/// Four decimals, trailing zeros trimmed. Used for enrichment quantities;
/// coordinates always keep all four decimals.
fn format_quantity(value: f64) -> String {
    let text = format!("{value:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Doubles backslashes, then strips a fixed sequence of trailing control
/// characters (newline, tab, carriage return, tab) one character each.
fn escape_literal(value: &str) -> String {
    let mut out = value.replace('\\', "\\\\");
    for trailing in ['\n', '\t', '\r', '\t'] {
        if out.ends_with(trailing) {
            out.pop();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::system::Bond;
    use crate::model::types::{AtomParity, Element};

    fn carbonyl() -> System {
        let mut system = System::new();
        system.dimension = 2;
        system.atoms.push(Atom::new(Element::C, [0.0, 0.0, 0.0]));
        system.atoms.push(Atom::new(Element::O, [1.2, 0.0, 0.0]));
        system.bonds.push(Bond::new(0, 1, BondOrder::Double));
        system
    }

    fn render(systems: &[System], profile: Profile, options: WriteOptions) -> String {
        let mut out = Vec::new();
        write(&mut out, systems, profile, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn compact_profile_output_shape() {
        let text = render(&[carbonyl()], Profile::Turtle, WriteOptions::default());
        let expected = "\
@prefix : <https://ii.uwb.edu.pl/ctld#> .

_:b1 a :Compound .

_:b1 :hasAtom _:b2 .

_:b2 a :Atom .
_:b2 :atom \"C\" .
_:b2 :xCoordinate 0.0000 .
_:b2 :yCoordinate 0.0000 .
_:b2 :zCoordinate 0.0000 .

_:b1 :hasAtom _:b3 .

_:b3 a :Atom .
_:b3 :atom \"O\" .
_:b3 :xCoordinate 1.2000 .
_:b3 :yCoordinate 0.0000 .
_:b3 :zCoordinate 0.0000 .

_:b1 :hasBond _:b4 .

_:b4 a :Bond .
_:b4 :firstAtom _:b2 .
_:b4 :secondAtom _:b3 .
_:b4 :type :double .

";
        assert_eq!(text, expected);
    }

    #[test]
    fn qualified_profile_output_shape() {
        let text = render(&[carbonyl()], Profile::NTriples, WriteOptions::default());
        assert!(!text.contains("@prefix"));
        assert!(!text.contains("\n\n"));
        assert!(text.contains(
            "_:b1 <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
             <https://ii.uwb.edu.pl/ctld#Compound> ."
        ));
        assert!(text.contains(
            "_:b3 <https://ii.uwb.edu.pl/ctld#xCoordinate> \
             \"1.2000\"^^<https://www.w3.org/2001/XMLSchema#decimal> ."
        ));
        assert!(text.contains(
            "_:b2 <https://ii.uwb.edu.pl/ctld#atom> \
             \"C\"^^<https://www.w3.org/2001/XMLSchema#string> ."
        ));
        assert!(text.contains(
            "_:b4 <https://ii.uwb.edu.pl/ctld#type> <https://ii.uwb.edu.pl/ctld#double> ."
        ));
        // 1 compound triple, 6 per atom (membership, type, symbol, x, y, z),
        // 5 for the bond, and no descriptor triples without the option.
        assert_eq!(text.lines().count(), 18);
        assert!(!text.contains("formula"));
    }

    #[test]
    fn identifiers_continue_across_molecules() {
        let text = render(
            &[carbonyl(), carbonyl()],
            Profile::Turtle,
            WriteOptions::default(),
        );
        // 2nd compound picks up after _:b4, and the prefix appears once.
        assert!(text.contains("_:b5 a :Compound ."));
        assert!(text.contains("_:b5 :hasBond _:b8 ."));
        assert_eq!(text.matches("@prefix").count(), 1);
    }

    #[test]
    fn oversized_molecule_is_rejected() {
        let mut big = System::new();
        for _ in 0..1000 {
            big.atoms.push(Atom::new(Element::H, [0.0, 0.0, 0.0]));
        }
        let mut out = Vec::new();
        let mut writer = Writer::new(&mut out, Profile::Turtle, WriteOptions::default());
        match writer.write_molecule(&big) {
            Err(Error::TooLarge { atoms, bonds }) => {
                assert_eq!(atoms, 1000);
                assert_eq!(bonds, 0);
            }
            other => panic!("expected size rejection, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn boundary_sized_molecule_still_writes() {
        let mut big = System::new();
        for _ in 0..999 {
            big.atoms.push(Atom::new(Element::H, [0.0, 0.0, 0.0]));
        }
        let mut out = Vec::new();
        let mut writer = Writer::new(&mut out, Profile::NTriples, WriteOptions::default());
        writer.write_molecule(&big).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("_:b1000"));
    }

    #[test]
    fn atom_parity_and_wedge_stereo_are_emitted() {
        let mut system = carbonyl();
        system.atoms[0].parity = AtomParity::AntiClockwise;
        system.bonds[0].stereo = BondStereo::Wedge;

        let options = WriteOptions {
            stereo_drawing: true,
            ..WriteOptions::default()
        };
        let text = render(&[system], Profile::NTriples, options);
        assert!(text.contains(
            "_:b2 <https://ii.uwb.edu.pl/ctld#stereo> \
             \"2\"^^<https://www.w3.org/2001/XMLSchema#decimal> ."
        ));
        // Bond stereo literals carry no datatype suffix.
        assert!(text.contains("_:b4 <https://ii.uwb.edu.pl/ctld#stereo> \"1\" ."));
    }

    #[test]
    fn wedge_stereo_requires_the_drawing_option() {
        let mut system = carbonyl();
        system.bonds[0].stereo = BondStereo::Wedge;
        let text = render(&[system], Profile::Turtle, WriteOptions::default());
        assert!(!text.contains(":stereo"));

        // Unspecified cis/trans is emitted regardless of the option.
        let mut system = carbonyl();
        system.bonds[0].stereo = BondStereo::CisTransUnspecified;
        let text = render(&[system], Profile::Turtle, WriteOptions::default());
        assert!(text.contains("_:b4 :stereo 3 ."));
    }

    #[test]
    fn from_atom_overrides_the_emission_direction() {
        let mut system = carbonyl();
        system.bonds[0].from_atom = Some(1);
        let text = render(&[system], Profile::Turtle, WriteOptions::default());
        assert!(text.contains("_:b4 :firstAtom _:b3 ."));
        assert!(text.contains("_:b4 :secondAtom _:b2 ."));
    }

    #[test]
    fn from_atom_outside_the_bond_is_ignored() {
        let mut system = carbonyl();
        system.bonds[0].from_atom = Some(7);
        let text = render(&[system], Profile::Turtle, WriteOptions::default());
        assert!(text.contains("_:b4 :firstAtom _:b2 ."));
        assert!(text.contains("_:b4 :secondAtom _:b3 ."));
    }

    #[test]
    fn enrichment_block_is_written_on_the_compound() {
        let options = WriteOptions {
            enrich: true,
            ..WriteOptions::default()
        };
        let mut out = Vec::new();
        let mut writer = Writer::new(&mut out, Profile::Turtle, options).with_enrichment(
            Enrichment::new()
                .with_log_p(|_: &System| Some(0.35))
                .with_smiles(|_: &System| Some("C=O\n".to_string())),
        );
        writer.write_molecule(&carbonyl()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("_:b1 :formula \"CO\" ."));
        assert!(text.contains("_:b1 :molecularWeight 28.01 ."));
        assert!(text.contains("_:b1 :logP 0.35 ."));
        // Trailing newline from the generator is stripped.
        assert!(text.contains("_:b1 :smiles \"C=O\" ."));
        assert!(!text.contains(":tpsa"));
    }

    #[test]
    fn triple_bonds_degrade_to_single() {
        let mut system = carbonyl();
        system.bonds[0].order = BondOrder::Triple;
        let text = render(&[system], Profile::Turtle, WriteOptions::default());
        assert!(text.contains("_:b4 :type :single ."));
    }

    #[test]
    fn literal_escaping_is_a_fixed_sequence() {
        // Clean strings pass through untouched.
        assert_eq!(escape_literal("CCO"), "CCO");
        assert_eq!(escape_literal("InChI=1S/CH4/h1H4"), "InChI=1S/CH4/h1H4");
        assert_eq!(escape_literal("C\\N"), "C\\\\N");
        assert_eq!(escape_literal("CCO\n"), "CCO");
        assert_eq!(escape_literal("x\t\r\t\n"), "x");
        assert_eq!(escape_literal("x\r\n\r"), "x\r\n");
        assert_eq!(escape_literal("x\r"), "x");
    }

    #[test]
    fn quantities_trim_trailing_zeros() {
        assert_eq!(format_quantity(28.0101), "28.0101");
        assert_eq!(format_quantity(28.01), "28.01");
        assert_eq!(format_quantity(18.0), "18");
        assert_eq!(format_quantity(0.1), "0.1");
    }
}
