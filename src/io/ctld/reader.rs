//! Reader for the chemical triple notation.
//!
//! Parsing is a two-pass affair over the buffered document. Pass one walks
//! every line and discovers membership: compound declarations, then the
//! atom and bond local names each compound owns. Pass two collects the
//! attribute statements (symbol, coordinates, stereo parity for atoms;
//! endpoints and order for bonds) into side tables keyed by local name.
//! Materialization then builds one [`System`] per compound on demand, so a
//! document holding several compounds yields several molecules.
//!
//! An atom that never received all of symbol, x, y and z is dropped
//! silently. A bond whose endpoint reference does not resolve to a read
//! atom fails the whole molecule.

use std::collections::HashMap;
use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, warn};

use super::vocab::{self, Spelling, Terminator};
use crate::io::error::Error;
use crate::io::ReadOptions;
use crate::model::atom::Atom;
use crate::model::system::{Bond, System};
use crate::model::types::{AtomParity, BondOrder, Element};

/// Reads every molecule from `input` and returns them in document order.
pub fn read<R: BufRead>(input: R, options: ReadOptions) -> Result<Vec<System>, Error> {
    let mut reader = Reader::new(input, options);
    let mut systems = Vec::new();
    while let Some(system) = reader.next_molecule()? {
        systems.push(system);
    }
    Ok(systems)
}

/// Streaming session over one document. The underlying input is consumed
/// and parsed on the first [`next_molecule`](Reader::next_molecule) call;
/// later calls only materialize the next compound.
pub struct Reader<R> {
    input: R,
    options: ReadOptions,
    parsed: Option<Parsed>,
    cursor: usize,
}

struct Parsed {
    compounds: Vec<CompoundRecord>,
    attrs: AttrTable,
}

/// One compound and the local names it owns, in first-mention order.
struct CompoundRecord {
    name: String,
    atoms: Vec<String>,
    bonds: Vec<String>,
}

impl CompoundRecord {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            atoms: Vec::new(),
            bonds: Vec::new(),
        }
    }
}

/// Attribute statements gathered for one local name. Raw strings; nothing
/// is interpreted until materialization. First value wins throughout.
#[derive(Default)]
struct Attrs {
    symbol: Option<String>,
    x: Option<String>,
    y: Option<String>,
    z: Option<String>,
    stereo: Option<String>,
    first: Option<String>,
    second: Option<String>,
    order: Option<String>,
}

/// Keyed by `(scope, local name)`. The scope is 0 for unsorted input; with
/// the sorted option the scope is the index of the compound being read, so
/// local names may repeat across compounds.
type AttrTable = HashMap<(usize, String), Attrs>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    AtomSubject,
    BondSubject,
    Symbol,
    X,
    Y,
    Z,
    Stereo,
    First,
    Second,
    Order,
}

const PASS2_ROLES: [(Spelling, Slot); 10] = [
    (vocab::ATOM_TYPE, Slot::AtomSubject),
    (vocab::BOND_TYPE, Slot::BondSubject),
    (vocab::SYMBOL, Slot::Symbol),
    (vocab::X_COORDINATE, Slot::X),
    (vocab::Y_COORDINATE, Slot::Y),
    (vocab::Z_COORDINATE, Slot::Z),
    (vocab::STEREO, Slot::Stereo),
    (vocab::FIRST_ATOM, Slot::First),
    (vocab::SECOND_ATOM, Slot::Second),
    (vocab::BOND_ORDER, Slot::Order),
];

impl<R: BufRead> Reader<R> {
    pub fn new(input: R, options: ReadOptions) -> Self {
        Self {
            input,
            options,
            parsed: None,
            cursor: 0,
        }
    }

    /// Materializes the next compound of the document, or `Ok(None)` once
    /// every compound has been returned.
    pub fn next_molecule(&mut self) -> Result<Option<System>, Error> {
        self.ensure_parsed()?;
        let total = self.parsed.as_ref().map_or(0, |p| p.compounds.len());
        if self.cursor >= total {
            return Ok(None);
        }
        let idx = self.cursor;
        self.cursor += 1;
        let Some(parsed) = self.parsed.as_ref() else {
            return Ok(None);
        };
        let scope = if self.options.sorted { idx } else { 0 };
        materialize(&parsed.compounds[idx], &parsed.attrs, scope).map(Some)
    }

    fn ensure_parsed(&mut self) -> Result<(), Error> {
        if self.parsed.is_some() {
            return Ok(());
        }
        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            lines.push(buf.trim_end_matches(['\n', '\r']).to_string());
        }
        let (compounds, index) = discover_membership(&lines);
        let attrs = collect_attributes(&lines, &index, self.options.sorted);
        self.parsed = Some(Parsed { compounds, attrs });
        Ok(())
    }
}

/// Pass one. A compound is registered the first time it appears as the
/// subject of a type declaration or of a membership statement; `hasAtom`
/// and `hasBond` then assign local names to the compound named by the
/// statement subject, or to the open subject block when the line carries
/// none. A name's first mention decides its owner for good.
fn discover_membership(lines: &[String]) -> (Vec<CompoundRecord>, HashMap<String, usize>) {
    let mut compounds: Vec<CompoundRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut atom_owner: HashMap<String, usize> = HashMap::new();
    let mut bond_owner: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let subject = vocab::subject_token(line);
        let atom_membership = vocab::HAS_ATOM.find(line);
        let bond_membership = vocab::HAS_BOND.find(line);

        if vocab::COMPOUND_TYPE.matches(line)
            || atom_membership.is_some()
            || bond_membership.is_some()
        {
            if let Some(name) = subject {
                current = Some(register(&mut compounds, &mut index, name));
            }
        }

        if let Some((at, len)) = atom_membership {
            match current {
                Some(ci) => {
                    for name in vocab::local_names_after(line, at + len) {
                        if !atom_owner.contains_key(name) {
                            atom_owner.insert(name.to_string(), ci);
                            compounds[ci].atoms.push(name.to_string());
                        }
                    }
                }
                None => debug!(%line, "atom membership outside any compound ignored"),
            }
        }

        if let Some((at, len)) = bond_membership {
            match current {
                Some(ci) => {
                    for name in vocab::local_names_after(line, at + len) {
                        if !bond_owner.contains_key(name) {
                            bond_owner.insert(name.to_string(), ci);
                            compounds[ci].bonds.push(name.to_string());
                        }
                    }
                }
                None => debug!(%line, "bond membership outside any compound ignored"),
            }
        }

        if vocab::terminator(line) == Terminator::Dot {
            current = None;
        }
    }

    (compounds, index)
}

fn register(
    compounds: &mut Vec<CompoundRecord>,
    index: &mut HashMap<String, usize>,
    name: &str,
) -> usize {
    if let Some(&ci) = index.get(name) {
        return ci;
    }
    compounds.push(CompoundRecord::new(name));
    index.insert(name.to_string(), compounds.len() - 1);
    compounds.len() - 1
}

/// Pass two. Every role is checked against every line independently, so a
/// `;`-continued line holding several statements contributes them all. The
/// qualified rdf-type predicate ends in `#type>` just like the bond-order
/// predicate; such lines act as subject markers, never as order values.
/// Atom and bond subject blocks are tracked independently.
fn collect_attributes(
    lines: &[String],
    compound_index: &HashMap<String, usize>,
    sorted: bool,
) -> AttrTable {
    let mut attrs: AttrTable = HashMap::new();
    let mut scope = 0usize;
    let mut current_atom: Option<String> = None;
    let mut current_bond: Option<String> = None;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let subject = vocab::subject_token(line).map(str::to_string);

        if sorted {
            if let Some(&ci) = subject.as_deref().and_then(|s| compound_index.get(s)) {
                scope = ci;
            }
        }

        for (role, slot) in PASS2_ROLES {
            let Some((at, len)) = role.find(line) else {
                continue;
            };
            match slot {
                Slot::AtomSubject => {
                    if subject.is_some() {
                        current_atom = subject.clone();
                    }
                }
                Slot::BondSubject => {
                    if subject.is_some() {
                        current_bond = subject.clone();
                    }
                }
                Slot::Symbol | Slot::X | Slot::Y | Slot::Z | Slot::Stereo => {
                    record_value(line, at, len, &subject, &mut current_atom, scope, &mut attrs, slot);
                }
                Slot::First | Slot::Second => {
                    record_value(line, at, len, &subject, &mut current_bond, scope, &mut attrs, slot);
                }
                Slot::Order => {
                    // The qualified rdf-type predicate also ends in `#type>`.
                    if line.contains(vocab::RDF_NS_TYPE) {
                        continue;
                    }
                    record_value(line, at, len, &subject, &mut current_bond, scope, &mut attrs, slot);
                }
            }
        }

        if vocab::terminator(line) == Terminator::Dot {
            current_atom = None;
            current_bond = None;
        }
    }

    attrs
}

#[allow(clippy::too_many_arguments)]
fn record_value(
    line: &str,
    at: usize,
    len: usize,
    subject: &Option<String>,
    current: &mut Option<String>,
    scope: usize,
    attrs: &mut AttrTable,
    slot: Slot,
) {
    if subject.is_some() {
        *current = subject.clone();
    }
    let Some(name) = subject.clone().or_else(|| current.clone()) else {
        debug!(%line, "value statement outside any subject block ignored");
        return;
    };
    let Some(value) = vocab::extract_value(line, at, len) else {
        return;
    };
    let entry = attrs.entry((scope, name)).or_default();
    let field = match slot {
        Slot::Symbol => &mut entry.symbol,
        Slot::X => &mut entry.x,
        Slot::Y => &mut entry.y,
        Slot::Z => &mut entry.z,
        Slot::Stereo => &mut entry.stereo,
        Slot::First => &mut entry.first,
        Slot::Second => &mut entry.second,
        Slot::Order => &mut entry.order,
        Slot::AtomSubject | Slot::BondSubject => return,
    };
    if field.is_none() {
        *field = Some(value);
    }
}

fn materialize(record: &CompoundRecord, attrs: &AttrTable, scope: usize) -> Result<System, Error> {
    let mut system = System::new();
    system.dimension = 2;

    // Positions are dense over the atoms actually kept, so endpoint
    // references into dropped atoms fail resolution below.
    let mut atom_index: HashMap<&str, usize> = HashMap::new();

    for name in &record.atoms {
        let Some(a) = attrs.get(&(scope, name.clone())) else {
            debug!(compound = %record.name, atom = %name, "atom without statements dropped");
            continue;
        };
        let (Some(symbol), Some(x), Some(y), Some(z)) = (&a.symbol, &a.x, &a.y, &a.z) else {
            debug!(compound = %record.name, atom = %name, "incomplete atom dropped");
            continue;
        };
        let element = match Element::from_str(symbol) {
            Ok(element) => element,
            Err(_) => {
                debug!(atom = %name, %symbol, "unknown element symbol, atom dropped");
                continue;
            }
        };
        let position = [decode_coord(x), decode_coord(y), decode_coord(z)];
        let parity = a.stereo.as_deref().map_or(AtomParity::None, decode_parity);
        atom_index.insert(name.as_str(), system.atoms.len());
        system.atoms.push(Atom::with_parity(element, position, parity));
    }

    for name in &record.bonds {
        let Some(a) = attrs.get(&(scope, name.clone())) else {
            warn!(compound = %record.name, bond = %name, "bond without statements skipped");
            continue;
        };
        let (Some(first), Some(second)) = (&a.first, &a.second) else {
            warn!(compound = %record.name, bond = %name, "bond missing an endpoint skipped");
            continue;
        };
        let begin = resolve_endpoint(&atom_index, name, first)?;
        let end = resolve_endpoint(&atom_index, name, second)?;
        let order = a.order.as_deref().map_or(BondOrder::Single, decode_order);
        system.bonds.push(Bond::new(begin, end, order));
    }

    Ok(system)
}

fn resolve_endpoint(
    atom_index: &HashMap<&str, usize>,
    bond: &str,
    endpoint: &str,
) -> Result<usize, Error> {
    match atom_index.get(endpoint) {
        Some(&idx) => Ok(idx),
        None => {
            warn!(%bond, %endpoint, "bond endpoint does not resolve to a read atom");
            Err(Error::UnresolvedEndpoint {
                bond: bond.to_string(),
                endpoint: endpoint.to_string(),
            })
        }
    }
}

fn decode_coord(value: &str) -> f64 {
    match value.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            debug!(%value, "unparseable coordinate treated as zero");
            0.0
        }
    }
}

fn decode_parity(value: &str) -> AtomParity {
    match value.trim() {
        "1" => AtomParity::Clockwise,
        "2" => AtomParity::AntiClockwise,
        "3" => AtomParity::Unknown,
        _ => AtomParity::None,
    }
}

fn decode_order(value: &str) -> BondOrder {
    let terms = [
        (vocab::TERM_SINGLE, BondOrder::Single),
        (vocab::TERM_DOUBLE, BondOrder::Double),
        (vocab::TERM_AROMATIC, BondOrder::Aromatic),
    ];
    for (term, order) in terms {
        if value == term.compact || value == term.qualified {
            return order;
        }
    }
    debug!(term = %value, "unrecognized bond order term, defaulting to single");
    BondOrder::Single
}
