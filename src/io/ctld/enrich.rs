//! Optional enrichment collaborators for the writer.
//!
//! Formula, molecular weight and exact mass are computed directly from the
//! molecule; everything else (partition coefficient, polar surface area,
//! molar refractivity, line notations) needs an external model and is only
//! emitted when a collaborator has been registered for it.

use crate::model::system::System;

/// Computes one numeric descriptor of a molecule.
pub trait Descriptor {
    fn evaluate(&self, system: &System) -> Option<f64>;
}

impl<F> Descriptor for F
where
    F: Fn(&System) -> Option<f64>,
{
    fn evaluate(&self, system: &System) -> Option<f64> {
        self(system)
    }
}

/// Produces one textual line notation (SMILES, InChI, ...) of a molecule.
pub trait LineNotation {
    fn generate(&self, system: &System) -> Option<String>;
}

impl<F> LineNotation for F
where
    F: Fn(&System) -> Option<String>,
{
    fn generate(&self, system: &System) -> Option<String> {
        self(system)
    }
}

/// Registry of enrichment collaborators. Empty by default; slots left empty
/// simply suppress the corresponding statements in the output.
#[derive(Default)]
pub struct Enrichment {
    pub(crate) log_p: Option<Box<dyn Descriptor>>,
    pub(crate) tpsa: Option<Box<dyn Descriptor>>,
    pub(crate) molar_refractivity: Option<Box<dyn Descriptor>>,
    pub(crate) smiles: Option<Box<dyn LineNotation>>,
    pub(crate) inchi: Option<Box<dyn LineNotation>>,
    pub(crate) inchikey: Option<Box<dyn LineNotation>>,
}

impl Enrichment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_p(mut self, model: impl Descriptor + 'static) -> Self {
        self.log_p = Some(Box::new(model));
        self
    }

    pub fn with_tpsa(mut self, model: impl Descriptor + 'static) -> Self {
        self.tpsa = Some(Box::new(model));
        self
    }

    pub fn with_molar_refractivity(mut self, model: impl Descriptor + 'static) -> Self {
        self.molar_refractivity = Some(Box::new(model));
        self
    }

    pub fn with_smiles(mut self, gen: impl LineNotation + 'static) -> Self {
        self.smiles = Some(Box::new(gen));
        self
    }

    pub fn with_inchi(mut self, gen: impl LineNotation + 'static) -> Self {
        self.inchi = Some(Box::new(gen));
        self
    }

    pub fn with_inchikey(mut self, gen: impl LineNotation + 'static) -> Self {
        self.inchikey = Some(Box::new(gen));
        self
    }
}

impl std::fmt::Debug for Enrichment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enrichment")
            .field("log_p", &self.log_p.is_some())
            .field("tpsa", &self.tpsa.is_some())
            .field("molar_refractivity", &self.molar_refractivity.is_some())
            .field("smiles", &self.smiles.is_some())
            .field("inchi", &self.inchi.is_some())
            .field("inchikey", &self.inchikey.is_some())
            .finish()
    }
}
