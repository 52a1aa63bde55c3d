//! Two-level minimization with the Quine-McCluskey method
//!
//! A single-output [`TruthTable`] is minimized in four stages:
//!
//! 1. ON and don't-care rows are expanded into minterms ([`MintermSets`])
//! 2. Implicants are merged pairwise until only primes remain ([`PrimeTable`])
//! 3. Primes that are the only cover of a required minterm are taken as
//!    essential ([`select_essentials`])
//! 4. The rest of the chart is covered with Petrick's method ([`solve_cover`])
//!
//! Every stage enumerates minterms, so the number of inputs is bounded by
//! [`QmConfig::max_inputs`].
//!
//! # Examples
//!
//! ```
//! use logic_cad::{PLAReader, TruthTable};
//! use logic_cad::qm;
//!
//! let pla = ".i 2\n.o 1\n.ilb a b\n.p 3\n00 1\n01 1\n11 1\n.e\n";
//! let table = TruthTable::from_pla_string(pla).unwrap();
//! let result = qm::minimize(&table).unwrap();
//!
//! let cover: Vec<String> = result.cover().iter().map(|i| i.to_string()).collect();
//! assert_eq!(cover, vec!["-1", "0-"]);
//! assert_eq!(result.sum_of_products(), "b + a'");
//! ```

mod essential;
mod implicant;
mod minterm;
mod petrick;
mod primes;

use std::collections::BTreeSet;
use std::io::Write;

use itertools::Itertools;
use tracing::debug;

use crate::error::CadError;
use crate::pla::{PLAWriteError, PLAWriter, Preamble, TruthTable};

pub use essential::{select_essentials, EssentialSelection};
pub use implicant::Implicant;
pub use minterm::MintermSets;
pub use petrick::solve_cover;
pub use primes::{CoverMap, PrimeTable};

/// Index of a complete input assignment, first input as the most significant bit
pub type Minterm = u32;

/// Configuration for Quine-McCluskey minimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QmConfig {
    /// Largest number of inputs accepted
    pub max_inputs: usize,
}

impl Default for QmConfig {
    fn default() -> Self {
        QmConfig { max_inputs: 24 }
    }
}

impl QmConfig {
    /// Configuration with the default input limit
    pub fn new() -> Self {
        Self::default()
    }
}

/// A minimized sum-of-products cover and the intermediate results behind it
#[derive(Debug, Clone)]
pub struct Minimization {
    preamble: Preamble,
    minterms: MintermSets,
    primes: CoverMap,
    essentials: BTreeSet<Implicant>,
    selected: BTreeSet<Implicant>,
    cover: Vec<Implicant>,
}

impl Minimization {
    /// Cover terms in lexicographic order
    pub fn cover(&self) -> &[Implicant] {
        &self.cover
    }

    /// All prime implicants with the minterms they cover
    pub fn primes(&self) -> &CoverMap {
        &self.primes
    }

    /// Essential prime implicants
    pub fn essentials(&self) -> &BTreeSet<Implicant> {
        &self.essentials
    }

    /// Non-essential primes chosen to cover the rest of the chart
    pub fn selected(&self) -> &BTreeSet<Implicant> {
        &self.selected
    }

    /// ON-set minterms the cover must include
    pub fn required_minterms(&self) -> &BTreeSet<Minterm> {
        &self.minterms.required
    }

    /// Minterms marked don't-care and not also ON
    pub fn dont_care_minterms(&self) -> &BTreeSet<Minterm> {
        &self.minterms.dont_care
    }

    /// Header of the source table
    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    /// Whether the cover evaluates to 1 for the given minterm
    pub fn evaluate(&self, minterm: Minterm) -> bool {
        self.cover.iter().any(|implicant| implicant.matches(minterm))
    }

    /// Render the cover as an expression such as `ab' + c`
    ///
    /// An empty cover is the constant `0`.
    pub fn sum_of_products(&self) -> String {
        if self.cover.is_empty() {
            return "0".to_string();
        }
        let labels = self.preamble.input_names();
        self.cover
            .iter()
            .map(|implicant| implicant.to_product(&labels))
            .join(" + ")
    }
}

impl PLAWriter for Minimization {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        self.preamble.write(writer, self.cover.len())?;
        for implicant in &self.cover {
            writeln!(writer, "{} 1", implicant)?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }
}

/// Minimize a truth table with the default configuration
pub fn minimize(table: &TruthTable) -> Result<Minimization, CadError> {
    minimize_with_config(table, &QmConfig::default())
}

/// Minimize a truth table
pub fn minimize_with_config(
    table: &TruthTable,
    config: &QmConfig,
) -> Result<Minimization, CadError> {
    let num_inputs = table.num_inputs();
    if num_inputs > config.max_inputs || num_inputs >= Minterm::BITS as usize {
        return Err(CadError::TooManyInputs {
            inputs: num_inputs,
            max: config.max_inputs,
        });
    }

    let minterms = MintermSets::from_table(table);
    debug!(
        required = minterms.required.len(),
        dont_care = minterms.dont_care.len(),
        "minterms expanded"
    );

    let primes = PrimeTable::new(&minterms.all(), num_inputs).reduce();
    debug!(
        "prime implicants: {}",
        primes.keys().map(Implicant::to_string).join(" ")
    );

    let EssentialSelection {
        essentials,
        remaining,
    } = select_essentials(&primes, &minterms.required);
    debug!(
        "essential primes: {}",
        essentials.iter().map(Implicant::to_string).join(" ")
    );

    let selected = solve_cover(&remaining);
    debug!(
        uncovered = remaining.len(),
        "selected: {}",
        selected.iter().map(Implicant::to_string).join(" ")
    );

    let cover: Vec<Implicant> = essentials.union(&selected).cloned().collect();

    Ok(Minimization {
        preamble: table.preamble().clone(),
        minterms,
        primes,
        essentials,
        selected,
        cover,
    })
}

#[cfg(test)]
mod tests;
