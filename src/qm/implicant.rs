//! Product terms over a fixed number of inputs

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::pla::{format_literals, PLAError};

use super::minterm::expand;
use super::Minterm;

/// A product term: one literal per input, `None` meaning the input is absent
///
/// The derived ordering matches the ordering of the `-`/`0`/`1` string form
/// since `None < Some(false) < Some(true)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    literals: Vec<Option<bool>>,
}

impl Implicant {
    /// Create an implicant from its literals (most significant input first)
    pub fn new(literals: Vec<Option<bool>>) -> Self {
        Implicant { literals }
    }

    /// The implicant covering exactly one minterm
    pub fn from_minterm(minterm: Minterm, num_inputs: usize) -> Self {
        let literals = (0..num_inputs)
            .map(|i| Some(minterm >> (num_inputs - 1 - i) & 1 == 1))
            .collect();
        Implicant { literals }
    }

    pub fn literals(&self) -> &[Option<bool>] {
        &self.literals
    }

    pub fn num_inputs(&self) -> usize {
        self.literals.len()
    }

    /// Number of positive literals, used to group implicants
    pub fn weight(&self) -> usize {
        self.literals.iter().filter(|l| **l == Some(true)).count()
    }

    /// Number of literals that are not `-`
    pub fn literal_count(&self) -> usize {
        self.literals.iter().filter(|l| l.is_some()).count()
    }

    /// Combine two implicants that differ in exactly one specified position
    ///
    /// Both must have `-` in the same positions. Returns `None` otherwise.
    pub fn merge(&self, other: &Implicant) -> Option<Implicant> {
        if self.literals.len() != other.literals.len() {
            return None;
        }

        let mut differing = None;
        for (i, (a, b)) in self.literals.iter().zip(&other.literals).enumerate() {
            match (a, b) {
                (Some(x), Some(y)) if x != y => {
                    if differing.is_some() {
                        return None;
                    }
                    differing = Some(i);
                }
                (Some(_), None) | (None, Some(_)) => return None,
                _ => {}
            }
        }

        let position = differing?;
        let mut literals = self.literals.clone();
        literals[position] = None;
        Some(Implicant { literals })
    }

    /// Whether the minterm satisfies every literal
    pub fn matches(&self, minterm: Minterm) -> bool {
        let n = self.literals.len();
        self.literals.iter().enumerate().all(|(i, lit)| match lit {
            None => true,
            Some(value) => (minterm >> (n - 1 - i) & 1 == 1) == *value,
        })
    }

    /// Every minterm this implicant covers, in ascending order
    pub fn minterms(&self) -> Vec<Minterm> {
        let mut result = expand(&self.literals);
        result.sort_unstable();
        result
    }

    /// Render as a product such as `ab'c`
    ///
    /// An implicant with no literals is the constant `1`.
    pub fn to_product(&self, labels: &[Arc<str>]) -> String {
        let product: String = self
            .literals
            .iter()
            .zip(labels)
            .filter_map(|(lit, label)| match lit {
                Some(true) => Some(label.to_string()),
                Some(false) => Some(format!("{}'", label)),
                None => None,
            })
            .collect();
        if product.is_empty() {
            "1".to_string()
        } else {
            product
        }
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_literals(&self.literals))
    }
}

impl FromStr for Implicant {
    type Err = PLAError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literals = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(PLAError::InvalidInputCharacter {
                    character: ch,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Implicant { literals })
    }
}
