//! KISS state table format support
//!
//! This module reads state transition tables in the KISS style used by
//! coursework FSM tools and writes reduced tables back in the same format.
//!
//! Input rows are whitespace separated `input current next output` tuples on
//! lines that contain no `.`. The input column is a binary string and
//! selects the transition slot of the current state. Directives are optional:
//! `.r` names the reset state and `.p`/`.s` are only checked for consistency.
//!
//! ```text
//! .i 1
//! .o 1
//! .p 4
//! .s 2
//! .r a
//! 0 a a 0
//! 1 a b 0
//! 0 b a 0
//! 1 b b 1
//! .e
//! ```

mod error;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

pub use error::{KissError, KissReadError};

use crate::fsm::{StateId, StateTable, Transition};

/// Widest input symbol accepted, in bits
const MAX_INPUT_WIDTH: usize = 16;

/// A transition whose target has not been resolved to a state id yet
struct PendingTransition {
    next: Arc<str>,
    output: Arc<str>,
    line: usize,
}

impl StateTable {
    /// Parse a state table from a KISS reader
    pub fn from_kiss_reader<R: BufRead>(reader: R) -> Result<Self, KissReadError> {
        let mut names: Vec<Arc<str>> = Vec::new();
        let mut lookup: HashMap<Arc<str>, StateId> = HashMap::new();
        let mut slots: Vec<Vec<Option<PendingTransition>>> = Vec::new();
        let mut input_width: Option<usize> = None;
        let mut declared_terms: Option<usize> = None;
        let mut declared_states: Option<usize> = None;
        let mut reset_name: Option<Arc<str>> = None;
        let mut num_rows = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.first().copied() {
                    // Only meaningful ahead of the data rows
                    Some(".p") if names.is_empty() => {
                        declared_terms = parts.get(1).and_then(|s| s.parse().ok());
                    }
                    Some(".s") if names.is_empty() => {
                        declared_states = parts.get(1).and_then(|s| s.parse().ok());
                    }
                    Some(".r") => {
                        reset_name = parts.get(1).map(|s| Arc::from(*s));
                    }
                    _ => {}
                }
                continue;
            }
            if line.contains('.') {
                warn!("skipping line {} with a '.' outside a directive", line_no);
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 4 {
                return Err(KissError::MalformedRow {
                    line: line_no,
                    fields: fields.len(),
                }
                .into());
            }
            let (symbol, current, next, output) = (fields[0], fields[1], fields[2], fields[3]);

            let input = parse_input_symbol(symbol, line_no, &mut input_width)?;

            let state = match lookup.get(current) {
                Some(&id) => id,
                None => {
                    let name: Arc<str> = Arc::from(current);
                    let id = names.len();
                    names.push(Arc::clone(&name));
                    lookup.insert(name, id);
                    slots.push(Vec::new());
                    id
                }
            };

            let row = &mut slots[state];
            if row.len() <= input {
                row.resize_with(input + 1, || None);
            }
            if row[input].is_some() {
                return Err(KissError::DuplicateTransition {
                    line: line_no,
                    state: Arc::from(current),
                    input: Arc::from(symbol),
                }
                .into());
            }
            row[input] = Some(PendingTransition {
                next: Arc::from(next),
                output: Arc::from(output),
                line: line_no,
            });
            num_rows += 1;
        }

        if names.is_empty() {
            return Err(KissError::NoStates.into());
        }

        let input_width = input_width.unwrap_or(1);
        let alphabet = slots.iter().map(Vec::len).max().unwrap_or(0);

        let mut transitions = Vec::with_capacity(names.len());
        for (state, row) in slots.into_iter().enumerate() {
            let mut resolved = Vec::with_capacity(alphabet);
            for input in 0..alphabet {
                let pending = row.get(input).and_then(Option::as_ref).ok_or_else(|| {
                    KissError::MissingTransition {
                        state: Arc::clone(&names[state]),
                        input: Arc::from(format!("{:0width$b}", input, width = input_width)),
                    }
                })?;
                let next = lookup.get(&pending.next).copied().ok_or_else(|| {
                    KissError::UnknownState {
                        line: pending.line,
                        state: Arc::clone(&pending.next),
                    }
                })?;
                resolved.push(Transition {
                    next,
                    output: Arc::clone(&pending.output),
                });
            }
            transitions.push(resolved);
        }

        let reset = match reset_name {
            Some(name) => lookup
                .get(&name)
                .copied()
                .ok_or(KissError::UnknownResetState { state: name })?,
            None => 0,
        };

        if let Some(declared) = declared_terms {
            if declared != num_rows {
                warn!(declared, found = num_rows, ".p does not match the number of rows");
            }
        }
        if let Some(declared) = declared_states {
            if declared != names.len() {
                warn!(declared, found = names.len(), ".s does not match the number of states");
            }
        }
        debug!(
            states = names.len(),
            inputs = alphabet,
            rows = num_rows,
            "state table read"
        );

        Ok(StateTable::from_parts(names, transitions, input_width, reset))
    }

    /// Parse a state table from a string
    pub fn from_kiss_str(s: &str) -> Result<Self, KissReadError> {
        Self::from_kiss_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load a state table from a file
    pub fn from_kiss_file<P: AsRef<Path>>(path: P) -> Result<Self, KissReadError> {
        let file = File::open(path)?;
        Self::from_kiss_reader(BufReader::new(file))
    }

    /// Write this table in KISS format
    ///
    /// The header carries the input/output widths, the row and state counts
    /// and the reset state, followed by one row per transition in state rank
    /// order.
    pub fn write_kiss<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, ".start_kiss")?;
        writeln!(writer, ".i {}", self.input_width().max(1))?;
        writeln!(writer, ".o {}", self.output_width())?;
        writeln!(writer, ".p {}", self.num_transitions())?;
        writeln!(writer, ".s {}", self.num_states())?;
        writeln!(writer, ".r {}", self.name(self.reset_state()))?;

        for state in 0..self.num_states() {
            for (input, transition) in self.transitions(state).iter().enumerate() {
                writeln!(
                    writer,
                    "{} {} {} {}",
                    self.format_input(input),
                    self.name(state),
                    self.name(transition.next()),
                    transition.output()
                )?;
            }
        }

        writeln!(writer, ".end_kiss")
    }

    /// Render this table in KISS format
    pub fn to_kiss_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_kiss(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Write this table to a KISS file
    pub fn to_kiss_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_kiss(&mut writer)?;
        writer.flush()
    }
}

/// Decode a binary input symbol, fixing the table's input width on first use
fn parse_input_symbol(
    symbol: &str,
    line: usize,
    width: &mut Option<usize>,
) -> Result<usize, KissError> {
    if !symbol.chars().all(|c| c == '0' || c == '1') {
        return Err(KissError::InvalidInputSymbol {
            line,
            symbol: Arc::from(symbol),
        });
    }
    if symbol.len() > MAX_INPUT_WIDTH {
        return Err(KissError::InputTooWide {
            line,
            width: symbol.len(),
        });
    }
    match *width {
        Some(expected) if expected != symbol.len() => {
            return Err(KissError::InputWidthMismatch {
                line,
                expected,
                actual: symbol.len(),
            })
        }
        Some(_) => {}
        None => *width = Some(symbol.len()),
    }
    usize::from_str_radix(symbol, 2).map_err(|_| KissError::InvalidInputSymbol {
        line,
        symbol: Arc::from(symbol),
    })
}
