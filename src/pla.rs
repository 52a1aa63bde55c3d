//! PLA (Programmable Logic Array) format support
//!
//! This module reads single-output PLA truth tables into a [`TruthTable`] and
//! provides the [`PLAReader`] / [`PLAWriter`] traits shared by the truth table
//! and the minimized cover produced by [`crate::qm`].
//!
//! Every line ahead of the `.p` directive is kept verbatim in the table's
//! [`Preamble`], so a minimized file reproduces the original header with only
//! the product-term count rewritten.

mod error;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

pub use error::{PLAError, PLAReadError, PLAWriteError};

/// Meaning of a truth table row's output value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Output is 1 (`1`)
    On,
    /// Output is unconstrained (`-` or `2`)
    DontCare,
    /// Output is 0 (`0`)
    Off,
}

impl RowKind {
    fn as_char(self) -> char {
        match self {
            RowKind::On => '1',
            RowKind::DontCare => '-',
            RowKind::Off => '0',
        }
    }
}

/// One row of a truth table: an input cube and its output value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    pub(crate) inputs: Arc<[Option<bool>]>,
    pub(crate) kind: RowKind,
}

impl TruthRow {
    /// Get the inputs of this row
    ///
    /// Returns a slice where each element represents an input variable:
    /// - `Some(false)` - input must be 0
    /// - `Some(true)` - input must be 1
    /// - `None` - don't care (can be 0 or 1)
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs
    }

    /// Get the output value of this row
    pub fn kind(&self) -> RowKind {
        self.kind
    }
}

/// Render literals as a `0`/`1`/`-` string
pub(crate) fn format_literals(literals: &[Option<bool>]) -> String {
    literals
        .iter()
        .map(|lit| match lit {
            Some(false) => '0',
            Some(true) => '1',
            None => '-',
        })
        .collect()
}

/// Header information of a PLA file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    num_inputs: usize,
    input_labels: Vec<Arc<str>>,
    output_labels: Vec<Arc<str>>,
    lines: Vec<String>,
}

impl Preamble {
    /// Number of input variables
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Input labels from `.ilb`, empty if none were given
    pub fn input_labels(&self) -> &[Arc<str>] {
        &self.input_labels
    }

    /// Output labels from `.ob`, empty if none were given
    pub fn output_labels(&self) -> &[Arc<str>] {
        &self.output_labels
    }

    /// Header lines preceding `.p`, as read
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Input names, using `x0`, `x1`, ... when no labels were given
    pub fn input_names(&self) -> Vec<Arc<str>> {
        if self.input_labels.len() == self.num_inputs {
            self.input_labels.clone()
        } else {
            (0..self.num_inputs)
                .map(|i| Arc::from(format!("x{}", i).as_str()))
                .collect()
        }
    }

    /// Write the header followed by a `.p` directive with the given term count
    ///
    /// Tables that were not read from a file get a synthesized header.
    pub(crate) fn write<W: Write>(&self, writer: &mut W, num_terms: usize) -> io::Result<()> {
        if self.lines.is_empty() {
            writeln!(writer, ".i {}", self.num_inputs)?;
            writeln!(writer, ".o 1")?;
            if !self.input_labels.is_empty() {
                writeln!(writer, ".ilb {}", self.input_labels.join(" "))?;
            }
            if !self.output_labels.is_empty() {
                writeln!(writer, ".ob {}", self.output_labels.join(" "))?;
            }
        } else {
            for line in &self.lines {
                writeln!(writer, "{}", line)?;
            }
        }
        writeln!(writer, ".p {}", num_terms)
    }
}

/// A single-output truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    preamble: Preamble,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Create an empty table over `num_inputs` variables
    pub fn new(num_inputs: usize) -> Self {
        TruthTable {
            preamble: Preamble {
                num_inputs,
                ..Preamble::default()
            },
            rows: Vec::new(),
        }
    }

    /// Create an empty table with named inputs
    pub fn with_labels(labels: &[&str]) -> Self {
        let mut table = Self::new(labels.len());
        table.preamble.input_labels = labels.iter().map(|s| Arc::from(*s)).collect();
        table
    }

    /// Append a row
    ///
    /// # Panics
    ///
    /// Panics if the row width differs from the number of inputs.
    pub fn add_row(&mut self, inputs: &[Option<bool>], kind: RowKind) {
        assert_eq!(
            inputs.len(),
            self.preamble.num_inputs,
            "row width must match the number of inputs"
        );
        self.rows.push(TruthRow {
            inputs: inputs.into(),
            kind,
        });
    }

    /// Number of input variables
    pub fn num_inputs(&self) -> usize {
        self.preamble.num_inputs
    }

    /// Header information
    pub fn preamble(&self) -> &Preamble {
        &self.preamble
    }

    /// All rows in file order
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// Trait for types that support PLA serialization (writing)
pub trait PLAWriter {
    /// Write this value in PLA format
    ///
    /// This is the core serialization method; `to_pla_string` and
    /// `to_pla_file` delegate to it.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError>;

    /// Convert to a PLA format string
    fn to_pla_string(&self) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write to a PLA file
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Trait for types that support PLA deserialization (reading/parsing)
pub trait PLAReader: Sized {
    /// Parse from a PLA format reader
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError>;

    /// Parse from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_cad::{PLAReader, TruthTable};
    ///
    /// let pla = ".i 2\n.o 1\n.p 1\n01 1\n.e\n";
    /// let table = TruthTable::from_pla_string(pla).unwrap();
    /// assert_eq!(table.num_inputs(), 2);
    /// assert_eq!(table.num_rows(), 1);
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load from a PLA format file
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

impl PLAReader for TruthTable {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut input_labels: Vec<Arc<str>> = Vec::new();
        let mut output_labels: Vec<Arc<str>> = Vec::new();
        let mut header: Vec<String> = Vec::new();
        let mut rows = Vec::new();
        let mut in_data = false;

        for (index, line) in reader.lines().enumerate() {
            let raw = line?;
            let raw = raw.trim_end_matches('\r');
            let line_no = index + 1;
            let line = raw.trim();

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.first().copied() {
                    Some(".e") | Some(".end") => break,
                    Some(".p") => {
                        in_data = true;
                        continue;
                    }
                    _ if in_data => continue,
                    Some(".i") if num_inputs.is_none() => {
                        let value = parts.get(1).copied().unwrap_or("");
                        let n = value.parse().map_err(|_| PLAError::InvalidInputDirective {
                            value: Arc::from(value),
                        })?;
                        num_inputs = Some(n);
                    }
                    Some(".o") => {
                        let value = parts.get(1).copied().unwrap_or("");
                        let n: usize =
                            value.parse().map_err(|_| PLAError::InvalidOutputDirective {
                                value: Arc::from(value),
                            })?;
                        if n != 1 {
                            return Err(PLAError::UnsupportedOutputCount { count: n }.into());
                        }
                    }
                    Some(".ilb") => {
                        input_labels = parts.iter().skip(1).map(|s| Arc::from(*s)).collect();
                    }
                    Some(".ob") => {
                        output_labels = parts.iter().skip(1).map(|s| Arc::from(*s)).collect();
                    }
                    _ => {}
                }
                header.push(raw.to_string());
                continue;
            }

            if !in_data {
                header.push(raw.to_string());
                continue;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let width = *num_inputs
                .get_or_insert_with(|| line.split_whitespace().next().map_or(0, str::len));
            rows.push(parse_row(line, line_no, width)?);
        }

        if !in_data {
            warn!("no .p directive found, the table has no rows");
        }

        // Without `.i` or rows the input labels give the width
        let num_inputs = num_inputs.unwrap_or(input_labels.len());
        if !input_labels.is_empty() && input_labels.len() != num_inputs {
            return Err(PLAError::LabelCountMismatch {
                label_type: Arc::from("input"),
                expected: num_inputs,
                actual: input_labels.len(),
            }
            .into());
        }
        if output_labels.len() > 1 {
            return Err(PLAError::LabelCountMismatch {
                label_type: Arc::from("output"),
                expected: 1,
                actual: output_labels.len(),
            }
            .into());
        }

        debug!(inputs = num_inputs, rows = rows.len(), "truth table read");

        Ok(TruthTable {
            preamble: Preamble {
                num_inputs,
                input_labels,
                output_labels,
                lines: header,
            },
            rows,
        })
    }
}

/// Parse a data row such as `01-1 1` or `01-1 -`
///
/// Whitespace inside the row is ignored; the last character is the output.
fn parse_row(line: &str, line_no: usize, width: usize) -> Result<TruthRow, PLAError> {
    let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() != width + 1 {
        return Err(PLAError::CubeDimensionMismatch {
            line: line_no,
            expected_inputs: width,
            actual_inputs: chars.len().saturating_sub(1),
        });
    }

    let inputs = chars[..width]
        .iter()
        .enumerate()
        .map(|(position, &ch)| match ch {
            '0' => Ok(Some(false)),
            '1' => Ok(Some(true)),
            '-' | '~' | 'x' | 'X' => Ok(None),
            _ => Err(PLAError::InvalidInputCharacter {
                character: ch,
                position,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let kind = match chars[width] {
        '1' | '4' => RowKind::On,
        '-' | '2' => RowKind::DontCare,
        '0' | '3' | '~' => RowKind::Off,
        ch => {
            return Err(PLAError::InvalidOutputCharacter {
                character: ch,
                line: line_no,
            })
        }
    };

    Ok(TruthRow {
        inputs: inputs.into(),
        kind,
    })
}

impl PLAWriter for TruthTable {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        self.preamble.write(writer, self.rows.len())?;
        for row in &self.rows {
            writeln!(
                writer,
                "{} {}",
                format_literals(&row.inputs),
                row.kind.as_char()
            )?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }
}
