//! Graphviz output
//!
//! Types that can be visualized implement [`ToDot`] by producing the complete
//! graph text; writing to files and writers is shared.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Conversion to a Graphviz `digraph` description
pub trait ToDot {
    /// Render the whole graph as DOT text
    fn to_dot(&self) -> String;

    /// Write the DOT text to any writer
    fn write_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.to_dot().as_bytes())
    }

    /// Write the DOT text to a file
    fn to_dot_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_dot(&mut writer)?;
        writer.flush()
    }
}
