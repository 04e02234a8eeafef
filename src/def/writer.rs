use std::io::{Result, Write};

use super::{DefFlavor, ModuleDef};

/// Column width the export names are padded to
const NAME_WIDTH: usize = 20;

impl ModuleDef {
    /// Write out the .def file
    pub fn write_to<W: Write>(&self, progname: &str, writer: &mut W) -> Result<()> {
        writeln!(writer, "; Auto-generated by {}\n", progname)?;
        if self.flavor == DefFlavor::Os2 {
            writeln!(writer, "LIBRARY {}", self.import_name)?;
        }
        for directive in self.directives {
            writeln!(writer, "{}", directive)?;
        }
        writeln!(writer, "EXPORTS\n")?;
        for export in &self.exports {
            writeln!(
                writer,
                "{:<width$} @{}",
                export.name,
                export.ordinal,
                width = self.name_width()
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    // OS/2 names carry the `_` outside the padded field
    fn name_width(&self) -> usize {
        match self.flavor {
            DefFlavor::Win32 => NAME_WIDTH,
            DefFlavor::Os2 => NAME_WIDTH + 1,
        }
    }
}
