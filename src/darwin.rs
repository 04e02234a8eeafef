use std::io::{Result, Write};

use crate::symbols::{self, Targets};

/// Darwin `-exported_symbols_list` input, one mangled name per line
#[derive(Debug, Clone)]
pub struct SymbolList<'a> {
    progname: &'a str,
}

impl<'a> SymbolList<'a> {
    pub fn new(progname: &'a str) -> Self {
        SymbolList { progname }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "# Auto-generated by {}\n", self.progname)?;
        for entry in symbols::exported_to(Targets::DARWIN) {
            // Mach-O C symbols carry a leading underscore
            writeln!(writer, "_{}", entry.name)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
