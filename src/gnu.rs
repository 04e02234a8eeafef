use std::io::{Result, Write};

use crate::symbols::{self, Targets};

/// GNU binutils ld version script
///
/// Lists every GNU-targeted symbol as `global` and hides everything else
/// through the `local: *` wildcard.
#[derive(Debug, Clone)]
pub struct VersionScript<'a> {
    progname: &'a str,
    soname: String,
}

impl<'a> VersionScript<'a> {
    pub fn new(progname: &'a str, library: &str, version: &str) -> Self {
        VersionScript {
            progname,
            soname: format!("{}.so.{}", library, version),
        }
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "# Auto-generated by {}\n", self.progname)?;
        writeln!(writer, "{}", self.soname)?;
        writeln!(writer, "{{")?;
        writeln!(writer, "  global:")?;
        for entry in symbols::exported_to(Targets::GNU) {
            writeln!(writer, "    {} ;", entry.name)?;
        }
        writeln!(writer, "  local:")?;
        writeln!(writer, "    * ;")?;
        writeln!(writer, "}} ;")?;
        writeln!(writer)?;
        Ok(())
    }
}
