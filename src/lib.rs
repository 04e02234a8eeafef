use std::io::{Result, Write};

use log::{debug, warn};

/// Command line parsing
pub mod cli;
/// Darwin exported symbols list
mod darwin;
/// Module-definition (.DEF) files
pub mod def;
mod error;
/// GNU binutils flavored version script
mod gnu;
/// Target platform selection
pub mod platform;
/// The libsndfile export table
pub mod symbols;
/// Library version strings
pub mod version;

pub use self::cli::{Args, UsageError};
pub use self::darwin::SymbolList;
use self::def::ModuleDef;
pub use self::error::Error;
pub use self::gnu::VersionScript;
pub use self::platform::Platform;
pub use self::symbols::{SymbolEntry, Targets, SYMBOLS};

/// Export file generator for one target platform
#[derive(Debug, Clone)]
pub struct SymbolsFile {
    platform: Platform,
    version: String,
    progname: String,
}

impl SymbolsFile {
    /// Create a generator; `version` is normalized here.
    pub fn new(platform: Platform, version: &str, progname: &str) -> Self {
        SymbolsFile {
            platform,
            version: version::normalize(version).to_string(),
            progname: progname.to_string(),
        }
    }

    /// Normalized library version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Write out the export file for the selected platform
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        debug!(
            "generating {:?} exports for version {}",
            self.platform, self.version
        );
        let library = self.platform.library_name().unwrap_or_default();
        match &self.platform {
            Platform::Gnu => {
                VersionScript::new(&self.progname, library, &self.version).write_to(writer)
            }
            Platform::Darwin => SymbolList::new(&self.progname).write_to(writer),
            Platform::Win32 | Platform::Cygwin => {
                ModuleDef::win32(library).write_to(&self.progname, writer)
            }
            Platform::Os2 => {
                ModuleDef::os2(library, &self.version).write_to(&self.progname, writer)
            }
            Platform::Plain => write_plain(writer),
            Platform::Unsupported(name) => {
                warn!("no export restriction support for '{}'", name);
                write_unsupported(name, writer)
            }
        }
    }
}

/// Every symbol name, one per line, unfiltered.
fn write_plain<W: Write>(writer: &mut W) -> Result<()> {
    for entry in SYMBOLS {
        writeln!(writer, "{}", entry.name)?;
    }
    Ok(())
}

fn write_unsupported<W: Write>(os_name: &str, writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "No known way of restricting exported symbols on '{}'.",
        os_name
    )?;
    writeln!(writer, "If you know a way, please contact the author.")?;
    writeln!(writer)?;
    Ok(())
}

/// Parse `argv` and write the requested export file.
pub fn run<I, S, W>(argv: I, writer: &mut W) -> std::result::Result<(), Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let args = Args::parse(argv)?;
    let file = SymbolsFile::new(args.platform, &args.version, &args.progname);
    file.write_to(writer)?;
    writer.flush()?;
    Ok(())
}
