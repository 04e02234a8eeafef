use crate::symbols::{self, Targets};
use crate::version;

mod writer;

/// OS/2 loader directives emitted between `LIBRARY` and `EXPORTS`
const OS2_DIRECTIVES: &[&str] = &[
    "INITINSTANCE TERMINSTANCE",
    "CODE PRELOAD MOVEABLE DISCARDABLE",
    "DATA PRELOAD MOVEABLE MULTIPLE NONSHARED",
];

/// Module-definition file flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefFlavor {
    /// Win32 and Cygwin linkers, undecorated names
    Win32,
    /// OS/2 linkers, underscore-decorated names and a `LIBRARY` statement
    Os2,
}

/// Simple .DEF file model
#[derive(Debug, Clone)]
pub struct ModuleDef {
    pub flavor: DefFlavor,
    /// DLL base name. Only OS/2 writes it out as `LIBRARY`.
    pub import_name: String,
    pub directives: &'static [&'static str],
    pub exports: Vec<ShortExport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortExport {
    /// The exported name as written to the .def file, including any
    /// flavor-specific decoration
    pub name: String,
    pub ordinal: u16,
}

impl ModuleDef {
    /// Win32 flavored definition for the DLL `import_name`
    pub fn win32(import_name: &str) -> ModuleDef {
        ModuleDef {
            flavor: DefFlavor::Win32,
            import_name: import_name.to_string(),
            directives: &[],
            exports: collect_exports(Targets::WIN32, ""),
        }
    }

    /// OS/2 flavored definition; the DLL is named after the major version.
    pub fn os2(import_name: &str, version: &str) -> ModuleDef {
        ModuleDef {
            flavor: DefFlavor::Os2,
            import_name: format!("{}{}", import_name, version::major(version)),
            directives: OS2_DIRECTIVES,
            exports: collect_exports(Targets::OS2, "_"),
        }
    }
}

fn collect_exports(target: Targets, prefix: &str) -> Vec<ShortExport> {
    symbols::exported_to(target)
        .map(|entry| ShortExport {
            name: format!("{}{}", prefix, entry.name),
            ordinal: entry.ordinal,
        })
        .collect()
}
