/// Target platforms with a known export-restriction syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// GNU binutils ld version script
    Gnu,
    /// Darwin exported symbols list
    Darwin,
    /// Win32 module-definition file
    Win32,
    /// Cygwin module-definition file
    Cygwin,
    /// OS/2 module-definition file
    Os2,
    /// Plain list of symbol names
    Plain,
    /// No known way to restrict exports
    Unsupported(String),
}

/// Command line names, matched exactly and case-sensitively
const ALIASES: &[(&str, Platform)] = &[
    ("linux", Platform::Gnu),
    ("gnu", Platform::Gnu),
    ("binutils", Platform::Gnu),
    ("darwin", Platform::Darwin),
    ("win32", Platform::Win32),
    ("cygwin", Platform::Cygwin),
    ("os2", Platform::Os2),
    ("static", Platform::Plain),
];

impl Platform {
    pub fn from_name(name: &str) -> Platform {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, platform)| platform.clone())
            .unwrap_or_else(|| Platform::Unsupported(name.to_string()))
    }

    /// Library base name written into (or passed along with) the export file
    pub fn library_name(&self) -> Option<&'static str> {
        match self {
            Self::Gnu | Self::Win32 => Some("libsndfile"),
            Self::Cygwin => Some("cygsndfile"),
            Self::Os2 => Some("sndfile"),
            Self::Darwin | Self::Plain | Self::Unsupported(_) => None,
        }
    }
}
