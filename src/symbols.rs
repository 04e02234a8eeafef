bitflags::bitflags! {
    /// Export lists a symbol is published to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Targets: u8 {
        /// GNU ld version script
        const GNU = 1 << 0;
        /// Darwin `-exported_symbols_list`
        const DARWIN = 1 << 1;
        /// Win32 and Cygwin module-definition file
        const WIN32 = 1 << 2;
        /// OS/2 module-definition file
        const OS2 = 1 << 3;
    }
}

/// One public libsndfile function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: &'static str,
    /// Stable export ordinal, bound to by Windows and OS/2 linkers
    pub ordinal: u16,
    pub targets: Targets,
}

impl SymbolEntry {
    const fn new(name: &'static str, ordinal: u16) -> Self {
        SymbolEntry {
            name,
            ordinal,
            targets: Targets::all(),
        }
    }

    const fn only(name: &'static str, ordinal: u16, targets: Targets) -> Self {
        SymbolEntry {
            name,
            ordinal,
            targets,
        }
    }

    /// Whether the symbol belongs in the export list for `target`
    pub fn is_exported_to(&self, target: Targets) -> bool {
        self.targets.contains(target)
    }
}

/// All of the public functions exported from libsndfile.
///
/// Entries may only be appended. Never change the order or the ordinal of a
/// published entry.
pub static SYMBOLS: &[SymbolEntry] = &[
    SymbolEntry::new("sf_command", 1),
    SymbolEntry::new("sf_open", 2),
    SymbolEntry::new("sf_close", 3),
    SymbolEntry::new("sf_seek", 4),
    SymbolEntry::new("sf_error", 7),
    SymbolEntry::new("sf_perror", 8),
    SymbolEntry::new("sf_error_str", 9),
    SymbolEntry::new("sf_error_number", 10),
    SymbolEntry::new("sf_format_check", 11),
    SymbolEntry::new("sf_read_raw", 16),
    SymbolEntry::new("sf_readf_short", 17),
    SymbolEntry::new("sf_readf_int", 18),
    SymbolEntry::new("sf_readf_float", 19),
    SymbolEntry::new("sf_readf_double", 20),
    SymbolEntry::new("sf_read_short", 21),
    SymbolEntry::new("sf_read_int", 22),
    SymbolEntry::new("sf_read_float", 23),
    SymbolEntry::new("sf_read_double", 24),
    SymbolEntry::new("sf_write_raw", 32),
    SymbolEntry::new("sf_writef_short", 33),
    SymbolEntry::new("sf_writef_int", 34),
    SymbolEntry::new("sf_writef_float", 35),
    SymbolEntry::new("sf_writef_double", 36),
    SymbolEntry::new("sf_write_short", 37),
    SymbolEntry::new("sf_write_int", 38),
    SymbolEntry::new("sf_write_float", 39),
    SymbolEntry::new("sf_write_double", 40),
    SymbolEntry::new("sf_strerror", 50),
    SymbolEntry::new("sf_get_string", 60),
    SymbolEntry::new("sf_set_string", 61),
    SymbolEntry::new("sf_version_string", 68),
    SymbolEntry::new("sf_open_fd", 70),
    // wchar_t path variant, only built for Windows
    SymbolEntry::only("sf_wchar_open", 71, Targets::WIN32),
    SymbolEntry::new("sf_open_virtual", 80),
    SymbolEntry::new("sf_write_sync", 90),
    SymbolEntry::new("sf_set_chunk", 100),
    SymbolEntry::new("sf_get_chunk_size", 101),
    SymbolEntry::new("sf_get_chunk_data", 102),
    SymbolEntry::new("sf_get_chunk_iterator", 103),
    SymbolEntry::new("sf_next_chunk_iterator", 104),
    SymbolEntry::new("sf_current_byterate", 110),
    SymbolEntry::new("sf_get_format_check_failure_reason", 111),
];

/// Iterate the entries published to `target`, in table order.
pub fn exported_to(target: Targets) -> impl Iterator<Item = &'static SymbolEntry> {
    SYMBOLS.iter().filter(move |entry| entry.is_exported_to(target))
}
