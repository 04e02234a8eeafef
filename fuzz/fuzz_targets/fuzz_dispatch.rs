#![no_main]
use libfuzzer_sys::fuzz_target;
use sndfile_symbols::{Platform, SymbolsFile};

fuzz_target!(|data: (&str, &str)| {
    let (platform, version) = data;
    let file = SymbolsFile::new(Platform::from_name(platform), version, "fuzz");
    assert!(version.starts_with(file.version()));

    let mut first = Vec::new();
    file.write_to(&mut first).unwrap();
    let mut second = Vec::new();
    file.write_to(&mut second).unwrap();
    assert_eq!(first, second);
});
