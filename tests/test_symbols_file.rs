use std::ffi::OsStr;
use std::process::{Command, Output};

use sndfile_symbols::{Platform, SymbolsFile, SYMBOLS};

fn render(platform: &str, version: &str) -> String {
    let mut buf = Vec::new();
    SymbolsFile::new(Platform::from_name(platform), version, "create-symbols-file")
        .write_to(&mut buf)
        .unwrap();
    String::from_utf8(buf).unwrap()
}

fn create_symbols_file<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-symbols-file"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_gnu_version_script() {
    let expected = include_str!("Symbols.gnu-binutils");
    for alias in ["linux", "gnu", "binutils"] {
        assert_eq!(render(alias, "1.0.28"), expected);
    }
    assert_eq!(render("linux", "1.0.28.pre1"), expected);
}

#[test]
fn test_darwin_symbol_list() {
    assert_eq!(render("darwin", "1.0.28"), include_str!("Symbols.darwin"));
}

#[test]
fn test_win32_module_def() {
    let expected = include_str!("libsndfile-1.def");
    assert_eq!(render("win32", "1.0.28"), expected);
    assert_eq!(render("cygwin", "1.0.28"), expected);
}

#[test]
fn test_os2_module_def() {
    assert_eq!(render("os2", "1.0.28"), include_str!("sndfile1.def"));
}

#[test]
fn test_wchar_open_visibility() {
    for platform in ["win32", "cygwin"] {
        assert!(render(platform, "1.0.28").contains("sf_wchar_open "));
    }
    for platform in ["linux", "darwin", "os2"] {
        assert!(!render(platform, "1.0.28").contains("sf_wchar_open"));
    }
    for entry in SYMBOLS.iter().filter(|e| e.name != "sf_wchar_open") {
        for platform in ["linux", "darwin", "win32", "os2", "static"] {
            assert!(
                render(platform, "1.0.28").contains(entry.name),
                "{} missing from {}",
                entry.name,
                platform
            );
        }
    }
}

#[test]
fn test_ordinals_follow_table() {
    let text = render("win32", "1.0.28");
    let exports: Vec<(&str, u16)> = text
        .lines()
        .filter_map(|line| line.split_once(" @"))
        .map(|(name, ordinal)| (name.trim_end(), ordinal.parse().unwrap()))
        .collect();
    let table: Vec<(&str, u16)> = SYMBOLS.iter().map(|e| (e.name, e.ordinal)).collect();
    assert_eq!(exports, table);
}

#[test]
fn test_deterministic() {
    for platform in ["linux", "darwin", "win32", "cygwin", "os2", "static", "bogus"] {
        assert_eq!(render(platform, "1.0.28"), render(platform, "1.0.28"));
    }
}

#[test]
fn test_binary_static() {
    let output = create_symbols_file(&["static", "1.0.28"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<_> = stdout.lines().collect();
    assert_eq!(names.len(), SYMBOLS.len());
    assert_eq!(names, SYMBOLS.iter().map(|e| e.name).collect::<Vec<_>>());
}

#[test]
fn test_binary_header_uses_program_name() {
    let output = create_symbols_file(&["linux", "1.0.28"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("# Auto-generated by create-symbols-file"));
}

#[test]
fn test_binary_unsupported_platform() {
    let output = create_symbols_file(&["bogus", "1.0.28"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("'bogus'"));
}

#[test]
fn test_binary_usage() {
    let cases: [&[&str]; 3] = [&[], &["linux"], &["linux", "1.0.28", "extra"]];
    for args in cases {
        let output = create_symbols_file(args);
        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Usage : create-symbols-file"));
        for name in ["linux", "darwin", "win32", "cygwin", "os2", "static", "plain"] {
            assert!(stdout.contains(name));
        }
    }
}

#[cfg(unix)]
#[test]
fn test_binary_non_utf8_version() {
    use std::os::unix::ffi::OsStrExt;

    let args = [OsStr::new("static"), OsStr::from_bytes(b"1.0.\xff")];
    let output = create_symbols_file(&args);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), SYMBOLS.len());

    let args = [OsStr::new("linux"), OsStr::from_bytes(b"1.0.28.\xff")];
    let output = create_symbols_file(&args);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\nlibsndfile.so.1.0.28.\u{fffd}\n"));
}
