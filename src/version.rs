//! Library version string handling

use memchr::{memchr, memchr_iter, memrchr};

/// Drop a single trailing `.suffix` (lowercase ASCII letters and digits)
/// that follows a complete `major.minor.patch` triple.
///
/// `1.0.28.pre1` and `1.0.28.1` become `1.0.28`; `1.0.28` and `1.0.28pre1`
/// are returned unchanged.
pub fn normalize(version: &str) -> &str {
    let bytes = version.as_bytes();
    let Some(dot) = memrchr(b'.', bytes) else {
        return version;
    };
    let suffix = &bytes[dot + 1..];
    if suffix.is_empty()
        || !suffix
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return version;
    }
    let head = &bytes[..dot];
    if memchr_iter(b'.', head).count() < 2 {
        return version;
    }
    &version[..dot]
}

/// Everything before the first `.`, used as the OS/2 DLL name suffix.
pub fn major(version: &str) -> &str {
    match memchr(b'.', version.as_bytes()) {
        Some(dot) => &version[..dot],
        None => version,
    }
}
