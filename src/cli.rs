use std::{error, fmt};

use memchr::memrchr2;

use crate::platform::Platform;

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub progname: String,
    pub platform: Platform,
    /// Library version as given, before normalization
    pub version: String,
}

/// Wrong number of command line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError {
    pub progname: String,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "Usage : {} <target OS name> <libsndfile version>.",
            self.progname
        )?;
        writeln!(f)?;
        writeln!(f, "    Currently supported values for target OS are:")?;
        writeln!(f, "          linux      (also gnu, binutils)")?;
        writeln!(f, "          darwin     (ie MacOSX)")?;
        writeln!(f, "          win32      (ie wintendo)")?;
        writeln!(f, "          cygwin     (Cygwin on wintendo)")?;
        writeln!(f, "          os2        (OS/2)")?;
        writeln!(f, "          static     (plain list of symbols)")?;
        writeln!(f)
    }
}

impl error::Error for UsageError {}

impl Args {
    /// Parse `argv`, program name included.
    pub fn parse<I, S>(argv: I) -> Result<Args, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let progname = argv
            .next()
            .map(|arg0| program_name(&arg0).to_string())
            .unwrap_or_default();
        let rest: Vec<String> = argv.collect();
        match <[String; 2]>::try_from(rest) {
            Ok([platform, version]) => Ok(Args {
                progname,
                platform: Platform::from_name(&platform),
                version,
            }),
            Err(_) => Err(UsageError { progname }),
        }
    }
}

/// Strip any leading directories, `/` or `\` separated.
pub fn program_name(arg0: &str) -> &str {
    match memrchr2(b'/', b'\\', arg0.as_bytes()) {
        Some(sep) => &arg0[sep + 1..],
        None => arg0,
    }
}
