//! How failures are worded for someone running the binaries.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::SieveError;

/// Top-level failure of a binary; printed once to stderr before exiting 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{context}: {}", hint(.source))]
    Sieve {
        context: &'static str,
        #[source]
        source: SieveError,
    },

    #[error("{0}")]
    Message(String),
}

impl CliError {
    pub fn new(context: &'static str, source: SieveError) -> Self {
        CliError::Sieve { context, source }
    }
}

/// Describe `err` together with what the user can change to get past it.
pub fn hint(err: &SieveError) -> String {
    match err {
        SieveError::Validation(msg) => format!("{msg}; expected a star such as ~marzod"),
        SieveError::Codec(e) => format!("{e}; check the spelling of the name"),
        SieveError::WordList { path, source } => {
            io_hint("cannot read word list", path, source, "--wordlists")
        }
        SieveError::Output { path, source } => {
            io_hint("cannot write results to", path, source, "--output")
        }
        SieveError::Config(msg) => format!("{msg}; fix or drop --config"),
        SieveError::Prompt(msg) => format!("{msg}; pass the star as an argument"),
        SieveError::Io(e) => e.to_string(),
    }
}

fn io_hint(action: &str, path: &Path, err: &io::Error, flag: &str) -> String {
    let base = format!("{action} '{}': {err}", path.display());
    match err.kind() {
        io::ErrorKind::NotFound => format!("{base} (use {flag} to point elsewhere)"),
        io::ErrorKind::PermissionDenied => format!("{base} (check the directory's permissions)"),
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn io_hints_name_the_file_and_the_flag() {
        let err = SieveError::WordList {
            path: PathBuf::from("wordlists/name/approx-double.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = hint(&err);
        assert!(msg.contains("wordlists/name/approx-double.txt"));
        assert!(msg.contains("--wordlists"));

        let err = SieveError::Output {
            path: PathBuf::from("output/marzod/doubles_planets.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(hint(&err).contains("permissions"));

        let err = SieveError::Output {
            path: PathBuf::from("output/marzod"),
            source: io::Error::new(io::ErrorKind::Other, "odd"),
        };
        assert_eq!(hint(&err), "cannot write results to 'output/marzod': odd");
    }

    #[test]
    fn sieve_errors_keep_their_source() {
        let err = CliError::new("bad input", SieveError::Validation("Must be a star".into()));
        assert_eq!(
            err.to_string(),
            "bad input: Must be a star; expected a star such as ~marzod"
        );
        assert_eq!(err.source().unwrap().to_string(), "Must be a star");

        let plain = CliError::Message("Failed to write 2 result file(s)".into());
        assert!(plain.source().is_none());
    }
}
