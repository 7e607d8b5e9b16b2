use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;
use crate::wordlist::WordListPaths;
use crate::SieveError;

/// Runtime configuration for a sieve run.
///
/// Loaded from an optional JSON file; any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Word list locations.
    pub wordlists: WordListPaths,
    /// Root directory for result files.
    pub output_dir: PathBuf,
    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlists: WordListPaths::default(),
            output_dir: PathBuf::from("output"),
            strategies: Strategy::DEFAULT_SET.to_vec(),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, SieveError> {
        let config: Config =
            serde_json::from_str(text).map_err(|e| SieveError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SieveError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| SieveError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    fn check(&self) -> Result<(), SieveError> {
        if self.strategies.is_empty() {
            return Err(SieveError::Config("no strategies selected".into()));
        }
        Ok(())
    }
}
