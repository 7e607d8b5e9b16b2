//! `RunStats` totals what happened across all strategies of one run. It is
//! reported once at the end and included in the JSON summary.

use serde::Serialize;
use tracing::info;

use crate::enumerate::Enumeration;
use crate::strategy::Strategy;

#[derive(Debug, Clone, Serialize)]
pub struct StrategyStats {
    pub strategy: Strategy,
    pub matched: usize,
    pub skipped: usize,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub evaluated: u64,
    pub matched: u64,
    pub skipped: u64,
    pub strategies: Vec<StrategyStats>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, run: &Enumeration, path: Option<String>) {
        self.evaluated += run.evaluated as u64;
        self.matched += run.matches.len() as u64;
        self.skipped += run.skipped.len() as u64;
        self.strategies.push(StrategyStats {
            strategy: run.strategy,
            matched: run.matches.len(),
            skipped: run.skipped.len(),
            path,
        });
    }

    pub fn report(&self) {
        info!(
            evaluated = self.evaluated,
            matched = self.matched,
            skipped = self.skipped,
            strategies = self.strategies.len(),
            "run complete"
        );
    }
}
