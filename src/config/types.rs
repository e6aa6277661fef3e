use serde::{Deserialize, Serialize};

use crate::criteria::SortMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default sort behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Reducer used when a command does not pass `--mode` (default: single).
    #[serde(default)]
    pub mode: SortMode,
}

/// JSON output formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Pretty-print JSON output (default: true).
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Spaces per indent level when pretty-printing (default: 2, max: 8).
    #[serde(default = "default_indent")]
    pub indent: usize,
}

pub(crate) const MAX_INDENT: usize = 8;

fn default_pretty() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
        }
    }
}
