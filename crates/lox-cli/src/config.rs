//! Settings read from `LOX_*` environment variables
//!
//! `LOX_NO_HISTORY` is bound directly to `--no-history` by clap; everything
//! here needs more than a yes/no flag.

use std::env;
use std::path::PathBuf;

/// Environment-derived settings for the `lox` binary
#[derive(Debug, Clone)]
pub struct Config {
    /// `LOX_DIAGNOSTICS=json` (any case) switches errors to JSON
    pub default_json: bool,
    /// `LOX_HISTORY_FILE` overrides where the REPL keeps its history
    pub history_file: Option<PathBuf>,
    /// `LOX_LOG` filter directives; blank means logging stays off
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let default_json = matches!(
            env::var("LOX_DIAGNOSTICS"),
            Ok(format) if format.eq_ignore_ascii_case("json")
        );

        Self {
            default_json,
            history_file: env::var_os("LOX_HISTORY_FILE").map(PathBuf::from),
            log_filter: env::var("LOX_LOG")
                .ok()
                .filter(|filter| !filter.trim().is_empty()),
        }
    }

    /// REPL history file: `LOX_HISTORY_FILE`, else `~/.lox/history`.
    /// `None` when neither is available.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".lox").join("history")))
    }
}
