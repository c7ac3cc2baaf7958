use std::str::FromStr;

use crate::models::ExtractorSet;

/// Application-level constants
pub const APP_NAME: &str = "hc-lector";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report file written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "facturacion.json";

/// Lines inspected after an entry line when looking for its attributes.
pub const DEFAULT_FORWARD_SCAN_LINES: usize = 5;

/// Characters on each side of a procedure description searched for its date.
pub const DEFAULT_DATE_WINDOW_CHARS: usize = 200;

pub const ENV_EXTRACTORS: &str = "HC_LECTOR_EXTRACTORS";
pub const ENV_FORWARD_SCAN: &str = "HC_LECTOR_FORWARD_SCAN";
pub const ENV_SEQUENTIAL: &str = "HC_LECTOR_SEQUENTIAL";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "hc_lector_lib=info,hc_lector=info"
}

/// Per-run pipeline configuration. Passed into every run; nothing is kept
/// between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub extractors: ExtractorSet,
    pub forward_scan_lines: usize,
    pub date_window_chars: usize,
    /// Run categories as parallel blocking tasks instead of one after another.
    pub concurrent: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extractors: ExtractorSet::Billing,
            forward_scan_lines: DEFAULT_FORWARD_SCAN_LINES,
            date_window_chars: DEFAULT_DATE_WINDOW_CHARS,
            concurrent: true,
        }
    }
}

impl PipelineConfig {
    pub fn full() -> Self {
        Self {
            extractors: ExtractorSet::Full,
            ..Self::default()
        }
    }

    /// Defaults overridden by `HC_LECTOR_*` environment variables.
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_EXTRACTORS) {
            match ExtractorSet::from_str(raw.trim()) {
                Ok(set) => config.extractors = set,
                Err(e) => tracing::warn!(error = %e, "Ignoring {ENV_EXTRACTORS}"),
            }
        }

        if let Some(raw) = lookup(ENV_FORWARD_SCAN) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.forward_scan_lines = n,
                _ => tracing::warn!(value = %raw, "Ignoring {ENV_FORWARD_SCAN}"),
            }
        }

        if let Some(raw) = lookup(ENV_SEQUENTIAL) {
            config.concurrent = !matches!(raw.trim(), "1" | "true" | "yes");
        }

        config
    }
}
