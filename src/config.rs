//! Driver configuration from environment variables.
//!
//! - `PIECES_SEED`: u32 seed for shape selection (default: derived from the clock)
//! - `PIECES_OUTPUT`: `text` (default) or `json`
//! - `PIECES_LOG_PATH`: append a JSON-lines journal to this file
//! - `PIECES_COLOR`: `0`/`false` disables colour; `NO_COLOR` does too

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub seed: u32,
    pub output: OutputMode,
    pub log_path: Option<String>,
    pub color: bool,
    /// Rejected settings, logged by the driver once it starts.
    pub warnings: Vec<String>,
}

impl DriverConfig {
    pub fn from_env() -> Self {
        use std::env;

        Self::from_lookup(
            |key| env::var(key).ok(),
            tetris_reserve::term::stdout_is_terminal(),
        )
    }

    /// Build from any key lookup; `tty` says whether stdout is a terminal.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>, tty: bool) -> Self {
        let mut warnings = Vec::new();

        let seed = match get("PIECES_SEED") {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "PIECES_SEED {:?} is not a u32, using a clock seed",
                    raw
                ));
                clock_seed()
            }),
            None => clock_seed(),
        };

        let output = match get("PIECES_OUTPUT") {
            Some(raw) => OutputMode::from_str(&raw).unwrap_or_else(|| {
                warnings.push(format!("PIECES_OUTPUT {:?} is unknown, using text", raw));
                OutputMode::Text
            }),
            None => OutputMode::Text,
        };

        let log_path = get("PIECES_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let color_disabled = get("PIECES_COLOR")
            .map(|v| v == "0" || v.to_lowercase() == "false")
            .unwrap_or(false);
        let no_color = get("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false);

        Self {
            seed,
            output,
            log_path,
            color: tty && !color_disabled && !no_color && output == OutputMode::Text,
            warnings,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let cfg = DriverConfig::from_lookup(lookup(&[]), true);
        assert_eq!(cfg.output, OutputMode::Text);
        assert_eq!(cfg.log_path, None);
        assert!(cfg.color);
        assert!(cfg.warnings.is_empty());
    }

    #[test]
    fn explicit_values() {
        let cfg = DriverConfig::from_lookup(
            lookup(&[
                ("PIECES_SEED", "42"),
                ("PIECES_OUTPUT", "JSON"),
                ("PIECES_LOG_PATH", " /tmp/pieces.jsonl "),
            ]),
            true,
        );
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.output, OutputMode::Json);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/pieces.jsonl"));
        assert!(cfg.warnings.is_empty());
        // JSON output is never coloured.
        assert!(!cfg.color);
    }

    #[test]
    fn color_switches() {
        assert!(!DriverConfig::from_lookup(lookup(&[("PIECES_COLOR", "0")]), true).color);
        assert!(!DriverConfig::from_lookup(lookup(&[("PIECES_COLOR", "False")]), true).color);
        assert!(!DriverConfig::from_lookup(lookup(&[("NO_COLOR", "1")]), true).color);
        assert!(!DriverConfig::from_lookup(lookup(&[]), false).color);
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = DriverConfig::from_lookup(
            lookup(&[
                ("PIECES_OUTPUT", "xml"),
                ("PIECES_LOG_PATH", "   "),
                ("PIECES_SEED", "not-a-number"),
            ]),
            false,
        );
        assert_eq!(cfg.output, OutputMode::Text);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.warnings.len(), 2);
        assert!(cfg.warnings[0].contains("\"not-a-number\""));
        assert!(cfg.warnings[1].contains("\"xml\""));
    }
}
