//! Runtime configuration read from the environment.

use tourney_tetris_core::SessionConfig;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub seed: u32,
    pub multiple_attempts: bool,
    pub previous_score: Option<u64>,
    /// JSON-lines event log, one record per processed event
    pub log_path: Option<String>,
    /// JSON-lines score file written by the recorder
    pub score_path: Option<String>,
    /// Capacity of the session event queue
    pub max_pending: usize,
    /// Suppress `[Session]`/`[Recorder]` console lines (a terminal view owns the screen)
    pub quiet: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            multiple_attempts: true,
            previous_score: None,
            log_path: None,
            score_path: None,
            max_pending: 64,
            quiet: false,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    ///
    /// Unset or unparsable values fall back to [`RuntimeConfig::default`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let multiple_attempts = lookup("TETRIS_MULTI_PLAY")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(defaults.multiple_attempts);

        let previous_score = lookup("TETRIS_PREV_SCORE").and_then(|s| s.trim().parse().ok());

        let max_pending = lookup("TETRIS_MAX_PENDING")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pending);

        let quiet = lookup("TETRIS_QUIET")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(defaults.quiet);

        Self {
            seed,
            multiple_attempts,
            previous_score,
            log_path: non_empty(lookup("TETRIS_LOG_PATH")),
            score_path: non_empty(lookup("TETRIS_SCORE_PATH")),
            max_pending,
            quiet,
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            multiple_attempts: self.multiple_attempts,
            previous_score: self.previous_score,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RuntimeConfig::from_lookup(|_| None);
        assert_eq!(config, RuntimeConfig::default());
        assert!(config.session().should_play());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "42"),
            ("TETRIS_MULTI_PLAY", "false"),
            ("TETRIS_PREV_SCORE", "17"),
            ("TETRIS_LOG_PATH", " /tmp/events.jsonl "),
            ("TETRIS_SCORE_PATH", ""),
            ("TETRIS_MAX_PENDING", "8"),
            ("TETRIS_QUIET", "on"),
        ]));

        assert_eq!(config.seed, 42);
        assert!(!config.multiple_attempts);
        assert_eq!(config.previous_score, Some(17));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/events.jsonl"));
        assert_eq!(config.score_path, None);
        assert_eq!(config.max_pending, 8);
        assert!(config.quiet);
        assert!(!config.session().should_play());
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "abc"),
            ("TETRIS_MULTI_PLAY", "maybe"),
            ("TETRIS_PREV_SCORE", "-3"),
            ("TETRIS_QUIET", "loud"),
        ]));
        assert_eq!(config.seed, 1);
        assert!(config.multiple_attempts);
        assert_eq!(config.previous_score, None);
        assert!(!config.quiet);
    }
}
