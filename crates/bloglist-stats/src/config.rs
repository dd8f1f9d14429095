//! Reporter configuration loaded from environment variables.

use std::path::PathBuf;

use anyhow::Context;
use bloglist_core::SourceConfig;
use clap::ValueEnum;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    /// One `label: value` line per statistic.
    Text,
}

/// Reporter configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Blog export file or directory.
    pub input: Option<PathBuf>,

    /// Output format.
    pub format: OutputFormat,

    /// Skip invalid records instead of failing the run.
    pub continue_on_error: bool,

    /// Maximum number of export files to read.
    pub file_limit: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `BLOGLIST_INPUT`: Export file or directory (may instead be passed as `--input`)
    /// - `BLOGLIST_FORMAT`: `json`, `pretty` or `text` (default: "json")
    /// - `BLOGLIST_CONTINUE_ON_ERROR`: `true` or `false` (default: true)
    /// - `BLOGLIST_FILE_LIMIT`: Maximum number of files to read
    pub fn from_env() -> anyhow::Result<Self> {
        let input = std::env::var("BLOGLIST_INPUT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let format = match std::env::var("BLOGLIST_FORMAT") {
            Ok(value) => OutputFormat::from_str(value.trim(), true)
                .map_err(|e| anyhow::anyhow!("invalid BLOGLIST_FORMAT: {e}"))?,
            Err(_) => OutputFormat::default(),
        };

        let continue_on_error = match std::env::var("BLOGLIST_CONTINUE_ON_ERROR") {
            Ok(value) => value
                .trim()
                .parse::<bool>()
                .with_context(|| format!("invalid BLOGLIST_CONTINUE_ON_ERROR: '{value}'"))?,
            Err(_) => true,
        };

        let file_limit = match std::env::var("BLOGLIST_FILE_LIMIT") {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid BLOGLIST_FILE_LIMIT: '{value}'"))?,
            ),
            Err(_) => None,
        };

        tracing::info!(
            input = ?input,
            format = ?format,
            continue_on_error,
            file_limit = ?file_limit,
            "configuration loaded"
        );

        Ok(Self {
            input,
            format,
            continue_on_error,
            file_limit,
        })
    }

    /// Apply command-line flags on top of the environment configuration.
    ///
    /// `strict` only ever turns skipping off.
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        format: Option<OutputFormat>,
        strict: bool,
    ) -> Self {
        if let Some(input) = input {
            self.input = Some(input);
        }
        if let Some(format) = format {
            self.format = format;
        }
        if strict {
            self.continue_on_error = false;
        }
        self
    }

    /// Build the blog source configuration, requiring an input path.
    pub fn source_config(&self) -> anyhow::Result<SourceConfig> {
        let input = self
            .input
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no input given: pass --input or set BLOGLIST_INPUT"))?;

        Ok(SourceConfig {
            input,
            continue_on_error: self.continue_on_error,
            limit: self.file_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "BLOGLIST_INPUT",
        "BLOGLIST_FORMAT",
        "BLOGLIST_CONTINUE_ON_ERROR",
        "BLOGLIST_FILE_LIMIT",
    ];

    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert!(config.input.is_none());
            assert_eq!(config.format, OutputFormat::Json);
            assert!(config.continue_on_error);
            assert!(config.file_limit.is_none());
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("BLOGLIST_INPUT", "/data/blogs.json"),
                ("BLOGLIST_FORMAT", "Text"),
                ("BLOGLIST_CONTINUE_ON_ERROR", "false"),
                ("BLOGLIST_FILE_LIMIT", "3"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.input, Some(PathBuf::from("/data/blogs.json")));
                assert_eq!(config.format, OutputFormat::Text);
                assert!(!config.continue_on_error);
                assert_eq!(config.file_limit, Some(3));
            },
        );
    }

    #[test]
    fn config_blank_input_is_unset() {
        with_env_vars(&[("BLOGLIST_INPUT", "   ")], || {
            let config = Config::from_env().unwrap();
            assert!(config.input.is_none());
        });
    }

    #[test]
    fn config_rejects_unknown_format() {
        with_env_vars(&[("BLOGLIST_FORMAT", "yaml")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("BLOGLIST_FORMAT"));
        });
    }

    #[test]
    fn config_rejects_bad_bool() {
        with_env_vars(&[("BLOGLIST_CONTINUE_ON_ERROR", "sometimes")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_rejects_bad_limit() {
        with_env_vars(&[("BLOGLIST_FILE_LIMIT", "-1")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn flags_override_env() {
        with_env_vars(
            &[
                ("BLOGLIST_INPUT", "/env/blogs.json"),
                ("BLOGLIST_FORMAT", "pretty"),
            ],
            || {
                let config = Config::from_env().unwrap().with_overrides(
                    Some(PathBuf::from("/flag/blogs.jsonl")),
                    Some(OutputFormat::Text),
                    true,
                );
                assert_eq!(config.input, Some(PathBuf::from("/flag/blogs.jsonl")));
                assert_eq!(config.format, OutputFormat::Text);
                assert!(!config.continue_on_error);
            },
        );
    }

    #[test]
    fn absent_flags_keep_env() {
        with_env_vars(
            &[
                ("BLOGLIST_INPUT", "/env/blogs.json"),
                ("BLOGLIST_FORMAT", "pretty"),
                ("BLOGLIST_CONTINUE_ON_ERROR", "false"),
            ],
            || {
                let config = Config::from_env().unwrap().with_overrides(None, None, false);
                assert_eq!(config.input, Some(PathBuf::from("/env/blogs.json")));
                assert_eq!(config.format, OutputFormat::Pretty);
                assert!(!config.continue_on_error);
            },
        );

        with_env_vars(&[], || {
            let config = Config::from_env().unwrap().with_overrides(None, None, false);
            assert!(config.continue_on_error);
        });
    }

    #[test]
    fn source_config_requires_input() {
        let config = Config {
            input: None,
            format: OutputFormat::Json,
            continue_on_error: true,
            file_limit: None,
        };
        assert!(config.source_config().is_err());

        let config = Config {
            input: Some(PathBuf::from("blogs.jsonl")),
            continue_on_error: false,
            file_limit: Some(2),
            ..config
        };
        let source = config.source_config().unwrap();
        assert_eq!(source.input, PathBuf::from("blogs.jsonl"));
        assert!(!source.continue_on_error);
        assert_eq!(source.limit, Some(2));
    }
}
