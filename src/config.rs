//! Editor configuration from the environment.
//!
//! | variable | effect | default |
//! |---|---|---|
//! | `TEN_MIN_WIDTH` | minimum terminal columns | 50 |
//! | `TEN_MIN_HEIGHT` | minimum terminal rows | 4 |
//! | `TEN_LINE_NUMBERS` | show the line-number gutter | on |
//! | `TEN_STATUS_BAR` | show the status line | on |
//! | `TEN_ALT_SCREEN` | use the alternate screen | on |
//! | `TEN_UNHANDLED_INPUT` | `ignore` or `fatal` | `ignore` |
//! | `TEN_LOG` | append diagnostics to this file | unset |
//!
//! # Examples
//!
//! ```
//! use ten::config::{EditorConfig, UnhandledInputPolicy};
//!
//! let config = EditorConfig::from_lookup(|key| match key {
//!     "TEN_LINE_NUMBERS" => Some("off".to_string()),
//!     "TEN_UNHANDLED_INPUT" => Some("fatal".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert!(!config.line_numbers);
//! assert_eq!(config.unhandled_input, UnhandledInputPolicy::Fatal);
//! ```

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// What the session does with input that maps to no action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnhandledInputPolicy {
    /// Log it and carry on.
    #[default]
    Ignore,
    /// Stop the editor with [`Error::UnhandledInput`].
    Fatal,
}

impl FromStr for UnhandledInputPolicy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "fatal" => Ok(Self::Fatal),
            _ => Err(()),
        }
    }
}

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub min_width: u16,
    pub min_height: u16,
    pub line_numbers: bool,
    pub status_bar: bool,
    pub use_alt_screen: bool,
    pub unhandled_input: UnhandledInputPolicy,
    pub log_file: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_width: 50,
            min_height: 4,
            line_numbers: true,
            status_bar: true,
            use_alt_screen: true,
            unhandled_input: UnhandledInputPolicy::Ignore,
            log_file: None,
        }
    }
}

impl EditorConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            min_width: parse_var(&get, "TEN_MIN_WIDTH", defaults.min_width)?,
            min_height: parse_var(&get, "TEN_MIN_HEIGHT", defaults.min_height)?,
            line_numbers: bool_var(&get, "TEN_LINE_NUMBERS", defaults.line_numbers)?,
            status_bar: bool_var(&get, "TEN_STATUS_BAR", defaults.status_bar)?,
            use_alt_screen: bool_var(&get, "TEN_ALT_SCREEN", defaults.use_alt_screen)?,
            unhandled_input: parse_var(&get, "TEN_UNHANDLED_INPUT", defaults.unhandled_input)?,
            log_file: get("TEN_LOG").map(PathBuf::from),
        })
    }
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_var<T, F>(get: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| invalid(key, &value)),
    }
}

fn bool_var<F>(get: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = get(key) else {
        return Ok(default);
    };
    parse_bool(&value).ok_or_else(|| invalid(key, &value))
}

/// Parse `1/0/true/false/yes/no/on/off`, ignoring case.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<EditorConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        EditorConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let cfg = config(&[
            ("TEN_MIN_WIDTH", "60"),
            ("TEN_MIN_HEIGHT", " 10 "),
            ("TEN_STATUS_BAR", "no"),
            ("TEN_ALT_SCREEN", "0"),
            ("TEN_LOG", "/tmp/ten.log"),
        ])
        .unwrap();
        assert_eq!(cfg.min_width, 60);
        assert_eq!(cfg.min_height, 10);
        assert!(!cfg.status_bar);
        assert!(!cfg.use_alt_screen);
        assert!(cfg.line_numbers);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/ten.log")));
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let cfg = config(&[("TEN_MIN_WIDTH", ""), ("TEN_LOG", "")]).unwrap();
        assert_eq!(cfg.min_width, 50);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn test_invalid_values_report_key() {
        let err = config(&[("TEN_MIN_WIDTH", "wide")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { ref key, .. } if key == "TEN_MIN_WIDTH"));

        let err = config(&[("TEN_LINE_NUMBERS", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("TEN_LINE_NUMBERS"));

        assert!(config(&[("TEN_UNHANDLED_INPUT", "panic")]).is_err());
    }

    #[test]
    fn test_parse_bool_forms() {
        for on in ["1", "TRUE", "Yes", "on"] {
            assert_eq!(parse_bool(on), Some(true));
        }
        for off in ["0", "false", "NO", "Off"] {
            assert_eq!(parse_bool(off), Some(false));
        }
        assert_eq!(parse_bool("2"), None);
    }
}
