use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;

use crate::log::log_level::{LogLevel, ParseLogLevelError};

/// Section holding trace-log settings.
pub const TRACE_LOG_SECTION: &str = "TraceLog";
/// Section holding file-logger settings.
pub const LOGGING_SECTION: &str = "Logging";

#[derive(Debug)]
pub enum ConfigError {
    Read { path: String, source: io::Error },
    InvalidLevel { key: String, source: ParseLogLevelError },
    InvalidNumber { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => write!(f, "Error reading file {path}: {source}"),
            ConfigError::InvalidLevel { key, source } => write!(f, "Invalid value for {key}: {source}"),
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "Invalid number for {key}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::InvalidLevel { source, .. } => Some(source),
            ConfigError::InvalidNumber { .. } => None,
        }
    }
}

/// INI-style configuration: `[section]` headers, `key = value` pairs and `#`
/// comments. Keys before the first header are globals.
#[derive(Debug)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                let value = line[pos + 1..].trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    /// Reads a log level, `Ok(None)` when the key is absent or empty.
    pub fn get_level(&self, section: &str, key: &str) -> Result<Option<LogLevel>, ConfigError> {
        self.get_non_empty(section, key)
            .map(|v| {
                v.parse::<LogLevel>().map_err(|source| ConfigError::InvalidLevel {
                    key: format!("{section}.{key}"),
                    source,
                })
            })
            .transpose()
    }

    /// Reads an unsigned number, `Ok(None)` when the key is absent or empty.
    pub fn get_usize(&self, section: &str, key: &str) -> Result<Option<usize>, ConfigError> {
        self.get_non_empty(section, key)
            .map(|v| {
                v.parse::<usize>().map_err(|_| ConfigError::InvalidNumber {
                    key: format!("{section}.{key}"),
                    value: v.to_string(),
                })
            })
            .transpose()
    }
}
