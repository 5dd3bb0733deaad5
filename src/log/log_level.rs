use std::{fmt, str::FromStr};

/// Defines the severity levels for log messages.
///
/// The discriminants match raylib's `TraceLogLevel`, so a level crosses the
/// native boundary as its raw `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum LogLevel {
    /// Display all logs.
    All = 0,
    /// Designates very fine-grained informational events.
    Trace = 1,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug = 2,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info = 3,
    /// Designates potentially harmful situations.
    Warning = 4,
    /// Designates error events that might still allow the application to continue running.
    Error = 5,
    /// Unrecoverable failures. raylib aborts the process after logging one.
    Fatal = 6,
    /// Disables logging when used as a threshold (raylib `LOG_NONE`).
    Off = 7,
}

impl LogLevel {
    /// Converts a raw native level, saturating values outside `0..=7`.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            i32::MIN..=0 => Self::All,
            1 => Self::Trace,
            2 => Self::Debug,
            3 => Self::Info,
            4 => Self::Warning,
            5 => Self::Error,
            6 => Self::Fatal,
            _ => Self::Off,
        }
    }

    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Prefix raylib's built-in handler prints in front of a line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Off => "",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Off => "off",
        };
        f.write_str(name)
    }
}

/// Returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLogLevelError(pub String);

impl fmt::Display for ParseLogLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown log level: {}", self.0)
    }
}

impl std::error::Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "none" | "off" => Ok(Self::Off),
            _ => Err(ParseLogLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn raw_values_match_raylib() {
        assert_eq!(LogLevel::All.as_raw(), 0);
        assert_eq!(LogLevel::Info.as_raw(), 3);
        assert_eq!(LogLevel::Off.as_raw(), 7);
        for raw in 0..=7 {
            assert_eq!(LogLevel::from_raw(raw).as_raw(), raw);
        }
    }

    #[test]
    fn out_of_range_raw_values_saturate() {
        assert_eq!(LogLevel::from_raw(-3), LogLevel::All);
        assert_eq!(LogLevel::from_raw(i32::MIN), LogLevel::All);
        assert_eq!(LogLevel::from_raw(8), LogLevel::Off);
        assert_eq!(LogLevel::from_raw(i32::MAX), LogLevel::Off);
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" none ".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert_eq!("TRACE".parse::<LogLevel>().unwrap(), LogLevel::Trace);

        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ParseLogLevelError("loud".into()));
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Fatal < LogLevel::Off);
    }
}
