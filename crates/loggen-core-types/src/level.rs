//! Severity levels and logger thresholds
//!
//! Levels follow a fixed integer scale with a bidirectional name mapping:
//!
//! | value | name       |
//! |-------|------------|
//! | 0     | `NOT SET`  |
//! | 10    | `DEBUG`    |
//! | 20    | `INFO`     |
//! | 30    | `WARNING`  |
//! | 40    | `ERROR`    |
//! | 50    | `CRITICAL` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "NOT SET")]
    NotSet,
    #[serde(rename = "DEBUG")]
    Debug,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "CRITICAL")]
    Critical,
}

impl Level {
    /// Every level, lowest first
    pub const ALL: [Level; 6] = [
        Level::NotSet,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Numeric value on the fixed scale
    pub fn value(self) -> u16 {
        match self {
            Level::NotSet => 0,
            Level::Debug => 10,
            Level::Info => 20,
            Level::Warning => 30,
            Level::Error => 40,
            Level::Critical => 50,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Level::NotSet => "NOT SET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    pub fn from_value(value: u16) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.value() == value)
    }

    /// Exact, case-sensitive lookup by name
    pub fn from_name(name: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.name() == name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    pub name: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level name: {:?}", self.name)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s).ok_or_else(|| ParseLevelError {
            name: s.to_string(),
        })
    }
}

/// Minimum severity a logger lets through
///
/// Either one of the defined levels or [`Threshold::SILENT`], which sits
/// above every level so nothing is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u16);

impl Threshold {
    pub const SILENT: Threshold = Threshold(1000);

    /// Threshold for a level value or the silent value; anything else is
    /// not a threshold
    pub fn from_value(value: u16) -> Option<Self> {
        if value == Threshold::SILENT.0 {
            return Some(Threshold::SILENT);
        }
        Level::from_value(value).map(Threshold::from)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// The level this threshold corresponds to, if any
    pub fn level(self) -> Option<Level> {
        Level::from_value(self.0)
    }

    pub fn is_silent(self) -> bool {
        self.0 > Level::Critical.value()
    }

    pub fn admits(self, level: Level) -> bool {
        level.value() >= self.0
    }

    /// Level name, or `SILENT` above the highest level
    pub fn name(self) -> &'static str {
        self.level().map_or("SILENT", Level::name)
    }
}

impl From<Level> for Threshold {
    fn from(level: Level) -> Self {
        Threshold(level.value())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_bidirectional() {
        for level in Level::ALL {
            assert_eq!(Level::from_value(level.value()), Some(level));
            assert_eq!(Level::from_name(level.name()), Some(level));
        }
    }

    #[test]
    fn test_fixed_scale_values() {
        let values: Vec<u16> = Level::ALL.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![0, 10, 20, 30, 40, 50]);
        assert_eq!(Level::NotSet.name(), "NOT SET");
    }

    #[test]
    fn test_from_str_rejects_unknown_and_lowercase() {
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warning));
        let err = "warning".parse::<Level>().unwrap_err();
        assert_eq!(err.name, "warning");
        assert!("VERBOSE".parse::<Level>().is_err());
        assert!(Level::from_value(15).is_none());
    }

    #[test]
    fn test_threshold_admits() {
        let info = Threshold::from(Level::Info);
        assert!(!info.admits(Level::Debug));
        assert!(info.admits(Level::Info));
        assert!(info.admits(Level::Critical));

        let not_set = Threshold::from(Level::NotSet);
        assert!(Level::ALL.iter().all(|l| not_set.admits(*l)));
    }

    #[test]
    fn test_silent_threshold_admits_nothing() {
        assert!(Threshold::SILENT.is_silent());
        assert!(Level::ALL.iter().all(|l| !Threshold::SILENT.admits(*l)));
        assert_eq!(Threshold::SILENT.name(), "SILENT");
        assert_eq!(Threshold::SILENT.level(), None);
    }

    #[test]
    fn test_threshold_from_value_accepts_only_known_values() {
        assert_eq!(Threshold::from_value(1000), Some(Threshold::SILENT));
        assert_eq!(Threshold::from_value(30), Some(Threshold::from(Level::Warning)));
        assert_eq!(Threshold::from_value(0), Some(Threshold::from(Level::NotSet)));
        assert_eq!(Threshold::from_value(15), None);
        assert_eq!(Threshold::from_value(51), None);
    }

    #[test]
    fn test_level_serde_uses_names() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            level: Level,
        }

        let parsed: Wrapper = toml::from_str("level = \"NOT SET\"").unwrap();
        assert_eq!(parsed.level, Level::NotSet);

        let rendered = toml::to_string(&Wrapper {
            level: Level::Critical,
        })
        .unwrap();
        assert!(rendered.contains("\"CRITICAL\""));
    }
}
