//! Configuration warning value object.

use std::path::PathBuf;

/// Why a config key was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarningKind {
    /// Key is not part of the config schema
    UnknownKey { suggestion: Option<String> },
    /// `[factors]` entry tried to redefine a built-in activity
    BuiltinFactor,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown or problematic key
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    pub kind: ConfigWarningKind,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        match &self.kind {
            ConfigWarningKind::UnknownKey { suggestion } => {
                write!(f, ": unknown key '{}'", self.key)?;
                if let Some(s) = suggestion {
                    write!(f, " (did you mean '{}'?)", s)?;
                }
                Ok(())
            }
            ConfigWarningKind::BuiltinFactor => write!(
                f,
                ": factor '{}' is built in and cannot be overridden",
                self.key
            ),
        }
    }
}
