use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ManifestMissing,
    ManifestParseError,
    StateParseError,
    ConfigParseError,
    UnknownRelease,
    FetchFailed,
    FetchCancelled,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ManifestMissing => "E1001",
            Self::ManifestParseError => "E1002",
            Self::StateParseError => "E1003",
            Self::ConfigParseError => "E1004",
            Self::UnknownRelease => "E2001",
            Self::FetchFailed => "E3001",
            Self::FetchCancelled => "E3002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ManifestMissing => "Release manifest not found",
            Self::ManifestParseError => "Release manifest parse error",
            Self::StateParseError => "Tracker state parse error",
            Self::ConfigParseError => "Config file parse error",
            Self::UnknownRelease => "Release not found in manifest",
            Self::FetchFailed => "Issue fetch failed",
            Self::FetchCancelled => "Issue fetch cancelled",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ManifestMissing => {
                Some("Create .longpole/releases.json or pass --project to the project root.")
            }
            Self::ManifestParseError => Some("Fix syntax in .longpole/releases.json and retry."),
            Self::StateParseError => Some("Fix syntax in .longpole/state.json and retry."),
            Self::ConfigParseError => Some("Fix syntax in .longpole/config.toml and retry."),
            Self::UnknownRelease => Some("Run `lp releases` to list known release versions."),
            Self::FetchFailed => {
                Some("Check network access and the [github] repo setting, or use --issues-file.")
            }
            Self::FetchCancelled => None,
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Domain errors produced outside the pure engine (loaders, fetch boundary).
///
/// The engine itself has no fatal error class: degenerate graph inputs are
/// valid inputs, and a cycle is a first-class return value, not an error.
#[derive(Debug, Error)]
pub enum LongpoleError {
    #[error("release manifest not found at {}", path.display())]
    ManifestMissing { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("release '{version}' not found in manifest")]
    UnknownRelease { version: String },

    #[error("issue fetch cancelled")]
    Cancelled,
}

impl LongpoleError {
    /// Map this error to its stable [`ErrorCode`].
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::ManifestMissing { .. } => ErrorCode::ManifestMissing,
            Self::Io { .. } => ErrorCode::InternalUnexpected,
            Self::Parse { path, .. } => {
                if path.ends_with("state.json") {
                    ErrorCode::StateParseError
                } else {
                    ErrorCode::ManifestParseError
                }
            }
            Self::UnknownRelease { .. } => ErrorCode::UnknownRelease,
            Self::Cancelled => ErrorCode::FetchCancelled,
        }
    }

    /// Remediation hint for terminal output, when one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        self.error_code().hint()
    }
}
