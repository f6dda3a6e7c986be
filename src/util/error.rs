// PagePulse - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error carries enough context
// to be logged and diagnosed without a debugger.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PagePulse operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PagePulseError {
    /// Page definition loading or validation failed.
    Content(ContentError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for PagePulseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content(e) => write!(f, "Page definition error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PagePulseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Content(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Page definition errors
// ---------------------------------------------------------------------------

/// Errors related to page definition loading and validation.
#[derive(Debug)]
pub enum ContentError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Page definition file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A required field is present but empty.
    EmptyField {
        owner: String,
        field: &'static str,
    },

    /// A section id does not match the anchor id grammar.
    InvalidSectionId { id: String },

    /// Two sections declare the same id. Anchor targets must be unambiguous.
    DuplicateSectionId { id: String },

    /// Maximum number of sections exceeded.
    TooManySections { count: usize, max: usize },

    /// A per-section or per-page item list exceeds its cap.
    TooManyItems {
        owner: String,
        kind: &'static str,
        count: usize,
        max: usize,
    },

    /// I/O error reading a page definition file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Page definition '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::EmptyField { owner, field } => {
                write!(f, "'{owner}': required field '{field}' is empty")
            }
            Self::InvalidSectionId { id } => write!(
                f,
                "Section id '{id}' is invalid: ids must be kebab-case, start \
                 with a letter, and stay under the length limit"
            ),
            Self::DuplicateSectionId { id } => {
                write!(f, "Duplicate section id '{id}'")
            }
            Self::TooManySections { count, max } => {
                write!(f, "Page declares {count} sections, maximum is {max}")
            }
            Self::TooManyItems {
                owner,
                kind,
                count,
                max,
            } => write!(
                f,
                "'{owner}' declares {count} {kind}, maximum is {max}"
            ),
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading page definition '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ContentError> for PagePulseError {
    fn from(e: ContentError) -> Self {
        Self::Content(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for PagePulseError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for PagePulse results.
pub type Result<T> = std::result::Result<T, PagePulseError>;
