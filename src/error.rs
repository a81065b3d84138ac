//! Error types for path parsing and URI conversion

use std::fmt;
use thiserror::Error;

/// The UNC root component that was found empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncPart {
    Host,
    Share,
}

impl fmt::Display for UncPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncPart::Host => write!(f, "hostname"),
            UncPart::Share => write!(f, "sharename"),
        }
    }
}

/// Why a single name was rejected by a style's rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    /// The character may not appear anywhere in a name
    Illegal(char),
    /// The character may not end a name
    Trailing(char),
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameViolation::Illegal(c) => write!(f, "Illegal char <{}>", c.escape_debug()),
            NameViolation::Trailing(c) => write!(f, "Trailing char <{}>", c.escape_debug()),
        }
    }
}

/// The error type for path parsing
///
/// Every variant carries the raw input that was being parsed. The variant
/// itself is the error kind; [`PathError::reason`] gives the fixed message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `\\host\share` prefix with an empty host or share
    #[error("UNC path is missing {missing}: {input}")]
    MalformedUnc { input: String, missing: UncPart },

    /// `C:` or `C:foo`, a path relative to a drive's current directory
    #[error("relative path on a specific drive is not supported: {input}")]
    DriveRelativeUnsupported { input: String },

    /// `\foo`, an absolute path on the current drive
    #[error("absolute path without a drive or UNC root is not supported: {input}")]
    RootlessAbsoluteUnsupported { input: String },

    /// A name contains a reserved character or ends in one that is forbidden there
    #[error("{violation} in name '{segment}': {input}")]
    IllegalCharacter {
        input: String,
        segment: String,
        violation: NameViolation,
    },

    /// A name is a reserved device name such as `CON` or `LPT1`
    #[error("reserved device name '{segment}': {input}")]
    ReservedName { input: String, segment: String },
}

impl PathError {
    /// The raw input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            PathError::MalformedUnc { input, .. }
            | PathError::DriveRelativeUnsupported { input }
            | PathError::RootlessAbsoluteUnsupported { input }
            | PathError::IllegalCharacter { input, .. }
            | PathError::ReservedName { input, .. } => input,
        }
    }

    /// The reason, without the input
    ///
    /// ```
    /// use path_syntax::WINDOWS;
    ///
    /// let err = WINDOWS.parse_path("\\\\host").unwrap_err();
    /// assert_eq!(err.reason(), "UNC path is missing sharename");
    /// assert_eq!(err.input(), "\\\\host");
    /// ```
    pub fn reason(&self) -> String {
        match self {
            PathError::MalformedUnc { missing, .. } => format!("UNC path is missing {missing}"),
            PathError::DriveRelativeUnsupported { .. } => {
                "relative path on a specific drive is not supported".to_string()
            }
            PathError::RootlessAbsoluteUnsupported { .. } => {
                "absolute path without a drive or UNC root is not supported".to_string()
            }
            PathError::IllegalCharacter {
                segment, violation, ..
            } => format!("{violation} in name '{segment}'"),
            PathError::ReservedName { segment, .. } => {
                format!("reserved device name '{segment}'")
            }
        }
    }
}

/// The error type for URI conversion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    #[error("URI scheme must be 'jimfs': {uri}")]
    UnsupportedScheme { uri: String },

    #[error("malformed URI ({reason}): {uri}")]
    Malformed { uri: String, reason: &'static str },

    #[error("filesystem identifier must not be empty")]
    EmptyFileSystemId,

    /// Only absolute paths can be named by URI
    #[error("cannot build a URI for relative path '{path}'")]
    RelativePath { path: String },

    #[error("URI path segment is not valid percent-encoded UTF-8: {segment}")]
    InvalidEncoding { segment: String },

    #[error("URI path does not start with a drive or UNC root: {path}")]
    MissingDrive { path: String },

    #[error(transparent)]
    InvalidPath(#[from] PathError),
}

/// Result type for path parsing
pub type Result<T> = std::result::Result<T, PathError>;
