//! # path-syntax
//!
//! Path parsing, rendering and URI conversion for in-memory filesystems.
//!
//! This crate turns user-supplied path strings into a structured form (an
//! optional root plus a list of names), renders that form back to a canonical
//! string, and converts it to and from `jimfs://` URIs. It knows nothing about
//! directories or file contents; the filesystem that uses it does.
//!
//! ## Features
//!
//! - **Two syntaxes**: [`WINDOWS`] (drive letters, UNC shares, `\` and `/`)
//!   and [`POSIX`]
//! - **Validation**: reserved characters, trailing spaces and periods, and
//!   device names are rejected per style
//! - **Canonical rendering**: alternate and repeated separators are
//!   normalized away
//! - **URI codec**: segment-wise percent-encoding with exact round trips
//!
//! ## Examples
//!
//! ### Parsing and rendering
//!
//! ```rust
//! use path_syntax::WINDOWS;
//!
//! let path = WINDOWS.parse_path("C:/Users//me/").unwrap();
//! assert_eq!(path.root(), Some("C:\\"));
//! assert_eq!(path.names(), ["Users", "me"]);
//! assert_eq!(WINDOWS.render_result(&path), "C:\\Users\\me");
//! ```
//!
//! ### Rejected paths
//!
//! ```rust
//! use path_syntax::{PathError, WINDOWS};
//!
//! assert!(matches!(
//!     WINDOWS.parse_path("C:foo"),
//!     Err(PathError::DriveRelativeUnsupported { .. })
//! ));
//! assert!(matches!(
//!     WINDOWS.parse_path("\\foo"),
//!     Err(PathError::RootlessAbsoluteUnsupported { .. })
//! ));
//! assert_eq!(
//!     WINDOWS.parse_path("\\\\").unwrap_err().reason(),
//!     "UNC path is missing hostname"
//! );
//! ```
//!
//! ### URIs
//!
//! ```rust
//! use path_syntax::{Uri, WINDOWS};
//!
//! let path = WINDOWS.parse_path("C:\\Users\\foo\\My Documents").unwrap();
//! let uri = WINDOWS.result_to_uri("foo", &path).unwrap();
//! assert_eq!(uri.to_string(), "jimfs://foo/C:/Users/foo/My%20Documents");
//!
//! let parsed: Uri = uri.to_string().parse().unwrap();
//! assert_eq!(WINDOWS.from_uri(&parsed).unwrap(), path);
//! ```

mod error;
mod parse;
mod render;
mod style;
mod uri;
mod validate;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use error::{NameViolation, PathError, Result, UncPart, UriError};
pub use parse::ParseResult;
pub use style::{PathType, Style, POSIX, WINDOWS};
pub use uri::{Uri, SCHEME};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
