//! `jimfs:` URI encoding and decoding
//!
//! An absolute path is named outside the process as
//! `jimfs://<filesystem-id>/<path>`, where each root component and name is
//! percent-encoded on its own and joined with `/`:
//!
//! | root            | URI path                  |
//! |-----------------|---------------------------|
//! | `C:\`           | `/C:/foo/bar`             |
//! | `\\host\share\` | `//host/share/foo/bar`    |
//! | `/`             | `/foo/bar`                |
//!
//! [`Uri`] keeps the encoded text exactly as built or parsed. It never removes
//! `.` or `..` segments, so every name survives a round trip.

use crate::error::{PathError, UncPart, UriError};
use crate::parse::ParseResult;
use crate::style::PathType;
use log::{debug, trace};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub const SCHEME: &str = "jimfs";

/// Everything outside the RFC 3986 `pchar` set, which also covers `/`, `%`, `?` and `#`
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

fn encode(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, SEGMENT).into()
}

fn decode(segment: &str) -> Result<String, UriError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| UriError::InvalidEncoding {
            segment: segment.to_string(),
        })
}

/// A `jimfs:` URI
///
/// ```
/// use path_syntax::Uri;
///
/// let uri: Uri = "jimfs://foo/C:/Users/foo/My%20Documents".parse().unwrap();
/// assert_eq!(uri.file_system_id(), "foo");
/// assert_eq!(uri.raw_path(), "/C:/Users/foo/My%20Documents");
/// assert_eq!(uri.path(), "/C:/Users/foo/My Documents");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    authority: String,
    path: String,
}

impl Uri {
    pub fn scheme(&self) -> &'static str {
        SCHEME
    }

    /// The encoded authority
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The decoded authority, which names the filesystem instance
    pub fn file_system_id(&self) -> Cow<'_, str> {
        percent_decode_str(&self.authority).decode_utf8_lossy()
    }

    /// The encoded path, always starting with `/`
    pub fn raw_path(&self) -> &str {
        &self.path
    }

    /// The decoded path
    pub fn path(&self) -> Cow<'_, str> {
        percent_decode_str(&self.path).decode_utf8_lossy()
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}://{}{}", self.authority, self.path)
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| UriError::Malformed {
            uri: s.to_string(),
            reason,
        };

        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| malformed("missing '://'"))?;
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(UriError::UnsupportedScheme { uri: s.to_string() });
        }
        if rest.contains(['?', '#']) {
            return Err(malformed("query and fragment are not allowed"));
        }

        let slash = rest.find('/').ok_or_else(|| malformed("missing path"))?;
        let (authority, path) = rest.split_at(slash);
        if authority.is_empty() {
            return Err(UriError::EmptyFileSystemId);
        }

        Ok(Uri {
            authority: authority.to_string(),
            path: path.to_string(),
        })
    }
}

impl PathType {
    /// Build the URI naming an absolute path on filesystem `fs_id`
    ///
    /// # Examples
    /// ```
    /// use path_syntax::WINDOWS;
    ///
    /// let uri = WINDOWS.to_uri("foo", Some("\\\\host\\share\\"), &["a b"]).unwrap();
    /// assert_eq!(uri.to_string(), "jimfs://foo//host/share/a%20b");
    ///
    /// assert!(WINDOWS.to_uri("foo", None, &["a"]).is_err());
    /// ```
    pub fn to_uri<S: AsRef<str>>(
        &self,
        fs_id: &str,
        root: Option<&str>,
        names: &[S],
    ) -> Result<Uri, UriError> {
        if fs_id.is_empty() {
            return Err(UriError::EmptyFileSystemId);
        }
        let Some(root) = root else {
            return Err(UriError::RelativePath {
                path: self.render(None, names),
            });
        };

        let mut path = String::from("/");
        if self.is_unc_root(root) {
            path.push('/');
        }
        for segment in root.split(|c| self.is_separator(c)).filter(|s| !s.is_empty()) {
            path.push_str(&encode(segment));
            path.push('/');
        }
        let names: Vec<_> = names.iter().map(|name| encode(name.as_ref())).collect();
        path.push_str(&names.join("/"));

        let uri = Uri {
            authority: encode(fs_id).into_owned(),
            path,
        };
        trace!("built {} URI {uri}", self.style);
        Ok(uri)
    }

    pub fn result_to_uri(&self, fs_id: &str, path: &ParseResult) -> Result<Uri, UriError> {
        self.to_uri(fs_id, path.root(), path.names())
    }

    /// Recover the root and names from a URI built by [`PathType::to_uri`]
    ///
    /// Decoded names are checked against this style's rules, as if they had
    /// been parsed from a path string.
    ///
    /// ```
    /// use path_syntax::{Uri, WINDOWS};
    ///
    /// let uri: Uri = "jimfs://foo//host/share/My%20Documents".parse().unwrap();
    /// let path = WINDOWS.from_uri(&uri).unwrap();
    /// assert_eq!(path.root(), Some("\\\\host\\share\\"));
    /// assert_eq!(path.names(), ["My Documents"]);
    /// ```
    #[allow(clippy::wrong_self_convention)]
    pub fn from_uri(&self, uri: &Uri) -> Result<ParseResult, UriError> {
        self.from_uri_inner(uri)
            .inspect_err(|e| debug!("rejected {} URI {uri}: {e}", self.style))
    }

    fn from_uri_inner(&self, uri: &Uri) -> Result<ParseResult, UriError> {
        let decoded = uri.path().into_owned();
        let raw = uri.raw_path();
        let sep = self.separator;

        // The path always starts with '/', so the first piece is empty
        let mut segments = raw.split('/').skip(1);

        let root = if self.unc && raw.starts_with("//") {
            segments.next();
            let host = decode(segments.next().unwrap_or(""))?;
            let share = decode(segments.next().unwrap_or(""))?;
            let malformed = |missing| PathError::MalformedUnc {
                input: decoded.clone(),
                missing,
            };
            if host.is_empty() {
                return Err(malformed(UncPart::Host).into());
            }
            if share.is_empty() {
                return Err(malformed(UncPart::Share).into());
            }
            self.rules().check(&decoded, &host)?;
            self.rules().check(&decoded, &share)?;
            format!("{sep}{sep}{host}{sep}{share}{sep}")
        } else if self.drives {
            let drive = decode(segments.next().unwrap_or(""))?;
            match drive.as_bytes() {
                [letter, b':'] if letter.is_ascii_alphabetic() => format!("{drive}{sep}"),
                _ => return Err(UriError::MissingDrive { path: decoded }),
            }
        } else {
            sep.to_string()
        };

        let mut names = Vec::new();
        for segment in segments.filter(|s| !s.is_empty()) {
            let name = decode(segment)?;
            self.rules().check(&decoded, &name)?;
            names.push(name);
        }

        Ok(ParseResult::new(Some(root), names))
    }

    fn is_unc_root(&self, root: &str) -> bool {
        let mut chars = root.chars();
        self.unc
            && chars.next().is_some_and(|c| self.is_separator(c))
            && chars.next().is_some_and(|c| self.is_separator(c))
    }
}
