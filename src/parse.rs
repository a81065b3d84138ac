//! Path string parsing
//!
//! [`PathType::parse_path`] splits a raw path string into an optional root and
//! a list of names. Roots are normalized to the style's primary separator;
//! names are checked against the style's rule table.

use crate::error::{PathError, Result, UncPart};
use crate::style::PathType;
use log::{debug, trace};

/// A parsed path: an optional root followed by zero or more names
///
/// No name is empty or contains a separator. A drive root looks like `C:\`,
/// a UNC root like `\\host\share\`, a POSIX root is `/`. `root` is `None` for
/// relative paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    root: Option<String>,
    names: Vec<String>,
}

impl ParseResult {
    pub(crate) fn new(root: Option<String>, names: Vec<String>) -> Self {
        ParseResult { root, names }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// A root with no names
    pub fn is_root(&self) -> bool {
        self.root.is_some() && self.names.is_empty()
    }

    /// The empty relative path, as parsed from `""`
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.names.is_empty()
    }

    pub fn into_parts(self) -> (Option<String>, Vec<String>) {
        (self.root, self.names)
    }
}

impl PathType {
    /// Parse a raw path string
    ///
    /// Alternate separators are accepted and normalized away. Repeated and
    /// trailing separators are ignored.
    ///
    /// # Examples
    /// ```
    /// use path_syntax::WINDOWS;
    ///
    /// let path = WINDOWS.parse_path("C:\\Users/me\\").unwrap();
    /// assert_eq!(path.root(), Some("C:\\"));
    /// assert_eq!(path.names(), ["Users", "me"]);
    ///
    /// assert!(WINDOWS.parse_path("C:foo").is_err());
    /// ```
    pub fn parse_path(&self, raw: &str) -> Result<ParseResult> {
        self.parse_inner(raw)
            .inspect(|result| trace!("parsed {} path {raw:?} as {result:?}", self.style))
            .inspect_err(|e| debug!("rejected {} path: {e}", self.style))
    }

    /// Join the non-empty parts with the primary separator and parse the result
    ///
    /// ```
    /// use path_syntax::WINDOWS;
    ///
    /// let path = WINDOWS.parse_paths("C:\\", &["foo", "", "bar"]).unwrap();
    /// assert_eq!(WINDOWS.render_result(&path), "C:\\foo\\bar");
    /// ```
    pub fn parse_paths(&self, first: &str, more: &[&str]) -> Result<ParseResult> {
        let separator = self.separator.to_string();
        let joined = std::iter::once(first)
            .chain(more.iter().copied())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(separator.as_str());
        self.parse_path(&joined)
    }

    fn parse_inner(&self, raw: &str) -> Result<ParseResult> {
        let (root, rest) = self.split_root(raw)?;

        let mut names = Vec::new();
        for name in rest.split(|c| self.is_separator(c)) {
            if name.is_empty() {
                continue;
            }
            self.rules().check(raw, name)?;
            names.push(name.to_string());
        }

        Ok(ParseResult::new(root, names))
    }

    /// Split off the root, returning it normalized along with the unparsed rest
    fn split_root<'a>(&self, raw: &'a str) -> Result<(Option<String>, &'a str)> {
        let mut chars = raw.chars();
        let first = chars.next();
        let second = chars.next();

        if let (true, Some(a), Some(b)) = (self.unc, first, second) {
            if self.is_separator(a) && self.is_separator(b) {
                let body = &raw[a.len_utf8() + b.len_utf8()..];
                let (root, rest) = self.split_unc(raw, body)?;
                return Ok((Some(root), rest));
            }
        }

        if let (true, Some(letter), Some(':')) = (self.drives, first, second) {
            if letter.is_ascii_alphabetic() {
                return match chars.next() {
                    Some(c) if self.is_separator(c) => {
                        let root = format!("{letter}:{}", self.separator);
                        Ok((Some(root), &raw[2 + c.len_utf8()..]))
                    }
                    _ => Err(PathError::DriveRelativeUnsupported {
                        input: raw.to_string(),
                    }),
                };
            }
        }

        match first {
            Some(c) if self.is_separator(c) => {
                if self.drives {
                    Err(PathError::RootlessAbsoluteUnsupported {
                        input: raw.to_string(),
                    })
                } else {
                    Ok((Some(self.separator.to_string()), &raw[c.len_utf8()..]))
                }
            }
            _ => Ok((None, raw)),
        }
    }

    /// `body` is everything after the two leading separators
    fn split_unc<'a>(&self, raw: &str, body: &'a str) -> Result<(String, &'a str)> {
        let malformed = |missing| PathError::MalformedUnc {
            input: raw.to_string(),
            missing,
        };
        let is_sep = |c: char| self.is_separator(c);

        let (host, after_host) = body.split_once(is_sep).unwrap_or((body, ""));
        if host.is_empty() {
            return Err(malformed(UncPart::Host));
        }
        let (share, rest) = after_host.split_once(is_sep).unwrap_or((after_host, ""));
        if share.is_empty() {
            return Err(malformed(UncPart::Share));
        }

        self.rules().check(raw, host)?;
        self.rules().check(raw, share)?;

        let sep = self.separator;
        Ok((format!("{sep}{sep}{host}{sep}{share}{sep}"), rest))
    }
}
