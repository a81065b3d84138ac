//! Path style configuration
//!
//! A [`PathType`] describes one path syntax: its separators, which kinds of
//! root it recognizes, and the rule table its names are checked against.
//! There is one `static` instance per [`Style`]; they are never mutated and
//! are shared by reference.

use crate::validate::{NameRules, POSIX_NAMES, WINDOWS_NAMES};
use std::fmt;
use std::str::FromStr;

/// The path syntaxes this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    /// Drive letters, UNC shares, `\` with `/` accepted on input
    Windows,
    /// A single `/` root and `/` separators
    Posix,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Windows => write!(f, "windows"),
            Style::Posix => write!(f, "posix"),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    /// Recognizes "windows", "posix" and "unix" (case-insensitive).
    ///
    /// ```
    /// use path_syntax::Style;
    ///
    /// assert_eq!("Windows".parse::<Style>().unwrap(), Style::Windows);
    /// assert_eq!("unix".parse::<Style>().unwrap(), Style::Posix);
    /// assert!("vms".parse::<Style>().is_err());
    /// ```
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Style::Windows),
            "posix" | "unix" => Ok(Style::Posix),
            _ => Err(format!("unknown path style: {s}")),
        }
    }
}

/// One path syntax
#[derive(Debug)]
pub struct PathType {
    pub(crate) style: Style,
    pub(crate) separator: char,
    pub(crate) other_separators: &'static [char],
    pub(crate) rules: &'static NameRules,
    /// `C:\` roots
    pub(crate) drives: bool,
    /// `\\host\share\` roots
    pub(crate) unc: bool,
}

/// Windows syntax: `C:\foo`, `\\host\share\foo`, relative `foo\bar`
pub static WINDOWS: PathType = PathType {
    style: Style::Windows,
    separator: '\\',
    other_separators: &['/'],
    rules: &WINDOWS_NAMES,
    drives: true,
    unc: true,
};

/// POSIX syntax: `/foo/bar`, relative `foo/bar`
pub static POSIX: PathType = PathType {
    style: Style::Posix,
    separator: '/',
    other_separators: &[],
    rules: &POSIX_NAMES,
    drives: false,
    unc: false,
};

impl PathType {
    /// The shared configuration for `style`
    pub fn for_style(style: Style) -> &'static PathType {
        match style {
            Style::Windows => &WINDOWS,
            Style::Posix => &POSIX,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// The separator emitted when rendering
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Separators accepted on input and never emitted
    pub fn other_separators(&self) -> &'static [char] {
        self.other_separators
    }

    pub fn is_separator(&self, c: char) -> bool {
        c == self.separator || self.other_separators.contains(&c)
    }

    pub(crate) fn rules(&self) -> &'static NameRules {
        self.rules
    }
}
