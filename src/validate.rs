//! Name validation rules
//!
//! Each style carries a [`NameRules`] table. The parser and the URI decoder
//! both check every name against it, so a name that could not have been
//! typed can't come back in through a URI either.

use crate::error::{NameViolation, PathError, Result};
use crate::style::PathType;
use std::ops::RangeInclusive;

/// Characters and names a style forbids in a single path name
#[derive(Debug)]
pub(crate) struct NameRules {
    /// Characters forbidden anywhere in a name
    pub(crate) illegal: &'static [char],
    /// Control range forbidden anywhere in a name
    pub(crate) control: Option<RangeInclusive<char>>,
    /// Characters a name may not end with (`.` and `..` are exempt)
    pub(crate) trailing: &'static [char],
    /// Device names, compared ASCII case-insensitively against the base name
    pub(crate) reserved: &'static [&'static str],
}

/// Win32 file naming conventions
pub(crate) static WINDOWS_NAMES: NameRules = NameRules {
    illegal: &['<', '>', ':', '"', '/', '\\', '|', '?', '*'],
    control: Some('\u{0}'..='\u{1f}'),
    trailing: &[' ', '.'],
    reserved: &[
        "CON", "PRN", "AUX", "NUL", "COM0", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6",
        "COM7", "COM8", "COM9", "COM¹", "COM²", "COM³", "LPT0", "LPT1", "LPT2", "LPT3", "LPT4",
        "LPT5", "LPT6", "LPT7", "LPT8", "LPT9", "LPT¹", "LPT²", "LPT³",
    ],
};

pub(crate) static POSIX_NAMES: NameRules = NameRules {
    illegal: &['/', '\0'],
    control: None,
    trailing: &[],
    reserved: &[],
};

impl NameRules {
    fn is_illegal(&self, c: char) -> bool {
        self.illegal.contains(&c) || self.control.as_ref().is_some_and(|r| r.contains(&c))
    }

    /// `CON`, `con.txt` and `Con .log` all have the base name `CON`
    fn is_reserved(&self, name: &str) -> bool {
        let base = name.split('.').next().unwrap_or("").trim_end_matches(' ');
        self.reserved.iter().any(|r| r.eq_ignore_ascii_case(base))
    }

    /// Check one name, reporting `input` as the path it came from
    pub(crate) fn check(&self, input: &str, name: &str) -> Result<()> {
        let illegal = |violation| PathError::IllegalCharacter {
            input: input.to_string(),
            segment: name.to_string(),
            violation,
        };

        if let Some(c) = name.chars().find(|&c| self.is_illegal(c)) {
            return Err(illegal(NameViolation::Illegal(c)));
        }

        if name != "." && name != ".." {
            if let Some(c) = name.chars().last().filter(|c| self.trailing.contains(c)) {
                return Err(illegal(NameViolation::Trailing(c)));
            }
        }

        if self.is_reserved(name) {
            return Err(PathError::ReservedName {
                input: input.to_string(),
                segment: name.to_string(),
            });
        }

        Ok(())
    }
}

impl PathType {
    /// Validate a single name against this style's rules
    ///
    /// # Examples
    /// ```
    /// use path_syntax::{PathError, WINDOWS};
    ///
    /// assert!(WINDOWS.check_name("report.txt").is_ok());
    /// assert!(matches!(
    ///     WINDOWS.check_name("what?"),
    ///     Err(PathError::IllegalCharacter { .. })
    /// ));
    /// assert!(matches!(
    ///     WINDOWS.check_name("nul.txt"),
    ///     Err(PathError::ReservedName { .. })
    /// ));
    /// ```
    pub fn check_name(&self, name: &str) -> Result<()> {
        self.rules().check(name, name)
    }

    /// Check if a name is acceptable to this style
    ///
    /// ```
    /// use path_syntax::{POSIX, WINDOWS};
    ///
    /// assert!(POSIX.is_valid_name("what?"));
    /// assert!(!WINDOWS.is_valid_name("what?"));
    /// ```
    pub fn is_valid_name(&self, name: &str) -> bool {
        self.check_name(name).is_ok()
    }
}
