//! Property test generators for path syntax
//!
//! Strategies for names, roots and whole path strings in both styles,
//! including separator noise and names that each style must reject.

use proptest::prelude::*;

/// Generators for path testing scenarios
pub struct PathGenerators;

impl PathGenerators {
    /// Names every style accepts
    pub fn name() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => "[a-zA-Z0-9_][a-zA-Z0-9_ .-]{0,12}[a-zA-Z0-9_]",
            1 => "[a-zA-Z0-9_]",
            1 => Just("..".to_string()),
            1 => Just(".".to_string()),
            1 => Just("My Documents".to_string()),
            1 => Just("файл.txt".to_string()),
            1 => Just("100%".to_string()),
        ]
        .prop_filter("Not a device name", |s| {
            let base = s.split('.').next().unwrap_or("").trim_end().to_uppercase();
            !matches!(base.as_str(), "CON" | "PRN" | "AUX" | "NUL")
                && !((base.starts_with("COM") || base.starts_with("LPT")) && base.len() == 4)
        })
    }

    /// A separator Windows accepts on input
    pub fn windows_separator() -> impl Strategy<Value = char> {
        prop_oneof![Just('\\'), Just('/')]
    }

    /// Windows roots, in canonical form
    pub fn windows_root() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Za-z]".prop_map(|letter| format!("{letter}:\\")),
            (Self::name(), Self::name()).prop_filter_map("Dot UNC components", |(host, share)| {
                (host != "." && host != ".." && share != "." && share != "..")
                    .then(|| format!("\\\\{host}\\{share}\\"))
            }),
        ]
    }

    /// Windows path strings with random separators, repeated separators and trailing separators
    pub fn windows_path() -> impl Strategy<Value = String> {
        (
            prop::option::of(Self::windows_root()),
            prop::collection::vec((Self::name(), Self::windows_separator(), 1usize..=2), 0..=5),
            prop::bool::ANY,
        )
            .prop_map(|(root, names, trailing)| {
                let mut path = root.unwrap_or_default();
                let count = names.len();
                for (i, (name, separator, repeat)) in names.into_iter().enumerate() {
                    path.push_str(&name);
                    if i + 1 < count || trailing {
                        for _ in 0..repeat {
                            path.push(separator);
                        }
                    }
                }
                path
            })
    }

    /// Absolute Windows path strings
    pub fn absolute_windows_path() -> impl Strategy<Value = String> {
        (Self::windows_root(), prop::collection::vec(Self::name(), 0..=5))
            .prop_map(|(root, names)| format!("{root}{}", names.join("\\")))
    }

    /// POSIX path strings, absolute or relative
    pub fn posix_path() -> impl Strategy<Value = String> {
        (
            0usize..=2,
            prop::collection::vec("[^/\\x00]{1,10}", 0..=5),
            prop::bool::ANY,
        )
            .prop_map(|(leading, names, trailing)| {
                let mut path = "/".repeat(leading);
                path.push_str(&names.join("/"));
                if trailing {
                    path.push('/');
                }
                path
            })
    }

    /// Inputs Windows must reject, whatever the reason
    pub fn invalid_windows_path() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("\\\\".to_string()),
            Just("//host".to_string()),
            Just("\\\\host\\".to_string()),
            Just("C:".to_string()),
            Just("C:foo\\bar".to_string()),
            Just("\\foo\\bar".to_string()),
            Just("\\".to_string()),
            Just("foo<bar".to_string()),
            Just("foo?".to_string()),
            Just("foo ".to_string()),
            Just("foo \\bar".to_string()),
            Just("dir\\file.".to_string()),
            Just("C:\\CON".to_string()),
            Just("lpt1.txt".to_string()),
            (Self::name(), prop::sample::select(vec!['<', '>', ':', '"', '|', '?', '*', '\u{1}']))
                .prop_map(|(name, c)| format!("{name}{c}")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathError, POSIX, WINDOWS};

    proptest! {
        #[test]
        fn generated_names_are_valid(name in PathGenerators::name()) {
            prop_assert!(WINDOWS.is_valid_name(&name), "{:?}", name);
            prop_assert!(POSIX.is_valid_name(&name), "{:?}", name);
        }

        #[test]
        fn generated_windows_paths_parse(path in PathGenerators::windows_path()) {
            prop_assert!(WINDOWS.parse_path(&path).is_ok(), "{:?}", path);
        }

        #[test]
        fn generated_invalid_paths_fail(path in PathGenerators::invalid_windows_path()) {
            prop_assert!(WINDOWS.parse_path(&path).is_err(), "{:?}", path);
        }

        #[test]
        fn generated_absolute_paths_round_trip_through_uri(
            path in PathGenerators::absolute_windows_path()
        ) {
            let parsed = WINDOWS.parse_path(&path).unwrap();
            prop_assert_eq!(WINDOWS.render_result(&parsed), path.clone());
            let uri = WINDOWS.result_to_uri("gen", &parsed).unwrap();
            prop_assert_eq!(WINDOWS.from_uri(&uri).unwrap(), parsed);
        }

        #[test]
        fn generated_posix_paths_parse(path in PathGenerators::posix_path()) {
            let parsed = POSIX.parse_path(&path).unwrap();
            prop_assert_eq!(parsed.is_absolute(), path.starts_with('/'));
        }

        /// Every character of the rule table is rejected, whatever name it lands in
        #[test]
        fn windows_illegal_characters_rejected(
            name in PathGenerators::name(),
            c in prop::sample::select(vec!['<', '>', ':', '"', '|', '?', '*']),
            at in 0usize..16,
        ) {
            let mut chars: Vec<char> = name.chars().collect();
            let at = at.min(chars.len());
            chars.insert(at, c);
            let candidate: String = chars.into_iter().collect();

            let is_illegal = matches!(
                WINDOWS.check_name(&candidate),
                Err(PathError::IllegalCharacter { .. })
            );
            prop_assert!(is_illegal, "{:?}", candidate);
        }
    }

    #[test]
    fn windows_rule_table_covers_ascii() {
        for byte in 0u8..0x80 {
            let c = char::from(byte);
            let name = format!("a{c}b");
            let expected_illegal = byte < 0x20 || "<>:\"/\\|?*".contains(c);
            assert_eq!(
                !WINDOWS.is_valid_name(&name),
                expected_illegal,
                "U+{byte:04X} in {name:?}"
            );
        }
    }

    #[test]
    fn posix_rule_table_covers_ascii() {
        for byte in 0u8..0x80 {
            let c = char::from(byte);
            let name = format!("a{c}");
            let expected_illegal = c == '/' || c == '\0';
            assert_eq!(!POSIX.is_valid_name(&name), expected_illegal, "U+{byte:04X}");
        }
    }

    #[test]
    fn windows_trailing_characters_rejected() {
        for byte in 0x20u8..0x80 {
            let c = char::from(byte);
            if "<>:\"/\\|?*".contains(c) {
                continue;
            }
            let name = format!("ab{c}");
            assert_eq!(
                WINDOWS.is_valid_name(&name),
                c != ' ' && c != '.',
                "{name:?}"
            );
        }
    }
}
