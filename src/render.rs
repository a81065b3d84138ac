//! Canonical string rendering

use crate::parse::ParseResult;
use crate::style::PathType;

impl PathType {
    /// Render a root and names using only the primary separator
    ///
    /// The root already ends in a separator, so names follow it directly.
    /// Nothing is validated here.
    ///
    /// # Examples
    /// ```
    /// use path_syntax::WINDOWS;
    ///
    /// assert_eq!(WINDOWS.render(Some("C:\\"), &["foo", "bar"]), "C:\\foo\\bar");
    /// assert_eq!(WINDOWS.render(None, &["foo", "bar"]), "foo\\bar");
    /// ```
    pub fn render<S: AsRef<str>>(&self, root: Option<&str>, names: &[S]) -> String {
        let mut rendered = String::from(root.unwrap_or(""));
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                rendered.push(self.separator);
            }
            rendered.push_str(name.as_ref());
        }
        rendered
    }

    pub fn render_result(&self, path: &ParseResult) -> String {
        self.render(path.root(), path.names())
    }
}
