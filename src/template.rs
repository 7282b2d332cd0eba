//! Page templates and placeholder substitution.
//!
//! The placeholder contract is literal: the four tokens below are
//! replaced by substring substitution, each appearing at most once in a
//! template, and a token that does not appear makes the substitution a
//! no-op. Any other `{{...}}`-shaped text passes through untouched.

use std::path::Path;

/// Replaced with the release tag.
pub const TAG_NAME: &str = "{{TAG_NAME}}";

/// Replaced with the human-readable release name.
pub const RELEASE_NAME: &str = "{{RELEASE_NAME}}";

/// Replaced with the concatenated platform cards.
pub const DOWNLOAD_SECTIONS: &str = "{{DOWNLOAD_SECTIONS}}";

/// Replaced with the checksum listing.
pub const CHECKSUMS: &str = "{{CHECKSUMS}}";

/// A loaded page template.
pub struct Template {
    contents: String,
}

impl Template {
    /// Wraps already-loaded template text.
    pub fn new(contents: String) -> Template {
        Template { contents }
    }

    /// Reads the template from disk. A missing or unreadable template is
    /// the one fatal input error in a page build; the caller decides how
    /// to report it.
    pub fn from_file(path: &Path) -> std::io::Result<Template> {
        Ok(Template {
            contents: std::fs::read_to_string(path)?,
        })
    }

    /// Substitutes the four placeholders and returns the rendered page.
    /// No escaping is applied to the injected values; callers are trusted
    /// to supply content-safe strings.
    pub fn render(
        &self,
        tag_name: &str,
        release_name: &str,
        download_sections: &str,
        checksums: &str,
    ) -> String {
        self.contents
            .replace(TAG_NAME, tag_name)
            .replace(RELEASE_NAME, release_name)
            .replace(DOWNLOAD_SECTIONS, download_sections)
            .replace(CHECKSUMS, checksums)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn template(contents: &str) -> Template {
        Template::new(contents.to_owned())
    }

    #[test]
    fn test_render_substitutes_all_four() {
        let rendered = template(
            "<h1>{{RELEASE_NAME}} {{TAG_NAME}}</h1>{{DOWNLOAD_SECTIONS}}{{CHECKSUMS}}",
        )
        .render("v1.0", "First Release", "<div>d</div>", "<div>c</div>");
        assert_eq!(
            "<h1>First Release v1.0</h1><div>d</div><div>c</div>",
            rendered
        );
    }

    #[test]
    fn test_render_empty_values_remove_tokens_only() {
        let rendered = template(
            "a {{TAG_NAME}}b{{RELEASE_NAME}} c {{DOWNLOAD_SECTIONS}}d{{CHECKSUMS}}e",
        )
        .render("", "", "", "");
        assert_eq!("a b c de", rendered);
    }

    #[test]
    fn test_render_missing_placeholder_is_noop() {
        assert_eq!(
            "no placeholders here",
            template("no placeholders here").render("v1.0", "r", "d", "c")
        );
    }

    #[test]
    fn test_render_leaves_other_tokens_untouched() {
        assert_eq!(
            "{{OTHER}} {{tag_name}} v1.0",
            template("{{OTHER}} {{tag_name}} {{TAG_NAME}}")
                .render("v1.0", "r", "d", "c")
        );
    }

    #[test]
    fn test_from_file_missing_is_error() {
        assert!(Template::from_file(Path::new("/no/such/template.html")).is_err());
    }
}
