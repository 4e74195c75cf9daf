//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name. The CLI resolves `--format` through here,
//! which is also where third-party formats can be plugged in.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::format::Format;
use crate::formats::{AnsiFormat, HtmlFormat};
use crate::renderer::render_with;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let out = registry.render("**hi**", "ansi")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, RenderError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| RenderError::UnknownFormat(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render source text with the named format
    pub fn render(&self, source: &str, format: &str) -> Result<String, RenderError> {
        render_with(source, self.get(format)?)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat);
        registry.register(AnsiFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Marker;
    use crate::format::LineContext;

    // Drops all markup, keeps text
    struct PlainFormat;
    impl Format for PlainFormat {
        fn name(&self) -> &str {
            "plain"
        }
        fn open_span(&self, _marker: Marker, _out: &mut String) {}
        fn close_span(&self, _marker: Marker, _out: &mut String) {}
        fn fence_open(&self, _out: &mut String) {}
        fn fence_close(&self, _out: &mut String) {}
        fn blank(&self, out: &mut String) {
            out.push('\n');
        }
        fn text(&self, line: &str, _context: &LineContext, out: &mut String) {
            self.inlines(line, out);
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(PlainFormat);

        assert!(registry.has("plain"));
        assert_eq!(registry.list_formats(), vec!["plain"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(RenderError::UnknownFormat(name)) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected UnknownFormat error"),
        }
    }

    #[test]
    fn test_registry_render_custom_format() {
        let mut registry = FormatRegistry::new();
        registry.register(PlainFormat);

        let out = registry.render("**a** and _b_\n\nc", "plain").unwrap();
        assert_eq!(out, "a and b\nc");
    }

    #[test]
    fn test_registry_render_not_found() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.render("x", "pdf"),
            Err(RenderError::UnknownFormat("pdf".to_string()))
        );
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["ansi", "html"]);
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(HtmlFormat);

        assert_eq!(registry.list_formats().len(), 2);
    }
}
