use tower_lsp::lsp_types::Url;

/// Explicit registration record for a completion provider: the
/// documents it applies to plus the character that triggers it.
pub struct ProviderRegistration {
    pub language: &'static str,
    pub schemes: &'static [&'static str],
    pub trigger: char,
}

/// The math completion provider: markdown documents on disk, untitled
/// buffers, and notebook cells, triggered on backslash.
pub const MATH_COMPLETION: ProviderRegistration = ProviderRegistration {
    language: "markdown",
    schemes: &["file", "untitled", "vscode-notebook-cell"],
    trigger: '\\',
};

impl ProviderRegistration {
    pub fn matches(&self, uri: &Url, language_id: &str) -> bool {
        language_id == self.language && self.schemes.contains(&uri.scheme())
    }
}
