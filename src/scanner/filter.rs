use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose extension is in the list (compared without the dot).
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    #[must_use]
    pub const fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
