//! Results handed back by the generator.

use std::path::PathBuf;

/// Result of generating artifacts for one or more entities
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written, in write order
    pub written: Vec<PathBuf>,
}

impl GenerateResult {
    /// Merge another result into this one, keeping write order.
    pub fn extend(&mut self, other: GenerateResult) {
        self.written.extend(other.written);
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the project root
    pub path: String,
    /// File content
    pub content: String,
}
