//! Frontend-only types.
//!
//! Domain types (file records, navigation targets, ...) come from the
//! `filechain` core crate; this module only holds what the browser layer
//! adds on top.

use std::fmt;

use filechain::{MediaKind, NavigationTarget};

// =============================================================================
// Icons
// =============================================================================

/// Sidebar icon for a navigation target.
pub fn nav_icon(target: NavigationTarget) -> &'static str {
    match target {
        NavigationTarget::Dashboard => "📊",
        NavigationTarget::Upload => "📤",
        NavigationTarget::Verify => "✅",
        NavigationTarget::History => "🕒",
        NavigationTarget::Profile => "👤",
    }
}

/// Table icon for a file's media kind.
pub fn media_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Document => "📄",
        MediaKind::Image => "🖼️",
        MediaKind::Video => "🎞️",
        MediaKind::Audio => "🎵",
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// The file picker did not behave as expected.
    FileInput(String),
    /// A DOM node was missing.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileInput(msg) => write!(f, "File input error: {}", msg),
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_target_has_distinct_icon() {
        let mut icons: Vec<_> = NavigationTarget::ALL.iter().map(|t| nav_icon(*t)).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), NavigationTarget::ALL.len());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Dom("dropzone-file".into());
        assert_eq!(err.to_string(), "DOM error: dropzone-file");
    }
}
