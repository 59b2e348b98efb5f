//! Error types for loading menus and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;

/// Errors that can occur while loading a menu or building a config.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Menu file not found.
    #[error("Menu not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed menu payload.
    #[error("Malformed menu payload: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl MenuError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_error_io_not_found() {
        let err = MenuError::io(
            "/menus/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, MenuError::NotFound { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_menu_error_io_other() {
        let err = MenuError::io(
            "/menus/menu.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, MenuError::Io { .. }));
    }

    #[test]
    fn test_menu_error_from_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MenuError::from(source);
        assert!(err.to_string().starts_with("Malformed menu payload"));
    }
}
