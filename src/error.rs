use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Dispatch errors
// =============================================================================

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("{shape} was never wired to itself; its vtable slot is empty")]
    Unwired { shape: &'static str },

    #[error("{shape} points at a shape that has already been dropped")]
    Dangling { shape: &'static str },

    #[error("failed to write to the output sink: {0}")]
    Io(#[from] io::Error),
}

impl DrawError {
    pub fn unwired(shape: &'static str) -> Self {
        Self::Unwired { shape }
    }

    pub fn dangling(shape: &'static str) -> Self {
        Self::Dangling { shape }
    }

    /// True for the two slot failures, false for sink failures.
    pub fn is_wiring_fault(&self) -> bool {
        matches!(self, Self::Unwired { .. } | Self::Dangling { .. })
    }
}

// =============================================================================
// Configuration errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config lists no shapes to draw")]
    EmptyGallery,
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwired_display_names_shape() {
        let error = DrawError::unwired("Circle");
        let display = format!("{}", error);
        assert!(display.contains("Circle"));
        assert!(display.contains("never wired"));
        assert!(error.is_wiring_fault());
    }

    #[test]
    fn test_io_error_is_not_wiring_fault() {
        let error: DrawError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(!error.is_wiring_fault());
        assert!(format!("{}", error).contains("closed"));
    }

    #[test]
    fn test_read_error_mentions_path() {
        let error = ConfigError::read(
            "missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let display = format!("{}", error);
        assert!(display.contains("missing.toml"));
        assert!(display.contains("no such file"));
    }
}
