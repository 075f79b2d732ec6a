use crate::error::ConfigError;
use crate::gallery::{Gallery, ShapeKind, Strategy};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What the demo driver should draw and how.
///
/// ```toml
/// strategy = "explicit"
/// shapes = ["circle", "blue_circle_with_text"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "canonical_shapes")]
    pub shapes: Vec<ShapeKind>,
}

fn canonical_shapes() -> Vec<ShapeKind> {
    ShapeKind::ALL.to_vec()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            shapes: canonical_shapes(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        debug!(path = %path.display(), "loaded demo config");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyGallery);
        }
        Ok(())
    }

    pub fn gallery(&self) -> Result<Gallery, ConfigError> {
        self.validate()?;
        Ok(Gallery::new(self.strategy, &self.shapes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_canonical_embedded() {
        let config = DemoConfig::default();
        assert_eq!(config.strategy, Strategy::Embedded);
        assert_eq!(config.shapes, ShapeKind::ALL.to_vec());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_parse_strategy_and_shapes() {
        let config = DemoConfig::from_toml_str(
            r#"
            strategy = "native"
            shapes = ["red_rectangle", "base"]
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, Strategy::Native);
        assert_eq!(config.shapes, vec![ShapeKind::RedRectangle, ShapeKind::Base]);
    }

    #[test]
    fn test_unknown_shape_is_parse_error() {
        let err = DemoConfig::from_toml_str(r#"shapes = ["triangle"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = DemoConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_shapes_rejected() {
        let err = DemoConfig::from_toml_str("shapes = []").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyGallery));
    }

    #[test]
    fn test_from_file_builds_gallery() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"explicit\"").unwrap();
        writeln!(file, "shapes = [\"blue_circle_with_text\"]").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        let gallery = config.gallery().unwrap();
        assert_eq!(gallery.strategy(), Strategy::Explicit);
        assert_eq!(
            gallery.render_to_string().unwrap(),
            "Circle-Blue-TextAnnotation\n"
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = DemoConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
