//! Strip Options
//!
//! Settings for one strip run, optionally loaded from a JSON file:
//!
//! ```json
//! {
//!   "targetModule": "@angular/core",
//!   "decoratorFactories": ["Component", "Directive", "Injectable", "NgModule", "Pipe"],
//!   "strictImportBinding": false,
//!   "placeholderStyle": "collapseLines"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::strip::{PlaceholderStyle, StripError};

/// Module whose imports activate stripping.
pub const ANGULAR_CORE_MODULE: &str = "@angular/core";

/// Decorator factories whose metadata is stripped.
pub const ANGULAR_DECORATOR_FACTORIES: [&str; 5] =
    ["Component", "Directive", "Injectable", "NgModule", "Pipe"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StripOptions {
    pub target_module: String,
    /// Local import names treated as decorator factories.
    pub decorator_factories: Vec<String>,
    /// Only collect specifiers of imports from `target_module` itself.
    pub strict_import_binding: bool,
    pub placeholder_style: PlaceholderStyle,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            target_module: ANGULAR_CORE_MODULE.to_string(),
            decorator_factories: ANGULAR_DECORATOR_FACTORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            strict_import_binding: false,
            placeholder_style: PlaceholderStyle::default(),
        }
    }
}

impl StripOptions {
    pub fn load(path: &Path) -> Result<Self, StripError> {
        let content = fs::read_to_string(path).map_err(|source| StripError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    pub fn from_json(path: &Path, content: &str) -> Result<Self, StripError> {
        serde_json::from_str(content).map_err(|source| StripError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_decorator_factory(&self, name: &str) -> bool {
        self.decorator_factories.iter().any(|factory| factory == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_angular_core_factories() {
        let options = StripOptions::default();
        assert_eq!(options.target_module, "@angular/core");
        for name in ANGULAR_DECORATOR_FACTORIES {
            assert!(options.is_decorator_factory(name));
        }
        assert!(!options.is_decorator_factory("Input"));
        assert!(!options.strict_import_binding);
        assert_eq!(options.placeholder_style, PlaceholderStyle::CollapseLines);
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let options =
            StripOptions::from_json(Path::new("ngo.json"), r#"{ "strictImportBinding": true }"#)
                .unwrap();
        assert!(options.strict_import_binding);
        assert_eq!(options.target_module, ANGULAR_CORE_MODULE);
        assert_eq!(options.decorator_factories.len(), 5);
    }

    #[test]
    fn should_reject_unknown_fields() {
        let err = StripOptions::from_json(Path::new("ngo.json"), r#"{ "targetModul": "x" }"#)
            .unwrap_err();
        assert!(matches!(err, StripError::ConfigParse { .. }));
    }
}
