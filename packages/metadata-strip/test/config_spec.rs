//! Strip Options Tests
//!
//! Loading options from JSON files and their effect on a strip run.

use std::io::Write;

use angular_metadata_strip::{strip_source, NullLogger, PlaceholderStyle, StripError, StripOptions};
use oxc_span::SourceType;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn should_load_every_field() {
    let file = config_file(
        r#"{
            "targetModule": "@acme/core",
            "decoratorFactories": ["Widget", "Service"],
            "strictImportBinding": true,
            "placeholderStyle": "preserveLines"
        }"#,
    );
    let options = StripOptions::load(file.path()).unwrap();

    assert_eq!(options.target_module, "@acme/core");
    assert_eq!(options.decorator_factories, vec!["Widget", "Service"]);
    assert!(options.strict_import_binding);
    assert_eq!(options.placeholder_style, PlaceholderStyle::PreserveLines);
}

#[test]
fn should_load_empty_object_as_defaults() {
    let file = config_file("{}");
    assert_eq!(StripOptions::load(file.path()).unwrap(), StripOptions::default());
}

#[test]
fn should_report_invalid_json() {
    let file = config_file("{ targetModule: ");
    let err = StripOptions::load(file.path()).unwrap_err();
    assert!(matches!(err, StripError::ConfigParse { .. }));
}

#[test]
fn should_report_unknown_placeholder_style() {
    let file = config_file(r#"{ "placeholderStyle": "deleteEverything" }"#);
    assert!(StripOptions::load(file.path()).is_err());
}

#[test]
fn should_report_missing_file() {
    let err = StripOptions::load(std::path::Path::new("/definitely/not/here/ngo.json")).unwrap_err();
    assert!(matches!(err, StripError::ConfigRead { .. }));
    assert!(err.to_string().contains("ngo.json"));
}

#[test]
fn should_strip_custom_framework_metadata() {
    let file = config_file(r#"{ "targetModule": "@acme/core", "decoratorFactories": ["Widget"] }"#);
    let options = StripOptions::load(file.path()).unwrap();

    let source = "import { Widget } from '@acme/core';\n\
                  import { Component } from '@angular/core';\n\
                  A.decorators = [ { type: Widget } ];\n\
                  B.decorators = [ { type: Component } ];\n";
    let out = strip_source("custom.js", source, SourceType::mjs(), &options, &NullLogger::new()).unwrap();

    assert_eq!(out.plan.statement_count(), 1);
    assert!(out.code.contains("B.decorators = [ { type: Component } ];"));
    assert!(!out.code.contains("A.decorators"));
}
