//! Strip Pipeline
//!
//! Runs the stages for one file: parse, semantic analysis, import location,
//! planning, and finally the text rewrite.

use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_span::SourceType;

use super::error::StripError;
use super::front_end::{build_scoping, parse_program};
use super::imports::locate_angular_imports;
use super::planner::{plan_removals, RemovalPlan};
use super::rewriter::TextRewriter;
use crate::config::StripOptions;
use crate::logging::Logger;

/// Result of stripping one file.
#[derive(Debug, Clone)]
pub struct StripOutput {
    /// Rewritten source, same UTF-16 length as the input.
    pub code: String,
    /// The spans that were blanked, as byte ranges of the input.
    pub plan: RemovalPlan,
}

impl StripOutput {
    pub fn changed(&self) -> bool {
        !self.plan.is_empty()
    }
}

/// Source type for a file, by extension. Unknown extensions are treated as
/// JavaScript modules.
pub fn source_type_for_path(path: &Path) -> SourceType {
    SourceType::from_path(path).unwrap_or_else(|_| SourceType::mjs())
}

/// Compute the removal plan for `source` without rewriting it.
pub fn plan_source(
    file_name: &str,
    source: &str,
    source_type: SourceType,
    options: &StripOptions,
    logger: &dyn Logger,
) -> Result<RemovalPlan, StripError> {
    let allocator = Allocator::default();
    let program = parse_program(&allocator, file_name, source, source_type)?;
    let scoping = build_scoping(&program, logger);

    let bindings = locate_angular_imports(&program, &scoping, options);
    if !bindings.is_empty() {
        logger.debug(&format!(
            "{}: decorator factory bindings: {}",
            file_name,
            bindings.names().join(", ")
        ));
    }

    Ok(plan_removals(&program, &scoping, &bindings, logger))
}

/// Strip Angular decorator metadata from `source`.
pub fn strip_source(
    file_name: &str,
    source: &str,
    source_type: SourceType,
    options: &StripOptions,
    logger: &dyn Logger,
) -> Result<StripOutput, StripError> {
    let plan = plan_source(file_name, source, source_type, options, logger)?;
    let code = TextRewriter::new(source, options.placeholder_style).apply(&plan)?;

    logger.info(&format!(
        "{}: removed {} statement(s) and {} entr{}",
        file_name,
        plan.statement_count(),
        plan.entry_count(),
        if plan.entry_count() == 1 { "y" } else { "ies" }
    ));

    Ok(StripOutput { code, plan })
}

/// Read `path` and strip it.
pub fn strip_file(
    path: &Path,
    options: &StripOptions,
    logger: &dyn Logger,
) -> Result<StripOutput, StripError> {
    let source = fs::read_to_string(path).map_err(|source| StripError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path.to_string_lossy();
    strip_source(&file_name, &source, source_type_for_path(path), options, logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NullLogger;
    use crate::strip::src::rewriter::PlaceholderStyle;

    fn strip(source: &str, options: &StripOptions) -> StripOutput {
        strip_source("test.js", source, SourceType::mjs(), options, &NullLogger::new()).unwrap()
    }

    #[test]
    fn should_blank_whole_statement() {
        let source = "import { Component } from '@angular/core';\n\
                      class Foo {}\n\
                      Foo.decorators = [ { type: Component, args: [{selector:'x'}] } ];\n";
        let out = strip(source, &StripOptions::default());

        let statement = "Foo.decorators = [ { type: Component, args: [{selector:'x'}] } ];";
        let expected = source.replace(statement, &format!("{}\n", " ".repeat(statement.len() - 1)));
        assert_eq!(out.code, expected);
        assert_eq!(out.code.len(), source.len());
        assert!(out.changed());
    }

    #[test]
    fn should_preserve_line_count_when_requested() {
        let source = "import { Injectable } from '@angular/core';\n\
                      Svc.decorators = [\n  { type: Injectable },\n];\n\
                      console.log(Svc);\n";
        let collapsed = strip(source, &StripOptions::default());
        let preserved = strip(
            source,
            &StripOptions {
                placeholder_style: PlaceholderStyle::PreserveLines,
                ..StripOptions::default()
            },
        );

        assert_eq!(collapsed.code.len(), source.len());
        assert_eq!(preserved.code.len(), source.len());
        assert_eq!(preserved.code.lines().count(), source.lines().count());
        assert!(collapsed.code.lines().count() < source.lines().count());
        assert!(preserved.code.ends_with("\nconsole.log(Svc);\n"));
    }

    #[test]
    fn should_fail_on_syntax_error() {
        let err = strip_source(
            "bad.js",
            "import { Component } from '@angular/core'\nFoo.decorators = [",
            SourceType::mjs(),
            &StripOptions::default(),
            &NullLogger::new(),
        )
        .unwrap_err();
        assert!(matches!(err, StripError::Parse { .. }));
    }

    #[test]
    fn should_report_missing_file() {
        let err = strip_file(
            Path::new("/definitely/not/here/app.js"),
            &StripOptions::default(),
            &NullLogger::new(),
        )
        .unwrap_err();
        assert!(matches!(err, StripError::Io { .. }));
    }

    #[test]
    fn should_infer_source_type_from_extension() {
        assert!(source_type_for_path(Path::new("a.ts")).is_typescript());
        assert!(!source_type_for_path(Path::new("a.js")).is_typescript());
        assert!(source_type_for_path(Path::new("a.unknown")).is_module());
    }
}
