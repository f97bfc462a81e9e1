//! Import Locator
//!
//! Finds the import bindings that denote Angular decorator factories.
//! Matching later happens on the binding's symbol, never on its name.

use indexmap::IndexMap;
use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, Program, Statement};
use oxc_semantic::Scoping;
use oxc_syntax::symbol::SymbolId;

use crate::config::StripOptions;

/// A named import binding, e.g. `Component` in `import { Component } from '@angular/core'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Local name the binding is visible under.
    pub local_name: String,
    /// Module specifier of the declaration the binding came from.
    pub module_specifier: String,
    /// Identity of the binding.
    pub symbol_id: SymbolId,
}

/// The set of bindings considered decorator factories, keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct AngularBindingSet {
    bindings: IndexMap<SymbolId, ImportBinding>,
}

impl AngularBindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, binding: ImportBinding) {
        self.bindings.entry(binding.symbol_id).or_insert(binding);
    }

    pub fn contains(&self, symbol_id: SymbolId) -> bool {
        self.bindings.contains_key(&symbol_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportBinding> {
        self.bindings.values()
    }

    /// Local names in discovery order, for diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|b| b.local_name.as_str()).collect()
    }
}

fn is_target_module_import(decl: &ImportDeclaration<'_>, target_module: &str) -> bool {
    decl.source.value.as_str() == target_module
}

/// Collect decorator-factory bindings from the top-level imports of `program`.
///
/// Nothing is collected unless the file imports from the target module at
/// least once. Once it does, every named specifier in the file whose local name
/// is a decorator factory is collected, whichever module it comes from. With
/// `strict_import_binding` only the specifiers of the target-module imports are
/// considered.
///
/// A binding that is declared again in the same scope (`var Component = ...`
/// next to the import) is skipped. Semantic analysis folds such declarations
/// into the import's symbol, so references to the local value would otherwise
/// match.
///
/// `scoping` must come from the semantic analysis of `program`.
pub fn locate_angular_imports(
    program: &Program<'_>,
    scoping: &Scoping,
    options: &StripOptions,
) -> AngularBindingSet {
    let imports: Vec<&ImportDeclaration<'_>> = program
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::ImportDeclaration(decl) => Some(&**decl),
            _ => None,
        })
        .collect();

    let mut set = AngularBindingSet::new();

    let activated = imports
        .iter()
        .any(|decl| is_target_module_import(decl, &options.target_module));
    if !activated {
        return set;
    }

    for decl in imports {
        if options.strict_import_binding && !is_target_module_import(decl, &options.target_module) {
            continue;
        }
        let Some(specifiers) = &decl.specifiers else {
            continue;
        };
        for spec in specifiers {
            let ImportDeclarationSpecifier::ImportSpecifier(spec) = spec else {
                continue;
            };
            let local_name = spec.local.name.as_str();
            if !options.is_decorator_factory(local_name) {
                continue;
            }
            // Unset only when semantic analysis has not run.
            let Some(symbol_id) = spec.local.symbol_id.get() else {
                continue;
            };
            if !scoping.symbol_redeclarations(symbol_id).is_empty() {
                continue;
            }
            set.insert(ImportBinding {
                local_name: local_name.to_string(),
                module_specifier: decl.source.value.to_string(),
                symbol_id,
            });
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NullLogger;
    use crate::strip::src::front_end::{build_scoping, parse_program};
    use oxc_allocator::Allocator;
    use oxc_span::SourceType;

    fn locate(source: &str, options: &StripOptions) -> Vec<(String, String)> {
        let allocator = Allocator::default();
        let program = parse_program(&allocator, "test.js", source, SourceType::mjs()).unwrap();
        let scoping = build_scoping(&program, &NullLogger::new());
        locate_angular_imports(&program, &scoping, options)
            .iter()
            .map(|b| (b.local_name.clone(), b.module_specifier.clone()))
            .collect()
    }

    fn pair(name: &str, module: &str) -> (String, String) {
        (name.to_string(), module.to_string())
    }

    #[test]
    fn should_collect_allow_listed_names_from_angular_core() {
        let found = locate(
            "import { Component, Input, NgModule } from '@angular/core';",
            &StripOptions::default(),
        );
        assert_eq!(
            found,
            vec![pair("Component", "@angular/core"), pair("NgModule", "@angular/core")]
        );
    }

    #[test]
    fn should_collect_nothing_without_an_angular_core_import() {
        let found = locate(
            "import { Component } from '@angular/common';\nimport { Pipe } from './pipe';",
            &StripOptions::default(),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn should_collect_matching_names_from_other_modules_once_activated() {
        let found = locate(
            "import { Pipe } from './local-pipe';\nimport { Injectable } from '@angular/core';",
            &StripOptions::default(),
        );
        assert_eq!(
            found,
            vec![pair("Pipe", "./local-pipe"), pair("Injectable", "@angular/core")]
        );
    }

    #[test]
    fn should_restrict_to_target_module_in_strict_mode() {
        let options = StripOptions {
            strict_import_binding: true,
            ..StripOptions::default()
        };
        let found = locate(
            "import { Pipe } from './local-pipe';\nimport { Injectable } from '@angular/core';",
            &options,
        );
        assert_eq!(found, vec![pair("Injectable", "@angular/core")]);
    }

    #[test]
    fn should_match_on_local_name_of_aliased_imports() {
        let found = locate(
            "import { Component as Cmp, Directive as Directive } from '@angular/core';",
            &StripOptions::default(),
        );
        assert_eq!(found, vec![pair("Directive", "@angular/core")]);
    }

    #[test]
    fn should_ignore_default_and_namespace_imports() {
        let found = locate(
            "import Component from '@angular/core';\nimport * as Directive from '@angular/core';",
            &StripOptions::default(),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn should_skip_factory_names_declared_again_locally() {
        for local in [
            "var Component = function () {};",
            "function Component() {}",
            "var Component;",
        ] {
            let source = format!(
                "import {{ Component, Injectable }} from '@angular/core';\n{}",
                local
            );
            let found = locate(&source, &StripOptions::default());
            assert_eq!(found, vec![pair("Injectable", "@angular/core")], "for {}", local);
        }
    }

    #[test]
    fn should_honor_configured_module_and_factories() {
        let options = StripOptions {
            target_module: "@acme/core".to_string(),
            decorator_factories: vec!["Widget".to_string()],
            ..StripOptions::default()
        };
        let found = locate(
            "import { Widget, Component } from '@acme/core';\nimport { Injectable } from '@angular/core';",
            &options,
        );
        assert_eq!(found, vec![pair("Widget", "@acme/core")]);
    }
}
