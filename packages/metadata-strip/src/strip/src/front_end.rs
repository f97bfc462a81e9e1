//! Front End
//!
//! Thin wrapper over oxc: parses one source file and builds the scoping
//! information used to resolve identifier references to their bindings.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_semantic::{Scoping, SemanticBuilder};
use oxc_span::SourceType;

use super::error::StripError;
use crate::logging::Logger;

/// Parse `source` into a program owned by `allocator`.
///
/// Any syntax error is fatal: a partially recovered tree could produce spans
/// that do not correspond to what the author wrote.
pub fn parse_program<'a>(
    allocator: &'a Allocator,
    file_name: &str,
    source: &'a str,
    source_type: SourceType,
) -> Result<Program<'a>, StripError> {
    let ret = Parser::new(allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let mut messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        if messages.is_empty() {
            messages.push("parser aborted".to_string());
        }
        return Err(StripError::Parse {
            file_name: file_name.to_string(),
            messages,
        });
    }

    Ok(ret.program)
}

/// Run semantic analysis over `program`.
///
/// Besides returning the scoping tables this fills in the symbol and reference
/// ids on the program's identifiers, so it must run before any binding lookup.
pub fn build_scoping(program: &Program<'_>, logger: &dyn Logger) -> Scoping {
    let ret = SemanticBuilder::new()
        .with_excess_capacity(0.0)
        .build(program);

    if !ret.errors.is_empty() {
        logger.debug(&format!(
            "semantic analysis reported {} diagnostic(s); continuing",
            ret.errors.len()
        ));
    }

    ret.semantic.into_scoping()
}
