//! Removal Planner
//!
//! Decides, per decorator statement, whether the whole statement or only some
//! of its entries go away. The planner never touches text; it only produces
//! spans for the rewriter.

use std::ops::Range;

use oxc_ast::ast::Program;
use oxc_semantic::Scoping;
use oxc_span::Span;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use super::decorators::{entry_span, DecoratorEntryResolver, DecoratorStatement};
use super::error::StripError;
use super::imports::AngularBindingSet;
use crate::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RemovalKind {
    /// The whole `Foo.decorators = [...]` statement.
    Statement,
    /// A single `{ type: X }` element of the array.
    Entry,
}

/// Byte range of one node to blank out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovalSpan {
    pub start: u32,
    pub end: u32,
    pub kind: RemovalKind,
}

impl RemovalSpan {
    pub fn new(span: Span, kind: RemovalKind) -> Self {
        Self {
            start: span.start,
            end: span.end,
            kind,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// All spans to remove from one file, in order of discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalPlan {
    spans: Vec<RemovalSpan>,
}

impl RemovalPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, spans: impl IntoIterator<Item = RemovalSpan>) {
        self.spans.extend(spans);
    }

    pub fn spans(&self) -> &[RemovalSpan] {
        &self.spans
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemovalSpan> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn statement_count(&self) -> usize {
        self.iter().filter(|s| s.kind == RemovalKind::Statement).count()
    }

    pub fn entry_count(&self) -> usize {
        self.iter().filter(|s| s.kind == RemovalKind::Entry).count()
    }

    /// The same plan with offsets counted in UTF-16 units of `source`, the
    /// unit JavaScript string indices use.
    pub fn to_utf16_offsets(&self, source: &str) -> Result<RemovalPlan, StripError> {
        let utf16_offset = |byte: u32| {
            source
                .get(..byte as usize)
                .map(|prefix| prefix.encode_utf16().count() as u32)
        };

        let spans = self
            .iter()
            .map(|span| match (utf16_offset(span.start), utf16_offset(span.end)) {
                (Some(start), Some(end)) => Ok(RemovalSpan {
                    start,
                    end,
                    kind: span.kind,
                }),
                _ => Err(StripError::InvalidSpan {
                    start: span.start,
                    end: span.end,
                    len: source.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RemovalPlan { spans })
    }
}

/// Plan removals for one decorator statement.
///
/// - any element that is not an object literal: nothing is removed
/// - every element is an Angular decorator: the whole statement is removed
/// - some are: exactly those elements are removed
/// - none are, or the array is empty: nothing is removed
pub fn plan_statement_removal(
    statement: &DecoratorStatement<'_, '_>,
    resolver: &DecoratorEntryResolver<'_>,
) -> SmallVec<[RemovalSpan; 4]> {
    if statement.object_entries().is_none() {
        return SmallVec::new();
    }

    let matching: SmallVec<[Span; 4]> = statement
        .entries()
        .filter(|element| resolver.is_angular_decorator(element))
        .map(entry_span)
        .collect();

    if matching.is_empty() {
        SmallVec::new()
    } else if matching.len() == statement.entry_count() {
        smallvec![RemovalSpan::new(statement.span(), RemovalKind::Statement)]
    } else {
        matching
            .into_iter()
            .map(|span| RemovalSpan::new(span, RemovalKind::Entry))
            .collect()
    }
}

/// Plan removals for every top-level decorator statement in `program`.
pub fn plan_removals(
    program: &Program<'_>,
    scoping: &Scoping,
    bindings: &AngularBindingSet,
    logger: &dyn Logger,
) -> RemovalPlan {
    let mut plan = RemovalPlan::new();

    if bindings.is_empty() {
        logger.debug("no decorator factory imports found; nothing to strip");
        return plan;
    }

    let resolver = DecoratorEntryResolver::new(scoping, bindings);
    for stmt in &program.body {
        let Some(statement) = DecoratorStatement::classify(stmt) else {
            continue;
        };

        let spans = plan_statement_removal(&statement, &resolver);
        let (decision, removed) = match spans.first().map(|s| s.kind) {
            None => ("kept", 0),
            Some(RemovalKind::Statement) => ("removing statement", statement.entry_count()),
            Some(RemovalKind::Entry) => ("removing entries", spans.len()),
        };
        logger.debug(&format!(
            "{}.decorators at {}..{}: {} ({} of {} entries)",
            statement.target_name(),
            statement.span().start,
            statement.span().end,
            decision,
            removed,
            statement.entry_count(),
        ));

        plan.extend(spans);
    }

    plan
}
