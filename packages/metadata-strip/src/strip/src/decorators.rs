//! Decorator Metadata Matching
//!
//! Recognizes the statements a decorator-downleveling compiler emits,
//!
//! ```js
//! Foo.decorators = [
//!   { type: Component, args: [{ selector: 'foo' }] },
//! ];
//! ```
//!
//! and decides which array entries reference an Angular decorator factory.

use oxc_ast::ast::{
    ArrayExpression, ArrayExpressionElement, AssignmentTarget, Expression, ExpressionStatement,
    IdentifierReference, ObjectExpression, ObjectProperty, ObjectPropertyKind, PropertyKey,
    PropertyKind, Statement,
};
use oxc_semantic::Scoping;
use oxc_span::{GetSpan, Span};
use oxc_syntax::operator::AssignmentOperator;
use oxc_syntax::symbol::SymbolId;

use super::imports::AngularBindingSet;

/// Member name the downleveled metadata is assigned to.
pub const DECORATORS_PROPERTY: &str = "decorators";

/// Property of a decorator entry that names the decorator factory.
pub const TYPE_PROPERTY: &str = "type";

/// A statement of the shape `<identifier>.decorators = [ ... ]`.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorStatement<'s, 'a> {
    statement: &'s ExpressionStatement<'a>,
    target: &'s IdentifierReference<'a>,
    array: &'s ArrayExpression<'a>,
}

impl<'s, 'a> DecoratorStatement<'s, 'a> {
    /// Match `stmt` against the decorator assignment shape.
    ///
    /// Parenthesized assignments, compound operators and computed member
    /// access do not match.
    pub fn classify(stmt: &'s Statement<'a>) -> Option<Self> {
        let Statement::ExpressionStatement(statement) = stmt else {
            return None;
        };
        let Expression::AssignmentExpression(assign) = &statement.expression else {
            return None;
        };
        let AssignmentTarget::StaticMemberExpression(member) = &assign.left else {
            return None;
        };
        let Expression::Identifier(target) = &member.object else {
            return None;
        };
        if member.property.name.as_str() != DECORATORS_PROPERTY {
            return None;
        }
        if assign.operator != AssignmentOperator::Assign {
            return None;
        }
        let Expression::ArrayExpression(array) = &assign.right else {
            return None;
        };

        Some(Self {
            statement,
            target,
            array,
        })
    }

    /// Span of the whole statement, including its semicolon.
    pub fn span(&self) -> Span {
        self.statement.span
    }

    /// Name of the class (or other binding) the metadata is attached to.
    pub fn target_name(&self) -> &'s str {
        self.target.name.as_str()
    }

    pub fn entries(&self) -> impl Iterator<Item = &'s ArrayExpressionElement<'a>> {
        self.array.elements.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.array.elements.len()
    }

    /// The entries as object literals, or `None` when any entry is something
    /// else (a spread, a call, a hole, ...).
    pub fn object_entries(&self) -> Option<Vec<&'s ObjectExpression<'a>>> {
        self.entries()
            .map(|element| match element {
                ArrayExpressionElement::ObjectExpression(object) => Some(&**object),
                _ => None,
            })
            .collect()
    }
}

pub fn is_decorator_assignment(stmt: &Statement<'_>) -> bool {
    DecoratorStatement::classify(stmt).is_some()
}

/// Resolves decorator entries against the collected Angular bindings.
pub struct DecoratorEntryResolver<'r> {
    scoping: &'r Scoping,
    bindings: &'r AngularBindingSet,
}

impl<'r> DecoratorEntryResolver<'r> {
    pub fn new(scoping: &'r Scoping, bindings: &'r AngularBindingSet) -> Self {
        Self { scoping, bindings }
    }

    /// `true` when `element` is `{ type: X, ... }` and `X` resolves to one of
    /// the collected bindings.
    pub fn is_angular_decorator(&self, element: &ArrayExpressionElement<'_>) -> bool {
        match element {
            ArrayExpressionElement::ObjectExpression(object) => self.is_angular_decorator_literal(object),
            _ => false,
        }
    }

    pub fn is_angular_decorator_literal(&self, object: &ObjectExpression<'_>) -> bool {
        let Some(type_ref) = decorator_type_reference(object) else {
            return false;
        };
        self.resolve(type_ref)
            .is_some_and(|symbol_id| self.bindings.contains(symbol_id))
    }

    /// Symbol an identifier reference resolves to. Globals resolve to `None`.
    pub fn resolve(&self, ident: &IdentifierReference<'_>) -> Option<SymbolId> {
        let reference_id = ident.reference_id.get()?;
        self.scoping.get_reference(reference_id).symbol_id()
    }
}

/// The identifier held by the single `type` property of a decorator entry.
///
/// Returns `None` when there is no `type` property, more than one, or its value
/// is not a bare identifier. Other properties such as `args` are ignored.
pub fn decorator_type_reference<'s, 'a>(
    object: &'s ObjectExpression<'a>,
) -> Option<&'s IdentifierReference<'a>> {
    let mut type_props = object.properties.iter().filter_map(|prop| match prop {
        ObjectPropertyKind::ObjectProperty(prop) if is_type_property(prop) => Some(&**prop),
        _ => None,
    });

    let prop = type_props.next()?;
    if type_props.next().is_some() {
        return None;
    }

    match &prop.value {
        Expression::Identifier(ident) => Some(&**ident),
        _ => None,
    }
}

/// A plain `type: value` property. Shorthand, computed, method and accessor
/// forms don't count.
fn is_type_property(prop: &ObjectProperty<'_>) -> bool {
    if prop.kind != PropertyKind::Init || prop.method || prop.shorthand || prop.computed {
        return false;
    }
    matches!(&prop.key, PropertyKey::StaticIdentifier(id) if id.name.as_str() == TYPE_PROPERTY)
}

/// Span of an array element, for entry-level removal.
pub fn entry_span(element: &ArrayExpressionElement<'_>) -> Span {
    element.span()
}
