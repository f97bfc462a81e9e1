//! Decorator Metadata Stripping
//!
//! Removes downleveled Angular decorator metadata of the form
//! `Foo.decorators = [{ type: Component, args: [...] }]` from compiled
//! JavaScript while keeping every other character at its original offset.
//!
//! The pipeline is strictly linear:
//! parse → semantic → import locator → statement classifier →
//! entry resolver → removal planner → text rewriter.

pub mod src;

pub use src::decorators::{is_decorator_assignment, DecoratorEntryResolver, DecoratorStatement};
pub use src::error::StripError;
pub use src::imports::{locate_angular_imports, AngularBindingSet, ImportBinding};
pub use src::planner::{plan_removals, plan_statement_removal, RemovalKind, RemovalPlan, RemovalSpan};
pub use src::pipeline::{plan_source, source_type_for_path, strip_file, strip_source, StripOutput};
pub use src::rewriter::{placeholder, utf16_len, PlaceholderStyle, TextRewriter};
