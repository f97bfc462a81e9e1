pub mod decorators;
pub mod error;
pub mod front_end;
pub mod imports;
pub mod pipeline;
pub mod planner;
pub mod rewriter;
