pub mod options;

pub use options::{StripOptions, ANGULAR_CORE_MODULE, ANGULAR_DECORATOR_FACTORIES};
