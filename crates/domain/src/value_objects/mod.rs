//! Value Objects - Immutable, identity-less domain primitives

mod operation_context;
mod property_bag;
mod severity_level;

pub use operation_context::OperationContext;
pub use property_bag::PropertyBag;
pub use severity_level::SeverityLevel;
