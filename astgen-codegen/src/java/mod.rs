//! Java code generation modules.

pub mod variants;
pub mod visitor;

pub use variants::VariantGenerator;
pub use visitor::VisitorGenerator;
