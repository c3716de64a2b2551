//! Field formatting and validation utilities

pub mod document;
pub mod phone;
pub mod text;
pub mod validation;

// Re-export commonly used utilities
pub use document::*;
pub use phone::*;
pub use text::*;
pub use validation::*;
