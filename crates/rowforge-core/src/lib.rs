//! Core contracts for Rowforge.
//!
//! This crate defines the field descriptors and table records consumed by the
//! rule engine, validation helpers for source documents, and the error type
//! shared across Rowforge crates.

pub mod descriptor;
pub mod error;
pub mod source;
pub mod validation;

pub use descriptor::{FieldDescriptor, FieldKind};
pub use error::{Error, Result};
pub use source::{SourceSet, TableSource};
pub use validation::validate_source;

/// Current contract version for source documents.
pub const SOURCE_VERSION: &str = "0.1";
