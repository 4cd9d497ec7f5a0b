//! dq-testgen: UI Test Case Generation
//!
//! ```text
//! ui + srs description
//!     └── prompt ──► chat completion ──► repair ──► validate ──► summary
//! ```
//!
//! Model output is coerced into JSON in three fixed stages (strict parse,
//! brace extraction, fallback document) and then checked key by key before
//! it is accepted as a [`TestCaseDocument`].

pub mod compare;
pub mod document;
pub mod generator;
pub mod prompt;
pub mod repair;
pub mod summary;
pub mod validate;

pub use compare::{ComparisonRequest, DesignComparator, ElementProperties};
pub use document::{Component, Priority, SubComponent, TestCaseDocument, TestStep};
pub use generator::{GenerateError, GenerationConfig, GenerationResult, TestCaseGenerator};
pub use repair::{repair, RepairStage, Repaired};
pub use summary::detailed_summary;
pub use validate::{validate_document, validate_structure, ValidationError};
