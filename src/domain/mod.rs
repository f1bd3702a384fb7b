// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// Everything outside the domain imports from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod category;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Category Domain
pub use category::{
    validate_category, validate_description, validate_name, Category, DESCRIPTION_MAX_LENGTH,
    NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level validation errors
/// These represent violations of entity invariants; the Display output is
/// the exact contract message, `<Field> should <rule>`, with no prefix
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was absent, empty, or whitespace-only
    #[error("{0} should not be empty or null")]
    Required(&'static str),

    #[error("Name should be at least three characters long")]
    NameTooShort,

    #[error("Name should have less or the same as 255 characters long")]
    NameTooLong,

    #[error("Description should have less or the same as ten thousand characters long")]
    DescriptionTooLong,
}

/// Domain result type
pub type DomainResult<T> = Result<T, ValidationError>;
