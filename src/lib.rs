// src/lib.rs
// VodHub Catalog - Catalog domain for a local-first video-on-demand library
//
// Architecture:
// - Domain-centric: all business logic lives in domain entities
// - Always-valid: entities validate on construction and on every mutation
// - Explicit: no implicit behavior, no magic
// - No I/O: persistence, querying and transport live outside this crate

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod domain;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_category,
    validate_description,
    validate_name,
    // Category
    Category,
    // Validation bounds
    DESCRIPTION_MAX_LENGTH,
    NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainResult, ValidationError};
