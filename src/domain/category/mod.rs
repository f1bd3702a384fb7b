//! Critical Category Invariants:
//!
//! 1. Identity (UUID) is immutable
//! 2. Creation timestamp never changes
//! 3. Name is never blank (empty or whitespace-only)
//! 4. Name stays within 3 to 255 characters
//! 5. Description is always present, possibly empty
//! 6. Description stays within 10,000 characters
//! 7. Every mutation runs the validation pass before committing
//! 8. The active flag has no state machine: both values are reachable
//!    from either state

pub mod entity;
pub mod invariants;

pub use entity::Category;
pub use invariants::{
    validate_category, validate_description, validate_name, DESCRIPTION_MAX_LENGTH,
    NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
