use super::entity::Category;
use crate::domain::{DomainResult, ValidationError};

/// Minimum number of characters in a category name.
pub const NAME_MIN_LENGTH: usize = 3;

/// Maximum number of characters in a category name.
pub const NAME_MAX_LENGTH: usize = 255;

/// Maximum number of characters in a category description.
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Validates all Category invariants
///
/// Runs the full pass over the entity's current state in contract order;
/// the first broken rule is the one reported. This is also the re-check
/// entry point for categories that crossed a serialization boundary.
pub fn validate_category(category: &Category) -> DomainResult<()> {
    validate_name(category.name())?;
    validate_description(category.description())?;
    Ok(())
}

/// Name must be non-blank and within 3 to 255 characters
pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required("Name"));
    }

    let length = name.chars().count();
    if length < NAME_MIN_LENGTH {
        return Err(ValidationError::NameTooShort);
    }
    if length > NAME_MAX_LENGTH {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Description must stay within 10,000 characters; empty is fine
pub fn validate_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// A description must be supplied at construction; `None` models an absent
/// value and is rejected with the same message as an absent name
pub(crate) fn require_description(description: Option<String>) -> DomainResult<String> {
    description.ok_or(ValidationError::Required("Description"))
}
