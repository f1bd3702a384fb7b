use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invariants::{
    require_description, validate_category, validate_description, validate_name,
};
use crate::domain::DomainResult;

/// Represents a named grouping of catalog content (movies, series, ...)
/// Categories validate their fields on construction and on every mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Internal immutable identifier
    id: Uuid,

    /// Display name, 3 to 255 characters, never blank
    name: String,

    /// Free-form description, up to 10,000 characters, may be empty
    description: String,

    /// Whether the category is visible to cataloging
    is_active: bool,

    /// Creation timestamp, never changes after construction
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new active Category
    /// The active flag defaults to true on this path
    pub fn new(name: String, description: Option<String>) -> DomainResult<Self> {
        Self::with_active(name, description, true)
    }

    /// Create a new Category with an explicit active flag
    ///
    /// Assigns a fresh identity and the current timestamp, then runs the
    /// validation pass over the candidate fields; on failure no instance is
    /// produced. `None` for the description is rejected: a category must be
    /// created with one, even if empty.
    pub fn with_active(
        name: String,
        description: Option<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        // Contract order: name rules first, then the missing description,
        // then the description length.
        validate_name(&name)?;
        let description = require_description(description)?;
        validate_description(&description)?;

        let category = Self {
            id: Uuid::new_v4(),
            name,
            description,
            is_active,
            created_at: Utc::now(),
        };

        log::debug!("Created category {}", category.id);
        Ok(category)
    }

    /// Make the category visible to cataloging
    ///
    /// Every mutator runs the same validation pass before committing, even
    /// though the flag itself carries no invariant.
    pub fn activate(&mut self) -> DomainResult<()> {
        let candidate = Self {
            is_active: true,
            ..self.clone()
        };
        validate_category(&candidate)?;
        *self = candidate;

        log::debug!("Activated category {}", self.id);
        Ok(())
    }

    /// Hide the category from cataloging
    pub fn deactivate(&mut self) -> DomainResult<()> {
        let candidate = Self {
            is_active: false,
            ..self.clone()
        };
        validate_category(&candidate)?;
        *self = candidate;

        log::debug!("Deactivated category {}", self.id);
        Ok(())
    }

    /// Rename the category, optionally replacing the description
    ///
    /// `None` keeps the current description. The candidate state is
    /// validated before anything is committed: a failed update leaves the
    /// category exactly as it was.
    pub fn update(&mut self, name: String, description: Option<String>) -> DomainResult<()> {
        let candidate = Self {
            name,
            description: description.unwrap_or_else(|| self.description.clone()),
            ..self.clone()
        };
        validate_category(&candidate)?;
        *self = candidate;

        log::debug!("Updated category {}", self.id);
        Ok(())
    }

    /// Internal immutable identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description; may be empty, never absent
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the category is currently active
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
