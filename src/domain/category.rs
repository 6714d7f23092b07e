use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::slug::derive_slug;
use crate::domain::timestamp;

/// Catalog section products are grouped under by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Unique display name, referenced by `Product::category`.
    pub name: String,
    /// URL-safe identifier derived from the name at creation.
    pub slug: String,
    /// Short blurb shown next to the category.
    pub description: String,
    /// Presentation color token.
    pub color: String,
    /// Creation time.
    #[serde(with = "timestamp::iso8601")]
    pub created_at: DateTime<Utc>,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

impl NewCategory {
    /// Build a category payload, deriving the slug and stamping the current time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            slug: derive_slug(&name),
            name,
            description: description.into(),
            color: color.into(),
            created_at: timestamp::now(),
        }
    }
}

/// Partial patch applied to an existing category. The slug is never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl UpdateCategory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.color.is_none()
    }
}
