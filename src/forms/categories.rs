use serde::Deserialize;

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::{FormError, FormResult, non_blank};

pub const REQUIRED_CATEGORY_FIELDS: &str = "Name, description, and color are required";

/// Body of `POST /categories`.
#[derive(Debug, Default, Deserialize)]
pub struct AddCategoryPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl AddCategoryPayload {
    /// Check required fields, trim text and build the insert payload.
    pub fn into_new_category(self) -> FormResult<NewCategory> {
        match (
            non_blank(self.name),
            non_blank(self.description),
            non_blank(self.color),
        ) {
            (Some(name), Some(description), Some(color)) => {
                Ok(NewCategory::new(name, description, color))
            }
            _ => Err(FormError::MissingFields(REQUIRED_CATEGORY_FIELDS)),
        }
    }
}

/// Body of `PUT /categories/{id}`. A `slug` key is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct EditCategoryPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl EditCategoryPayload {
    pub fn into_update_category(self) -> UpdateCategory {
        UpdateCategory {
            name: non_blank(self.name),
            description: non_blank(self.description),
            color: non_blank(self.color),
        }
    }
}
