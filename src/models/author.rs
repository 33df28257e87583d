use serde::{Deserialize, Serialize};

use crate::domain::author::{Author, NewAuthor, UpdateAuthor};

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorModel {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub city: String,
}

/// Collection response. The pagination fields are optional on the wire:
/// the collection endpoint reports them only when it paginates.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorListResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorModel>,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_items: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorItemResponse {
    pub success: bool,
    #[serde(default)]
    pub author: Option<AuthorModel>,
}

/// Request body for author create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorPayload {
    pub name: String,
    pub bio: String,
    pub city: String,
}

impl From<AuthorModel> for Author {
    fn from(model: AuthorModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
            city: model.city,
        }
    }
}

impl From<&NewAuthor> for AuthorPayload {
    fn from(new_author: &NewAuthor) -> Self {
        Self {
            name: new_author.name.as_str().to_string(),
            bio: new_author.bio.as_str().to_string(),
            city: new_author.city.as_str().to_string(),
        }
    }
}

impl From<&UpdateAuthor> for AuthorPayload {
    fn from(updates: &UpdateAuthor) -> Self {
        Self {
            name: updates.name.as_str().to_string(),
            bio: updates.bio.as_str().to_string(),
            city: updates.city.as_str().to_string(),
        }
    }
}
