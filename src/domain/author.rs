use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthorBio, AuthorCity, AuthorName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub city: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: AuthorName,
    pub bio: AuthorBio,
    pub city: AuthorCity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateAuthor {
    pub name: AuthorName,
    pub bio: AuthorBio,
    pub city: AuthorCity,
}
