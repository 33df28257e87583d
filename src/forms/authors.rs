use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::author::{Author, NewAuthor, UpdateAuthor};
use crate::domain::types::{AuthorBio, AuthorCity, AuthorName, TypeConstraintError};

/// Form data for adding or updating an author.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct AuthorForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub bio: String,
    #[validate(length(min = 1))]
    pub city: String,
}

impl AuthorForm {
    /// Snapshot of an existing record used to prefill the form in edit mode.
    #[must_use]
    pub fn prefill(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            bio: author.bio.clone(),
            city: author.city.clone(),
        }
    }
}

impl TryFrom<&AuthorForm> for NewAuthor {
    type Error = TypeConstraintError;

    fn try_from(form: &AuthorForm) -> Result<Self, Self::Error> {
        Ok(NewAuthor {
            name: AuthorName::new(form.name.as_str())?,
            bio: AuthorBio::new(form.bio.as_str())?,
            city: AuthorCity::new(form.city.as_str())?,
        })
    }
}

impl TryFrom<&AuthorForm> for UpdateAuthor {
    type Error = TypeConstraintError;

    fn try_from(form: &AuthorForm) -> Result<Self, Self::Error> {
        Ok(UpdateAuthor {
            name: AuthorName::new(form.name.as_str())?,
            bio: AuthorBio::new(form.bio.as_str())?,
            city: AuthorCity::new(form.city.as_str())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fail_validation() {
        let form = AuthorForm {
            name: "Durgesh".into(),
            bio: String::new(),
            city: "Chandwad".into(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn conversion_trims_and_sanitizes() {
        let form = AuthorForm {
            name: " Durgesh ".into(),
            bio: "Backend <script>alert(1)</script>Developer".into(),
            city: "Chandwad".into(),
        };
        let new_author = NewAuthor::try_from(&form).unwrap();
        assert_eq!(new_author.name.as_str(), "Durgesh");
        assert_eq!(new_author.city.as_str(), "Chandwad");
        assert!(!new_author.bio.as_str().contains("<script>"));
        assert!(new_author.bio.as_str().contains("Developer"));
    }
}
