use serde::Serialize;

use crate::domain::author::Author;
use crate::domain::book::Book;
use crate::domain::list::Page;
use crate::forms::authors::AuthorForm;
use crate::pagination::Paginated;

/// Placeholder row text for an empty result set.
pub const NO_AUTHORS_PLACEHOLDER: &str = "No authors found";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthorRow {
    pub id: i32,
    pub name: String,
    pub city: String,
    /// Books attributed to this author within the fetched sample. The join
    /// is bounded by the sample size, not the full collection.
    pub book_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthorFormView {
    pub name: String,
    pub bio: String,
    pub city: String,
    pub submit_label: String,
}

/// One entry of the author-selection dropdown used by the book form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthorOption {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthorsPageData {
    pub table: Paginated<AuthorRow>,
    /// `Some` exactly when the fetched page holds no rows.
    pub placeholder: Option<String>,
    pub form: AuthorFormView,
}

impl AuthorsPageData {
    pub fn page_label(&self) -> String {
        self.table.page_label()
    }
}

/// Projects the edit state into the form view.
pub fn render_author_form(edit: Option<&AuthorForm>) -> AuthorFormView {
    match edit {
        Some(form) => AuthorFormView {
            name: form.name.clone(),
            bio: form.bio.clone(),
            city: form.city.clone(),
            submit_label: "Update Author".to_string(),
        },
        None => AuthorFormView {
            name: String::new(),
            bio: String::new(),
            city: String::new(),
            submit_label: "Add Author".to_string(),
        },
    }
}

/// Reconciles an author page and a books sample into the authors view,
/// deriving each row's book count from the sample.
pub fn render_authors(
    page: &Page<Author>,
    books_sample: &[Book],
    edit: Option<&AuthorForm>,
) -> AuthorsPageData {
    let rows: Vec<AuthorRow> = page
        .items
        .iter()
        .map(|author| AuthorRow {
            id: author.id,
            name: author.name.clone(),
            city: author.city.clone(),
            book_count: books_sample
                .iter()
                .filter(|book| {
                    book.author
                        .as_ref()
                        .is_some_and(|embedded| embedded.id == author.id)
                })
                .count(),
        })
        .collect();

    let placeholder = rows
        .is_empty()
        .then(|| NO_AUTHORS_PLACEHOLDER.to_string());

    AuthorsPageData {
        table: Paginated::new(rows, page.page, page.total_pages, page.total_items),
        placeholder,
        form: render_author_form(edit),
    }
}

/// Dropdown options labelled `Name (City)`, in server order.
pub fn render_author_options(authors: &[Author]) -> Vec<AuthorOption> {
    authors
        .iter()
        .map(|author| AuthorOption {
            id: author.id,
            label: format!("{} ({})", author.name, author.city),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::BookAuthor;

    fn author(id: i32, name: &str, city: &str) -> Author {
        Author {
            id,
            name: name.into(),
            bio: String::new(),
            city: city.into(),
        }
    }

    fn book_by(author_id: i32) -> Book {
        Book {
            id: author_id * 10,
            title: "t".into(),
            year: 2000,
            isbn: None,
            author: Some(BookAuthor {
                id: author_id,
                name: "n".into(),
                city: "c".into(),
            }),
        }
    }

    #[test]
    fn book_counts_come_from_the_sample_join() {
        let page = Page {
            items: vec![author(1, "Durgesh", "Chandwad"), author(2, "Harshal", "Nashik")],
            page: 1,
            total_pages: 1,
            total_items: 2,
        };
        let sample = vec![book_by(1), book_by(1), book_by(2)];

        let data = render_authors(&page, &sample, None);
        assert_eq!(data.table.items[0].book_count, 2);
        assert_eq!(data.table.items[1].book_count, 1);
    }

    #[test]
    fn empty_page_renders_exactly_one_placeholder() {
        let data = render_authors(&Page::empty(), &[], None);
        assert!(data.table.items.is_empty());
        assert_eq!(data.placeholder.as_deref(), Some(NO_AUTHORS_PLACEHOLDER));
    }

    #[test]
    fn dropdown_labels_include_city() {
        let options = render_author_options(&[author(1, "Durgesh", "Chandwad")]);
        assert_eq!(options[0].label, "Durgesh (Chandwad)");
        assert_eq!(options[0].id, 1);
    }

    #[test]
    fn form_label_flips_in_edit_mode() {
        assert_eq!(render_author_form(None).submit_label, "Add Author");
        let form = AuthorForm {
            name: "Durgesh".into(),
            bio: "Backend Developer".into(),
            city: "Chandwad".into(),
        };
        assert_eq!(
            render_author_form(Some(&form)).submit_label,
            "Update Author"
        );
    }
}
