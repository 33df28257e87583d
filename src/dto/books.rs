use serde::Serialize;

use crate::domain::book::Book;
use crate::domain::list::Page;
use crate::forms::books::BookForm;
use crate::pagination::Paginated;

/// Placeholder row text for an empty result set.
pub const NO_BOOKS_PLACEHOLDER: &str = "No books found";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookRow {
    pub id: i32,
    pub title: String,
    pub year: i32,
    /// Display name of the embedded author, `-` when the book has none.
    pub author_name: String,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            year: book.year,
            author_name: book
                .author
                .as_ref()
                .map(|author| author.name.clone())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// State of the add/update form, including the submit-button label that
/// flips between create and edit mode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookFormView {
    pub title: String,
    pub year: String,
    pub isbn: String,
    pub author_id: String,
    pub submit_label: String,
}

/// Everything the books panel renders: the table page, an optional single
/// placeholder row, and the form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BooksPageData {
    pub table: Paginated<BookRow>,
    /// `Some` exactly when the fetched page holds no rows.
    pub placeholder: Option<String>,
    pub form: BookFormView,
}

impl BooksPageData {
    pub fn page_label(&self) -> String {
        self.table.page_label()
    }
}

/// Projects the edit state into the form view.
pub fn render_book_form(edit: Option<&BookForm>) -> BookFormView {
    match edit {
        Some(form) => BookFormView {
            title: form.title.clone(),
            year: form.year.clone(),
            isbn: form.isbn.clone(),
            author_id: form.author_id.clone(),
            submit_label: "Update Book".to_string(),
        },
        None => BookFormView {
            title: String::new(),
            year: String::new(),
            isbn: String::new(),
            author_id: String::new(),
            submit_label: "Add Book".to_string(),
        },
    }
}

/// Reconciles a fetched page into the books view model, replacing whatever
/// was displayed before wholesale.
pub fn render_books(page: &Page<Book>, edit: Option<&BookForm>) -> BooksPageData {
    let rows: Vec<BookRow> = page.items.iter().map(BookRow::from).collect();
    let placeholder = rows
        .is_empty()
        .then(|| NO_BOOKS_PLACEHOLDER.to_string());

    BooksPageData {
        table: Paginated::new(rows, page.page, page.total_pages, page.total_items),
        placeholder,
        form: render_book_form(edit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::BookAuthor;

    fn sample_page() -> Page<Book> {
        Page {
            items: vec![
                Book {
                    id: 1,
                    title: "Python Crash Course".into(),
                    year: 2019,
                    isbn: Some("111".into()),
                    author: Some(BookAuthor {
                        id: 1,
                        name: "Durgesh".into(),
                        city: "Chandwad".into(),
                    }),
                },
                Book {
                    id: 2,
                    title: "Orphan".into(),
                    year: 1999,
                    isbn: None,
                    author: None,
                },
            ],
            page: 1,
            total_pages: 1,
            total_items: 2,
        }
    }

    #[test]
    fn rows_carry_author_name_or_dash() {
        let data = render_books(&sample_page(), None);
        assert_eq!(data.table.items[0].author_name, "Durgesh");
        assert_eq!(data.table.items[1].author_name, "-");
        assert!(data.placeholder.is_none());
        assert_eq!(data.page_label(), "Page 1 of 1");
    }

    #[test]
    fn empty_page_renders_exactly_one_placeholder() {
        let data = render_books(&Page::empty(), None);
        assert!(data.table.items.is_empty());
        assert_eq!(data.placeholder.as_deref(), Some(NO_BOOKS_PLACEHOLDER));
    }

    #[test]
    fn form_defaults_in_create_mode_and_prefills_in_edit_mode() {
        let blank = render_book_form(None);
        assert_eq!(blank.submit_label, "Add Book");
        assert!(blank.title.is_empty());

        let form = BookForm {
            title: "Dune".into(),
            year: "1965".into(),
            isbn: String::new(),
            author_id: "2".into(),
        };
        let editing = render_book_form(Some(&form));
        assert_eq!(editing.submit_label, "Update Book");
        assert_eq!(editing.title, "Dune");
        assert_eq!(editing.author_id, "2");
    }
}
