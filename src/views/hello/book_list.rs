use askama::Template;
use axum::Extension;
use axum_extra::extract::Form;
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    library::{get_book_table, insert_book, Book},
    AppError,
};

#[derive(Template)]
#[template(path = "book-list.html")]
pub struct BookList {
    books: Vec<Book>,
}

// Missing fields fall back to empty strings, which the length rule rejects,
// so a malformed body takes the same silent-drop path as an over-long one.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AddBookForm {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub author: String,
}

#[axum::debug_handler]
pub async fn view_book_list(
    Extension(pool): Extension<SqlitePool>,
) -> Result<BookList, AppError> {
    let books = get_book_table(&pool).await?;
    Ok(BookList { books })
}

#[axum::debug_handler]
pub async fn post_add_book(
    Extension(pool): Extension<SqlitePool>,
    Form(form): Form<AddBookForm>,
) -> Result<BookList, AppError> {
    match form.validate() {
        Ok(()) => {
            insert_book(&pool, &form.author, &form.title).await?;
        }
        Err(reason) => log::debug!("dropping invalid book submission: {}", reason),
    }

    let books = get_book_table(&pool).await?;
    Ok(BookList { books })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, author: &str) -> AddBookForm {
        AddBookForm {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn accepts_fields_within_bounds() {
        assert!(form("Dune", "Herbert").validate().is_ok());
        assert!(form(&"t".repeat(200), &"a".repeat(100)).validate().is_ok());
    }

    #[test]
    fn rejects_over_long_title() {
        assert!(form(&"t".repeat(201), "Herbert").validate().is_err());
    }

    #[test]
    fn rejects_over_long_author() {
        assert!(form("Dune", &"a".repeat(101)).validate().is_err());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(form("", "Herbert").validate().is_err());
        assert!(form("Dune", "").validate().is_err());
        // what a body with both fields absent deserializes into
        assert!(AddBookForm::default().validate().is_err());
    }
}
