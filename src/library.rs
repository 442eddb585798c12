use serde::Serialize;
use sqlx::SqlitePool;

use crate::AppError;

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Book {
    pub id: i64,
    pub author: String,
    pub title: String,
}

pub async fn insert_book(pool: &SqlitePool, author: &str, title: &str) -> Result<i64, AppError> {
    let id = sqlx::query(
        r#"
        INSERT INTO books ( author, title )
        VALUES ( ?1, ?2 )
        "#,
    )
    .bind(author)
    .bind(title)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn get_book_table(pool: &SqlitePool) -> Result<Vec<Book>, AppError> {
    let books = sqlx::query_as::<_, Book>(
        r#"
        SELECT id, author, title
        FROM books
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(books)
}
