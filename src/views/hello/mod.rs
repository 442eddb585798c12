use axum::{routing::get, Router};

mod book_list;

pub fn get_routes() -> axum::Router {
    Router::new().route(
        "/hello",
        get(book_list::view_book_list).post(book_list::post_add_book),
    )
}
