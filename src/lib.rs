use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Router,
};
use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::SqlitePool;

pub mod library;
pub mod views;

#[derive(Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = ConfigBuilder::<DefaultState>::default()
            .set_default("database_url", "sqlite:bookshelf.db?mode=rwc")?
            .set_default("bind_addr", "0.0.0.0:3000")?
            .add_source(File::with_name("config/default.toml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        builder.try_deserialize::<AppConfig>()
    }
}

// Make our own error that wraps `anyhow::Error`.
pub struct AppError(pub anyhow::Error);

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    message: String,
    status_code: StatusCode,
}

// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorPageTemplate {
                status_code: StatusCode::INTERNAL_SERVER_ERROR,
                message: self.0.to_string(),
            },
        )
            .into_response()
    }
}

// This enables using `?` on functions that return `Result<_, anyhow::Error>` to turn them into
// `Result<_, AppError>`. That way you don't need to do that manually.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

async fn not_found() -> Html<&'static str> {
    Html("<h1>404 Not found</h1><a href=\"/hello\">Back home</a>")
}

pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .merge(views::hello::get_routes())
        .fallback(not_found)
        .layer(Extension(pool))
}
