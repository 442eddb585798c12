use sqlx::SqlitePool;

use bookshelf::{app, AppConfig};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let config = AppConfig::new().expect("Failed to load configuration");
    let pool = SqlitePool::connect(&config.database_url)
        .await
        .expect("Failed to open database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let app = app(pool);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap();
    log::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
