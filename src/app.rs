use aws_sdk_s3::Client as S3Client;
use axum::{extract::DefaultBodyLimit, Router};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::{config, config::AppConfig, database, error::Result, routes};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3_client: S3Client,
    pub s3_bucket: String,
    pub s3_region: String,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let s3_client = config::load_s3_client(&config.s3).await;

    let state = AppState {
        db: pool,
        s3_client,
        s3_bucket: config.s3.bucket.clone(),
        s3_region: config.s3.region.clone(),
    };

    // the storefront may be served from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
