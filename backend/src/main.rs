use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use axum::http::{header, HeaderValue, Method};
use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod server_config;
    pub mod seed_data;
}
mod handlers {
    pub mod site_dtos;
    pub mod content_handlers;
    pub mod contact_handlers;
}
mod models {
    pub mod site_models;
}
mod repositories {
    pub mod content_repository;
    pub mod inquiry_repository;
}
mod utils {
    pub mod validation;
}
mod error;
mod schema;
#[cfg(test)]
mod test_support;

use config::server_config::{CorsOrigins, ServerConfig};
use repositories::content_repository::ContentRepository;
use repositories::inquiry_repository::InquiryRepository;

use handlers::content_handlers;
use handlers::contact_handlers;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const IN_MEMORY_DB: &str = ":memory:";

pub struct AppState {
    content_repository: Arc<ContentRepository>,
    inquiry_repository: Arc<InquiryRepository>,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            content_repository: Arc::new(ContentRepository::new(pool.clone())),
            inquiry_repository: Arc::new(InquiryRepository::new(pool)),
        }
    }
}

#[derive(Debug)]
struct SqlitePragmas;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = r2d2::Pool::builder().connection_customizer(Box::new(SqlitePragmas));
    // every in-memory connection is its own database, so keep exactly one
    if database_url == IN_MEMORY_DB {
        builder = builder.max_size(1);
    }
    Ok(builder.build(manager)?)
}

pub fn prepare_database(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("failed to run migrations: {}", e))?;
    if !applied.is_empty() {
        tracing::info!("Applied {} migration(s)", applied.len());
    }
    Ok(())
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => layer.allow_origin(AllowOrigin::list(
            list.iter().filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )),
    }
}

pub fn build_router(state: Arc<AppState>, cors_origins: &CorsOrigins) -> Router {
    Router::new()
        .route("/api", get(content_handlers::api_root))
        .route("/api/", get(content_handlers::api_root))
        .route("/api/health", get(content_handlers::health_check))
        .route("/api/testimonials", get(content_handlers::list_testimonials))
        .route("/api/services", get(content_handlers::list_services))
        .route("/api/blog", get(content_handlers::list_blog_posts))
        .route("/api/blog/{slug}", get(content_handlers::get_blog_post))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/api/newsletter", post(contact_handlers::subscribe_newsletter))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let _sentry_guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    // Set up database connection pool
    let pool = build_pool(&config.database_url)?;
    prepare_database(&pool)?;

    let state = Arc::new(AppState::new(pool));

    if config.seed_defaults {
        let report = state.content_repository.seed_defaults(Utc::now().timestamp())?;
        tracing::info!(
            "Seeded defaults: {} testimonials, {} services, {} blog posts",
            report.testimonials, report.services, report.blog_posts
        );
    }

    let app = build_router(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
