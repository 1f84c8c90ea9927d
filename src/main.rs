mod config;
mod content;
mod db;
mod gallery;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::db::{MemoryPurchaseOrderStore, PgPurchaseOrderStore, PurchaseOrderStore};
use crate::services::mailer::{Mailer, ResendMailer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let content = content::Content::load().expect("site content failed to load");
    tracing::info!(
        catalog = content.catalog.len(),
        case_studies = content.case_studies.len(),
        blog = content.blog.len(),
        "content loaded"
    );

    let purchase_orders: Arc<dyn PurchaseOrderStore> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await.expect("database init failed");
            Arc::new(PgPurchaseOrderStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; purchase orders are kept in memory with demo data");
            let demo = services::purchase_order::demo_orders(time::OffsetDateTime::now_utc());
            Arc::new(MemoryPurchaseOrderStore::with_orders(demo))
        }
    };

    // Non-fatal: the inquiry endpoint answers 500 until email is configured.
    let mailer: Option<Arc<dyn Mailer>> = match &config.mailer {
        Some(mailer_config) => {
            tracing::info!(recipients = mailer_config.to.len(), "inquiry mailer initialized");
            Some(Arc::new(ResendMailer::new(mailer_config)))
        }
        None => {
            tracing::warn!("RESEND_API_KEY / INQUIRY_TO_EMAIL not set; corporate inquiries disabled");
            None
        }
    };

    let gallery = gallery::GalleryClient::new(
        config.timeouts,
        config.dropbox_token.clone(),
        config.drive_api_key.clone(),
    )
    .expect("gallery http client build failed");

    let state = state::AppState::new(content, purchase_orders, mailer, gallery);
    let app = routes::app(state, &config.website_dir);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, website_dir = %config.website_dir.display(), "merchsite listening");
    axum::serve(listener, app).await.expect("server failed");
}
