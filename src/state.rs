//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Content is immutable after startup; the only mutable records are
//! purchase orders, which sit behind the `PurchaseOrderStore` seam. The
//! mailer is optional so the site still runs without email credentials.

use std::sync::Arc;

use crate::content::Content;
use crate::db::PurchaseOrderStore;
use crate::gallery::GalleryClient;
use crate::services::mailer::Mailer;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<Content>,
    pub purchase_orders: Arc<dyn PurchaseOrderStore>,
    /// `None` if `RESEND_API_KEY` / `INQUIRY_TO_EMAIL` are not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
    pub gallery: Arc<GalleryClient>,
}

impl AppState {
    #[must_use]
    pub fn new(
        content: Content,
        purchase_orders: Arc<dyn PurchaseOrderStore>,
        mailer: Option<Arc<dyn Mailer>>,
        gallery: GalleryClient,
    ) -> Self {
        Self { content: Arc::new(content), purchase_orders, mailer, gallery: Arc::new(gallery) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
