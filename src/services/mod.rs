//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own filtering, layout math, validation, and storage
//! calls so route handlers can stay focused on query parsing and status
//! codes.

pub mod blog;
pub mod catalog;
pub mod inquiry;
pub mod mailer;
pub mod purchase_order;
pub mod quick_view;
pub mod work;
