//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Asset store, email notifier and payment gateway behind trait objects
//! - Membership card renderer
//! - Per-record reconciliation locks
//! - Member code prefix

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    card::CardRenderer,
    provider::{asset::AssetStore, email::Notifier, payment::PaymentGateway},
    service::reconcile::lock::ReconciliationLocks,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - Providers and the card renderer are reference-counted
/// - `ReconciliationLocks` shares one lock table between clones
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Public storage for uploads and rendered membership cards.
    pub assets: Arc<dyn AssetStore>,

    /// Email delivery for membership cards and order confirmations.
    pub notifier: Arc<dyn Notifier>,

    /// Hosted checkout URLs and payment notification validation.
    pub gateway: Arc<dyn PaymentGateway>,

    /// Renders membership card PNGs from the configured logo and fonts.
    pub card_renderer: Arc<CardRenderer>,

    /// Serializes fulfilment of the same member or order.
    pub locks: ReconciliationLocks,

    /// Prefix of allocated member codes, e.g. `MBH`.
    pub member_code_prefix: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `assets` - Asset store implementation
    /// - `notifier` - Email notifier implementation
    /// - `gateway` - Payment gateway implementation
    /// - `card_renderer` - Membership card renderer
    /// - `member_code_prefix` - Prefix of allocated member codes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        assets: Arc<dyn AssetStore>,
        notifier: Arc<dyn Notifier>,
        gateway: Arc<dyn PaymentGateway>,
        card_renderer: CardRenderer,
        member_code_prefix: String,
    ) -> Self {
        Self {
            db,
            assets,
            notifier,
            gateway,
            card_renderer: Arc::new(card_renderer),
            locks: ReconciliationLocks::new(),
            member_code_prefix,
        }
    }
}
