use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, borrow_book, create_book, create_inventory, create_member, delete_book,
    delete_member, get_member, list_books, list_borrows, list_fines, list_inventories,
    list_members, list_notifications, return_book, update_book, update_member,
};

/// Creates the API router with all library management endpoints
///
/// - /api/books - catalog CRUD
/// - /api/members - member CRUD
/// - /api/inventory - per-book copy counts
/// - /api/borrow - borrow workflow, plus the return workflow under
///   /api/borrow/return/:id
/// - /api/fines, /api/notifications - read-only listings
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Catalog
        .route("/api/books", post(create_book).get(list_books))
        .route("/api/books/:id", put(update_book).delete(delete_book))
        // Members
        .route("/api/members", post(create_member).get(list_members))
        .route(
            "/api/members/:id",
            get(get_member).put(update_member).delete(delete_member),
        )
        // Inventory
        .route("/api/inventory", post(create_inventory).get(list_inventories))
        // Borrow / return workflow
        .route("/api/borrow", post(borrow_book).get(list_borrows))
        .route("/api/borrow/return/:id", put(return_book))
        // Fines and notifications
        .route("/api/fines", get(list_fines))
        .route("/api/notifications", get(list_notifications))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
