//! Shared state handed to every handler.

use std::sync::Arc;

use crate::repositories::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    /// Sole writer of inquiry documents. Resolved once at startup.
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}
