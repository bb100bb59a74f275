use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::{
    middleware::error_handling::Result,
    models::inquiry::{self, INQUIRY_COLLECTION},
    repositories::create_document,
    state::AppState,
    utils::log_sanitizer::{mask_contact, sanitize_for_log},
};

#[derive(Debug, Serialize)]
pub struct InquiryCreated {
    pub success: bool,
    pub id: String,
}

/// Validate a submitted inquiry and store it.
///
/// The body is taken as untyped JSON so every schema violation can be
/// reported at once. Nothing is written unless validation passes, and the
/// store is called exactly once for a valid submission.
pub async fn create_inquiry(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<InquiryCreated>> {
    let Json(raw) = payload?;
    let inquiry = inquiry::validate(&raw)?;

    let id = create_document(state.store.as_ref(), INQUIRY_COLLECTION, &inquiry).await?;

    let category = inquiry
        .category
        .as_deref()
        .map(sanitize_for_log)
        .unwrap_or_else(|| "-".to_string());
    tracing::info!(
        inquiry_id = %id,
        name = %sanitize_for_log(&inquiry.name),
        contact = %mask_contact(&inquiry.contact),
        category = %category,
        "Inquiry stored"
    );

    Ok(Json(InquiryCreated { success: true, id }))
}
