use axum::Json;
use serde_json::{json, Value};

use crate::models::catalog::{CompanyProfile, ProductCatalog, COMPANY_PROFILE, PRODUCT_CATALOG};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "NOVA LUBRICANTS backend is running" }))
}

pub async fn company_profile() -> Json<&'static CompanyProfile> {
    Json(&COMPANY_PROFILE)
}

pub async fn products() -> Json<&'static ProductCatalog> {
    Json(&PRODUCT_CATALOG)
}
