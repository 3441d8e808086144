//! Routes behind the shareable booking link. Anyone holding a business id
//! may read its catalog and book.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::api::extract::AppJson;
use crate::domain::{BookingRequest, PublicBusiness, Service, ServiceFilter};
use crate::error::Result;
use crate::scheduling::{catalog, lifecycle, profile};
use crate::AppState;

pub async fn get_business(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<PublicBusiness>> {
    let business = profile::get_business(state.store.as_ref(), business_id).await?;
    Ok(Json(PublicBusiness::from(business)))
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<Service>>> {
    let store = state.store.as_ref();
    profile::get_business(store, business_id).await?;

    let services = catalog::list_services(store, business_id, ServiceFilter::ActiveOnly).await?;
    Ok(Json(services))
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Path(business_id): Path<Uuid>,
    AppJson(req): AppJson<BookingRequest>,
) -> Result<impl IntoResponse> {
    let appointment = lifecycle::submit_booking(state.store.as_ref(), business_id, req).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}
