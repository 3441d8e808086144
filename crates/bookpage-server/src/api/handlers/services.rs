use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use uuid::Uuid;

use crate::api::extract::AppJson;
use crate::api::middleware::auth::AuthContext;
use crate::domain::{CreateServiceRequest, Service, ServiceFilter, SetServiceActiveRequest};
use crate::error::{AppError, Result};
use crate::scheduling::catalog;
use crate::AppState;

pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<Service>>> {
    let store = state.store.as_ref();
    let business = auth.business(store).await?;

    let services = catalog::list_services(store, business.id, ServiceFilter::All).await?;
    Ok(Json(services))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    AppJson(req): AppJson<CreateServiceRequest>,
) -> Result<impl IntoResponse> {
    let store = state.store.as_ref();
    let business = auth.business(store).await?;

    let service = catalog::create_service(store, business.id, req).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn set_active(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<SetServiceActiveRequest>,
) -> Result<Json<Service>> {
    let store = state.store.as_ref();
    let business = auth.business(store).await?;

    let service = catalog::get_service(store, id).await?;
    if service.business_id != business.id {
        return Err(AppError::ServiceNotFound(id));
    }

    let service = catalog::set_service_active(store, id, req.active).await?;
    Ok(Json(service))
}
