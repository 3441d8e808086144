use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::api::extract::AppJson;
use crate::api::middleware::auth::AuthContext;
use crate::domain::{BusinessResponse, CreateBusinessRequest};
use crate::error::Result;
use crate::scheduling::profile;
use crate::AppState;

pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    AppJson(req): AppJson<CreateBusinessRequest>,
) -> Result<impl IntoResponse> {
    let business = profile::create_business(state.store.as_ref(), auth.user_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BusinessResponse::new(business, &state.config.booking_base_url)),
    ))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<BusinessResponse>> {
    let business = auth.business(state.store.as_ref()).await?;

    Ok(Json(BusinessResponse::new(
        business,
        &state.config.booking_base_url,
    )))
}
