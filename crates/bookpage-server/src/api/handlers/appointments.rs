use std::sync::Arc;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use crate::api::extract::AppJson;
use crate::api::middleware::auth::AuthContext;
use crate::domain::{Appointment, AppointmentView, UpdateStatusRequest};
use crate::error::{AppError, Result};
use crate::scheduling::lifecycle;
use crate::AppState;

pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<AppointmentView>>> {
    let store = state.store.as_ref();
    let business = auth.business(store).await?;

    let appointments = lifecycle::list_appointments(store, business.id).await?;
    Ok(Json(appointments))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<UpdateStatusRequest>,
) -> Result<Json<Appointment>> {
    let store = state.store.as_ref();
    let business = auth.business(store).await?;

    let appointment = lifecycle::get_appointment(store, id).await?;
    if appointment.business_id != business.id {
        return Err(AppError::AppointmentNotFound(id));
    }

    let appointment = lifecycle::update_status(store, id, &req.status).await?;
    Ok(Json(appointment))
}
