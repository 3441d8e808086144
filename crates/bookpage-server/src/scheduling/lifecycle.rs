//! Appointment submission and status management.
//!
//! Bookings are accepted without checking the requested instant against
//! the clock, the service duration or other appointments. Two identical
//! submissions for the same service and slot both succeed.
//!
//! Status changes are an administrative override: any of the four statuses
//! may be set from any other. [`AppointmentStatus::is_natural_transition`]
//! describes the usual workflow but is not enforced here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use super::{catalog, profile, validate};
use crate::domain::{
    Appointment, AppointmentStatus, AppointmentView, BookingRequest, CustomerContact,
    NewAppointment,
};
use crate::error::{AppError, Result};
use crate::store::Store;

/// Public booking submission. The created appointment is always `pending`.
/// A deactivated service is hidden from the public listing but can still
/// be booked by id.
pub async fn submit_booking(
    store: &dyn Store,
    business_id: Uuid,
    req: BookingRequest,
) -> Result<Appointment> {
    profile::get_business(store, business_id).await?;

    let service = catalog::get_service(store, req.service_id).await?;
    if service.business_id != business_id {
        warn!(
            business_id = %business_id,
            service_id = %service.id,
            "rejected booking for a service of another business"
        );
        return Err(AppError::Validation(format!(
            "service {} is not offered by business {}",
            service.id, business_id
        )));
    }

    let customer = CustomerContact {
        name: validate::text("customer.name", &req.customer.name)?,
        email: validate::email("customer.email", &req.customer.email)?,
        phone: validate::phone("customer.phone", &req.customer.phone)?,
    };
    let appointment_at = combine_instant(&req.date, &req.time)?;

    let appointment = store
        .insert_appointment(NewAppointment {
            id: Uuid::new_v4(),
            business_id,
            service_id: service.id,
            customer,
            appointment_at,
            notes: validate::optional(req.notes),
            created_at: Utc::now(),
        })
        .await?;

    info!(
        appointment_id = %appointment.id,
        business_id = %business_id,
        service_id = %service.id,
        appointment_at = %appointment.appointment_at,
        "booking submitted"
    );
    Ok(appointment)
}

pub async fn get_appointment(store: &dyn Store, id: Uuid) -> Result<Appointment> {
    store
        .find_appointment(id)
        .await?
        .ok_or(AppError::AppointmentNotFound(id))
}

/// Sets `new_status` on an appointment. The caller is expected to already
/// be scoped to the owning business.
pub async fn update_status(
    store: &dyn Store,
    appointment_id: Uuid,
    new_status: &str,
) -> Result<Appointment> {
    let status = new_status
        .parse::<AppointmentStatus>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let appointment = store
        .update_appointment_status(appointment_id, status)
        .await?
        .ok_or(AppError::AppointmentNotFound(appointment_id))?;

    info!(appointment_id = %appointment_id, status = %status, "appointment status updated");
    Ok(appointment)
}

pub async fn list_appointments(
    store: &dyn Store,
    business_id: Uuid,
) -> Result<Vec<AppointmentView>> {
    Ok(store.list_appointments(business_id).await?)
}

/// Combines a booking form's date and time into one instant. The wall-clock
/// value is interpreted as UTC.
pub fn combine_instant(date: &str, time: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("date '{}' is not YYYY-MM-DD", date)))?;

    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| AppError::Validation(format!("time '{}' is not HH:MM", time)))?;

    Ok(NaiveDateTime::new(date, time).and_utc())
}
