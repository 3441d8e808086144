use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use super::{profile, validate};
use crate::domain::{CreateServiceRequest, NewService, Service, ServiceFilter};
use crate::error::{AppError, Result};
use crate::store::Store;

pub const MIN_DURATION_MINUTES: i32 = 15;

/// Exclusive upper bound of a price, the range of `NUMERIC(12,2)`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

pub async fn create_service(
    store: &dyn Store,
    business_id: Uuid,
    req: CreateServiceRequest,
) -> Result<Service> {
    let name = validate::text("name", &req.name)?;

    if req.duration_minutes < MIN_DURATION_MINUTES {
        return Err(AppError::Validation(format!(
            "duration_minutes must be at least {}",
            MIN_DURATION_MINUTES
        )));
    }

    let price = parse_price(req.price.as_deref())?;

    profile::get_business(store, business_id).await?;

    let service = store
        .insert_service(NewService {
            id: Uuid::new_v4(),
            business_id,
            name,
            description: validate::optional(req.description),
            duration_minutes: req.duration_minutes,
            price,
            created_at: Utc::now(),
        })
        .await?;

    info!(
        service_id = %service.id,
        business_id = %business_id,
        duration_minutes = service.duration_minutes,
        "service created"
    );
    Ok(service)
}

pub async fn get_service(store: &dyn Store, id: Uuid) -> Result<Service> {
    store
        .find_service(id)
        .await?
        .ok_or(AppError::ServiceNotFound(id))
}

/// Soft enable/disable. Setting the current value again is not an error.
pub async fn set_service_active(store: &dyn Store, id: Uuid, active: bool) -> Result<Service> {
    let service = store
        .set_service_active(id, active)
        .await?
        .ok_or(AppError::ServiceNotFound(id))?;

    info!(service_id = %id, active, "service availability changed");
    Ok(service)
}

pub async fn list_services(
    store: &dyn Store,
    business_id: Uuid,
    filter: ServiceFilter,
) -> Result<Vec<Service>> {
    Ok(store.list_services(business_id, filter).await?)
}

/// Parses owner-entered price text. Blank means the service has no price.
pub fn parse_price(raw: Option<&str>) -> Result<Option<Decimal>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let price = Decimal::from_str(raw)
        .map_err(|_| AppError::Validation(format!("price '{}' is not a decimal number", raw)))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::Validation("price must not be negative".into()));
    }

    let price = price.round_dp(2);
    if price >= MAX_PRICE {
        return Err(AppError::Validation(format!(
            "price must be less than {}",
            MAX_PRICE
        )));
    }

    Ok(Some(price))
}
