use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::validate;
use crate::domain::{Business, CreateBusinessRequest, NewBusiness};
use crate::error::{AppError, Result};
use crate::store::{Store, OWNER_UNIQUE_CONSTRAINT};

/// Creates the one business an owner may have. `owner_id` comes from the
/// authenticated session and is trusted as-is. Concurrent creates for one
/// owner are settled by the unique owner index; the loser also gets
/// `BusinessExists`.
pub async fn create_business(
    store: &dyn Store,
    owner_id: Uuid,
    req: CreateBusinessRequest,
) -> Result<Business> {
    let name = validate::text("name", &req.name)?;
    let email = validate::email("email", &req.email)?;
    let phone = validate::optional_phone("phone", req.phone)?;

    if store.find_business_by_owner(owner_id).await?.is_some() {
        return Err(AppError::BusinessExists(owner_id));
    }

    let business = store
        .insert_business(NewBusiness {
            id: Uuid::new_v4(),
            owner_id,
            name,
            email,
            phone,
            description: validate::optional(req.description),
            created_at: Utc::now(),
        })
        .await
        .map_err(|e| {
            if e.violates(OWNER_UNIQUE_CONSTRAINT) {
                AppError::BusinessExists(owner_id)
            } else {
                AppError::Store(e)
            }
        })?;

    info!(business_id = %business.id, owner_id = %owner_id, "business created");
    Ok(business)
}

pub async fn get_business(store: &dyn Store, id: Uuid) -> Result<Business> {
    store
        .find_business(id)
        .await?
        .ok_or(AppError::BusinessNotFound(id))
}

pub async fn business_for_owner(store: &dyn Store, owner_id: Uuid) -> Result<Business> {
    store
        .find_business_by_owner(owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no business registered for owner {}", owner_id)))
}
