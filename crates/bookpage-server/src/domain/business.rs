use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Business {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated business row, ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<NewBusiness> for Business {
    fn from(b: NewBusiness) -> Self {
        Self {
            id: b.id,
            owner_id: b.owner_id,
            name: b.name,
            email: b.email,
            phone: b.phone,
            description: b.description,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub description: Option<String>,
}

/// What the public booking page is allowed to see about a business.
#[derive(Debug, Serialize)]
pub struct PublicBusiness {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub description: Option<String>,
}

impl From<Business> for PublicBusiness {
    fn from(b: Business) -> Self {
        Self {
            id: b.id,
            name: b.name,
            email: b.email,
            phone: b.phone,
            description: b.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    #[serde(flatten)]
    pub business: Business,
    pub booking_url: String,
}

impl BusinessResponse {
    pub fn new(business: Business, booking_base_url: &str) -> Self {
        let booking_url = booking_link(booking_base_url, business.id);
        Self {
            business,
            booking_url,
        }
    }
}

/// Shareable public booking link. Holding the link is enough to book.
pub fn booking_link(base_url: &str, business_id: Uuid) -> String {
    format!("{}/book/{}", base_url.trim_end_matches('/'), business_id)
}
