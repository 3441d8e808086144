use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<NewService> for Service {
    fn from(s: NewService) -> Self {
        Self {
            id: s.id,
            business_id: s.business_id,
            name: s.name,
            description: s.description,
            duration_minutes: s.duration_minutes,
            price: s.price,
            is_active: true,
            created_at: s.created_at,
            updated_at: s.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFilter {
    All,
    ActiveOnly,
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    /// Decimal text as typed by the owner, e.g. `"25.50"`.
    pub price: Option<String>,
}

fn default_duration() -> i32 {
    30
}

#[derive(Debug, Deserialize)]
pub struct SetServiceActiveRequest {
    pub active: bool,
}
