//! Persistence port for businesses, services and appointments.
//!
//! Implementations only persist and query; every rule about what may be
//! written lives in [`crate::scheduling`].

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    Appointment, AppointmentStatus, AppointmentView, Business, NewAppointment, NewBusiness,
    NewService, Service, ServiceFilter,
};

/// Any failure of the persistence layer: connectivity, constraint
/// violation, timeout.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    unique_violation: Option<String>,
}

/// Unique index on `businesses.owner_id`.
pub const OWNER_UNIQUE_CONSTRAINT: &str = "businesses_owner_id_key";

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            unique_violation: None,
        }
    }

    /// A write rejected by the named unique constraint.
    pub fn unique(constraint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            unique_violation: Some(constraint.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn violates(&self, constraint: &str) -> bool {
        self.unique_violation.as_deref() == Some(constraint)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                if let Some(constraint) = db.constraint() {
                    return Self::unique(constraint, e.to_string());
                }
            }
        }
        Self::new(e.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Short backend name reported by the readiness endpoint.
    fn backend(&self) -> &'static str;

    /// Round-trip to the backing store, used by readiness checks.
    async fn ping(&self) -> StoreResult<()>;

    async fn insert_business(&self, business: NewBusiness) -> StoreResult<Business>;
    async fn find_business(&self, id: Uuid) -> StoreResult<Option<Business>>;
    async fn find_business_by_owner(&self, owner_id: Uuid) -> StoreResult<Option<Business>>;

    async fn insert_service(&self, service: NewService) -> StoreResult<Service>;
    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>>;
    /// Services of one business, newest first.
    async fn list_services(
        &self,
        business_id: Uuid,
        filter: ServiceFilter,
    ) -> StoreResult<Vec<Service>>;
    /// Returns `None` when no service has this id.
    async fn set_service_active(&self, id: Uuid, active: bool) -> StoreResult<Option<Service>>;

    async fn insert_appointment(&self, appointment: NewAppointment) -> StoreResult<Appointment>;
    async fn find_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>>;
    /// Returns `None` when no appointment has this id.
    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> StoreResult<Option<Appointment>>;
    /// Appointments of one business by scheduled time ascending, joined
    /// with their service's current name and duration.
    async fn list_appointments(&self, business_id: Uuid) -> StoreResult<Vec<AppointmentView>>;
}
