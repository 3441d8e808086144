use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult, OWNER_UNIQUE_CONSTRAINT};
use crate::domain::{
    Appointment, AppointmentStatus, AppointmentView, Business, NewAppointment, NewBusiness,
    NewService, Service, ServiceFilter,
};

/// In-process store holding the key constraints of the PostgreSQL schema.
/// Owners are unique across businesses and every service row points at an
/// existing business. Appointments point at a service of the same business.
/// Column widths and numeric ranges are not checked here; the scheduling
/// layer validates them before any write.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct Tables {
    businesses: Vec<Business>,
    services: Vec<Service>,
    appointments: Vec<Appointment>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::new("store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }

    async fn insert_business(&self, business: NewBusiness) -> StoreResult<Business> {
        self.check_available()?;
        let mut tables = self.inner.write().await;

        if tables.businesses.iter().any(|b| b.id == business.id) {
            return Err(StoreError::unique(
                "businesses_pkey",
                "duplicate key value violates businesses_pkey",
            ));
        }
        if tables
            .businesses
            .iter()
            .any(|b| b.owner_id == business.owner_id)
        {
            return Err(StoreError::unique(
                OWNER_UNIQUE_CONSTRAINT,
                "duplicate key value violates businesses_owner_id_key",
            ));
        }

        let business = Business::from(business);
        tables.businesses.push(business.clone());
        Ok(business)
    }

    async fn find_business(&self, id: Uuid) -> StoreResult<Option<Business>> {
        self.check_available()?;
        let tables = self.inner.read().await;
        Ok(tables.businesses.iter().find(|b| b.id == id).cloned())
    }

    async fn find_business_by_owner(&self, owner_id: Uuid) -> StoreResult<Option<Business>> {
        self.check_available()?;
        let tables = self.inner.read().await;
        Ok(tables
            .businesses
            .iter()
            .find(|b| b.owner_id == owner_id)
            .cloned())
    }

    async fn insert_service(&self, service: NewService) -> StoreResult<Service> {
        self.check_available()?;
        let mut tables = self.inner.write().await;

        if !tables.businesses.iter().any(|b| b.id == service.business_id) {
            return Err(StoreError::new(
                "insert on services violates foreign key to businesses",
            ));
        }
        if tables.services.iter().any(|s| s.id == service.id) {
            return Err(StoreError::new("duplicate key value violates services_pkey"));
        }

        let service = Service::from(service);
        tables.services.push(service.clone());
        Ok(service)
    }

    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        self.check_available()?;
        let tables = self.inner.read().await;
        Ok(tables.services.iter().find(|s| s.id == id).cloned())
    }

    async fn list_services(
        &self,
        business_id: Uuid,
        filter: ServiceFilter,
    ) -> StoreResult<Vec<Service>> {
        self.check_available()?;
        let tables = self.inner.read().await;

        // reverse insertion order first so equal timestamps stay newest first
        let mut services: Vec<Service> = tables
            .services
            .iter()
            .rev()
            .filter(|s| s.business_id == business_id)
            .filter(|s| filter == ServiceFilter::All || s.is_active)
            .cloned()
            .collect();
        services.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(services)
    }

    async fn set_service_active(&self, id: Uuid, active: bool) -> StoreResult<Option<Service>> {
        self.check_available()?;
        let mut tables = self.inner.write().await;

        Ok(tables.services.iter_mut().find(|s| s.id == id).map(|s| {
            s.is_active = active;
            s.updated_at = Utc::now();
            s.clone()
        }))
    }

    async fn insert_appointment(&self, appointment: NewAppointment) -> StoreResult<Appointment> {
        self.check_available()?;
        let mut tables = self.inner.write().await;

        if !tables
            .businesses
            .iter()
            .any(|b| b.id == appointment.business_id)
        {
            return Err(StoreError::new(
                "insert on appointments violates foreign key to businesses",
            ));
        }
        if !tables
            .services
            .iter()
            .any(|s| s.id == appointment.service_id && s.business_id == appointment.business_id)
        {
            return Err(StoreError::new(
                "insert on appointments violates foreign key to services",
            ));
        }
        if tables.appointments.iter().any(|a| a.id == appointment.id) {
            return Err(StoreError::new(
                "duplicate key value violates appointments_pkey",
            ));
        }

        let appointment = Appointment::from(appointment);
        tables.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn find_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        self.check_available()?;
        let tables = self.inner.read().await;
        Ok(tables.appointments.iter().find(|a| a.id == id).cloned())
    }

    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> StoreResult<Option<Appointment>> {
        self.check_available()?;
        let mut tables = self.inner.write().await;

        Ok(tables.appointments.iter_mut().find(|a| a.id == id).map(|a| {
            a.status = status;
            a.updated_at = Utc::now();
            a.clone()
        }))
    }

    async fn list_appointments(&self, business_id: Uuid) -> StoreResult<Vec<AppointmentView>> {
        self.check_available()?;
        let tables = self.inner.read().await;

        let mut appointments: Vec<AppointmentView> = tables
            .appointments
            .iter()
            .filter(|a| a.business_id == business_id)
            .map(|a| {
                let service = tables.services.iter().find(|s| s.id == a.service_id);
                AppointmentView {
                    appointment: a.clone(),
                    service_name: service.map(|s| s.name.clone()),
                    service_duration_minutes: service.map(|s| s.duration_minutes),
                }
            })
            .collect();
        appointments.sort_by(|a, b| {
            a.appointment
                .appointment_at
                .cmp(&b.appointment.appointment_at)
                .then(a.appointment.created_at.cmp(&b.appointment.created_at))
        });
        Ok(appointments)
    }
}
