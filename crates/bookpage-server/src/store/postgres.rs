use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Store, StoreResult};
use crate::domain::{
    Appointment, AppointmentStatus, AppointmentView, Business, NewAppointment, NewBusiness,
    NewService, Service, ServiceFilter,
};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_business(&self, business: NewBusiness) -> StoreResult<Business> {
        let business: Business = sqlx::query_as(
            r#"
            INSERT INTO businesses (id, owner_id, name, email, phone, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(business.id)
        .bind(business.owner_id)
        .bind(&business.name)
        .bind(&business.email)
        .bind(&business.phone)
        .bind(&business.description)
        .bind(business.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(business)
    }

    async fn find_business(&self, id: Uuid) -> StoreResult<Option<Business>> {
        let business: Option<Business> = sqlx::query_as("SELECT * FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(business)
    }

    async fn find_business_by_owner(&self, owner_id: Uuid) -> StoreResult<Option<Business>> {
        let business: Option<Business> =
            sqlx::query_as("SELECT * FROM businesses WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(business)
    }

    async fn insert_service(&self, service: NewService) -> StoreResult<Service> {
        let service: Service = sqlx::query_as(
            r#"
            INSERT INTO services (id, business_id, name, description, duration_minutes, price, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $7)
            RETURNING *
            "#,
        )
        .bind(service.id)
        .bind(service.business_id)
        .bind(&service.name)
        .bind(&service.description)
        .bind(service.duration_minutes)
        .bind(service.price)
        .bind(service.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(service)
    }

    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        let service: Option<Service> = sqlx::query_as("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(service)
    }

    async fn list_services(
        &self,
        business_id: Uuid,
        filter: ServiceFilter,
    ) -> StoreResult<Vec<Service>> {
        let services: Vec<Service> = match filter {
            ServiceFilter::All => {
                sqlx::query_as(
                    "SELECT * FROM services WHERE business_id = $1 ORDER BY created_at DESC",
                )
                .bind(business_id)
                .fetch_all(&self.pool)
                .await?
            }
            ServiceFilter::ActiveOnly => {
                sqlx::query_as(
                    "SELECT * FROM services WHERE business_id = $1 AND is_active = TRUE ORDER BY created_at DESC",
                )
                .bind(business_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(services)
    }

    async fn set_service_active(&self, id: Uuid, active: bool) -> StoreResult<Option<Service>> {
        let service: Option<Service> = sqlx::query_as(
            "UPDATE services SET is_active = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(active)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(service)
    }

    async fn insert_appointment(&self, appointment: NewAppointment) -> StoreResult<Appointment> {
        let appointment: Appointment = sqlx::query_as(
            r#"
            INSERT INTO appointments (id, business_id, service_id, customer_name, customer_email, customer_phone, appointment_at, notes, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(appointment.id)
        .bind(appointment.business_id)
        .bind(appointment.service_id)
        .bind(&appointment.customer.name)
        .bind(&appointment.customer.email)
        .bind(&appointment.customer.phone)
        .bind(appointment.appointment_at)
        .bind(&appointment.notes)
        .bind(AppointmentStatus::Pending)
        .bind(appointment.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    async fn find_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        let appointment: Option<Appointment> =
            sqlx::query_as("SELECT * FROM appointments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(appointment)
    }

    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> StoreResult<Option<Appointment>> {
        let appointment: Option<Appointment> = sqlx::query_as(
            "UPDATE appointments SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;
        Ok(appointment)
    }

    async fn list_appointments(&self, business_id: Uuid) -> StoreResult<Vec<AppointmentView>> {
        let appointments: Vec<AppointmentView> = sqlx::query_as(
            r#"
            SELECT a.*, s.name AS service_name, s.duration_minutes AS service_duration_minutes
            FROM appointments a
            LEFT JOIN services s ON s.id = a.service_id
            WHERE a.business_id = $1
            ORDER BY a.appointment_at ASC, a.created_at ASC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }
}
