use std::sync::Arc;

use async_trait::async_trait;
use bookpage_server::domain::{
    Appointment, AppointmentStatus, AppointmentView, BookingRequest, Business,
    CreateBusinessRequest, CreateServiceRequest, CustomerContact, NewAppointment, NewBusiness,
    NewService, Service, ServiceFilter,
};
use bookpage_server::error::AppError;
use bookpage_server::scheduling::{catalog, lifecycle, profile};
use bookpage_server::store::{MemoryStore, Store, StoreResult};
use chrono::{TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use uuid::Uuid;

fn store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

async fn create_business(store: &dyn Store, name: &str) -> Business {
    profile::create_business(
        store,
        Uuid::new_v4(),
        CreateBusinessRequest {
            name: name.into(),
            email: "owner@example.test".into(),
            phone: None,
            description: None,
        },
    )
    .await
    .unwrap()
}

async fn create_service(store: &dyn Store, business_id: Uuid, name: &str) -> Service {
    catalog::create_service(
        store,
        business_id,
        CreateServiceRequest {
            name: name.into(),
            description: None,
            duration_minutes: 30,
            price: Some("20".into()),
        },
    )
    .await
    .unwrap()
}

fn booking(service_id: Uuid, date: &str, time: &str) -> BookingRequest {
    BookingRequest {
        service_id,
        customer: CustomerContact {
            name: "Jo".into(),
            email: "jo@x.test".into(),
            phone: "555".into(),
        },
        date: date.into(),
        time: time.into(),
        notes: None,
    }
}

// =============================================================================
// BUSINESS PROFILE
// =============================================================================

#[tokio::test]
async fn test_create_business_normalises_optional_fields() {
    let store = store();
    let owner = Uuid::new_v4();

    let business = profile::create_business(
        store.as_ref(),
        owner,
        CreateBusinessRequest {
            name: "  Acme Cuts ".into(),
            email: "a@acme.test".into(),
            phone: Some("".into()),
            description: Some("Walk-ins welcome".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(business.owner_id, owner);
    assert_eq!(business.name, "Acme Cuts");
    assert_eq!(business.phone, None);
    assert_eq!(business.description.as_deref(), Some("Walk-ins welcome"));

    let found = profile::business_for_owner(store.as_ref(), owner).await.unwrap();
    assert_eq!(found.id, business.id);
}

#[tokio::test]
async fn test_create_business_requires_name_and_email() {
    let store = store();

    for (name, email) in [("", "a@acme.test"), ("Acme", ""), ("Acme", "not-an-email")] {
        let err = profile::create_business(
            store.as_ref(),
            Uuid::new_v4(),
            CreateBusinessRequest {
                name: name.into(),
                email: email.into(),
                phone: None,
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err}");
    }
}

#[tokio::test]
async fn test_owner_cannot_create_second_business() {
    let store = store();
    let owner = Uuid::new_v4();
    let req = || CreateBusinessRequest {
        name: "Acme".into(),
        email: "a@acme.test".into(),
        phone: None,
        description: None,
    };

    profile::create_business(store.as_ref(), owner, req()).await.unwrap();
    let err = profile::create_business(store.as_ref(), owner, req())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BusinessExists(id) if id == owner));
}

#[tokio::test]
async fn test_create_business_rejects_oversized_fields() {
    let store = store();

    let cases = [
        ("A".repeat(256), "a@acme.test".to_string(), None),
        ("Acme".to_string(), format!("{}@acme.test", "a".repeat(250)), None),
        ("Acme".to_string(), "a@acme.test".to_string(), Some("5".repeat(65))),
    ];

    for (name, email, phone) in cases {
        let err = profile::create_business(
            store.as_ref(),
            Uuid::new_v4(),
            CreateBusinessRequest {
                name,
                email,
                phone,
                description: None,
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err}");
    }
}

/// Store whose owner lookup always misses, so `create_business` reaches the
/// insert the way the loser of two concurrent creates does.
struct StaleOwnerLookup(MemoryStore);

#[async_trait]
impl Store for StaleOwnerLookup {
    fn backend(&self) -> &'static str {
        self.0.backend()
    }
    async fn ping(&self) -> StoreResult<()> {
        self.0.ping().await
    }
    async fn insert_business(&self, business: NewBusiness) -> StoreResult<Business> {
        self.0.insert_business(business).await
    }
    async fn find_business(&self, id: Uuid) -> StoreResult<Option<Business>> {
        self.0.find_business(id).await
    }
    async fn find_business_by_owner(&self, _owner_id: Uuid) -> StoreResult<Option<Business>> {
        Ok(None)
    }
    async fn insert_service(&self, service: NewService) -> StoreResult<Service> {
        self.0.insert_service(service).await
    }
    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        self.0.find_service(id).await
    }
    async fn list_services(
        &self,
        business_id: Uuid,
        filter: ServiceFilter,
    ) -> StoreResult<Vec<Service>> {
        self.0.list_services(business_id, filter).await
    }
    async fn set_service_active(&self, id: Uuid, active: bool) -> StoreResult<Option<Service>> {
        self.0.set_service_active(id, active).await
    }
    async fn insert_appointment(&self, appointment: NewAppointment) -> StoreResult<Appointment> {
        self.0.insert_appointment(appointment).await
    }
    async fn find_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        self.0.find_appointment(id).await
    }
    async fn update_appointment_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> StoreResult<Option<Appointment>> {
        self.0.update_appointment_status(id, status).await
    }
    async fn list_appointments(&self, business_id: Uuid) -> StoreResult<Vec<AppointmentView>> {
        self.0.list_appointments(business_id).await
    }
}

#[tokio::test]
async fn test_owner_race_loser_gets_business_exists() {
    let store = StaleOwnerLookup(MemoryStore::new());
    let owner = Uuid::new_v4();
    let req = || CreateBusinessRequest {
        name: "Acme".into(),
        email: "a@acme.test".into(),
        phone: None,
        description: None,
    };

    profile::create_business(&store, owner, req()).await.unwrap();
    let err = profile::create_business(&store, owner, req())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::BusinessExists(id) if id == owner), "got {err}");
}

#[tokio::test]
async fn test_concurrent_creates_for_one_owner_leave_one_business() {
    let store = store();
    let owner = Uuid::new_v4();
    let req = || CreateBusinessRequest {
        name: "Acme".into(),
        email: "a@acme.test".into(),
        phone: None,
        description: None,
    };

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let req = req();
            tokio::spawn(async move { profile::create_business(store.as_ref(), owner, req).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(err) => assert!(matches!(err, AppError::BusinessExists(_)), "got {err}"),
        }
    }
    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_unknown_business_is_not_found() {
    let store = store();

    let err = profile::get_business(store.as_ref(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BusinessNotFound(_)));

    let err = profile::business_for_owner(store.as_ref(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

// =============================================================================
// SERVICE CATALOG
// =============================================================================

#[tokio::test]
async fn test_service_price_round_trips_as_number() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;

    catalog::create_service(
        store.as_ref(),
        business.id,
        CreateServiceRequest {
            name: "Colour".into(),
            description: None,
            duration_minutes: 45,
            price: Some("25.50".into()),
        },
    )
    .await
    .unwrap();

    let services = catalog::list_services(store.as_ref(), business.id, ServiceFilter::All)
        .await
        .unwrap();
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].duration_minutes, 45);
    assert_eq!(services[0].price.and_then(|p| p.to_f64()), Some(25.5));
    assert!(services[0].is_active);

    let json = serde_json::to_value(&services[0]).unwrap();
    assert_eq!(json["duration_minutes"], 45);
    assert_eq!(json["price"].as_f64(), Some(25.5));
}

#[tokio::test]
async fn test_service_without_price() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;

    let service = catalog::create_service(
        store.as_ref(),
        business.id,
        CreateServiceRequest {
            name: "Consultation".into(),
            description: Some("".into()),
            duration_minutes: 15,
            price: Some("".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(service.price, None);
    assert_eq!(service.description, None);
    assert!(serde_json::to_value(&service).unwrap()["price"].is_null());
}

#[tokio::test]
async fn test_service_validation() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;

    let cases = [
        ("Haircut", 0, None),
        ("Haircut", -30, None),
        ("Haircut", 10, None),
        ("Haircut", 30, Some("-5")),
        ("Haircut", 30, Some("abc")),
        ("Haircut", 30, Some("10000000000")),
        ("Haircut", 30, Some("99999999999999999")),
        ("", 30, None),
    ];

    for (name, duration_minutes, price) in cases {
        let err = catalog::create_service(
            store.as_ref(),
            business.id,
            CreateServiceRequest {
                name: name.into(),
                description: None,
                duration_minutes,
                price: price.map(String::from),
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err}");
    }

    let long_name = catalog::create_service(
        store.as_ref(),
        business.id,
        CreateServiceRequest {
            name: "H".repeat(256),
            description: Some("d".repeat(10_000)),
            duration_minutes: 30,
            price: None,
        },
    )
    .await
    .unwrap_err();
    assert!(long_name.is_validation());

    let services = catalog::list_services(store.as_ref(), business.id, ServiceFilter::All)
        .await
        .unwrap();
    assert!(services.is_empty());
}

#[tokio::test]
async fn test_service_accepts_largest_price_and_long_description() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;

    let service = catalog::create_service(
        store.as_ref(),
        business.id,
        CreateServiceRequest {
            name: "H".repeat(255),
            description: Some("d".repeat(10_000)),
            duration_minutes: 30,
            price: Some("9999999999.99".into()),
        },
    )
    .await
    .unwrap();

    assert_eq!(service.price.map(|p| p.to_string()).as_deref(), Some("9999999999.99"));
    assert_eq!(service.description.map(|d| d.len()), Some(10_000));
}

#[tokio::test]
async fn test_service_requires_existing_business() {
    let store = store();

    let err = catalog::create_service(
        store.as_ref(),
        Uuid::new_v4(),
        CreateServiceRequest {
            name: "Haircut".into(),
            description: None,
            duration_minutes: 30,
            price: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::BusinessNotFound(_)));
}

#[tokio::test]
async fn test_set_active_is_idempotent() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    let first = catalog::set_service_active(store.as_ref(), service.id, true)
        .await
        .unwrap();
    let second = catalog::set_service_active(store.as_ref(), service.id, true)
        .await
        .unwrap();
    assert!(first.is_active);
    assert!(second.is_active);

    catalog::set_service_active(store.as_ref(), service.id, false)
        .await
        .unwrap();
    let again = catalog::set_service_active(store.as_ref(), service.id, false)
        .await
        .unwrap();
    assert!(!again.is_active);
}

#[tokio::test]
async fn test_set_active_unknown_service() {
    let store = store();

    let err = catalog::set_service_active(store.as_ref(), Uuid::new_v4(), true)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ServiceNotFound(_)));
}

#[tokio::test]
async fn test_list_services_newest_first_and_active_filter() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let other = create_business(store.as_ref(), "Other").await;

    let first = create_service(store.as_ref(), business.id, "First").await;
    let second = create_service(store.as_ref(), business.id, "Second").await;
    let third = create_service(store.as_ref(), business.id, "Third").await;
    create_service(store.as_ref(), other.id, "Elsewhere").await;

    catalog::set_service_active(store.as_ref(), second.id, false)
        .await
        .unwrap();

    let all: Vec<Uuid> = catalog::list_services(store.as_ref(), business.id, ServiceFilter::All)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(all, vec![third.id, second.id, first.id]);

    let active: Vec<Uuid> =
        catalog::list_services(store.as_ref(), business.id, ServiceFilter::ActiveOnly)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
    assert_eq!(active, vec![third.id, first.id]);
}

// =============================================================================
// APPOINTMENT LIFECYCLE
// =============================================================================

#[tokio::test]
async fn test_booking_scenario() {
    let store = store();

    let business = profile::create_business(
        store.as_ref(),
        Uuid::new_v4(),
        CreateBusinessRequest {
            name: "Acme Cuts".into(),
            email: "a@acme.test".into(),
            phone: None,
            description: None,
        },
    )
    .await
    .unwrap();

    let service = catalog::create_service(
        store.as_ref(),
        business.id,
        CreateServiceRequest {
            name: "Haircut".into(),
            description: None,
            duration_minutes: 30,
            price: Some("20".into()),
        },
    )
    .await
    .unwrap();

    let appointment = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(
        appointment.appointment_at,
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    );
    assert_eq!(appointment.service_id, service.id);
    assert_eq!(appointment.business_id, business.id);
    assert_eq!(appointment.customer_name, "Jo");
    assert_eq!(appointment.customer_email, "jo@x.test");
    assert_eq!(appointment.customer_phone, "555");
    assert_eq!(appointment.notes, None);
}

#[tokio::test]
async fn test_booking_unknown_business() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    let err = lifecycle::submit_booking(
        store.as_ref(),
        Uuid::new_v4(),
        booking(service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::BusinessNotFound(_)));
}

#[tokio::test]
async fn test_booking_unknown_service() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;

    let err = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(Uuid::new_v4(), "2025-06-01", "09:00"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::ServiceNotFound(_)));
}

#[tokio::test]
async fn test_booking_rejects_service_of_other_business() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let other = create_business(store.as_ref(), "Other").await;
    let foreign_service = create_service(store.as_ref(), other.id, "Massage").await;

    let err = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(foreign_service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap_err();

    assert!(err.is_validation());
    assert!(lifecycle::list_appointments(store.as_ref(), business.id)
        .await
        .unwrap()
        .is_empty());
    assert!(lifecycle::list_appointments(store.as_ref(), other.id)
        .await
        .unwrap()
        .is_empty());
}

/// Deactivation only hides a service from the public listing; a booking
/// that names it directly still goes through.
#[tokio::test]
async fn test_booking_for_inactive_service_is_accepted() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;
    catalog::set_service_active(store.as_ref(), service.id, false)
        .await
        .unwrap();

    let appointment = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.service_id, service.id);
    assert!(
        catalog::list_services(store.as_ref(), business.id, ServiceFilter::ActiveOnly)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_booking_rejects_malformed_input() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    let mut missing_name = booking(service.id, "2025-06-01", "09:00");
    missing_name.customer.name = " ".into();
    let mut missing_phone = booking(service.id, "2025-06-01", "09:00");
    missing_phone.customer.phone = "".into();
    let mut bad_email = booking(service.id, "2025-06-01", "09:00");
    bad_email.customer.email = "jo".into();
    let mut long_name = booking(service.id, "2025-06-01", "09:00");
    long_name.customer.name = "J".repeat(256);
    let mut long_email = booking(service.id, "2025-06-01", "09:00");
    long_email.customer.email = format!("{}@x.test", "j".repeat(250));
    let mut long_phone = booking(service.id, "2025-06-01", "09:00");
    long_phone.customer.phone = "5".repeat(65);

    let requests = [
        missing_name,
        missing_phone,
        bad_email,
        long_name,
        long_email,
        long_phone,
        booking(service.id, "2025-13-01", "09:00"),
        booking(service.id, "2025-06-01", "9am"),
        booking(service.id, "", ""),
    ];

    for req in requests {
        let err = lifecycle::submit_booking(store.as_ref(), business.id, req)
            .await
            .unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err}");
    }

    assert!(lifecycle::list_appointments(store.as_ref(), business.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_booking_in_the_past_is_accepted() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    let appointment = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(service.id, "2001-01-01", "08:15"),
    )
    .await
    .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Pending);
}

/// Documents that identical slots are not detected as conflicts. This test
/// must change if availability checking is introduced.
#[tokio::test]
async fn test_concurrent_identical_bookings_both_succeed() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    let (a, b) = tokio::join!(
        lifecycle::submit_booking(
            store.as_ref(),
            business.id,
            booking(service.id, "2025-06-01", "09:00"),
        ),
        lifecycle::submit_booking(
            store.as_ref(),
            business.id,
            booking(service.id, "2025-06-01", "09:00"),
        ),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_ne!(a.id, b.id);
    assert_eq!(a.appointment_at, b.appointment_at);

    let listed = lifecycle::list_appointments(store.as_ref(), business.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn test_spawned_bookings_for_same_slot_all_succeed() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let business_id = business.id;
            let req = booking(service.id, "2025-06-01", "09:00");
            tokio::spawn(async move {
                lifecycle::submit_booking(store.as_ref(), business_id, req).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let listed = lifecycle::list_appointments(store.as_ref(), business.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 8);
}

#[tokio::test]
async fn test_update_status_any_to_any() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;
    let appointment = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap();

    // includes moves out of terminal states
    for status in ["cancelled", "confirmed", "completed", "pending", "completed"] {
        let updated = lifecycle::update_status(store.as_ref(), appointment.id, status)
            .await
            .unwrap();
        assert_eq!(updated.status.as_str(), status);

        let listed = lifecycle::list_appointments(store.as_ref(), business.id)
            .await
            .unwrap();
        assert_eq!(listed[0].appointment.status.as_str(), status);
    }
}

#[tokio::test]
async fn test_update_status_rejects_unknown_value() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;
    let appointment = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap();
    lifecycle::update_status(store.as_ref(), appointment.id, "confirmed")
        .await
        .unwrap();

    for status in ["archived", "CONFIRMED", ""] {
        let err = lifecycle::update_status(store.as_ref(), appointment.id, status)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    let stored = lifecycle::get_appointment(store.as_ref(), appointment.id)
        .await
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn test_update_status_unknown_appointment() {
    let store = store();

    let err = lifecycle::update_status(store.as_ref(), Uuid::new_v4(), "confirmed")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AppointmentNotFound(_)));
}

#[tokio::test]
async fn test_list_appointments_ordered_and_joined() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let haircut = create_service(store.as_ref(), business.id, "Haircut").await;
    let shave = catalog::create_service(
        store.as_ref(),
        business.id,
        CreateServiceRequest {
            name: "Shave".into(),
            description: None,
            duration_minutes: 15,
            price: None,
        },
    )
    .await
    .unwrap();

    let late = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(haircut.id, "2025-06-02", "10:00"),
    )
    .await
    .unwrap();
    let early = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(shave.id, "2025-06-01", "16:30"),
    )
    .await
    .unwrap();

    let listed = lifecycle::list_appointments(store.as_ref(), business.id)
        .await
        .unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].appointment.id, early.id);
    assert_eq!(listed[0].service_name.as_deref(), Some("Shave"));
    assert_eq!(listed[0].service_duration_minutes, Some(15));
    assert_eq!(listed[1].appointment.id, late.id);
    assert_eq!(listed[1].service_name.as_deref(), Some("Haircut"));
    assert_eq!(listed[1].service_duration_minutes, Some(30));
}

#[tokio::test]
async fn test_store_failure_surfaces_and_leaves_no_record() {
    let store = store();
    let business = create_business(store.as_ref(), "Acme").await;
    let service = create_service(store.as_ref(), business.id, "Haircut").await;

    store.set_unavailable(true);
    let err = lifecycle::submit_booking(
        store.as_ref(),
        business.id,
        booking(service.id, "2025-06-01", "09:00"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    store.set_unavailable(false);
    assert!(lifecycle::list_appointments(store.as_ref(), business.id)
        .await
        .unwrap()
        .is_empty());
}
