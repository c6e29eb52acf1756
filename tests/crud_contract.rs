//! Create/get/update/delete contract for every resource under `/api`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{id_of, Caller, TestApp};

/// One resource: where it lives, a create body, and an update body.
struct Resource {
    collection: &'static str,
    create: Value,
    update: Value,
    changed_field: &'static str,
}

async fn parents(app: &TestApp, caller: &Caller) -> (Value, Value, Value, Value) {
    let screening = app
        .create(
            caller,
            "/api/screenings",
            json!({
                "screening_type": "physical_exam",
                "name": "Annual physical",
                "recommended_frequency_months": 12,
            }),
        )
        .await;
    let appliance = app
        .create(
            caller,
            "/api/appliances",
            json!({ "name": "Washer", "appliance_type": "washer_dryer" }),
        )
        .await;
    let bill = app
        .create(
            caller,
            "/api/bills",
            json!({
                "name": "Rent",
                "amount": 1500.0,
                "due_date": "2025-03-01",
                "billing_frequency": "monthly",
            }),
        )
        .await;
    let tax_year = app.create(caller, "/api/tax-years", json!({ "year": 2024 })).await;
    (screening, appliance, bill, tax_year)
}

async fn resources(app: &TestApp, caller: &Caller) -> Vec<Resource> {
    let (screening, appliance, bill, tax_year) = parents(app, caller).await;

    vec![
        Resource {
            collection: "/api/screenings",
            create: json!({
                "screening_type": "vision_test",
                "name": "Eye exam",
                "recommended_frequency_months": 24,
                "provider": "Dr. Iris",
            }),
            update: json!({
                "screening_type": "vision_test",
                "name": "Eye exam with dilation",
                "recommended_frequency_months": 24,
            }),
            changed_field: "name",
        },
        Resource {
            collection: "/api/appointments",
            create: json!({
                "screening_id": screening["id"],
                "appointment_date": "2025-04-02T14:00:00Z",
                "location": "Clinic A",
            }),
            update: json!({
                "screening_id": screening["id"],
                "appointment_date": "2025-04-02T14:00:00Z",
                "location": "Clinic B",
            }),
            changed_field: "location",
        },
        Resource {
            collection: "/api/reminders",
            create: json!({
                "screening_id": screening["id"],
                "reminder_date": "2025-03-20",
                "message": "Book it",
            }),
            update: json!({
                "screening_id": screening["id"],
                "reminder_date": "2025-03-20",
                "message": "Booked?",
            }),
            changed_field: "message",
        },
        Resource {
            collection: "/api/appliances",
            create: json!({
                "name": "Dryer",
                "appliance_type": "washer_dryer",
                "serial_number": "SN-1",
            }),
            update: json!({
                "name": "Dryer",
                "appliance_type": "washer_dryer",
                "serial_number": "SN-2",
            }),
            changed_field: "serial_number",
        },
        Resource {
            collection: "/api/warranties",
            create: json!({
                "appliance_id": appliance["id"],
                "provider": "Acme",
                "start_date": "2024-01-01",
                "end_date": "2026-01-01",
            }),
            update: json!({
                "appliance_id": appliance["id"],
                "provider": "Acme Extended",
                "start_date": "2024-01-01",
                "end_date": "2026-01-01",
            }),
            changed_field: "provider",
        },
        Resource {
            collection: "/api/manuals",
            create: json!({
                "appliance_id": appliance["id"],
                "title": "User guide",
                "file_url": "https://files.example.com/guide.pdf",
            }),
            update: json!({
                "appliance_id": appliance["id"],
                "title": "User guide v2",
                "file_url": "https://files.example.com/guide.pdf",
            }),
            changed_field: "title",
        },
        Resource {
            collection: "/api/service-records",
            create: json!({
                "appliance_id": appliance["id"],
                "service_date": "2024-03-15",
                "service_provider": "ABC Appliance Repair",
                "cost": 175.0,
            }),
            update: json!({
                "appliance_id": appliance["id"],
                "service_date": "2024-03-15",
                "service_provider": "ABC Appliance Repair",
                "description": "Replaced drain pump",
                "cost": 175.0,
            }),
            changed_field: "description",
        },
        Resource {
            collection: "/api/bills",
            create: json!({
                "name": "Electric",
                "payee": "Power Co",
                "amount": 90.5,
                "due_date": "2025-03-15",
                "billing_frequency": "monthly",
            }),
            update: json!({
                "name": "Electric",
                "payee": "Power Co",
                "amount": 90.5,
                "due_date": "2025-03-15",
                "billing_frequency": "monthly",
                "status": "paid",
            }),
            changed_field: "status",
        },
        Resource {
            collection: "/api/payments",
            create: json!({
                "bill_id": bill["id"],
                "amount": 750.0,
                "payment_date": "2025-02-28",
                "payment_method": "check",
            }),
            update: json!({
                "bill_id": bill["id"],
                "amount": 750.0,
                "payment_date": "2025-02-28",
                "payment_method": "check",
                "confirmation_number": "CHK-1001",
            }),
            changed_field: "confirmation_number",
        },
        Resource {
            collection: "/api/tax-years",
            create: json!({ "year": 2023, "notes": "first draft" }),
            update: json!({ "year": 2023, "notes": "final" }),
            changed_field: "notes",
        },
        Resource {
            collection: "/api/deductions",
            create: json!({
                "tax_year_id": tax_year["id"],
                "description": "Home office desk",
                "amount": 320.0,
                "date": "2024-05-05",
                "category": "home_office",
            }),
            update: json!({
                "tax_year_id": tax_year["id"],
                "description": "Home office desk",
                "amount": 320.0,
                "date": "2024-05-05",
                "category": "home_office",
                "has_receipt": true,
            }),
            changed_field: "has_receipt",
        },
    ]
}

/// Every submitted field comes back unchanged.
fn assert_echoes(submitted: &Value, returned: &Value, collection: &str) {
    for (key, value) in submitted.as_object().unwrap() {
        assert_eq!(&returned[key], value, "{} field {}", collection, key);
    }
}

#[tokio::test]
async fn create_then_get_returns_submitted_fields() {
    let app = TestApp::new();
    let caller = app.caller();

    for resource in resources(&app, &caller).await {
        let created = app.create(&caller, resource.collection, resource.create.clone()).await;
        assert!(Uuid::parse_str(id_of(&created)).is_ok());
        assert!(created["created_at"].is_string());
        assert_echoes(&resource.create, &created, resource.collection);

        let uri = format!("{}/{}", resource.collection, id_of(&created));
        let (status, fetched) = app.get(&caller, &uri).await;
        assert_eq!(status, StatusCode::OK, "GET {}", uri);
        assert_eq!(fetched, created, "GET {}", uri);
    }
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = TestApp::new();
    let caller = app.caller();

    for resource in resources(&app, &caller).await {
        let created = app.create(&caller, resource.collection, resource.create.clone()).await;
        let uri = format!("{}/{}", resource.collection, id_of(&created));

        let (status, updated) = app
            .send(&caller, Method::PUT, &uri, Some(resource.update.clone()))
            .await;
        assert_eq!(status, StatusCode::OK, "PUT {}: {}", uri, updated);
        assert_eq!(
            updated[resource.changed_field],
            resource.update[resource.changed_field],
            "PUT {}",
            uri
        );
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["created_at"], created["created_at"]);
    }
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let app = TestApp::new();
    let caller = app.caller();

    for resource in resources(&app, &caller).await {
        let uri = format!("{}/{}", resource.collection, Uuid::new_v4());
        let (status, body) = app
            .send(&caller, Method::PUT, &uri, Some(resource.update.clone()))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {}: {}", uri, body);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn deleted_records_are_gone() {
    let app = TestApp::new();
    let caller = app.caller();

    for resource in resources(&app, &caller).await {
        let created = app.create(&caller, resource.collection, resource.create.clone()).await;
        let uri = format!("{}/{}", resource.collection, id_of(&created));

        let (status, body) = app.send(&caller, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "DELETE {}", uri);
        assert_eq!(body, Value::Null);

        let (status, _) = app.get(&caller, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET after DELETE {}", uri);

        let (status, _) = app.send(&caller, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "second DELETE {}", uri);
    }
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let app = TestApp::new();
    let caller = app.caller();

    for resource in resources(&app, &caller).await {
        let uri = format!("{}/12345", resource.collection);
        let (status, _) = app.get(&caller, &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "GET {}", uri);
    }
}
