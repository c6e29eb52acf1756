//! HTTP routes for bill and payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_bill, create_payment, delete_bill, delete_payment, get_bill, get_bill_summary,
    get_payment, list_bills, list_payments, update_bill, update_payment, BillingHandlers,
};

/// Routes mounted at `/api/bills`.
pub fn bill_routes(handlers: BillingHandlers) -> Router {
    Router::new()
        .route("/", post(create_bill).get(list_bills))
        .route("/:id", get(get_bill).put(update_bill).delete(delete_bill))
        .route("/:id/summary", get(get_bill_summary))
        .with_state(handlers)
}

/// Routes mounted at `/api/payments`.
pub fn payment_routes(handlers: BillingHandlers) -> Router {
    Router::new()
        .route("/", post(create_payment).get(list_payments))
        .route(
            "/:id",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::{json, Value};

    use super::*;
    use crate::adapters::http::test_support::{authed, send};
    use crate::adapters::memory::InMemoryBillingStore;

    fn app() -> Router {
        let store = Arc::new(InMemoryBillingStore::new());
        let handlers = BillingHandlers::new(store.clone(), store);

        let routes = Router::new()
            .nest("/bills", bill_routes(handlers.clone()))
            .nest("/payments", payment_routes(handlers));
        authed("/api", routes).0
    }

    async fn create_bill(app: &Router, name: &str, due_date: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/bills",
            Some(json!({
                "name": name,
                "amount": 100,
                "due_date": due_date,
                "billing_frequency": "monthly",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    async fn pay(app: &Router, bill: &Value, amount: f64, date: &str) -> StatusCode {
        send(
            app,
            Method::POST,
            "/api/payments",
            Some(json!({
                "bill_id": bill["id"],
                "amount": amount,
                "payment_date": date,
                "payment_method": "auto_pay",
            })),
        )
        .await
        .0
    }

    #[tokio::test]
    async fn created_bill_is_pending() {
        let app = app();
        let bill = create_bill(&app, "Water", "2025-03-01").await;
        assert_eq!(bill["status"], "pending");
        assert_eq!(bill["amount"], json!(100.0));
    }

    #[tokio::test]
    async fn bills_list_in_due_date_order_within_range() {
        let app = app();
        create_bill(&app, "Internet", "2025-03-20").await;
        create_bill(&app, "Rent", "2025-03-01").await;
        create_bill(&app, "Insurance", "2025-05-01").await;

        let (status, bills) = send(
            &app,
            Method::GET,
            "/api/bills?due_from=2025-03-01&due_to=2025-03-31",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = bills
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Rent", "Internet"]);
    }

    #[tokio::test]
    async fn summary_floors_remaining_balance_at_zero() {
        let app = app();
        let bill = create_bill(&app, "Gym", "2025-03-01").await;
        assert_eq!(pay(&app, &bill, 60.0, "2025-02-01").await, StatusCode::CREATED);
        assert_eq!(pay(&app, &bill, 55.5, "2025-02-15").await, StatusCode::CREATED);

        let uri = format!("/api/bills/{}/summary", bill["id"].as_str().unwrap());
        let (status, summary) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["name"], "Gym");
        assert_eq!(summary["total_paid"], json!(115.5));
        assert_eq!(summary["remaining_balance"], json!(0.0));
        assert_eq!(summary["payment_count"], 2);
    }

    #[tokio::test]
    async fn payments_beyond_the_money_cap_are_rejected() {
        let app = app();
        let bill = create_bill(&app, "Loan", "2025-03-01").await;
        assert_eq!(pay(&app, &bill, 7.0e28, "2025-02-01").await, StatusCode::BAD_REQUEST);
        assert_eq!(pay(&app, &bill, 1.0e10, "2025-02-01").await, StatusCode::BAD_REQUEST);

        let uri = format!("/api/bills/{}/summary", bill["id"].as_str().unwrap());
        let (status, summary) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["payment_count"], 0);
    }

    #[tokio::test]
    async fn sub_cent_amounts_are_rejected() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/bills",
            Some(json!({
                "name": "Metered",
                "amount": 12.345,
                "due_date": "2025-03-01",
                "billing_frequency": "monthly",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn largest_amount_round_trips_exactly() {
        let app = app();
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/bills",
            Some(json!({
                "name": "Mortgage",
                "amount": 9_999_999_999.99,
                "due_date": "2025-03-01",
                "billing_frequency": "monthly",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["amount"], json!(9_999_999_999.99));

        let uri = format!("/api/bills/{}", created["id"].as_str().unwrap());
        let (_, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(fetched["amount"], json!(9_999_999_999.99));
    }

    #[tokio::test]
    async fn non_positive_payment_is_rejected() {
        let app = app();
        let bill = create_bill(&app, "Phone", "2025-03-01").await;
        assert_eq!(pay(&app, &bill, 0.0, "2025-02-01").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_bill_removes_payments() {
        let app = app();
        let bill = create_bill(&app, "Streaming", "2025-03-01").await;
        pay(&app, &bill, 12.0, "2025-02-01").await;

        let uri = format!("/api/bills/{}", bill["id"].as_str().unwrap());
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, payments) = send(&app, Method::GET, "/api/payments", None).await;
        assert!(payments.as_array().unwrap().is_empty());
    }
}
