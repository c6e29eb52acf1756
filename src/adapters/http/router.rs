//! Application router: every resource under `/api` plus `/health`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::billing::{bill_routes, payment_routes, BillingHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::screening::{appointment_routes, reminder_routes, screening_routes, ScreeningHandlers};
use super::tax::{deduction_routes, tax_year_routes, TaxHandlers};
use super::warranty::{
    appliance_routes, manual_routes, service_record_routes, warranty_routes, WarrantyHandlers,
};
use crate::adapters::memory::{
    InMemoryBillingStore, InMemoryScreeningStore, InMemoryTaxStore, InMemoryWarrantyStore,
};
use crate::adapters::postgres::{
    PostgresAppointmentRepository, PostgresApplianceRepository, PostgresBillRepository,
    PostgresDeductionRepository, PostgresManualRepository, PostgresPaymentRepository,
    PostgresReminderRepository, PostgresScreeningRepository, PostgresServiceRecordRepository,
    PostgresTaxYearRepository, PostgresWarrantyRepository,
};
use crate::config::ServerConfig;
use crate::ports::{
    AccessTokenValidator, AppointmentRepository, ApplianceRepository, BillRepository,
    DeductionRepository, EventPublisher, ManualRepository, PaymentRepository,
    ReminderRepository, ScreeningRepository, ServiceRecordRepository, TaxYearRepository,
    WarrantyRepository,
};

/// Every port the HTTP layer needs, already bound to adapters.
#[derive(Clone)]
pub struct AppPorts {
    pub screenings: Arc<dyn ScreeningRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub reminders: Arc<dyn ReminderRepository>,
    pub appliances: Arc<dyn ApplianceRepository>,
    pub warranties: Arc<dyn WarrantyRepository>,
    pub manuals: Arc<dyn ManualRepository>,
    pub service_records: Arc<dyn ServiceRecordRepository>,
    pub bills: Arc<dyn BillRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub tax_years: Arc<dyn TaxYearRepository>,
    pub deductions: Arc<dyn DeductionRepository>,
    pub publisher: Arc<dyn EventPublisher>,
    pub token_validator: Arc<dyn AccessTokenValidator>,
}

impl AppPorts {
    /// Repositories backed by one shared PostgreSQL pool.
    pub fn postgres(
        pool: PgPool,
        publisher: Arc<dyn EventPublisher>,
        token_validator: Arc<dyn AccessTokenValidator>,
    ) -> Self {
        Self {
            screenings: Arc::new(PostgresScreeningRepository::new(pool.clone())),
            appointments: Arc::new(PostgresAppointmentRepository::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepository::new(pool.clone())),
            appliances: Arc::new(PostgresApplianceRepository::new(pool.clone())),
            warranties: Arc::new(PostgresWarrantyRepository::new(pool.clone())),
            manuals: Arc::new(PostgresManualRepository::new(pool.clone())),
            service_records: Arc::new(PostgresServiceRecordRepository::new(pool.clone())),
            bills: Arc::new(PostgresBillRepository::new(pool.clone())),
            payments: Arc::new(PostgresPaymentRepository::new(pool.clone())),
            tax_years: Arc::new(PostgresTaxYearRepository::new(pool.clone())),
            deductions: Arc::new(PostgresDeductionRepository::new(pool)),
            publisher,
            token_validator,
        }
    }

    /// Process-local repositories; data is lost on restart.
    pub fn in_memory(
        publisher: Arc<dyn EventPublisher>,
        token_validator: Arc<dyn AccessTokenValidator>,
    ) -> Self {
        let screening = Arc::new(InMemoryScreeningStore::new());
        let warranty = Arc::new(InMemoryWarrantyStore::new());
        let billing = Arc::new(InMemoryBillingStore::new());
        let tax = Arc::new(InMemoryTaxStore::new());
        Self {
            screenings: screening.clone(),
            appointments: screening.clone(),
            reminders: screening,
            appliances: warranty.clone(),
            warranties: warranty.clone(),
            manuals: warranty.clone(),
            service_records: warranty,
            bills: billing.clone(),
            payments: billing,
            tax_years: tax.clone(),
            deductions: tax,
            publisher,
            token_validator,
        }
    }
}

/// All `/api` resources behind the bearer-token middleware.
pub fn api_routes(ports: &AppPorts) -> Router {
    let screening = ScreeningHandlers::new(
        ports.screenings.clone(),
        ports.appointments.clone(),
        ports.reminders.clone(),
        ports.publisher.clone(),
    );
    let warranty = WarrantyHandlers::new(
        ports.appliances.clone(),
        ports.warranties.clone(),
        ports.manuals.clone(),
        ports.service_records.clone(),
        ports.publisher.clone(),
    );
    let billing = BillingHandlers::new(ports.bills.clone(), ports.payments.clone());
    let tax = TaxHandlers::new(ports.tax_years.clone(), ports.deductions.clone());
    let auth_state: AuthState = ports.token_validator.clone();

    Router::new()
        .nest("/screenings", screening_routes(screening.clone()))
        .nest("/appointments", appointment_routes(screening.clone()))
        .nest("/reminders", reminder_routes(screening))
        .nest("/appliances", appliance_routes(warranty.clone()))
        .nest("/warranties", warranty_routes(warranty.clone()))
        .nest("/manuals", manual_routes(warranty.clone()))
        .nest("/service-records", service_record_routes(warranty))
        .nest("/bills", bill_routes(billing.clone()))
        .nest("/payments", payment_routes(billing))
        .nest("/tax-years", tax_year_routes(tax.clone()))
        .nest("/deductions", deduction_routes(tax))
        .layer(axum::middleware::from_fn_with_state(auth_state, auth_middleware))
}

/// The full application: `/api`, `/health` and the cross-cutting layers.
pub fn build_router(ports: &AppPorts, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes(ports))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                )))
                .layer(CompressionLayer::new())
                .layer(cors_layer(server)),
        )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
