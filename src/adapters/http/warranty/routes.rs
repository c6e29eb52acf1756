//! HTTP routes for appliance, warranty, manual and service record endpoints.

use axum::{routing::get, routing::post, Router};

use super::handlers::{
    create_appliance, create_manual, create_service_record, create_warranty, delete_appliance,
    delete_manual, delete_service_record, delete_warranty, get_appliance, get_appliance_summary,
    get_manual, get_service_record, get_warranty, list_appliances, list_manuals,
    list_service_records, list_warranties, update_appliance, update_manual,
    update_service_record, update_warranty, WarrantyHandlers,
};

/// Routes mounted at `/api/appliances`.
pub fn appliance_routes(handlers: WarrantyHandlers) -> Router {
    Router::new()
        .route("/", post(create_appliance).get(list_appliances))
        .route(
            "/:id",
            get(get_appliance).put(update_appliance).delete(delete_appliance),
        )
        .route("/:id/summary", get(get_appliance_summary))
        .with_state(handlers)
}

/// Routes mounted at `/api/warranties`.
pub fn warranty_routes(handlers: WarrantyHandlers) -> Router {
    Router::new()
        .route("/", post(create_warranty).get(list_warranties))
        .route(
            "/:id",
            get(get_warranty).put(update_warranty).delete(delete_warranty),
        )
        .with_state(handlers)
}

/// Routes mounted at `/api/manuals`.
pub fn manual_routes(handlers: WarrantyHandlers) -> Router {
    Router::new()
        .route("/", post(create_manual).get(list_manuals))
        .route(
            "/:id",
            get(get_manual).put(update_manual).delete(delete_manual),
        )
        .with_state(handlers)
}

/// Routes mounted at `/api/service-records`.
pub fn service_record_routes(handlers: WarrantyHandlers) -> Router {
    Router::new()
        .route("/", post(create_service_record).get(list_service_records))
        .route(
            "/:id",
            get(get_service_record)
                .put(update_service_record)
                .delete(delete_service_record),
        )
        .with_state(handlers)
}
