//! HTTP routes for screening, appointment and reminder endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_appointment, create_appointment, create_reminder, create_screening,
    delete_appointment, delete_reminder, delete_screening, get_appointment, get_reminder,
    get_screening, list_appointments, list_reminders, list_screenings, mark_reminder_sent,
    record_screening_completed, update_appointment, update_reminder, update_screening,
    ScreeningHandlers,
};

/// Routes mounted at `/api/screenings`.
pub fn screening_routes(handlers: ScreeningHandlers) -> Router {
    Router::new()
        .route("/", post(create_screening).get(list_screenings))
        .route(
            "/:id",
            get(get_screening).put(update_screening).delete(delete_screening),
        )
        .route("/:id/complete", post(record_screening_completed))
        .with_state(handlers)
}

/// Routes mounted at `/api/appointments`.
pub fn appointment_routes(handlers: ScreeningHandlers) -> Router {
    Router::new()
        .route("/", post(create_appointment).get(list_appointments))
        .route(
            "/:id",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/:id/complete", post(complete_appointment))
        .with_state(handlers)
}

/// Routes mounted at `/api/reminders`.
pub fn reminder_routes(handlers: ScreeningHandlers) -> Router {
    Router::new()
        .route("/", post(create_reminder).get(list_reminders))
        .route(
            "/:id",
            get(get_reminder).put(update_reminder).delete(delete_reminder),
        )
        .route("/:id/sent", post(mark_reminder_sent))
        .with_state(handlers)
}
