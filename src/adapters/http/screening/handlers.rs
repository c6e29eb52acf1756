//! HTTP handlers for screening, appointment and reminder endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{parse_id, ApiJson, ApiQuery};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::screening::{
    CompleteAppointmentCommand, CompleteAppointmentHandler, CreateAppointmentCommand,
    CreateAppointmentHandler, CreateReminderCommand, CreateReminderHandler,
    CreateScreeningCommand, CreateScreeningHandler, DeleteAppointmentCommand,
    DeleteAppointmentHandler, DeleteReminderCommand, DeleteReminderHandler,
    DeleteScreeningCommand, DeleteScreeningHandler, GetAppointmentHandler, GetAppointmentQuery,
    GetReminderHandler, GetReminderQuery, GetScreeningHandler, GetScreeningQuery,
    ListAppointmentsHandler, ListAppointmentsQuery, ListRemindersHandler, ListRemindersQuery,
    ListScreeningsHandler, ListScreeningsQuery, MarkReminderSentCommand, MarkReminderSentHandler,
    RecordScreeningCompletedCommand, RecordScreeningCompletedHandler, UpdateAppointmentCommand,
    UpdateAppointmentHandler, UpdateReminderCommand, UpdateReminderHandler,
    UpdateScreeningCommand, UpdateScreeningHandler,
};
use crate::ports::{AppointmentRepository, EventPublisher, ReminderRepository, ScreeningRepository};

use super::dto::{
    AppointmentResponse, CreateAppointmentRequest, CreateReminderRequest,
    CreateScreeningRequest, ListAppointmentsParams, ListRemindersParams, ListScreeningsParams,
    RecordCompletionRequest, ReminderResponse, ScreeningRequest,
    ScreeningResponse, UpdateAppointmentRequest, UpdateReminderRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScreeningHandlers {
    create_screening: Arc<CreateScreeningHandler>,
    get_screening: Arc<GetScreeningHandler>,
    list_screenings: Arc<ListScreeningsHandler>,
    update_screening: Arc<UpdateScreeningHandler>,
    delete_screening: Arc<DeleteScreeningHandler>,
    record_completed: Arc<RecordScreeningCompletedHandler>,
    create_appointment: Arc<CreateAppointmentHandler>,
    get_appointment: Arc<GetAppointmentHandler>,
    list_appointments: Arc<ListAppointmentsHandler>,
    update_appointment: Arc<UpdateAppointmentHandler>,
    delete_appointment: Arc<DeleteAppointmentHandler>,
    complete_appointment: Arc<CompleteAppointmentHandler>,
    create_reminder: Arc<CreateReminderHandler>,
    get_reminder: Arc<GetReminderHandler>,
    list_reminders: Arc<ListRemindersHandler>,
    update_reminder: Arc<UpdateReminderHandler>,
    delete_reminder: Arc<DeleteReminderHandler>,
    mark_reminder_sent: Arc<MarkReminderSentHandler>,
}

impl ScreeningHandlers {
    pub fn new(
        screenings: Arc<dyn ScreeningRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        reminders: Arc<dyn ReminderRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            create_screening: Arc::new(CreateScreeningHandler::new(screenings.clone())),
            get_screening: Arc::new(GetScreeningHandler::new(screenings.clone())),
            list_screenings: Arc::new(ListScreeningsHandler::new(screenings.clone())),
            update_screening: Arc::new(UpdateScreeningHandler::new(screenings.clone())),
            delete_screening: Arc::new(DeleteScreeningHandler::new(screenings.clone())),
            record_completed: Arc::new(RecordScreeningCompletedHandler::new(screenings.clone())),
            create_appointment: Arc::new(CreateAppointmentHandler::new(
                screenings.clone(),
                appointments.clone(),
                publisher.clone(),
            )),
            get_appointment: Arc::new(GetAppointmentHandler::new(appointments.clone())),
            list_appointments: Arc::new(ListAppointmentsHandler::new(appointments.clone())),
            update_appointment: Arc::new(UpdateAppointmentHandler::new(
                screenings.clone(),
                appointments.clone(),
            )),
            delete_appointment: Arc::new(DeleteAppointmentHandler::new(appointments.clone())),
            complete_appointment: Arc::new(CompleteAppointmentHandler::new(
                appointments,
                publisher.clone(),
            )),
            create_reminder: Arc::new(CreateReminderHandler::new(
                screenings.clone(),
                reminders.clone(),
                publisher,
            )),
            get_reminder: Arc::new(GetReminderHandler::new(reminders.clone())),
            list_reminders: Arc::new(ListRemindersHandler::new(reminders.clone())),
            update_reminder: Arc::new(UpdateReminderHandler::new(screenings, reminders.clone())),
            delete_reminder: Arc::new(DeleteReminderHandler::new(reminders.clone())),
            mark_reminder_sent: Arc::new(MarkReminderSentHandler::new(reminders)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Screenings
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/screenings
pub async fn create_screening(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<CreateScreeningRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateScreeningCommand {
        user_id: req.user_id,
        details: req.screening.into(),
    };
    let screening = handlers.create_screening.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(ScreeningResponse::from(&screening))))
}

/// GET /api/screenings/:id
pub async fn get_screening(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetScreeningQuery {
        tenant_id: auth.tenant_id(),
        screening_id: parse_id(&id, "screening")?,
    };
    let screening = handlers.get_screening.handle(query).await?;

    Ok(Json(ScreeningResponse::from(&screening)))
}

/// GET /api/screenings
pub async fn list_screenings(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListScreeningsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListScreeningsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let screenings = handlers.list_screenings.handle(query).await?;

    Ok(Json(
        screenings.iter().map(ScreeningResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/screenings/:id
pub async fn update_screening(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ScreeningRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateScreeningCommand {
        screening_id: parse_id(&id, "screening")?,
        details: req.into(),
    };
    let screening = handlers.update_screening.handle(cmd, auth.metadata).await?;

    Ok(Json(ScreeningResponse::from(&screening)))
}

/// DELETE /api/screenings/:id
///
/// Appointments and reminders for the screening are removed with it.
pub async fn delete_screening(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteScreeningCommand {
        screening_id: parse_id(&id, "screening")?,
    };
    handlers.delete_screening.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/screenings/:id/complete
pub async fn record_screening_completed(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<RecordCompletionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RecordScreeningCompletedCommand {
        screening_id: parse_id(&id, "screening")?,
        completed_on: req.completed_on,
    };
    let screening = handlers.record_completed.handle(cmd, auth.metadata).await?;

    Ok(Json(ScreeningResponse::from(&screening)))
}

// ════════════════════════════════════════════════════════════════════════════
// Appointments
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/appointments
pub async fn create_appointment(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateAppointmentCommand {
        user_id: req.user_id,
        details: req.appointment.into(),
    };
    let appointment = handlers.create_appointment.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(AppointmentResponse::from(&appointment))))
}

/// GET /api/appointments/:id
pub async fn get_appointment(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetAppointmentQuery {
        tenant_id: auth.tenant_id(),
        appointment_id: parse_id(&id, "appointment")?,
    };
    let appointment = handlers.get_appointment.handle(query).await?;

    Ok(Json(AppointmentResponse::from(&appointment)))
}

/// GET /api/appointments
pub async fn list_appointments(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListAppointmentsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListAppointmentsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let appointments = handlers.list_appointments.handle(query).await?;

    Ok(Json(
        appointments.iter().map(AppointmentResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/appointments/:id
pub async fn update_appointment(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateAppointmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateAppointmentCommand {
        appointment_id: parse_id(&id, "appointment")?,
        details: req.appointment.into(),
        is_completed: req.is_completed,
    };
    let appointment = handlers.update_appointment.handle(cmd, auth.metadata).await?;

    Ok(Json(AppointmentResponse::from(&appointment)))
}

/// DELETE /api/appointments/:id
pub async fn delete_appointment(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteAppointmentCommand {
        appointment_id: parse_id(&id, "appointment")?,
    };
    handlers.delete_appointment.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/appointments/:id/complete
pub async fn complete_appointment(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CompleteAppointmentCommand {
        appointment_id: parse_id(&id, "appointment")?,
    };
    let appointment = handlers.complete_appointment.handle(cmd, auth.metadata).await?;

    Ok(Json(AppointmentResponse::from(&appointment)))
}

// ════════════════════════════════════════════════════════════════════════════
// Reminders
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/reminders
pub async fn create_reminder(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<CreateReminderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateReminderCommand {
        user_id: req.user_id,
        details: req.reminder.into(),
    };
    let reminder = handlers.create_reminder.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(ReminderResponse::from(&reminder))))
}

/// GET /api/reminders/:id
pub async fn get_reminder(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetReminderQuery {
        tenant_id: auth.tenant_id(),
        reminder_id: parse_id(&id, "reminder")?,
    };
    let reminder = handlers.get_reminder.handle(query).await?;

    Ok(Json(ReminderResponse::from(&reminder)))
}

/// GET /api/reminders
pub async fn list_reminders(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListRemindersParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListRemindersQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let reminders = handlers.list_reminders.handle(query).await?;

    Ok(Json(
        reminders.iter().map(ReminderResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/reminders/:id
pub async fn update_reminder(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateReminderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateReminderCommand {
        reminder_id: parse_id(&id, "reminder")?,
        details: req.reminder.into(),
        is_sent: req.is_sent,
    };
    let reminder = handlers.update_reminder.handle(cmd, auth.metadata).await?;

    Ok(Json(ReminderResponse::from(&reminder)))
}

/// DELETE /api/reminders/:id
pub async fn delete_reminder(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteReminderCommand {
        reminder_id: parse_id(&id, "reminder")?,
    };
    handlers.delete_reminder.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/reminders/:id/sent
pub async fn mark_reminder_sent(
    State(handlers): State<ScreeningHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = MarkReminderSentCommand {
        reminder_id: parse_id(&id, "reminder")?,
    };
    let reminder = handlers.mark_reminder_sent.handle(cmd, auth.metadata).await?;

    Ok(Json(ReminderResponse::from(&reminder)))
}

