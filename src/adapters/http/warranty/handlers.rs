//! HTTP handlers for appliance, warranty, manual and service record endpoints.

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
use crate::application::handlers::warranty::{
    CreateApplianceCommand, CreateApplianceHandler, CreateManualCommand, CreateManualHandler,
    CreateServiceRecordCommand, CreateServiceRecordHandler, CreateWarrantyCommand,
    CreateWarrantyHandler, DeleteApplianceCommand, DeleteApplianceHandler, DeleteManualCommand,
    DeleteManualHandler, DeleteServiceRecordCommand, DeleteServiceRecordHandler,
    DeleteWarrantyCommand, DeleteWarrantyHandler, GetApplianceHandler, GetApplianceQuery,
    GetManualHandler, GetManualQuery, GetServiceRecordHandler, GetServiceRecordQuery,
    GetWarrantyHandler, GetWarrantyQuery, ListAppliancesHandler, ListAppliancesQuery,
    ListManualsHandler, ListManualsQuery, ListServiceRecordsHandler, ListServiceRecordsQuery,
    ListWarrantiesHandler, ListWarrantiesQuery, UpdateApplianceCommand, UpdateApplianceHandler,
    UpdateManualCommand, UpdateManualHandler, UpdateServiceRecordCommand,
    UpdateServiceRecordHandler, UpdateWarrantyCommand, UpdateWarrantyHandler,
};
use crate::application::{GetApplianceSummaryHandler, GetApplianceSummaryQuery};
use crate::domain::foundation::Timestamp;
use crate::ports::{
    ApplianceRepository, EventPublisher, ManualRepository, ServiceRecordRepository,
    WarrantyRepository,
};

use super::dto::{
    ApplianceRequest, ApplianceResponse, ApplianceSummaryResponse, CreateApplianceRequest,
    ListAppliancesParams, ListManualsParams, ListServiceRecordsParams, ListWarrantiesParams,
    ManualRequest, ManualResponse, ServiceRecordRequest, ServiceRecordResponse, WarrantyRequest,
    WarrantyResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WarrantyHandlers {
    create_appliance: Arc<CreateApplianceHandler>,
    get_appliance: Arc<GetApplianceHandler>,
    list_appliances: Arc<ListAppliancesHandler>,
    update_appliance: Arc<UpdateApplianceHandler>,
    delete_appliance: Arc<DeleteApplianceHandler>,
    appliance_summary: Arc<GetApplianceSummaryHandler>,
    create_warranty: Arc<CreateWarrantyHandler>,
    get_warranty: Arc<GetWarrantyHandler>,
    list_warranties: Arc<ListWarrantiesHandler>,
    update_warranty: Arc<UpdateWarrantyHandler>,
    delete_warranty: Arc<DeleteWarrantyHandler>,
    create_manual: Arc<CreateManualHandler>,
    get_manual: Arc<GetManualHandler>,
    list_manuals: Arc<ListManualsHandler>,
    update_manual: Arc<UpdateManualHandler>,
    delete_manual: Arc<DeleteManualHandler>,
    create_service_record: Arc<CreateServiceRecordHandler>,
    get_service_record: Arc<GetServiceRecordHandler>,
    list_service_records: Arc<ListServiceRecordsHandler>,
    update_service_record: Arc<UpdateServiceRecordHandler>,
    delete_service_record: Arc<DeleteServiceRecordHandler>,
}

impl WarrantyHandlers {
    pub fn new(
        appliances: Arc<dyn ApplianceRepository>,
        warranties: Arc<dyn WarrantyRepository>,
        manuals: Arc<dyn ManualRepository>,
        service_records: Arc<dyn ServiceRecordRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            create_appliance: Arc::new(CreateApplianceHandler::new(
                appliances.clone(),
                publisher.clone(),
            )),
            get_appliance: Arc::new(GetApplianceHandler::new(appliances.clone())),
            list_appliances: Arc::new(ListAppliancesHandler::new(appliances.clone())),
            update_appliance: Arc::new(UpdateApplianceHandler::new(appliances.clone())),
            delete_appliance: Arc::new(DeleteApplianceHandler::new(appliances.clone())),
            appliance_summary: Arc::new(GetApplianceSummaryHandler::new(
                appliances.clone(),
                warranties.clone(),
                manuals.clone(),
                service_records.clone(),
            )),
            create_warranty: Arc::new(CreateWarrantyHandler::new(
                appliances.clone(),
                warranties.clone(),
                publisher.clone(),
            )),
            get_warranty: Arc::new(GetWarrantyHandler::new(warranties.clone())),
            list_warranties: Arc::new(ListWarrantiesHandler::new(warranties.clone())),
            update_warranty: Arc::new(UpdateWarrantyHandler::new(
                appliances.clone(),
                warranties.clone(),
            )),
            delete_warranty: Arc::new(DeleteWarrantyHandler::new(warranties)),
            create_manual: Arc::new(CreateManualHandler::new(
                appliances.clone(),
                manuals.clone(),
                publisher.clone(),
            )),
            get_manual: Arc::new(GetManualHandler::new(manuals.clone())),
            list_manuals: Arc::new(ListManualsHandler::new(manuals.clone())),
            update_manual: Arc::new(UpdateManualHandler::new(appliances.clone(), manuals.clone())),
            delete_manual: Arc::new(DeleteManualHandler::new(manuals)),
            create_service_record: Arc::new(CreateServiceRecordHandler::new(
                appliances.clone(),
                service_records.clone(),
                publisher,
            )),
            get_service_record: Arc::new(GetServiceRecordHandler::new(service_records.clone())),
            list_service_records: Arc::new(ListServiceRecordsHandler::new(
                service_records.clone(),
            )),
            update_service_record: Arc::new(UpdateServiceRecordHandler::new(
                appliances,
                service_records.clone(),
            )),
            delete_service_record: Arc::new(DeleteServiceRecordHandler::new(service_records)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Appliances
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/appliances
pub async fn create_appliance(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<CreateApplianceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateApplianceCommand {
        user_id: req.user_id,
        details: req.appliance.into(),
    };
    let appliance = handlers.create_appliance.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(ApplianceResponse::from(&appliance))))
}

/// GET /api/appliances/:id
pub async fn get_appliance(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetApplianceQuery {
        tenant_id: auth.tenant_id(),
        appliance_id: parse_id(&id, "appliance")?,
    };
    let appliance = handlers.get_appliance.handle(query).await?;

    Ok(Json(ApplianceResponse::from(&appliance)))
}

/// GET /api/appliances
pub async fn list_appliances(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListAppliancesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListAppliancesQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let appliances = handlers.list_appliances.handle(query).await?;

    Ok(Json(
        appliances.iter().map(ApplianceResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/appliances/:id
pub async fn update_appliance(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ApplianceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateApplianceCommand {
        appliance_id: parse_id(&id, "appliance")?,
        details: req.into(),
    };
    let appliance = handlers.update_appliance.handle(cmd, auth.metadata).await?;

    Ok(Json(ApplianceResponse::from(&appliance)))
}

/// DELETE /api/appliances/:id
///
/// Warranties, manuals and service records for the appliance are removed
/// with it.
pub async fn delete_appliance(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteApplianceCommand {
        appliance_id: parse_id(&id, "appliance")?,
    };
    handlers.delete_appliance.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/appliances/:id/summary
pub async fn get_appliance_summary(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetApplianceSummaryQuery {
        tenant_id: auth.tenant_id(),
        appliance_id: parse_id(&id, "appliance")?,
        as_of: Timestamp::today(),
    };
    let summary = handlers.appliance_summary.handle(query).await?;

    Ok(Json(ApplianceSummaryResponse::from(&summary)))
}

// ════════════════════════════════════════════════════════════════════════════
// Warranties
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/warranties
pub async fn create_warranty(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<WarrantyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateWarrantyCommand {
        details: req.into(),
    };
    let warranty = handlers.create_warranty.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(WarrantyResponse::from(&warranty))))
}

/// GET /api/warranties/:id
pub async fn get_warranty(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetWarrantyQuery {
        tenant_id: auth.tenant_id(),
        warranty_id: parse_id(&id, "warranty")?,
    };
    let warranty = handlers.get_warranty.handle(query).await?;

    Ok(Json(WarrantyResponse::from(&warranty)))
}

/// GET /api/warranties
pub async fn list_warranties(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListWarrantiesParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListWarrantiesQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let warranties = handlers.list_warranties.handle(query).await?;

    Ok(Json(
        warranties.iter().map(WarrantyResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/warranties/:id
pub async fn update_warranty(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<WarrantyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateWarrantyCommand {
        warranty_id: parse_id(&id, "warranty")?,
        details: req.into(),
    };
    let warranty = handlers.update_warranty.handle(cmd, auth.metadata).await?;

    Ok(Json(WarrantyResponse::from(&warranty)))
}

/// DELETE /api/warranties/:id
pub async fn delete_warranty(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteWarrantyCommand {
        warranty_id: parse_id(&id, "warranty")?,
    };
    handlers.delete_warranty.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════
// Manuals
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/manuals
pub async fn create_manual(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<ManualRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateManualCommand {
        details: req.into(),
    };
    let manual = handlers.create_manual.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(ManualResponse::from(&manual))))
}

/// GET /api/manuals/:id
pub async fn get_manual(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetManualQuery {
        tenant_id: auth.tenant_id(),
        manual_id: parse_id(&id, "manual")?,
    };
    let manual = handlers.get_manual.handle(query).await?;

    Ok(Json(ManualResponse::from(&manual)))
}

/// GET /api/manuals
pub async fn list_manuals(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListManualsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListManualsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let manuals = handlers.list_manuals.handle(query).await?;

    Ok(Json(manuals.iter().map(ManualResponse::from).collect::<Vec<_>>()))
}

/// PUT /api/manuals/:id
pub async fn update_manual(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ManualRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateManualCommand {
        manual_id: parse_id(&id, "manual")?,
        details: req.into(),
    };
    let manual = handlers.update_manual.handle(cmd, auth.metadata).await?;

    Ok(Json(ManualResponse::from(&manual)))
}

/// DELETE /api/manuals/:id
pub async fn delete_manual(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteManualCommand {
        manual_id: parse_id(&id, "manual")?,
    };
    handlers.delete_manual.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════
// Service records
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/service-records
pub async fn create_service_record(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<ServiceRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateServiceRecordCommand {
        details: req.into(),
    };
    let record = handlers
        .create_service_record
        .handle(cmd, auth.metadata)
        .await?;

    Ok((StatusCode::CREATED, Json(ServiceRecordResponse::from(&record))))
}

/// GET /api/service-records/:id
pub async fn get_service_record(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetServiceRecordQuery {
        tenant_id: auth.tenant_id(),
        service_record_id: parse_id(&id, "service record")?,
    };
    let record = handlers.get_service_record.handle(query).await?;

    Ok(Json(ServiceRecordResponse::from(&record)))
}

/// GET /api/service-records
pub async fn list_service_records(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListServiceRecordsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListServiceRecordsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let records = handlers.list_service_records.handle(query).await?;

    Ok(Json(
        records.iter().map(ServiceRecordResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/service-records/:id
pub async fn update_service_record(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ServiceRecordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateServiceRecordCommand {
        service_record_id: parse_id(&id, "service record")?,
        details: req.into(),
    };
    let record = handlers
        .update_service_record
        .handle(cmd, auth.metadata)
        .await?;

    Ok(Json(ServiceRecordResponse::from(&record)))
}

/// DELETE /api/service-records/:id
pub async fn delete_service_record(
    State(handlers): State<WarrantyHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteServiceRecordCommand {
        service_record_id: parse_id(&id, "service record")?,
    };
    handlers
        .delete_service_record
        .handle(cmd, auth.metadata)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
