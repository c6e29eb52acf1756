//! HTTP handlers for tax year and deduction endpoints.

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
use crate::application::handlers::tax::{
    CreateDeductionCommand, CreateDeductionHandler, CreateTaxYearCommand, CreateTaxYearHandler,
    DeleteDeductionCommand, DeleteDeductionHandler, DeleteTaxYearCommand, DeleteTaxYearHandler,
    GetDeductionHandler, GetDeductionQuery, GetTaxYearHandler, GetTaxYearQuery,
    ListDeductionsHandler, ListDeductionsQuery, ListTaxYearsHandler, ListTaxYearsQuery,
    MarkTaxYearFiledCommand, MarkTaxYearFiledHandler, UpdateDeductionCommand,
    UpdateDeductionHandler, UpdateTaxYearCommand, UpdateTaxYearHandler,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{DeductionRepository, TaxYearRepository};

use super::dto::{
    DeductionRequest, DeductionResponse, ListDeductionsParams, TaxYearRequest, TaxYearResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TaxHandlers {
    create_tax_year: Arc<CreateTaxYearHandler>,
    get_tax_year: Arc<GetTaxYearHandler>,
    list_tax_years: Arc<ListTaxYearsHandler>,
    update_tax_year: Arc<UpdateTaxYearHandler>,
    delete_tax_year: Arc<DeleteTaxYearHandler>,
    mark_filed: Arc<MarkTaxYearFiledHandler>,
    create_deduction: Arc<CreateDeductionHandler>,
    get_deduction: Arc<GetDeductionHandler>,
    list_deductions: Arc<ListDeductionsHandler>,
    update_deduction: Arc<UpdateDeductionHandler>,
    delete_deduction: Arc<DeleteDeductionHandler>,
}

impl TaxHandlers {
    pub fn new(
        tax_years: Arc<dyn TaxYearRepository>,
        deductions: Arc<dyn DeductionRepository>,
    ) -> Self {
        Self {
            create_tax_year: Arc::new(CreateTaxYearHandler::new(tax_years.clone())),
            get_tax_year: Arc::new(GetTaxYearHandler::new(tax_years.clone(), deductions.clone())),
            list_tax_years: Arc::new(ListTaxYearsHandler::new(
                tax_years.clone(),
                deductions.clone(),
            )),
            update_tax_year: Arc::new(UpdateTaxYearHandler::new(
                tax_years.clone(),
                deductions.clone(),
            )),
            delete_tax_year: Arc::new(DeleteTaxYearHandler::new(tax_years.clone())),
            mark_filed: Arc::new(MarkTaxYearFiledHandler::new(
                tax_years.clone(),
                deductions.clone(),
            )),
            create_deduction: Arc::new(CreateDeductionHandler::new(
                tax_years.clone(),
                deductions.clone(),
            )),
            get_deduction: Arc::new(GetDeductionHandler::new(deductions.clone())),
            list_deductions: Arc::new(ListDeductionsHandler::new(deductions.clone())),
            update_deduction: Arc::new(UpdateDeductionHandler::new(tax_years, deductions.clone())),
            delete_deduction: Arc::new(DeleteDeductionHandler::new(deductions)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tax years
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/tax-years
pub async fn create_tax_year(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<TaxYearRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateTaxYearCommand {
        details: req.into(),
    };
    let summary = handlers.create_tax_year.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(TaxYearResponse::from(&summary))))
}

/// GET /api/tax-years/:id
pub async fn get_tax_year(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetTaxYearQuery {
        tenant_id: auth.tenant_id(),
        tax_year_id: parse_id(&id, "tax year")?,
    };
    let summary = handlers.get_tax_year.handle(query).await?;

    Ok(Json(TaxYearResponse::from(&summary)))
}

/// GET /api/tax-years
pub async fn list_tax_years(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListTaxYearsQuery {
        tenant_id: auth.tenant_id(),
    };
    let summaries = handlers.list_tax_years.handle(query).await?;

    Ok(Json(
        summaries.iter().map(TaxYearResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/tax-years/:id
pub async fn update_tax_year(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<TaxYearRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateTaxYearCommand {
        tax_year_id: parse_id(&id, "tax year")?,
        details: req.into(),
    };
    let summary = handlers.update_tax_year.handle(cmd, auth.metadata).await?;

    Ok(Json(TaxYearResponse::from(&summary)))
}

/// DELETE /api/tax-years/:id
///
/// Deductions recorded against the year are removed with it.
pub async fn delete_tax_year(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteTaxYearCommand {
        tax_year_id: parse_id(&id, "tax year")?,
    };
    handlers.delete_tax_year.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/tax-years/:id/file
pub async fn mark_tax_year_filed(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = MarkTaxYearFiledCommand {
        tax_year_id: parse_id(&id, "tax year")?,
        filed_on: Timestamp::today(),
    };
    let summary = handlers.mark_filed.handle(cmd, auth.metadata).await?;

    Ok(Json(TaxYearResponse::from(&summary)))
}

// ════════════════════════════════════════════════════════════════════════════
// Deductions
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/deductions
pub async fn create_deduction(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<DeductionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateDeductionCommand {
        details: req.into(),
    };
    let deduction = handlers.create_deduction.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(DeductionResponse::from(&deduction))))
}

/// GET /api/deductions/:id
pub async fn get_deduction(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetDeductionQuery {
        tenant_id: auth.tenant_id(),
        deduction_id: parse_id(&id, "deduction")?,
    };
    let deduction = handlers.get_deduction.handle(query).await?;

    Ok(Json(DeductionResponse::from(&deduction)))
}

/// GET /api/deductions
pub async fn list_deductions(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListDeductionsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListDeductionsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let deductions = handlers.list_deductions.handle(query).await?;

    Ok(Json(
        deductions.iter().map(DeductionResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/deductions/:id
pub async fn update_deduction(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<DeductionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateDeductionCommand {
        deduction_id: parse_id(&id, "deduction")?,
        details: req.into(),
    };
    let deduction = handlers.update_deduction.handle(cmd, auth.metadata).await?;

    Ok(Json(DeductionResponse::from(&deduction)))
}

/// DELETE /api/deductions/:id
pub async fn delete_deduction(
    State(handlers): State<TaxHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteDeductionCommand {
        deduction_id: parse_id(&id, "deduction")?,
    };
    handlers.delete_deduction.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}
