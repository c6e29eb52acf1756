//! HTTP handlers for bill and payment endpoints.

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
use crate::application::handlers::billing::{
    CreateBillCommand, CreateBillHandler, CreatePaymentCommand, CreatePaymentHandler,
    DeleteBillCommand, DeleteBillHandler, DeletePaymentCommand, DeletePaymentHandler,
    GetBillHandler, GetBillQuery, GetPaymentHandler, GetPaymentQuery, ListBillsHandler,
    ListBillsQuery, ListPaymentsHandler, ListPaymentsQuery, UpdateBillCommand,
    UpdateBillHandler, UpdatePaymentCommand, UpdatePaymentHandler,
};
use crate::application::{GetBillSummaryHandler, GetBillSummaryQuery};
use crate::ports::{BillRepository, PaymentRepository};

use super::dto::{
    BillRequest, BillResponse, BillSummaryResponse, ListBillsParams, ListPaymentsParams,
    PaymentRequest, PaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BillingHandlers {
    create_bill: Arc<CreateBillHandler>,
    get_bill: Arc<GetBillHandler>,
    list_bills: Arc<ListBillsHandler>,
    update_bill: Arc<UpdateBillHandler>,
    delete_bill: Arc<DeleteBillHandler>,
    bill_summary: Arc<GetBillSummaryHandler>,
    create_payment: Arc<CreatePaymentHandler>,
    get_payment: Arc<GetPaymentHandler>,
    list_payments: Arc<ListPaymentsHandler>,
    update_payment: Arc<UpdatePaymentHandler>,
    delete_payment: Arc<DeletePaymentHandler>,
}

impl BillingHandlers {
    pub fn new(bills: Arc<dyn BillRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self {
            create_bill: Arc::new(CreateBillHandler::new(bills.clone())),
            get_bill: Arc::new(GetBillHandler::new(bills.clone())),
            list_bills: Arc::new(ListBillsHandler::new(bills.clone())),
            update_bill: Arc::new(UpdateBillHandler::new(bills.clone())),
            delete_bill: Arc::new(DeleteBillHandler::new(bills.clone())),
            bill_summary: Arc::new(GetBillSummaryHandler::new(bills.clone(), payments.clone())),
            create_payment: Arc::new(CreatePaymentHandler::new(bills.clone(), payments.clone())),
            get_payment: Arc::new(GetPaymentHandler::new(payments.clone())),
            list_payments: Arc::new(ListPaymentsHandler::new(payments.clone())),
            update_payment: Arc::new(UpdatePaymentHandler::new(bills, payments.clone())),
            delete_payment: Arc::new(DeletePaymentHandler::new(payments)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Bills
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/bills
pub async fn create_bill(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<BillRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateBillCommand {
        details: req.into(),
    };
    let bill = handlers.create_bill.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(BillResponse::from(&bill))))
}

/// GET /api/bills/:id
pub async fn get_bill(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetBillQuery {
        tenant_id: auth.tenant_id(),
        bill_id: parse_id(&id, "bill")?,
    };
    let bill = handlers.get_bill.handle(query).await?;

    Ok(Json(BillResponse::from(&bill)))
}

/// GET /api/bills
pub async fn list_bills(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListBillsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListBillsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let bills = handlers.list_bills.handle(query).await?;

    Ok(Json(bills.iter().map(BillResponse::from).collect::<Vec<_>>()))
}

/// PUT /api/bills/:id
pub async fn update_bill(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<BillRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdateBillCommand {
        bill_id: parse_id(&id, "bill")?,
        details: req.into(),
    };
    let bill = handlers.update_bill.handle(cmd, auth.metadata).await?;

    Ok(Json(BillResponse::from(&bill)))
}

/// DELETE /api/bills/:id
pub async fn delete_bill(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteBillCommand {
        bill_id: parse_id(&id, "bill")?,
    };
    handlers.delete_bill.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/bills/:id/summary
pub async fn get_bill_summary(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetBillSummaryQuery {
        tenant_id: auth.tenant_id(),
        bill_id: parse_id(&id, "bill")?,
    };
    let summary = handlers.bill_summary.handle(query).await?;

    Ok(Json(BillSummaryResponse::from(&summary)))
}

// ════════════════════════════════════════════════════════════════════════════
// Payments
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/payments
pub async fn create_payment(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    ApiJson(req): ApiJson<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreatePaymentCommand {
        details: req.into(),
    };
    let payment = handlers.create_payment.handle(cmd, auth.metadata).await?;

    Ok((StatusCode::CREATED, Json(PaymentResponse::from(&payment))))
}

/// GET /api/payments/:id
pub async fn get_payment(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetPaymentQuery {
        tenant_id: auth.tenant_id(),
        payment_id: parse_id(&id, "payment")?,
    };
    let payment = handlers.get_payment.handle(query).await?;

    Ok(Json(PaymentResponse::from(&payment)))
}

/// GET /api/payments
pub async fn list_payments(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    ApiQuery(params): ApiQuery<ListPaymentsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListPaymentsQuery {
        tenant_id: auth.tenant_id(),
        filter: params.into(),
    };
    let payments = handlers.list_payments.handle(query).await?;

    Ok(Json(
        payments.iter().map(PaymentResponse::from).collect::<Vec<_>>(),
    ))
}

/// PUT /api/payments/:id
pub async fn update_payment(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdatePaymentCommand {
        payment_id: parse_id(&id, "payment")?,
        details: req.into(),
    };
    let payment = handlers.update_payment.handle(cmd, auth.metadata).await?;

    Ok(Json(PaymentResponse::from(&payment)))
}

/// DELETE /api/payments/:id
pub async fn delete_payment(
    State(handlers): State<BillingHandlers>,
    auth: RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeletePaymentCommand {
        payment_id: parse_id(&id, "payment")?,
    };
    handlers.delete_payment.handle(cmd, auth.metadata).await?;

    Ok(StatusCode::NO_CONTENT)
}
