//! HTTP DTOs for tax year and deduction endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::TaxYearSummary;
use crate::domain::foundation::{DeductionId, TaxYearId, Timestamp};
use crate::domain::tax::{Deduction, DeductionCategory, DeductionDetails, TaxYearDetails};
use crate::ports::DeductionFilter;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearRequest {
    pub year: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<TaxYearRequest> for TaxYearDetails {
    fn from(req: TaxYearRequest) -> Self {
        Self {
            year: req.year,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeductionRequest {
    pub tax_year_id: TaxYearId,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: DeductionCategory,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub has_receipt: bool,
}

impl From<DeductionRequest> for DeductionDetails {
    fn from(req: DeductionRequest) -> Self {
        Self {
            tax_year_id: req.tax_year_id,
            description: req.description,
            amount: req.amount,
            date: req.date,
            category: req.category,
            notes: req.notes,
            has_receipt: req.has_receipt,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDeductionsParams {
    pub tax_year_id: Option<TaxYearId>,
    pub category: Option<DeductionCategory>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<ListDeductionsParams> for DeductionFilter {
    fn from(params: ListDeductionsParams) -> Self {
        Self {
            tax_year_id: params.tax_year_id,
            category: params.category,
            from: params.from,
            to: params.to,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Tax year with its derived deduction totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxYearResponse {
    pub id: TaxYearId,
    pub year: i32,
    pub notes: Option<String>,
    pub is_filed: bool,
    pub filing_date: Option<NaiveDate>,
    pub total_deductions: Decimal,
    pub deduction_count: u32,
    pub created_at: Timestamp,
}

impl From<&TaxYearSummary> for TaxYearResponse {
    fn from(summary: &TaxYearSummary) -> Self {
        let tax_year = &summary.tax_year;
        Self {
            id: tax_year.id(),
            year: tax_year.year(),
            notes: tax_year.notes().map(str::to_owned),
            is_filed: tax_year.is_filed(),
            filing_date: tax_year.filing_date(),
            total_deductions: summary.total_deductions,
            deduction_count: summary.deduction_count,
            created_at: tax_year.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionResponse {
    pub id: DeductionId,
    pub tax_year_id: TaxYearId,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: DeductionCategory,
    pub notes: Option<String>,
    pub has_receipt: bool,
    pub created_at: Timestamp,
}

impl From<&Deduction> for DeductionResponse {
    fn from(deduction: &Deduction) -> Self {
        let d = deduction.details();
        Self {
            id: deduction.id(),
            tax_year_id: d.tax_year_id,
            description: d.description.clone(),
            amount: d.amount,
            date: d.date,
            category: d.category,
            notes: d.notes.clone(),
            has_receipt: d.has_receipt,
            created_at: deduction.created_at(),
        }
    }
}
