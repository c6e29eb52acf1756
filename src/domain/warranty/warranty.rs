//! Warranty - coverage attached to an appliance.

use chrono::NaiveDate;

use crate::domain::foundation::{
    fields, ApplianceId, TenantId, Timestamp, ValidationError, WarrantyId,
};

pub const MAX_PROVIDER_LENGTH: usize = 200;
pub const MAX_COVERAGE_LENGTH: usize = 2000;
pub const MAX_URL_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarrantyDetails {
    pub appliance_id: ApplianceId,
    pub provider: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub coverage_details: Option<String>,
    pub document_url: Option<String>,
}

impl WarrantyDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        fields::ordered_dates("end_date", self.start_date, self.end_date)?;
        Ok(Self {
            appliance_id: self.appliance_id,
            provider: fields::required_text("provider", &self.provider, MAX_PROVIDER_LENGTH)?,
            start_date: self.start_date,
            end_date: self.end_date,
            coverage_details: fields::optional_text(
                "coverage_details",
                self.coverage_details,
                MAX_COVERAGE_LENGTH,
            )?,
            document_url: fields::optional_text("document_url", self.document_url, MAX_URL_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warranty {
    id: WarrantyId,
    tenant_id: TenantId,
    details: WarrantyDetails,
    created_at: Timestamp,
}

impl Warranty {
    pub fn new(
        id: WarrantyId,
        tenant_id: TenantId,
        details: WarrantyDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: WarrantyId,
        tenant_id: TenantId,
        details: WarrantyDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            created_at,
        }
    }

    pub fn id(&self) -> WarrantyId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn details(&self) -> &WarrantyDetails {
        &self.details
    }

    pub fn appliance_id(&self) -> ApplianceId {
        self.details.appliance_id
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.details.end_date
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Coverage applies on `on`; a missing start or end is unbounded.
    pub fn is_active(&self, on: NaiveDate) -> bool {
        fields::within(on, self.details.start_date, self.details.end_date)
    }

    pub fn update(&mut self, details: WarrantyDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}
