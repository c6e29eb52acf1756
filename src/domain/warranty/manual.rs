//! Manual - an owner's manual or document file for an appliance.

use crate::domain::foundation::{fields, ApplianceId, ManualId, TenantId, Timestamp, ValidationError};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_URL_LENGTH: usize = 2000;
pub const MAX_FILE_TYPE_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualDetails {
    pub appliance_id: ApplianceId,
    pub title: String,
    pub file_url: String,
    pub file_type: Option<String>,
}

impl ManualDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            appliance_id: self.appliance_id,
            title: fields::required_text("title", &self.title, MAX_TITLE_LENGTH)?,
            file_url: fields::required_text("file_url", &self.file_url, MAX_URL_LENGTH)?,
            file_type: fields::optional_text("file_type", self.file_type, MAX_FILE_TYPE_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manual {
    id: ManualId,
    tenant_id: TenantId,
    details: ManualDetails,
    created_at: Timestamp,
}

impl Manual {
    pub fn new(
        id: ManualId,
        tenant_id: TenantId,
        details: ManualDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: ManualId,
        tenant_id: TenantId,
        details: ManualDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            created_at,
        }
    }

    pub fn id(&self) -> ManualId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn details(&self) -> &ManualDetails {
        &self.details
    }

    pub fn appliance_id(&self) -> ApplianceId {
        self.details.appliance_id
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn update(&mut self, details: ManualDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}
