//! Persistence ports for the warranty context.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{
    fields, ApplianceId, DomainError, ManualId, ServiceRecordId, TenantId, UserId, WarrantyId,
};
use crate::domain::warranty::{Appliance, ApplianceType, Manual, ServiceRecord, Warranty};

/// Appliance list filter. Results are ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplianceFilter {
    pub user_id: Option<UserId>,
    pub appliance_type: Option<ApplianceType>,
}

impl ApplianceFilter {
    pub fn matches(&self, appliance: &Appliance) -> bool {
        self.user_id.map_or(true, |u| appliance.user_id() == u)
            && self
                .appliance_type
                .map_or(true, |t| appliance.appliance_type() == t)
    }
}

/// Warranty list filter. Results are ordered by end date (open-ended last).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarrantyFilter {
    pub appliance_id: Option<ApplianceId>,
    /// Only warranties in force on this date.
    pub active_on: Option<NaiveDate>,
}

impl WarrantyFilter {
    pub fn for_appliance(appliance_id: ApplianceId) -> Self {
        Self {
            appliance_id: Some(appliance_id),
            active_on: None,
        }
    }

    pub fn matches(&self, warranty: &Warranty) -> bool {
        self.appliance_id
            .map_or(true, |a| warranty.appliance_id() == a)
            && self.active_on.map_or(true, |on| warranty.is_active(on))
    }
}

/// Manual list filter. Results are ordered by title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualFilter {
    pub appliance_id: Option<ApplianceId>,
}

impl ManualFilter {
    pub fn matches(&self, manual: &Manual) -> bool {
        self.appliance_id.map_or(true, |a| manual.appliance_id() == a)
    }
}

/// Service record list filter. Results are ordered by service date,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRecordFilter {
    pub appliance_id: Option<ApplianceId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ServiceRecordFilter {
    pub fn for_appliance(appliance_id: ApplianceId) -> Self {
        Self {
            appliance_id: Some(appliance_id),
            ..Self::default()
        }
    }

    pub fn matches(&self, record: &ServiceRecord) -> bool {
        self.appliance_id.map_or(true, |a| record.appliance_id() == a)
            && fields::within(record.service_date(), self.from, self.to)
    }
}

#[async_trait]
pub trait ApplianceRepository: Send + Sync {
    async fn save(&self, appliance: &Appliance) -> Result<(), DomainError>;

    async fn update(&self, appliance: &Appliance) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ApplianceId,
    ) -> Result<Option<Appliance>, DomainError>;

    async fn exists(&self, tenant_id: TenantId, id: ApplianceId) -> Result<bool, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ApplianceFilter,
    ) -> Result<Vec<Appliance>, DomainError>;

    /// Deletes the appliance together with its warranties, manuals and
    /// service records.
    async fn delete(&self, tenant_id: TenantId, id: ApplianceId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait WarrantyRepository: Send + Sync {
    async fn save(&self, warranty: &Warranty) -> Result<(), DomainError>;

    async fn update(&self, warranty: &Warranty) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: WarrantyId,
    ) -> Result<Option<Warranty>, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &WarrantyFilter,
    ) -> Result<Vec<Warranty>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: WarrantyId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait ManualRepository: Send + Sync {
    async fn save(&self, manual: &Manual) -> Result<(), DomainError>;

    async fn update(&self, manual: &Manual) -> Result<(), DomainError>;

    async fn find_by_id(&self, tenant_id: TenantId, id: ManualId)
        -> Result<Option<Manual>, DomainError>;

    async fn list(&self, tenant_id: TenantId, filter: &ManualFilter)
        -> Result<Vec<Manual>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: ManualId) -> Result<(), DomainError>;
}

#[async_trait]
pub trait ServiceRecordRepository: Send + Sync {
    async fn save(&self, record: &ServiceRecord) -> Result<(), DomainError>;

    async fn update(&self, record: &ServiceRecord) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ServiceRecordId,
    ) -> Result<Option<ServiceRecord>, DomainError>;

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ServiceRecordFilter,
    ) -> Result<Vec<ServiceRecord>, DomainError>;

    async fn delete(&self, tenant_id: TenantId, id: ServiceRecordId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TenantId;
    use crate::domain::warranty::{ServiceRecordDetails, WarrantyDetails};

    #[allow(dead_code)]
    fn assert_object_safe(
        _: &dyn ApplianceRepository,
        _: &dyn WarrantyRepository,
        _: &dyn ManualRepository,
        _: &dyn ServiceRecordRepository,
    ) {
    }

    #[test]
    fn active_on_filter_uses_warranty_window() {
        let appliance_id = ApplianceId::new();
        let warranty = Warranty::new(
            WarrantyId::new(),
            TenantId::DEFAULT,
            WarrantyDetails {
                appliance_id,
                provider: "Acme".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                end_date: NaiveDate::from_ymd_opt(2024, 12, 31),
                coverage_details: None,
                document_url: None,
            },
        )
        .unwrap();

        let inside = WarrantyFilter {
            appliance_id: Some(appliance_id),
            active_on: NaiveDate::from_ymd_opt(2024, 6, 1),
        };
        let outside = WarrantyFilter {
            active_on: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..WarrantyFilter::for_appliance(appliance_id)
        };

        assert!(inside.matches(&warranty));
        assert!(!outside.matches(&warranty));
        assert!(!WarrantyFilter::for_appliance(ApplianceId::new()).matches(&warranty));
    }

    #[test]
    fn service_record_filter_bounds_are_inclusive() {
        let appliance_id = ApplianceId::new();
        let record = ServiceRecord::new(
            ServiceRecordId::new(),
            TenantId::DEFAULT,
            ServiceRecordDetails {
                appliance_id,
                service_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                service_provider: None,
                description: None,
                cost: None,
            },
        )
        .unwrap();

        let on_the_day = ServiceRecordFilter {
            from: NaiveDate::from_ymd_opt(2024, 3, 15),
            to: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..ServiceRecordFilter::for_appliance(appliance_id)
        };
        let later = ServiceRecordFilter {
            from: NaiveDate::from_ymd_opt(2024, 3, 16),
            ..ServiceRecordFilter::default()
        };

        assert!(on_the_day.matches(&record));
        assert!(!later.matches(&record));
        assert!(!ServiceRecordFilter::for_appliance(ApplianceId::new()).matches(&record));
    }
}
