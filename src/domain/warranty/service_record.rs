//! ServiceRecord - a repair or maintenance visit logged against an appliance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::foundation::{
    fields, ApplianceId, ServiceRecordId, TenantId, Timestamp, ValidationError,
};

pub const MAX_PROVIDER_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecordDetails {
    pub appliance_id: ApplianceId,
    pub service_date: NaiveDate,
    pub service_provider: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
}

impl ServiceRecordDetails {
    fn validated(self) -> Result<Self, ValidationError> {
        let cost = self
            .cost
            .map(|cost| fields::non_negative_amount("cost", cost))
            .transpose()?;

        Ok(Self {
            appliance_id: self.appliance_id,
            service_date: self.service_date,
            service_provider: fields::optional_text(
                "service_provider",
                self.service_provider,
                MAX_PROVIDER_LENGTH,
            )?,
            description: fields::optional_text(
                "description",
                self.description,
                MAX_DESCRIPTION_LENGTH,
            )?,
            cost,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    id: ServiceRecordId,
    tenant_id: TenantId,
    details: ServiceRecordDetails,
    created_at: Timestamp,
}

impl ServiceRecord {
    pub fn new(
        id: ServiceRecordId,
        tenant_id: TenantId,
        details: ServiceRecordDetails,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            tenant_id,
            details: details.validated()?,
            created_at: Timestamp::now(),
        })
    }

    pub fn reconstitute(
        id: ServiceRecordId,
        tenant_id: TenantId,
        details: ServiceRecordDetails,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            tenant_id,
            details,
            created_at,
        }
    }

    pub fn id(&self) -> ServiceRecordId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn details(&self) -> &ServiceRecordDetails {
        &self.details
    }

    pub fn appliance_id(&self) -> ApplianceId {
        self.details.appliance_id
    }

    pub fn service_date(&self) -> NaiveDate {
        self.details.service_date
    }

    pub fn cost(&self) -> Option<Decimal> {
        self.details.cost
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn update(&mut self, details: ServiceRecordDetails) -> Result<(), ValidationError> {
        self.details = details.validated()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(cost: Option<Decimal>) -> ServiceRecordDetails {
        ServiceRecordDetails {
            appliance_id: ApplianceId::new(),
            service_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            service_provider: Some("  ABC Appliance Repair ".to_string()),
            description: Some("Replaced door seal".to_string()),
            cost,
        }
    }

    #[test]
    fn negative_cost_is_rejected() {
        let result = ServiceRecord::new(
            ServiceRecordId::new(),
            TenantId::DEFAULT,
            details(Some(Decimal::new(-1, 2))),
        );
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFormat { ref field, .. }) if field == "cost"
        ));
    }

    #[test]
    fn free_visits_and_unknown_costs_are_allowed() {
        for cost in [Some(Decimal::ZERO), None] {
            let record =
                ServiceRecord::new(ServiceRecordId::new(), TenantId::DEFAULT, details(cost))
                    .unwrap();
            assert_eq!(record.cost(), cost);
        }
    }

    #[test]
    fn provider_is_trimmed_and_update_revalidates() {
        let mut record = ServiceRecord::new(
            ServiceRecordId::new(),
            TenantId::DEFAULT,
            details(Some(Decimal::new(17_500, 2))),
        )
        .unwrap();
        assert_eq!(
            record.details().service_provider.as_deref(),
            Some("ABC Appliance Repair")
        );

        let err = record.update(details(Some(Decimal::new(1_005, 3))));
        assert!(err.is_err());
        assert_eq!(record.cost(), Some(Decimal::new(17_500, 2)));
    }
}
