//! In-memory store for appliances, warranties, manuals and service records.

use async_trait::async_trait;

use crate::domain::foundation::{
    ApplianceId, DomainError, ManualId, ServiceRecordId, TenantId, WarrantyId,
};
use crate::domain::warranty::{Appliance, Manual, ServiceRecord, Warranty};
use crate::ports::{
    ApplianceFilter, ApplianceRepository, ManualFilter, ManualRepository, ServiceRecordFilter,
    ServiceRecordRepository, WarrantyFilter, WarrantyRepository,
};

use super::table::Table;

pub struct InMemoryWarrantyStore {
    appliances: Table<ApplianceId, Appliance>,
    warranties: Table<WarrantyId, Warranty>,
    manuals: Table<ManualId, Manual>,
    service_records: Table<ServiceRecordId, ServiceRecord>,
}

impl InMemoryWarrantyStore {
    pub fn new() -> Self {
        Self {
            appliances: Table::new("Appliance"),
            warranties: Table::new("Warranty"),
            manuals: Table::new("Manual"),
            service_records: Table::new("ServiceRecord"),
        }
    }
}

impl Default for InMemoryWarrantyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplianceRepository for InMemoryWarrantyStore {
    async fn save(&self, appliance: &Appliance) -> Result<(), DomainError> {
        self.appliances
            .insert(appliance.tenant_id(), appliance.id(), appliance.clone())
            .await;
        Ok(())
    }

    async fn update(&self, appliance: &Appliance) -> Result<(), DomainError> {
        self.appliances
            .replace(appliance.tenant_id(), appliance.id(), appliance.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ApplianceId,
    ) -> Result<Option<Appliance>, DomainError> {
        Ok(self.appliances.get(tenant_id, id).await)
    }

    async fn exists(&self, tenant_id: TenantId, id: ApplianceId) -> Result<bool, DomainError> {
        Ok(self.appliances.contains(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ApplianceFilter,
    ) -> Result<Vec<Appliance>, DomainError> {
        let mut rows = self.appliances.select(tenant_id, |a| filter.matches(a)).await;
        rows.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: ApplianceId) -> Result<(), DomainError> {
        self.appliances.remove(tenant_id, id).await?;
        self.warranties
            .purge(tenant_id, |w| w.appliance_id() == id)
            .await;
        self.manuals.purge(tenant_id, |m| m.appliance_id() == id).await;
        self.service_records
            .purge(tenant_id, |r| r.appliance_id() == id)
            .await;
        Ok(())
    }
}

#[async_trait]
impl WarrantyRepository for InMemoryWarrantyStore {
    async fn save(&self, warranty: &Warranty) -> Result<(), DomainError> {
        self.warranties
            .insert(warranty.tenant_id(), warranty.id(), warranty.clone())
            .await;
        Ok(())
    }

    async fn update(&self, warranty: &Warranty) -> Result<(), DomainError> {
        self.warranties
            .replace(warranty.tenant_id(), warranty.id(), warranty.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: WarrantyId,
    ) -> Result<Option<Warranty>, DomainError> {
        Ok(self.warranties.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &WarrantyFilter,
    ) -> Result<Vec<Warranty>, DomainError> {
        let mut rows = self.warranties.select(tenant_id, |w| filter.matches(w)).await;
        rows.sort_by_key(|w| (w.end_date().is_none(), w.end_date(), w.created_at()));
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: WarrantyId) -> Result<(), DomainError> {
        self.warranties.remove(tenant_id, id).await.map(|_| ())
    }
}

#[async_trait]
impl ManualRepository for InMemoryWarrantyStore {
    async fn save(&self, manual: &Manual) -> Result<(), DomainError> {
        self.manuals
            .insert(manual.tenant_id(), manual.id(), manual.clone())
            .await;
        Ok(())
    }

    async fn update(&self, manual: &Manual) -> Result<(), DomainError> {
        self.manuals
            .replace(manual.tenant_id(), manual.id(), manual.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ManualId,
    ) -> Result<Option<Manual>, DomainError> {
        Ok(self.manuals.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ManualFilter,
    ) -> Result<Vec<Manual>, DomainError> {
        let mut rows = self.manuals.select(tenant_id, |m| filter.matches(m)).await;
        rows.sort_by(|a, b| {
            a.title()
                .cmp(b.title())
                .then_with(|| a.created_at().cmp(&b.created_at()))
        });
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: ManualId) -> Result<(), DomainError> {
        self.manuals.remove(tenant_id, id).await.map(|_| ())
    }
}

#[async_trait]
impl ServiceRecordRepository for InMemoryWarrantyStore {
    async fn save(&self, record: &ServiceRecord) -> Result<(), DomainError> {
        self.service_records
            .insert(record.tenant_id(), record.id(), record.clone())
            .await;
        Ok(())
    }

    async fn update(&self, record: &ServiceRecord) -> Result<(), DomainError> {
        self.service_records
            .replace(record.tenant_id(), record.id(), record.clone())
            .await
    }

    async fn find_by_id(
        &self,
        tenant_id: TenantId,
        id: ServiceRecordId,
    ) -> Result<Option<ServiceRecord>, DomainError> {
        Ok(self.service_records.get(tenant_id, id).await)
    }

    async fn list(
        &self,
        tenant_id: TenantId,
        filter: &ServiceRecordFilter,
    ) -> Result<Vec<ServiceRecord>, DomainError> {
        let mut rows = self
            .service_records
            .select(tenant_id, |r| filter.matches(r))
            .await;
        rows.sort_by(|a, b| {
            b.service_date()
                .cmp(&a.service_date())
                .then_with(|| b.created_at().cmp(&a.created_at()))
        });
        Ok(rows)
    }

    async fn delete(&self, tenant_id: TenantId, id: ServiceRecordId) -> Result<(), DomainError> {
        self.service_records.remove(tenant_id, id).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::foundation::UserId;
    use crate::domain::warranty::{
        ApplianceDetails, ApplianceType, ServiceRecordDetails, WarrantyDetails,
    };

    fn appliance() -> Appliance {
        Appliance::new(
            ApplianceId::new(),
            TenantId::DEFAULT,
            UserId::new(),
            ApplianceDetails {
                name: "Fridge".to_string(),
                appliance_type: ApplianceType::Refrigerator,
                brand: None,
                model_number: None,
                serial_number: None,
                purchase_date: None,
                purchase_price: None,
            },
        )
        .unwrap()
    }

    fn warranty(appliance_id: ApplianceId, end: Option<NaiveDate>) -> Warranty {
        Warranty::new(
            WarrantyId::new(),
            TenantId::DEFAULT,
            WarrantyDetails {
                appliance_id,
                provider: "Acme".to_string(),
                start_date: None,
                end_date: end,
                coverage_details: None,
                document_url: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn warranties_sort_open_ended_last() {
        let store = InMemoryWarrantyStore::new();
        let repo: &dyn WarrantyRepository = &store;
        let appliance_id = ApplianceId::new();
        let open = warranty(appliance_id, None);
        let dated = warranty(appliance_id, NaiveDate::from_ymd_opt(2026, 1, 1));
        repo.save(&open).await.unwrap();
        repo.save(&dated).await.unwrap();

        let ids: Vec<WarrantyId> = repo
            .list(TenantId::DEFAULT, &WarrantyFilter::for_appliance(appliance_id))
            .await
            .unwrap()
            .iter()
            .map(Warranty::id)
            .collect();

        assert_eq!(ids, vec![dated.id(), open.id()]);
    }

    fn service_record(appliance_id: ApplianceId, on: NaiveDate) -> ServiceRecord {
        ServiceRecord::new(
            ServiceRecordId::new(),
            TenantId::DEFAULT,
            ServiceRecordDetails {
                appliance_id,
                service_date: on,
                service_provider: None,
                description: None,
                cost: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn service_records_list_newest_first() {
        let store = InMemoryWarrantyStore::new();
        let repo: &dyn ServiceRecordRepository = &store;
        let appliance_id = ApplianceId::new();
        let older = service_record(appliance_id, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
        let newer = service_record(appliance_id, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        repo.save(&older).await.unwrap();
        repo.save(&newer).await.unwrap();

        let ids: Vec<ServiceRecordId> = repo
            .list(
                TenantId::DEFAULT,
                &ServiceRecordFilter::for_appliance(appliance_id),
            )
            .await
            .unwrap()
            .iter()
            .map(ServiceRecord::id)
            .collect();

        assert_eq!(ids, vec![newer.id(), older.id()]);
    }

    #[tokio::test]
    async fn deleting_an_appliance_removes_its_warranties() {
        let store = InMemoryWarrantyStore::new();
        let a = appliance();
        ApplianceRepository::save(&store, &a).await.unwrap();
        let w = warranty(a.id(), None);
        WarrantyRepository::save(&store, &w).await.unwrap();
        let r = service_record(a.id(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        ServiceRecordRepository::save(&store, &r).await.unwrap();

        ApplianceRepository::delete(&store, TenantId::DEFAULT, a.id())
            .await
            .unwrap();

        let warranties: &dyn WarrantyRepository = &store;
        assert!(warranties
            .list(TenantId::DEFAULT, &WarrantyFilter::default())
            .await
            .unwrap()
            .is_empty());
        let records: &dyn ServiceRecordRepository = &store;
        assert!(records
            .list(TenantId::DEFAULT, &ServiceRecordFilter::default())
            .await
            .unwrap()
            .is_empty());
    }
}
