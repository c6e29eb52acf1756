//! ListAppliancesHandler - Query handler for a tenant's appliances.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::warranty::{Appliance, WarrantyError};
use crate::ports::{ApplianceFilter, ApplianceRepository};

#[derive(Debug, Clone)]
pub struct ListAppliancesQuery {
    pub tenant_id: TenantId,
    pub filter: ApplianceFilter,
}

pub struct ListAppliancesHandler {
    repository: Arc<dyn ApplianceRepository>,
}

impl ListAppliancesHandler {
    pub fn new(repository: Arc<dyn ApplianceRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListAppliancesQuery) -> Result<Vec<Appliance>, WarrantyError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWarrantyStore;
    use crate::application::handlers::test_support::appliance_details;
    use crate::domain::foundation::{ApplianceId, UserId};
    use crate::domain::warranty::ApplianceType;

    #[tokio::test]
    async fn filters_by_type_and_sorts_by_name() {
        let store: Arc<dyn ApplianceRepository> = Arc::new(InMemoryWarrantyStore::new());
        for (name, kind) in [
            ("Upstairs washer", ApplianceType::WasherDryer),
            ("Basement washer", ApplianceType::WasherDryer),
            ("Fridge", ApplianceType::Refrigerator),
        ] {
            let mut details = appliance_details(name);
            details.appliance_type = kind;
            let appliance =
                Appliance::new(ApplianceId::new(), TenantId::DEFAULT, UserId::new(), details)
                    .unwrap();
            store.save(&appliance).await.unwrap();
        }
        let handler = ListAppliancesHandler::new(store);

        let washers = handler
            .handle(ListAppliancesQuery {
                tenant_id: TenantId::DEFAULT,
                filter: ApplianceFilter {
                    appliance_type: Some(ApplianceType::WasherDryer),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let names: Vec<&str> = washers.iter().map(Appliance::name).collect();
        assert_eq!(names, vec!["Basement washer", "Upstairs washer"]);
    }
}
