//! ListBillsHandler - Query handler for a tenant's bills.

use std::sync::Arc;

use crate::domain::billing::{Bill, BillingError};
use crate::domain::foundation::TenantId;
use crate::ports::{BillFilter, BillRepository};

#[derive(Debug, Clone)]
pub struct ListBillsQuery {
    pub tenant_id: TenantId,
    pub filter: BillFilter,
}

pub struct ListBillsHandler {
    repository: Arc<dyn BillRepository>,
}

impl ListBillsHandler {
    pub fn new(repository: Arc<dyn BillRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListBillsQuery) -> Result<Vec<Bill>, BillingError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::adapters::memory::InMemoryBillingStore;
    use crate::application::handlers::test_support::{bill_details, date};
    use crate::domain::foundation::BillId;

    #[tokio::test]
    async fn due_window_returns_bills_in_due_order() {
        let store: Arc<dyn BillRepository> = Arc::new(InMemoryBillingStore::new());
        for (name, due) in [
            ("Internet", date(2025, 3, 5)),
            ("Water", date(2025, 2, 20)),
            ("Insurance", date(2025, 4, 1)),
            ("Gas", date(2025, 2, 28)),
        ] {
            let mut details = bill_details(name, Decimal::new(50, 0));
            details.due_date = due;
            let bill = Bill::new(BillId::new(), TenantId::DEFAULT, details).unwrap();
            store.save(&bill).await.unwrap();
        }
        let handler = ListBillsHandler::new(store);

        let bills = handler
            .handle(ListBillsQuery {
                tenant_id: TenantId::DEFAULT,
                filter: BillFilter {
                    due_from: Some(date(2025, 2, 20)),
                    due_to: Some(date(2025, 3, 5)),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let names: Vec<&str> = bills.iter().map(|b| b.details().name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Gas", "Internet"]);
    }
}
