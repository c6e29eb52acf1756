//! ListScreeningsHandler - Query handler for a tenant's screenings.

use std::sync::Arc;

use crate::domain::foundation::TenantId;
use crate::domain::screening::{Screening, ScreeningError};
use crate::ports::{ScreeningFilter, ScreeningRepository};

#[derive(Debug, Clone)]
pub struct ListScreeningsQuery {
    pub tenant_id: TenantId,
    pub filter: ScreeningFilter,
}

pub struct ListScreeningsHandler {
    repository: Arc<dyn ScreeningRepository>,
}

impl ListScreeningsHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListScreeningsQuery) -> Result<Vec<Screening>, ScreeningError> {
        Ok(self.repository.list(query.tenant_id, &query.filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScreeningStore;
    use crate::application::handlers::test_support::{date, screening_details};
    use crate::domain::foundation::{ScreeningId, UserId};
    use crate::domain::screening::ScreeningType;

    #[tokio::test]
    async fn filters_by_due_date_and_type() {
        let store: Arc<dyn ScreeningRepository> = Arc::new(InMemoryScreeningStore::new());
        let user = UserId::new();
        for (name, due, kind) in [
            ("Dental", date(2025, 1, 10), ScreeningType::DentalCheckup),
            ("Vision", date(2025, 1, 5), ScreeningType::VisionTest),
            ("Dental later", date(2025, 6, 1), ScreeningType::DentalCheckup),
        ] {
            let mut details = screening_details(name);
            details.next_due_date = Some(due);
            details.screening_type = kind;
            let s = Screening::new(ScreeningId::new(), TenantId::DEFAULT, user, details).unwrap();
            store.save(&s).await.unwrap();
        }
        let handler = ListScreeningsHandler::new(store);

        let due_soon = handler
            .handle(ListScreeningsQuery {
                tenant_id: TenantId::DEFAULT,
                filter: ScreeningFilter {
                    due_by: Some(date(2025, 1, 31)),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        let names: Vec<&str> = due_soon.iter().map(Screening::name).collect();
        assert_eq!(names, vec!["Vision", "Dental"]);

        let dental = handler
            .handle(ListScreeningsQuery {
                tenant_id: TenantId::DEFAULT,
                filter: ScreeningFilter {
                    screening_type: Some(ScreeningType::DentalCheckup),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(dental.len(), 2);
    }
}
