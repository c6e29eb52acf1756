//! GetScreeningHandler - Query handler for a single screening.

use std::sync::Arc;

use crate::domain::foundation::{ScreeningId, TenantId};
use crate::domain::screening::{Screening, ScreeningError};
use crate::ports::ScreeningRepository;

#[derive(Debug, Clone)]
pub struct GetScreeningQuery {
    pub tenant_id: TenantId,
    pub screening_id: ScreeningId,
}

pub struct GetScreeningHandler {
    repository: Arc<dyn ScreeningRepository>,
}

impl GetScreeningHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetScreeningQuery) -> Result<Screening, ScreeningError> {
        self.repository
            .find_by_id(query.tenant_id, query.screening_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Screening", query.screening_id))
    }
}
