//! RecordScreeningCompletedHandler - Command handler for logging that a
//! screening took place and rolling its due date forward.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::foundation::{CommandMetadata, ScreeningId};
use crate::domain::screening::{Screening, ScreeningError};
use crate::ports::ScreeningRepository;

#[derive(Debug, Clone)]
pub struct RecordScreeningCompletedCommand {
    pub screening_id: ScreeningId,
    pub completed_on: NaiveDate,
}

pub struct RecordScreeningCompletedHandler {
    repository: Arc<dyn ScreeningRepository>,
}

impl RecordScreeningCompletedHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordScreeningCompletedCommand,
        metadata: CommandMetadata,
    ) -> Result<Screening, ScreeningError> {
        let mut screening = self
            .repository
            .find_by_id(metadata.tenant_id, cmd.screening_id)
            .await?
            .ok_or_else(|| ScreeningError::not_found("Screening", cmd.screening_id))?;

        screening.record_completed(cmd.completed_on)?;
        self.repository.update(&screening).await?;

        Ok(screening)
    }
}
