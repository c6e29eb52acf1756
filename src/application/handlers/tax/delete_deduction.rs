//! DeleteDeductionHandler - Command handler for removing a deduction.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DeductionId};
use crate::domain::tax::TaxError;
use crate::ports::DeductionRepository;

#[derive(Debug, Clone)]
pub struct DeleteDeductionCommand {
    pub deduction_id: DeductionId,
}

pub struct DeleteDeductionHandler {
    repository: Arc<dyn DeductionRepository>,
}

impl DeleteDeductionHandler {
    pub fn new(repository: Arc<dyn DeductionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteDeductionCommand,
        metadata: CommandMetadata,
    ) -> Result<(), TaxError> {
        self.repository
            .delete(metadata.tenant_id, cmd.deduction_id)
            .await?;
        Ok(())
    }
}
