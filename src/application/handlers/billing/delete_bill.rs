//! DeleteBillHandler - Command handler for removing a bill and its
//! payments.

use std::sync::Arc;

use crate::domain::billing::BillingError;
use crate::domain::foundation::{BillId, CommandMetadata};
use crate::ports::BillRepository;

#[derive(Debug, Clone)]
pub struct DeleteBillCommand {
    pub bill_id: BillId,
}

pub struct DeleteBillHandler {
    repository: Arc<dyn BillRepository>,
}

impl DeleteBillHandler {
    pub fn new(repository: Arc<dyn BillRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteBillCommand,
        metadata: CommandMetadata,
    ) -> Result<(), BillingError> {
        self.repository.delete(metadata.tenant_id, cmd.bill_id).await?;
        Ok(())
    }
}
