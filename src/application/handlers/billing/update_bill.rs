//! UpdateBillHandler - Command handler for editing a bill.

use std::sync::Arc;

use crate::domain::billing::{Bill, BillDetails, BillingError};
use crate::domain::foundation::{BillId, CommandMetadata};
use crate::ports::BillRepository;

#[derive(Debug, Clone)]
pub struct UpdateBillCommand {
    pub bill_id: BillId,
    pub details: BillDetails,
}

pub struct UpdateBillHandler {
    repository: Arc<dyn BillRepository>,
}

impl UpdateBillHandler {
    pub fn new(repository: Arc<dyn BillRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateBillCommand,
        metadata: CommandMetadata,
    ) -> Result<Bill, BillingError> {
        let mut bill = self
            .repository
            .find_by_id(metadata.tenant_id, cmd.bill_id)
            .await?
            .ok_or_else(|| BillingError::not_found("Bill", cmd.bill_id))?;

        bill.update(cmd.details)?;
        self.repository.update(&bill).await?;

        Ok(bill)
    }
}
