//! CreateScreeningHandler - Command handler for registering a screening.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ScreeningId, UserId};
use crate::domain::screening::{Screening, ScreeningDetails, ScreeningError};
use crate::ports::ScreeningRepository;

/// Command to register a recurring screening.
#[derive(Debug, Clone)]
pub struct CreateScreeningCommand {
    /// Owner of the screening. Defaults to the caller.
    pub user_id: Option<UserId>,
    pub details: ScreeningDetails,
}

pub struct CreateScreeningHandler {
    repository: Arc<dyn ScreeningRepository>,
}

impl CreateScreeningHandler {
    pub fn new(repository: Arc<dyn ScreeningRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateScreeningCommand,
        metadata: CommandMetadata,
    ) -> Result<Screening, ScreeningError> {
        let user_id = cmd.user_id.unwrap_or(metadata.user_id);
        let screening = Screening::new(ScreeningId::new(), metadata.tenant_id, user_id, cmd.details)?;

        self.repository.save(&screening).await?;

        Ok(screening)
    }
}
