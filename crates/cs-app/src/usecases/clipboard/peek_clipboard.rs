use std::sync::Arc;

use cs_core::clipboard::ClipboardEntry;
use cs_core::ids::UserId;
use cs_core::ports::StagedContentRepositoryPort;
use cs_core::ClipboardError;

/// Returns what is currently in a user's clipboard without touching it.
pub struct PeekClipboardUseCase {
    staged_repo: Arc<dyn StagedContentRepositoryPort>,
}

impl PeekClipboardUseCase {
    pub fn new(staged_repo: Arc<dyn StagedContentRepositoryPort>) -> Self {
        Self { staged_repo }
    }

    #[tracing::instrument(name = "usecase.peek_clipboard.execute", skip(self), fields(user_id = %user_id))]
    pub async fn execute(&self, user_id: UserId) -> Result<ClipboardEntry, ClipboardError> {
        self.staged_repo
            .get_for_user(&user_id)
            .await?
            .ok_or(ClipboardError::EmptyClipboard { user_id })
    }
}
