use tracing::{info_span, Instrument};

use cs_core::ids::UsageKey;

use crate::bootstrap::AppRuntime;
use crate::commands::dto::LibrarySyncDto;
use crate::commands::{CommandError, CommandResult};

/// Refresh a library content block from its source library.
pub async fn sync_library_content(
    runtime: &AppRuntime,
    usage_key: &str,
) -> CommandResult<LibrarySyncDto> {
    let span = info_span!("command.library.sync", usage_key = %usage_key);
    async {
        let usage_key: UsageKey = usage_key.parse()?;
        let outcome = runtime
            .usecases()
            .sync_library_content()
            .execute(&usage_key)
            .await?;
        Ok::<_, CommandError>(outcome.into())
    }
    .instrument(span)
    .await
}
