//! Clipboard commands
//! 剪贴板相关命令

use tracing::{info_span, Instrument};

use cs_core::clipboard::CLIPBOARD_PURPOSE;
use cs_core::ids::{UsageKey, UserId};

use crate::bootstrap::AppRuntime;
use crate::commands::dto::{ClipboardStatusDto, CopyRequest, PasteRequest, PasteResponseDto};
use crate::commands::{CommandError, CommandResult};

/// Copy a block (and its children) into the user's clipboard.
pub async fn copy_to_clipboard(
    runtime: &AppRuntime,
    user_id: UserId,
    request: CopyRequest,
) -> CommandResult<ClipboardStatusDto> {
    let span = info_span!(
        "command.clipboard.copy",
        user_id = %user_id,
        usage_key = %request.usage_key,
    );
    async {
        let usage_key: UsageKey = request.usage_key.parse()?;
        let entry = runtime
            .usecases()
            .stage_clipboard_content()
            .execute(user_id, &usage_key)
            .await?;
        Ok::<_, CommandError>(entry.into())
    }
    .instrument(span)
    .await
}

/// Current clipboard contents; an empty clipboard is a client error.
pub async fn get_clipboard(runtime: &AppRuntime, user_id: UserId) -> CommandResult<ClipboardStatusDto> {
    let span = info_span!("command.clipboard.get", user_id = %user_id);
    async {
        let entry = runtime.usecases().peek_clipboard().execute(user_id).await?;
        Ok::<_, CommandError>(entry.into())
    }
    .instrument(span)
    .await
}

/// Paste the clipboard as the last child of `parent_locator`.
pub async fn paste_from_clipboard(
    runtime: &AppRuntime,
    user_id: UserId,
    request: PasteRequest,
) -> CommandResult<PasteResponseDto> {
    let span = info_span!(
        "command.clipboard.paste",
        user_id = %user_id,
        parent = %request.parent_locator,
    );
    async {
        if request.staged_content != CLIPBOARD_PURPOSE {
            return Err(CommandError::client(format!(
                "unsupported staged content source: {:?}",
                request.staged_content
            )));
        }
        let parent: UsageKey = request.parent_locator.parse()?;
        let result = runtime
            .usecases()
            .paste_from_clipboard()
            .execute(user_id, &parent)
            .await?;
        Ok::<_, CommandError>(result.into())
    }
    .instrument(span)
    .await
}
