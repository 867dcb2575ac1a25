//! Notification preference commands
//! 通知偏好相关命令

use tracing::{info_span, Instrument};

use cs_core::ids::UserId;
use cs_core::notifications::CoursePreferences;

use crate::bootstrap::AppRuntime;
use crate::commands::{CommandError, CommandResult};

pub async fn get_show_notifications_tray(
    runtime: &AppRuntime,
    user_id: UserId,
) -> CommandResult<bool> {
    let span = info_span!("command.notifications.show_tray", user_id = %user_id);
    async {
        Ok::<_, CommandError>(runtime
            .usecases()
            .get_show_notifications_tray()
            .execute(user_id)
            .await?)
    }
    .instrument(span)
    .await
}

/// Preferences trimmed to the types this user can receive in the course.
pub async fn filter_notification_preferences(
    runtime: &AppRuntime,
    user_id: UserId,
    preferences: CoursePreferences,
) -> CommandResult<CoursePreferences> {
    let span = info_span!(
        "command.notifications.filter_preferences",
        user_id = %user_id,
        course = %preferences.course_id,
    );
    async {
        Ok::<_, CommandError>(runtime
            .usecases()
            .filter_course_preferences()
            .execute(user_id, preferences)
            .await?)
    }
    .instrument(span)
    .await
}
