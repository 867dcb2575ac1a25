use anyhow::Result;
use std::sync::Arc;

use cs_core::ids::UserId;
use cs_core::notifications::{
    filter_out_visible_notifications, CoursePreferences, NotificationTypeRegistry,
};
use cs_core::ports::ForumRoleRepositoryPort;

/// Drops role-restricted notification types the user cannot see in the
/// preferences' course.
pub struct RemovePreferencesWithNoAccessUseCase {
    roles: Arc<dyn ForumRoleRepositoryPort>,
    registry: Arc<NotificationTypeRegistry>,
}

impl RemovePreferencesWithNoAccessUseCase {
    pub fn new(
        roles: Arc<dyn ForumRoleRepositoryPort>,
        registry: Arc<NotificationTypeRegistry>,
    ) -> Self {
        Self { roles, registry }
    }

    #[tracing::instrument(
        name = "usecase.remove_preferences_with_no_access.execute",
        skip(self, preferences),
        fields(user_id = %user_id, course = %preferences.course_id)
    )]
    pub async fn execute(
        &self,
        user_id: UserId,
        preferences: CoursePreferences,
    ) -> Result<CoursePreferences> {
        let roles = self.roles.roles_for(&user_id, &preferences.course_id).await?;
        let visibility = self.registry.types_with_visibility_settings();
        Ok(filter_out_visible_notifications(preferences, &visibility, &roles))
    }
}
