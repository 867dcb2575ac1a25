use anyhow::Result;
use std::sync::Arc;

use cs_core::ids::UserId;
use cs_core::notifications::{filter_course_wide_preferences, CoursePreferences};
use cs_core::ports::FeatureFlagsPort;

use super::remove_preferences_with_no_access::RemovePreferencesWithNoAccessUseCase;

/// Trims a user's course preferences to what they can actually receive:
/// course-wide types per the course flags, then role-restricted types.
pub struct FilterCoursePreferencesUseCase {
    flags: Arc<dyn FeatureFlagsPort>,
    remove_no_access: RemovePreferencesWithNoAccessUseCase,
}

impl FilterCoursePreferencesUseCase {
    pub fn new(
        flags: Arc<dyn FeatureFlagsPort>,
        remove_no_access: RemovePreferencesWithNoAccessUseCase,
    ) -> Self {
        Self {
            flags,
            remove_no_access,
        }
    }

    #[tracing::instrument(
        name = "usecase.filter_course_preferences.execute",
        skip(self, preferences),
        fields(user_id = %user_id, course = %preferences.course_id)
    )]
    pub async fn execute(
        &self,
        user_id: UserId,
        preferences: CoursePreferences,
    ) -> Result<CoursePreferences> {
        let flags = self.flags.flags_for(&preferences.course_id);
        let preferences = filter_course_wide_preferences(&flags, preferences);
        self.remove_no_access.execute(user_id, preferences).await
    }
}
