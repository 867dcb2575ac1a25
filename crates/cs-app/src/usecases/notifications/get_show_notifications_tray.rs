use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use cs_core::ids::UserId;
use cs_core::ports::{EnrollmentRepositoryPort, FeatureFlagsPort};

/// Whether the notifications tray is shown to a user: true when any course
/// the user is actively enrolled in enables it.
pub struct GetShowNotificationsTrayUseCase {
    enrollments: Arc<dyn EnrollmentRepositoryPort>,
    flags: Arc<dyn FeatureFlagsPort>,
}

impl GetShowNotificationsTrayUseCase {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepositoryPort>,
        flags: Arc<dyn FeatureFlagsPort>,
    ) -> Self {
        Self { enrollments, flags }
    }

    #[tracing::instrument(
        name = "usecase.get_show_notifications_tray.execute",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn execute(&self, user_id: UserId) -> Result<bool> {
        let courses = self.enrollments.active_course_ids(&user_id).await?;
        let enabled_in = courses
            .iter()
            .find(|course| self.flags.flags_for(course).show_notifications_tray);

        debug!(
            enrollments = courses.len(),
            enabled_in = ?enabled_in,
            "Resolved notifications tray visibility"
        );
        Ok(enabled_in.is_some())
    }
}
