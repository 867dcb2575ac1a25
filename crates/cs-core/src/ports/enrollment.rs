use anyhow::Result;
use async_trait::async_trait;

use crate::ids::{CourseKey, UserId};
use crate::notifications::ForumRole;

#[async_trait]
pub trait EnrollmentRepositoryPort: Send + Sync {
    /// Courses the user is actively enrolled in.
    async fn active_course_ids(&self, user_id: &UserId) -> Result<Vec<CourseKey>>;
}

#[async_trait]
pub trait ForumRoleRepositoryPort: Send + Sync {
    async fn roles_for(&self, user_id: &UserId, course: &CourseKey) -> Result<Vec<ForumRole>>;
}
