//! Enrollment and forum role lookups.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

use cs_core::ids::{CourseKey, UserId};
use cs_core::notifications::ForumRole;
use cs_core::ports::{EnrollmentRepositoryPort, ForumRoleRepositoryPort};

#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    active: RwLock<HashMap<UserId, BTreeSet<CourseKey>>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn enroll(&self, user_id: UserId, course: CourseKey) {
        self.active
            .write()
            .await
            .entry(user_id)
            .or_default()
            .insert(course);
    }

    /// Deactivates the enrollment; the user no longer counts as enrolled.
    pub async fn unenroll(&self, user_id: UserId, course: &CourseKey) {
        if let Some(courses) = self.active.write().await.get_mut(&user_id) {
            courses.remove(course);
        }
    }
}

#[async_trait]
impl EnrollmentRepositoryPort for InMemoryEnrollmentRepository {
    async fn active_course_ids(&self, user_id: &UserId) -> Result<Vec<CourseKey>> {
        Ok(self
            .active
            .read()
            .await
            .get(user_id)
            .map(|courses| courses.iter().cloned().collect())
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryForumRoleRepository {
    roles: RwLock<HashMap<(UserId, CourseKey), Vec<ForumRole>>>,
}

impl InMemoryForumRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn assign(&self, user_id: UserId, course: CourseKey, role: ForumRole) {
        let mut guard = self.roles.write().await;
        let roles = guard.entry((user_id, course)).or_default();
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
}

#[async_trait]
impl ForumRoleRepositoryPort for InMemoryForumRoleRepository {
    async fn roles_for(&self, user_id: &UserId, course: &CourseKey) -> Result<Vec<ForumRole>> {
        Ok(self
            .roles
            .read()
            .await
            .get(&(*user_id, course.clone()))
            .cloned()
            .unwrap_or_default())
    }
}
