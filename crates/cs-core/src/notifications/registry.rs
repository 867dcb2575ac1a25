//! Table of known notification types, built once at startup.

use std::collections::BTreeMap;

use super::preferences::NotificationApp;
use super::roles::ForumRole;

/// Notification type name -> roles allowed to see it.
pub type VisibilityTable = BTreeMap<String, Vec<ForumRole>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTypeDescriptor {
    pub name: String,
    pub app: NotificationApp,
    pub is_core: bool,
    /// Empty means visible to everyone.
    pub visible_to: Vec<ForumRole>,
}

impl NotificationTypeDescriptor {
    pub fn new(name: impl Into<String>, app: NotificationApp, is_core: bool) -> Self {
        Self {
            name: name.into(),
            app,
            is_core,
            visible_to: Vec::new(),
        }
    }

    pub fn visible_to(mut self, roles: &[ForumRole]) -> Self {
        self.visible_to = roles.to_vec();
        self
    }
}

/// Registration table of notification types.
///
/// Registration order is preserved; registering a name twice replaces the
/// earlier descriptor in place.
#[derive(Debug, Clone, Default)]
pub struct NotificationTypeRegistry {
    types: Vec<NotificationTypeDescriptor>,
}

impl NotificationTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification types the platform ships with.
    pub fn builtin() -> Self {
        use ForumRole::{Administrator, CommunityTa, Moderator};
        use NotificationApp::{Discussion, Grading, Updates};

        let mut registry = Self::new();
        registry
            .register(NotificationTypeDescriptor::new("new_comment_on_response", Discussion, true))
            .register(NotificationTypeDescriptor::new("new_comment", Discussion, true))
            .register(NotificationTypeDescriptor::new("new_response", Discussion, true))
            .register(NotificationTypeDescriptor::new("new_discussion_post", Discussion, false))
            .register(NotificationTypeDescriptor::new("new_question_post", Discussion, false))
            .register(NotificationTypeDescriptor::new("response_on_followed_post", Discussion, true))
            .register(NotificationTypeDescriptor::new("comment_on_followed_post", Discussion, true))
            .register(
                NotificationTypeDescriptor::new("content_reported", Discussion, false)
                    .visible_to(&[Administrator, Moderator, CommunityTa]),
            )
            .register(NotificationTypeDescriptor::new("response_endorsed_on_thread", Discussion, true))
            .register(NotificationTypeDescriptor::new("response_endorsed", Discussion, true))
            .register(NotificationTypeDescriptor::new("course_updates", Updates, true))
            .register(
                NotificationTypeDescriptor::new("ora_staff_notification", Grading, false)
                    .visible_to(&[Administrator, Moderator]),
            );
        registry
    }

    pub fn register(&mut self, descriptor: NotificationTypeDescriptor) -> &mut Self {
        match self.types.iter_mut().find(|t| t.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.types.push(descriptor),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&NotificationTypeDescriptor> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationTypeDescriptor> {
        self.types.iter()
    }

    /// Types restricted to specific forum roles.
    pub fn types_with_visibility_settings(&self) -> VisibilityTable {
        self.types
            .iter()
            .filter(|t| !t.visible_to.is_empty())
            .map(|t| (t.name.clone(), t.visible_to.clone()))
            .collect()
    }
}
