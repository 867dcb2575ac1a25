use super::preferences::CoursePreferences;
use super::registry::VisibilityTable;
use super::roles::ForumRole;
use crate::flags::CourseFlags;

/// Types hidden when course-wide notifications are disabled for a course.
pub const COURSE_WIDE_NOTIFICATION_TYPES: [&str; 2] = ["new_discussion_post", "new_question_post"];

/// Additionally hidden when reported-content notifications are disabled.
pub const REPORTED_CONTENT_NOTIFICATION_TYPE: &str = "content_reported";

/// Drops course-wide notification types unless the course enables them.
pub fn filter_course_wide_preferences(
    flags: &CourseFlags,
    mut preferences: CoursePreferences,
) -> CoursePreferences {
    if flags.enable_coursewide_notifications {
        return preferences;
    }

    let mut hidden: Vec<&str> = COURSE_WIDE_NOTIFICATION_TYPES.to_vec();
    if !flags.enable_reported_content_notifications {
        hidden.push(REPORTED_CONTENT_NOTIFICATION_TYPE);
    }

    for app_prefs in preferences.notification_preference_config.values_mut() {
        for notification_type in &hidden {
            app_prefs.notification_types.remove(*notification_type);
        }
    }
    preferences
}

/// Drops role-restricted notification types the user holds no role for.
pub fn filter_out_visible_notifications(
    mut preferences: CoursePreferences,
    notifications_with_visibility: &VisibilityTable,
    user_forum_roles: &[ForumRole],
) -> CoursePreferences {
    let hidden: Vec<&String> = notifications_with_visibility
        .iter()
        .filter(|(_, visible_to)| !visible_to.iter().any(|role| user_forum_roles.contains(role)))
        .map(|(name, _)| name)
        .collect();

    for app_prefs in preferences.notification_preference_config.values_mut() {
        for notification_type in &hidden {
            app_prefs.notification_types.remove(notification_type.as_str());
        }
    }
    preferences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{AppPreferences, NotificationApp, NotificationTypePreference};

    fn preferences_with(types: &[&str]) -> CoursePreferences {
        let mut prefs = CoursePreferences::new("course-v1:edX+Toy+2012".parse().unwrap());
        let mut discussion = AppPreferences {
            enabled: true,
            ..Default::default()
        };
        for name in types {
            discussion
                .notification_types
                .insert(name.to_string(), NotificationTypePreference::default());
        }
        prefs
            .notification_preference_config
            .insert(NotificationApp::Discussion, discussion);
        prefs
    }

    fn remaining(prefs: &CoursePreferences) -> Vec<String> {
        prefs.notification_preference_config[&NotificationApp::Discussion]
            .notification_types
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn coursewide_enabled_keeps_everything() {
        let flags = CourseFlags {
            enable_coursewide_notifications: true,
            ..Default::default()
        };
        let prefs = preferences_with(&["new_discussion_post", "content_reported", "new_comment"]);

        let filtered = filter_course_wide_preferences(&flags, prefs.clone());

        assert_eq!(filtered, prefs);
    }

    #[test]
    fn coursewide_disabled_drops_course_wide_and_reported_types() {
        let prefs = preferences_with(&[
            "new_discussion_post",
            "new_question_post",
            "content_reported",
            "new_comment",
        ]);

        let filtered = filter_course_wide_preferences(&CourseFlags::default(), prefs);

        assert_eq!(remaining(&filtered), vec!["new_comment"]);
    }

    #[test]
    fn reported_content_survives_when_its_flag_is_on() {
        let flags = CourseFlags {
            enable_reported_content_notifications: true,
            ..Default::default()
        };
        let prefs = preferences_with(&["new_discussion_post", "content_reported", "new_comment"]);

        let filtered = filter_course_wide_preferences(&flags, prefs);

        assert_eq!(remaining(&filtered), vec!["content_reported", "new_comment"]);
    }

    #[test]
    fn restricted_types_need_a_matching_role() {
        let mut table = VisibilityTable::new();
        table.insert(
            "content_reported".into(),
            vec![ForumRole::Administrator, ForumRole::Moderator],
        );
        let prefs = preferences_with(&["content_reported", "new_comment"]);

        let student = filter_out_visible_notifications(prefs.clone(), &table, &[ForumRole::Student]);
        let moderator = filter_out_visible_notifications(prefs, &table, &[ForumRole::Moderator]);

        assert_eq!(remaining(&student), vec!["new_comment"]);
        assert_eq!(remaining(&moderator), vec!["content_reported", "new_comment"]);
    }

    #[test]
    fn restricted_type_missing_from_preferences_is_ignored() {
        let mut table = VisibilityTable::new();
        table.insert("ora_staff_notification".into(), vec![ForumRole::Administrator]);
        let prefs = preferences_with(&["new_comment"]);

        let filtered = filter_out_visible_notifications(prefs, &table, &[]);

        assert!(filtered.contains_type("new_comment"));
        assert!(!filtered.contains_type("ora_staff_notification"));
    }
}
