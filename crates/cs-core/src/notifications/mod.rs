//! Notification preferences and the rules that trim them per course and role.

mod batch;
mod filter;
mod preferences;
mod registry;
mod roles;

pub use batch::in_batches;
pub use filter::{
    filter_course_wide_preferences, filter_out_visible_notifications, COURSE_WIDE_NOTIFICATION_TYPES,
    REPORTED_CONTENT_NOTIFICATION_TYPE,
};
pub use preferences::{
    find_app_in_normalized_apps, find_pref_in_normalized_prefs, AppPreferences, CoursePreferences,
    EmailCadence, NormalizedApp, NormalizedPreference, NotificationApp, NotificationTypePreference,
};
pub use registry::{NotificationTypeDescriptor, NotificationTypeRegistry, VisibilityTable};
pub use roles::{ForumRole, UnknownForumRole};
