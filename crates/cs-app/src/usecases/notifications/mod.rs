//! Notification preference use cases.
//! 通知偏好用例：按课程开关与论坛角色过滤。

pub mod filter_course_preferences;
pub mod get_show_notifications_tray;
pub mod remove_preferences_with_no_access;

pub use filter_course_preferences::FilterCoursePreferencesUseCase;
pub use get_show_notifications_tray::GetShowNotificationsTrayUseCase;
pub use remove_preferences_with_no_access::RemovePreferencesWithNoAccessUseCase;
