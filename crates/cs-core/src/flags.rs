//! Per-course feature flags, resolved once per request.

use serde::{Deserialize, Serialize};

/// Flags in effect for one course.
///
/// Consumers receive this value instead of querying toggles themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFlags {
    pub enable_coursewide_notifications: bool,
    pub enable_reported_content_notifications: bool,
    pub show_notifications_tray: bool,
}

/// Partial per-course override of [`CourseFlags`]; unset fields inherit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseFlagOverrides {
    pub enable_coursewide_notifications: Option<bool>,
    pub enable_reported_content_notifications: Option<bool>,
    pub show_notifications_tray: Option<bool>,
}

impl CourseFlags {
    pub fn with_overrides(self, overrides: &CourseFlagOverrides) -> Self {
        Self {
            enable_coursewide_notifications: overrides
                .enable_coursewide_notifications
                .unwrap_or(self.enable_coursewide_notifications),
            enable_reported_content_notifications: overrides
                .enable_reported_content_notifications
                .unwrap_or(self.enable_reported_content_notifications),
            show_notifications_tray: overrides
                .show_notifications_tray
                .unwrap_or(self.show_notifications_tray),
        }
    }
}
