use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::ids::CourseKey;

/// Application a notification type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationApp {
    Discussion,
    Updates,
    Grading,
}

impl NotificationApp {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationApp::Discussion => "discussion",
            NotificationApp::Updates => "updates",
            NotificationApp::Grading => "grading",
        }
    }
}

impl Display for NotificationApp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailCadence {
    #[default]
    Daily,
    Weekly,
    Immediately,
    Never,
}

/// Delivery channels a user enabled for one notification type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTypePreference {
    pub web: bool,
    pub email: bool,
    pub push: bool,
    #[serde(default)]
    pub email_cadence: EmailCadence,
    #[serde(default)]
    pub info: String,
}

/// One app's section of a user's course preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPreferences {
    pub enabled: bool,
    #[serde(default)]
    pub core_notification_types: Vec<String>,
    #[serde(default)]
    pub notification_types: BTreeMap<String, NotificationTypePreference>,
}

/// A user's notification preferences for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePreferences {
    pub course_id: CourseKey,
    pub notification_preference_config: BTreeMap<NotificationApp, AppPreferences>,
}

/// Flat, list-shaped view of one app's preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedApp {
    pub name: NotificationApp,
    pub enabled: bool,
    pub core_notification_types: Vec<String>,
}

/// Flat, list-shaped view of one notification type's preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPreference {
    pub name: String,
    pub app_name: NotificationApp,
    pub web: bool,
    pub email: bool,
    pub push: bool,
    pub email_cadence: EmailCadence,
    pub info: String,
}

impl CoursePreferences {
    pub fn new(course_id: CourseKey) -> Self {
        Self {
            course_id,
            notification_preference_config: BTreeMap::new(),
        }
    }

    pub fn normalized_apps(&self) -> Vec<NormalizedApp> {
        self.notification_preference_config
            .iter()
            .map(|(app, prefs)| NormalizedApp {
                name: *app,
                enabled: prefs.enabled,
                core_notification_types: prefs.core_notification_types.clone(),
            })
            .collect()
    }

    pub fn normalized_preferences(&self) -> Vec<NormalizedPreference> {
        self.notification_preference_config
            .iter()
            .flat_map(|(app, prefs)| {
                prefs
                    .notification_types
                    .iter()
                    .map(move |(name, pref)| NormalizedPreference {
                        name: name.clone(),
                        app_name: *app,
                        web: pref.web,
                        email: pref.email,
                        push: pref.push,
                        email_cadence: pref.email_cadence,
                        info: pref.info.clone(),
                    })
            })
            .collect()
    }

    /// Whether any app still lists `notification_type`.
    pub fn contains_type(&self, notification_type: &str) -> bool {
        self.notification_preference_config
            .values()
            .any(|prefs| prefs.notification_types.contains_key(notification_type))
    }
}

/// Returns the app entry named `app_name`.
pub fn find_app_in_normalized_apps(
    app_name: NotificationApp,
    apps: &[NormalizedApp],
) -> Option<&NormalizedApp> {
    apps.iter().find(|app| app.name == app_name)
}

/// Returns the preference named `pref_name` within `app_name`.
pub fn find_pref_in_normalized_prefs<'a>(
    pref_name: &str,
    app_name: NotificationApp,
    prefs: &'a [NormalizedPreference],
) -> Option<&'a NormalizedPreference> {
    prefs
        .iter()
        .find(|pref| pref.name == pref_name && pref.app_name == app_name)
}
