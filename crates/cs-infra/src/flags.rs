use std::collections::HashMap;

use cs_core::config::FlagsConfig;
use cs_core::flags::CourseFlags;
use cs_core::ids::CourseKey;
use cs_core::ports::FeatureFlagsPort;

/// Feature flags fixed at startup from configuration.
pub struct StaticFeatureFlags {
    defaults: CourseFlags,
    per_course: HashMap<CourseKey, CourseFlags>,
}

impl StaticFeatureFlags {
    /// Override entries whose key is not a valid course key are skipped with a warning.
    pub fn from_config(config: &FlagsConfig) -> Self {
        let per_course = config
            .courses
            .iter()
            .filter_map(|(raw, overrides)| match raw.parse::<CourseKey>() {
                Ok(course) => Some((course, config.defaults.with_overrides(overrides))),
                Err(err) => {
                    tracing::warn!(course = %raw, error = %err, "Ignoring flag overrides for invalid course key");
                    None
                }
            })
            .collect();

        Self {
            defaults: config.defaults,
            per_course,
        }
    }
}

impl FeatureFlagsPort for StaticFeatureFlags {
    fn flags_for(&self, course: &CourseKey) -> CourseFlags {
        self.per_course
            .get(course)
            .copied()
            .unwrap_or(self.defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::flags::CourseFlagOverrides;

    #[test]
    fn course_overrides_inherit_unset_defaults() {
        let mut config = FlagsConfig {
            defaults: CourseFlags {
                enable_coursewide_notifications: true,
                ..Default::default()
            },
            ..Default::default()
        };
        config.courses.insert(
            "course-v1:edX+Toy+2012".into(),
            CourseFlagOverrides {
                show_notifications_tray: Some(true),
                ..Default::default()
            },
        );
        config
            .courses
            .insert("not a key".into(), CourseFlagOverrides::default());

        let flags = StaticFeatureFlags::from_config(&config);

        let toy = flags.flags_for(&"course-v1:edX+Toy+2012".parse().unwrap());
        assert!(toy.show_notifications_tray);
        assert!(toy.enable_coursewide_notifications);
        let other = flags.flags_for(&"course-v1:edX+Other+2012".parse().unwrap());
        assert!(!other.show_notifications_tray);
    }
}
