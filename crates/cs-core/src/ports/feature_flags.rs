use crate::flags::CourseFlags;
use crate::ids::CourseKey;

/// Resolves the flags in effect for a course.
pub trait FeatureFlagsPort: Send + Sync {
    fn flags_for(&self, course: &CourseKey) -> CourseFlags;
}
