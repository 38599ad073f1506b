use crate::model::{Course, LessonProgress};
use std::collections::HashMap;

/// Stateless attempt gate, re-evaluated on every attempt request.
/// `max_attempts == 0` means unlimited.
pub fn attempt_allowed(max_attempts: u32, attempts_used: usize) -> bool {
    max_attempts == 0 || attempts_used < max_attempts as usize
}

/// Lesson `n > 0` is locked while the course requires sequential completion
/// and lesson `n - 1` has not been completed. Lesson 0 is never locked.
/// `progress` is the user's per-lesson progress for this course.
pub fn is_lesson_locked(
    course: &Course,
    lesson_index: usize,
    progress: &HashMap<String, LessonProgress>,
) -> bool {
    if lesson_index == 0 || !course.lock_until_passed {
        return false;
    }
    let Some(prev) = course.lessons.get(lesson_index - 1) else {
        return false;
    };
    !progress.get(&prev.id).map(|p| p.completed).unwrap_or(false)
}
