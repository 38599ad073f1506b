use super::*;
use crate::model::{Course, LessonProgress};
use crate::quiz::policy;
use crate::shortcode;
use crate::storage::now_millis;

impl LearnApp {
    pub fn lesson_locked(&self, course: &Course, lesson_index: usize) -> bool {
        let Some(user_id) = self.current_user_id.as_deref() else {
            return false;
        };
        let progress = self.store.course_progress(user_id, &course.id);
        policy::is_lesson_locked(course, lesson_index, &progress)
    }

    pub fn lesson_progress(&self, course_id: &str, lesson_id: &str) -> Option<LessonProgress> {
        let user_id = self.current_user_id.as_deref()?;
        self.store
            .course_progress(user_id, course_id)
            .remove(lesson_id)
    }

    /// Completed lessons out of total, for the course list.
    pub fn course_completion(&self, course: &Course) -> (usize, usize) {
        let total = course.lessons.len();
        let Some(user_id) = self.current_user_id.as_deref() else {
            return (0, total);
        };
        let progress = self.store.course_progress(user_id, &course.id);
        let done = course
            .lessons
            .iter()
            .filter(|l| progress.get(&l.id).map(|p| p.completed).unwrap_or(false))
            .count();
        (done, total)
    }

    /// Manual completion for lessons that embed no quizzes. Writes the same
    /// snapshot the quiz cascade does.
    pub fn mark_lesson_read(&mut self, course_id: &str, lesson_id: &str) {
        let Some(user_id) = self.current_user_id.clone() else {
            return;
        };
        if self
            .lesson_progress(course_id, lesson_id)
            .map(|p| p.completed)
            .unwrap_or(false)
        {
            return;
        }
        let progress = LessonProgress {
            completed: true,
            score: 100,
            attempts: 1,
            passed_at: Some(now_millis()),
            updated_at: 0,
        };
        self.store
            .save_lesson_progress(&user_id, course_id, lesson_id, progress);
    }

    /// Re-evaluates completion for every lesson that embeds `quiz_id`. A
    /// lesson completes once each quiz it references has a passing latest
    /// attempt; completion is written as a flat snapshot (score 100) and
    /// never regresses on a later failed retake.
    pub fn refresh_lesson_completion(&mut self, quiz_id: &str) {
        let Some(user_id) = self.current_user_id.clone() else {
            return;
        };
        let mut completed = Vec::new();
        for course in &self.store.courses {
            for lesson in &course.lessons {
                let ids = shortcode::quiz_ids(&lesson.content);
                if !ids.iter().any(|id| id == quiz_id) {
                    continue;
                }
                let latest: Vec<&crate::model::AttemptRecord> = ids
                    .iter()
                    .filter_map(|id| self.store.last_result(&user_id, id))
                    .collect();
                if latest.len() == ids.len() && latest.iter().all(|a| a.result.passed) {
                    completed.push((course.id.clone(), lesson.id.clone()));
                }
            }
        }
        for (course_id, lesson_id) in completed {
            if self
                .lesson_progress(&course_id, &lesson_id)
                .map(|p| p.completed)
                .unwrap_or(false)
            {
                continue;
            }
            let progress = LessonProgress {
                completed: true,
                score: 100,
                attempts: 1,
                passed_at: Some(now_millis()),
                updated_at: 0,
            };
            self.store
                .save_lesson_progress(&user_id, &course_id, &lesson_id, progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Answer, QuizResult};

    fn app_with_seed_user() -> LearnApp {
        let mut app = LearnApp::default();
        app.store.ensure_seeded();
        app.register_user("Ada", "QA");
        app
    }

    fn passing(score: u32) -> QuizResult {
        QuizResult {
            score,
            passed: true,
            answers: vec![Some(Answer::Flag(true))],
            time_spent: 1000,
        }
    }

    #[test]
    fn passing_the_embedded_quiz_completes_the_lesson() {
        let mut app = app_with_seed_user();
        let user = app.current_user_id.clone().unwrap();
        app.store.push_result(&user, "quiz-basics", passing(90));
        app.refresh_lesson_completion("quiz-basics");
        let p = app
            .lesson_progress("course-onboarding", "lesson-intro")
            .expect("progress written");
        assert!(p.completed);
        assert_eq!(p.score, 100);
        assert!(p.passed_at.is_some());
    }

    #[test]
    fn failed_attempt_does_not_complete_the_lesson() {
        let mut app = app_with_seed_user();
        let user = app.current_user_id.clone().unwrap();
        app.store.push_result(
            &user,
            "quiz-basics",
            QuizResult {
                score: 40,
                passed: false,
                answers: vec![None],
                time_spent: 0,
            },
        );
        app.refresh_lesson_completion("quiz-basics");
        assert!(app
            .lesson_progress("course-onboarding", "lesson-intro")
            .is_none());
    }

    #[test]
    fn completion_unlocks_the_next_lesson() {
        let mut app = app_with_seed_user();
        let course = app.store.course("course-onboarding").cloned().unwrap();
        assert!(app.lesson_locked(&course, 1));
        let user = app.current_user_id.clone().unwrap();
        app.store.push_result(&user, "quiz-basics", passing(100));
        app.refresh_lesson_completion("quiz-basics");
        assert!(!app.lesson_locked(&course, 1));
    }

    #[test]
    fn completion_survives_a_later_failed_retake() {
        let mut app = app_with_seed_user();
        let user = app.current_user_id.clone().unwrap();
        app.store.push_result(&user, "quiz-basics", passing(90));
        app.refresh_lesson_completion("quiz-basics");
        app.store.push_result(
            &user,
            "quiz-basics",
            QuizResult {
                score: 20,
                passed: false,
                answers: vec![None],
                time_spent: 0,
            },
        );
        app.refresh_lesson_completion("quiz-basics");
        let p = app
            .lesson_progress("course-onboarding", "lesson-intro")
            .expect("progress kept");
        assert!(p.completed);
        assert_eq!(p.score, 100);
    }

    #[test]
    fn mark_lesson_read_completes_without_quizzes() {
        let mut app = app_with_seed_user();
        app.mark_lesson_read("course-onboarding", "lesson-intro");
        let p = app
            .lesson_progress("course-onboarding", "lesson-intro")
            .expect("progress written");
        assert!(p.completed);
        assert_eq!(p.score, 100);
    }
}
