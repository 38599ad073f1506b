use super::*;
use crate::quiz::policy;

impl LearnApp {
    /// Runs the attempt gate and, when it passes, opens a fresh session.
    /// `now` is egui's `input.time` in seconds.
    pub fn open_quiz(&mut self, quiz_id: &str, now: f64) {
        let Some(quiz) = self.store.quiz(quiz_id).cloned() else {
            self.message = format!("Quiz {quiz_id} no longer exists");
            return;
        };
        let Some(user_id) = self.current_user_id.as_deref() else {
            self.message = "Sign in before taking a quiz".into();
            return;
        };
        let used = self.store.attempts_used(user_id, quiz_id);
        if !policy::attempt_allowed(quiz.max_attempts, used) {
            self.unavailable_quiz = Some(quiz_id.to_string());
            self.state = AppState::QuizUnavailable;
            return;
        }
        match QuizSession::start(quiz, now) {
            Ok(session) => {
                self.session = Some(session);
                self.message.clear();
                self.state = AppState::Quiz;
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Scores the live session, records the attempt and moves to the result
    /// screen. Called from the last-question button and on timer expiry.
    pub fn finish_quiz(&mut self, now: f64) {
        let Some(session) = self.session.take() else {
            return;
        };
        let quiz_id = session.quiz().id.clone();
        let quiz_title = session.quiz().title.clone();
        let passing_score = session.quiz().passing_score;
        let result = session.finish(now);
        if let Some(user_id) = self.current_user_id.clone() {
            self.store.push_result(&user_id, &quiz_id, result.clone());
            self.refresh_lesson_completion(&quiz_id);
        }
        self.outcome = Some(QuizOutcome {
            quiz_id,
            quiz_title,
            passing_score,
            result,
        });
        self.state = AppState::QuizOutcome;
    }

    /// Dropping the session discards the attempt without recording anything.
    pub fn abandon_quiz(&mut self) {
        self.session = None;
        self.back_to_lesson();
    }

    pub fn retake_quiz(&mut self, now: f64) {
        if let Some(outcome) = self.outcome.take() {
            self.open_quiz(&outcome.quiz_id, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;

    fn app_with_seed_user() -> LearnApp {
        let mut app = LearnApp::default();
        app.store.ensure_seeded();
        app.register_user("Ada", "QA");
        app
    }

    fn run_failing_attempt(app: &mut LearnApp, quiz_id: &str) {
        app.open_quiz(quiz_id, 0.0);
        assert_eq!(app.state, AppState::Quiz);
        // Answer nothing and let the deadline pass.
        app.finish_quiz(1.0);
        assert_eq!(app.state, AppState::QuizOutcome);
        assert!(!app.outcome.as_ref().unwrap().result.passed);
    }

    #[test]
    fn finishing_records_the_attempt_and_shows_the_outcome() {
        let mut app = app_with_seed_user();
        let user = app.current_user_id.clone().unwrap();
        app.open_quiz("quiz-basics", 10.0);
        let session = app.session.as_mut().expect("session open");
        session.record_answer(Answer::Text("Anyone who notices it".into()));
        app.finish_quiz(12.0);
        assert_eq!(app.store.attempts_used(&user, "quiz-basics"), 1);
        let outcome = app.outcome.as_ref().expect("outcome set");
        assert_eq!(outcome.quiz_id, "quiz-basics");
        assert_eq!(outcome.result.time_spent, 2000);
        assert!(app.session.is_none());
    }

    #[test]
    fn attempt_gate_blocks_after_the_limit() {
        let mut app = app_with_seed_user();
        // quiz-basics allows 3 attempts.
        for _ in 0..3 {
            run_failing_attempt(&mut app, "quiz-basics");
        }
        app.open_quiz("quiz-basics", 100.0);
        assert_eq!(app.state, AppState::QuizUnavailable);
        assert_eq!(app.unavailable_quiz.as_deref(), Some("quiz-basics"));
        assert!(app.session.is_none());
    }

    #[test]
    fn unlimited_quiz_never_hits_the_gate() {
        let mut app = app_with_seed_user();
        for _ in 0..5 {
            run_failing_attempt(&mut app, "quiz-equipment");
        }
        app.open_quiz("quiz-equipment", 100.0);
        assert_eq!(app.state, AppState::Quiz);
    }

    #[test]
    fn abandoning_records_nothing() {
        let mut app = app_with_seed_user();
        let user = app.current_user_id.clone().unwrap();
        app.open_quiz("quiz-basics", 0.0);
        app.abandon_quiz();
        assert_eq!(app.store.attempts_used(&user, "quiz-basics"), 0);
        assert!(app.session.is_none());
    }

    #[test]
    fn reset_attempts_reopens_the_gate() {
        let mut app = app_with_seed_user();
        let user = app.current_user_id.clone().unwrap();
        for _ in 0..3 {
            run_failing_attempt(&mut app, "quiz-basics");
        }
        app.open_quiz("quiz-basics", 50.0);
        assert_eq!(app.state, AppState::QuizUnavailable);
        app.store.reset_attempts(&user, "quiz-basics");
        app.open_quiz("quiz-basics", 60.0);
        assert_eq!(app.state, AppState::Quiz);
    }
}
