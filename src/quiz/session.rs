use super::{score_question, Interaction};
use crate::model::{Answer, Question, Quiz, QuizResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A quiz with no questions cannot be attempted.
    NoQuestions,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoQuestions => write!(f, "the quiz contains no questions"),
        }
    }
}

impl std::error::Error for SessionError {}

/// The live state of one quiz attempt. Strictly forward-only: question 0 to
/// question n-1, then `finish`. Constructed fresh per attempt and consumed on
/// finish, so a result can only ever be produced once and the countdown dies
/// with the session. Abandoning an attempt is dropping the session.
///
/// Time is supplied by the caller as seconds on a monotonic scale (the UI
/// passes egui's `input.time`); the session never reads a clock itself.
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    answers: Vec<Option<Answer>>,
    interaction: Interaction,
    started_at: f64,
    deadline: Option<f64>,
}

impl QuizSession {
    pub fn start(quiz: Quiz, now: f64) -> Result<Self, SessionError> {
        if quiz.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        let answers = vec![None; quiz.questions.len()];
        let interaction = Interaction::for_question(&quiz.questions[0], quiz.shuffle);
        let deadline = (quiz.time_limit > 0).then(|| now + quiz.time_limit as f64);
        Ok(Self {
            quiz,
            current: 0,
            answers,
            interaction,
            started_at: now,
            deadline,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.quiz.questions.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.quiz.questions.len()
    }

    /// Renders the current question and captures any answer it emits.
    pub fn show_current(&mut self, ui: &mut egui::Ui) {
        let question = &self.quiz.questions[self.current];
        if let Some(answer) = super::question_ui(ui, question, &mut self.interaction) {
            self.answers[self.current] = Some(answer);
        }
    }

    pub fn record_answer(&mut self, answer: Answer) {
        self.answers[self.current] = Some(answer);
    }

    /// The advance control stays disabled until this is true.
    pub fn current_answered(&self) -> bool {
        self.answers[self.current].is_some()
    }

    /// Moves to the next question and rebuilds its interaction buffer.
    /// Callers finish instead of advancing past the last index.
    pub fn advance(&mut self) {
        if self.is_last() {
            return;
        }
        self.current += 1;
        self.interaction =
            Interaction::for_question(&self.quiz.questions[self.current], self.quiz.shuffle);
    }

    /// Whole-attempt countdown, armed once at start when `time_limit > 0`.
    pub fn remaining_secs(&self, now: f64) -> Option<u64> {
        self.deadline.map(|d| (d - now).ceil().max(0.0) as u64)
    }

    pub fn expired(&self, now: f64) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Scores every question (unanswered = incorrect) and produces the final
    /// result. Consumes the session.
    pub fn finish(self, now: f64) -> QuizResult {
        let total = self.quiz.questions.len();
        let correct = self
            .quiz
            .questions
            .iter()
            .zip(self.answers.iter())
            .filter(|(q, a)| score_question(q, a.as_ref()))
            .count();
        let score = (100.0 * correct as f64 / total as f64).round() as u32;
        QuizResult {
            score,
            passed: score >= self.quiz.passing_score,
            answers: self.answers,
            time_spent: ((now - self.started_at).max(0.0) * 1000.0).round() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;

    fn single(prompt: &str, options: &[&str], correct: usize) -> Question {
        Question {
            text: prompt.into(),
            kind: QuestionKind::Single {
                options: options.iter().map(|o| o.to_string()).collect(),
                correct: vec![correct],
            },
        }
    }

    fn quiz(questions: Vec<Question>, time_limit: u32, passing_score: u32) -> Quiz {
        Quiz {
            id: "quiz-test".into(),
            title: "Test".into(),
            category: String::new(),
            questions,
            max_score: 100,
            time_limit,
            max_attempts: 0,
            passing_score,
            shuffle: false,
        }
    }

    #[test]
    fn empty_quiz_cannot_start() {
        let err = QuizSession::start(quiz(vec![], 0, 80), 0.0).err();
        assert_eq!(err, Some(SessionError::NoQuestions));
    }

    #[test]
    fn correct_single_question_attempt_passes() {
        let q = quiz(vec![single("?", &["a", "b"], 0)], 0, 80);
        let mut s = QuizSession::start(q, 10.0).expect("start");
        assert!(!s.current_answered());
        s.record_answer(Answer::Text("a".into()));
        assert!(s.current_answered());
        assert!(s.is_last());
        let result = s.finish(12.5);
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert_eq!(result.time_spent, 2500);
    }

    #[test]
    fn incorrect_single_question_attempt_fails() {
        let q = quiz(vec![single("?", &["a", "b"], 0)], 0, 80);
        let mut s = QuizSession::start(q, 0.0).expect("start");
        s.record_answer(Answer::Text("b".into()));
        let result = s.finish(1.0);
        assert_eq!(result.score, 0);
        assert!(!result.passed);
    }

    #[test]
    fn score_rounds_to_nearest_integer_percent() {
        let q = quiz(
            vec![
                single("1", &["a", "b"], 0),
                single("2", &["a", "b"], 0),
                single("3", &["a", "b"], 0),
            ],
            0,
            60,
        );
        let mut s = QuizSession::start(q, 0.0).expect("start");
        s.record_answer(Answer::Text("a".into()));
        s.advance();
        s.record_answer(Answer::Text("a".into()));
        s.advance();
        s.record_answer(Answer::Text("b".into()));
        let result = s.finish(1.0);
        // 2/3 rounds to 67, meeting a 60% bar.
        assert_eq!(result.score, 67);
        assert!(result.passed);
    }

    #[test]
    fn timer_expires_after_the_configured_limit() {
        let q = quiz(vec![single("?", &["a", "b"], 0)], 5, 80);
        let s = QuizSession::start(q, 100.0).expect("start");
        assert!(!s.expired(104.9));
        assert_eq!(s.remaining_secs(103.2), Some(2));
        assert!(s.expired(105.0));
    }

    #[test]
    fn timed_out_session_scores_all_null_answers_as_zero() {
        let q = quiz(
            vec![single("1", &["a", "b"], 0), single("2", &["a", "b"], 0)],
            5,
            80,
        );
        let s = QuizSession::start(q, 0.0).expect("start");
        assert!(s.expired(5.0));
        let result = s.finish(5.0);
        assert_eq!(result.score, 0);
        assert!(!result.passed);
        assert_eq!(result.answers, vec![None, None]);
        assert_eq!(result.time_spent, 5000);
    }

    #[test]
    fn no_deadline_when_time_limit_is_zero() {
        let q = quiz(vec![single("?", &["a", "b"], 0)], 0, 80);
        let s = QuizSession::start(q, 0.0).expect("start");
        assert!(!s.expired(1e9));
        assert_eq!(s.remaining_secs(1e9), None);
    }

    #[test]
    fn advance_is_forward_only_and_stops_at_the_last_question() {
        let q = quiz(
            vec![single("1", &["a"], 0), single("2", &["a"], 0)],
            0,
            80,
        );
        let mut s = QuizSession::start(q, 0.0).expect("start");
        assert_eq!(s.current_index(), 0);
        s.advance();
        assert_eq!(s.current_index(), 1);
        assert!(s.is_last());
        s.advance();
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn unknown_question_kind_counts_incorrect_without_aborting() {
        let q = quiz(
            vec![
                single("1", &["a", "b"], 0),
                Question {
                    text: "?".into(),
                    kind: QuestionKind::Unknown,
                },
            ],
            0,
            50,
        );
        let mut s = QuizSession::start(q, 0.0).expect("start");
        s.record_answer(Answer::Text("a".into()));
        s.advance();
        s.record_answer(Answer::Text("whatever".into()));
        let result = s.finish(1.0);
        assert_eq!(result.score, 50);
        assert!(result.passed);
    }
}
