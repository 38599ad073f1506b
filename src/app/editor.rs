use super::*;
use crate::model::{Course, Lesson, Question, Quiz};
use crate::storage::generate_id;

/// Form buffers for creating or editing a course. Lessons are edited inline.
pub struct CourseEditor {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub lock_until_passed: bool,
    pub lessons: Vec<Lesson>,
    pub error: String,
}

impl CourseEditor {
    pub fn blank() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            lock_until_passed: false,
            lessons: Vec::new(),
            error: String::new(),
        }
    }

    pub fn from_course(course: &Course) -> Self {
        Self {
            id: Some(course.id.clone()),
            title: course.title.clone(),
            description: course.description.clone(),
            lock_until_passed: course.lock_until_passed,
            lessons: course.lessons.clone(),
            error: String::new(),
        }
    }

    pub fn add_lesson(&mut self) {
        self.lessons.push(Lesson {
            id: generate_id("lesson"),
            title: String::new(),
            content: String::new(),
        });
    }
}

/// Form buffers for a quiz. The question list is edited as JSON so the
/// authoring format matches the import/export format one to one; serde
/// validates it on save.
pub struct QuizEditor {
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    pub time_limit: String,
    pub max_attempts: String,
    pub passing_score: String,
    pub shuffle: bool,
    pub questions_json: String,
    pub error: String,
}

impl QuizEditor {
    pub fn blank() -> Self {
        Self {
            id: None,
            title: String::new(),
            category: String::new(),
            time_limit: "0".into(),
            max_attempts: "0".into(),
            passing_score: "80".into(),
            shuffle: false,
            questions_json: "[]".into(),
            error: String::new(),
        }
    }

    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            id: Some(quiz.id.clone()),
            title: quiz.title.clone(),
            category: quiz.category.clone(),
            time_limit: quiz.time_limit.to_string(),
            max_attempts: quiz.max_attempts.to_string(),
            passing_score: quiz.passing_score.to_string(),
            shuffle: quiz.shuffle,
            questions_json: serde_json::to_string_pretty(&quiz.questions)
                .unwrap_or_else(|_| "[]".into()),
            error: String::new(),
        }
    }

    fn parse(&self) -> Result<Quiz, String> {
        if self.title.trim().is_empty() {
            return Err("the quiz needs a title".into());
        }
        let time_limit: u32 = self
            .time_limit
            .trim()
            .parse()
            .map_err(|_| "time limit must be a number of seconds (0 = unlimited)".to_string())?;
        let max_attempts: u32 = self
            .max_attempts
            .trim()
            .parse()
            .map_err(|_| "attempt limit must be a number (0 = unlimited)".to_string())?;
        let passing_score: u32 = self
            .passing_score
            .trim()
            .parse()
            .map_err(|_| "passing score must be a percentage".to_string())?;
        if passing_score > 100 {
            return Err("passing score cannot exceed 100".into());
        }
        let questions: Vec<Question> = serde_json::from_str(&self.questions_json)
            .map_err(|e| format!("questions are not valid JSON: {e}"))?;
        Ok(Quiz {
            id: self.id.clone().unwrap_or_else(|| generate_id("quiz")),
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            questions,
            max_score: 100,
            time_limit,
            max_attempts,
            passing_score,
            shuffle: self.shuffle,
        })
    }
}

impl LearnApp {
    pub fn edit_course(&mut self, course_id: Option<&str>) {
        self.course_editor = Some(match course_id.and_then(|id| self.store.course(id)) {
            Some(course) => CourseEditor::from_course(course),
            None => CourseEditor::blank(),
        });
    }

    /// Validates and saves the open course form. Keeps the form open with an
    /// error message when validation fails.
    pub fn save_course_editor(&mut self) {
        let Some(editor) = self.course_editor.as_mut() else {
            return;
        };
        if editor.title.trim().is_empty() {
            editor.error = "the course needs a title".into();
            return;
        }
        if editor.lessons.iter().any(|l| l.title.trim().is_empty()) {
            editor.error = "every lesson needs a title".into();
            return;
        }
        let course = Course {
            id: editor
                .id
                .clone()
                .unwrap_or_else(|| generate_id("course")),
            title: editor.title.trim().to_string(),
            description: editor.description.trim().to_string(),
            lock_until_passed: editor.lock_until_passed,
            lessons: editor.lessons.clone(),
        };
        self.store.save_course(course);
        self.course_editor = None;
        self.message = "Course saved".into();
    }

    pub fn edit_quiz(&mut self, quiz_id: Option<&str>) {
        self.quiz_editor = Some(match quiz_id.and_then(|id| self.store.quiz(id)) {
            Some(quiz) => QuizEditor::from_quiz(quiz),
            None => QuizEditor::blank(),
        });
    }

    pub fn save_quiz_editor(&mut self) {
        let Some(editor) = self.quiz_editor.as_mut() else {
            return;
        };
        match editor.parse() {
            Ok(quiz) => {
                self.store.save_quiz(quiz);
                self.quiz_editor = None;
                self.message = "Quiz saved".into();
            }
            Err(e) => editor.error = e,
        }
    }
}
